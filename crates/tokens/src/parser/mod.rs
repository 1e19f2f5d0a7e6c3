//! Parsing of authored theme pack values.
//!
//! ## Submodules
//!
//! - [`units`]: Numbers and pixel lengths
//! - [`values`]: Shadow descriptors, shadow colors and font stacks
//! - [`token`]: Classification of component fields into literals and aliases

pub mod token;
pub mod units;
pub mod values;

pub use token::{AliasKind, FieldKind, Literal, Token, parse_token};
pub use units::length_from_str;
pub use values::{shadow_from_str, split_font_stack};
