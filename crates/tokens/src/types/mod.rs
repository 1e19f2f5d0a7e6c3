pub mod color;
pub mod geometry;
pub mod pack;
pub mod resolved;
pub mod shadow;

pub use color::{Color, ColorParseError};
pub use geometry::{BorderStyle, Density, Length};
pub use pack::{
    ComponentSpec, Components, GridSpec, Lenient, Palette, Radii, SpacingSpec, ThemePack, TokenValue,
    Typography,
};
pub use resolved::{
    ResolvedComponent, ResolvedGrid, ResolvedPalette, ResolvedRadii, ResolvedSpacing, ResolvedTheme,
    ResolvedTypography, ResolvedValue,
};
pub use shadow::BoxShadow;
