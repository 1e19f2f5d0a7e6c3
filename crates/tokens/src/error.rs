//! Error types for theme pack validation and resolution.
//!
//! Problems in a pack are never raised one at a time: validation and
//! resolution collect every [`ValidationError`] they find and hand the whole
//! list back, so a caller sees all defects of a pack in one pass.

use bitflags::bitflags;
use std::fmt;
use thiserror::Error;

bitflags! {
    /// Broad classes of validation issue.
    ///
    /// The resolver's abort policy is expressed as a set of these classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IssueClass: u8 {
        /// A required field is absent.
        const MISSING = 1 << 0;
        /// A field is present but cannot be read as the expected type.
        const TYPE_MISMATCH = 1 << 1;
        /// A well-typed value breaks an ordering or range constraint.
        const CONSTRAINT = 1 << 2;
        /// An alias names a key that does not exist.
        const UNKNOWN_ALIAS = 1 << 3;
        /// A convention is not followed; never fatal.
        const CONVENTION = 1 << 4;

        /// Classes that always abort resolution: no value can be produced.
        const UNRECOVERABLE = Self::MISSING.bits()
            | Self::TYPE_MISMATCH.bits()
            | Self::UNKNOWN_ALIAS.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationErrorKind {
    #[error("required field is missing")]
    MissingField,

    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid length `{0}`, expected a pixel value like `8px`")]
    InvalidLength(String),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    /// The authored JSON has the wrong type, e.g. a string where an integer belongs.
    #[error("expected {expected}, found `{found}`")]
    WrongType { expected: &'static str, found: String },

    #[error("invalid shadow descriptor `{0}`")]
    InvalidShadow(String),

    #[error("invalid border style `{0}`")]
    InvalidBorderStyle(String),

    #[error("scale must not be empty")]
    EmptyScale,

    #[error("scale must be strictly increasing, {current} follows {previous}")]
    ScaleNotIncreasing { previous: i64, current: i64 },

    #[error("must be positive, got {0}")]
    NonPositive(i64),

    #[error("must not be negative, got {0}")]
    Negative(i64),

    #[error("length must not be negative, got `{0}`")]
    NegativeLength(String),

    #[error("value {0} does not fit the expected range")]
    OutOfRange(i64),

    #[error("`none` radius must be 0px, got `{0}`")]
    RadiusNotZero(String),

    #[error("radius `{smaller}` ({smaller_value}) is larger than `{larger}` ({larger_value})")]
    RadiusOrder {
        smaller: &'static str,
        smaller_value: String,
        larger: &'static str,
        larger_value: String,
    },

    #[error("at least one shadow level is required")]
    EmptyShadows,

    #[error("unknown density `{0}`, expected compact, standard or comfortable")]
    UnknownDensity(String),

    #[error("font weight {0} is outside 100..=900")]
    FontWeightRange(i64),

    #[error("font weight {0} is not a multiple of 100")]
    FontWeightStep(i64),

    #[error("font stack must name at least one family")]
    EmptyFontStack,

    /// An alias references a key that does not exist in the pack.
    #[error("alias `{alias}` does not name an existing {target}")]
    UnknownAlias { alias: String, target: &'static str },

    /// A field of unknown kind holds a value that reads as an alias.
    #[error("alias `{0}` in a field of unknown kind, rename the field to say what it holds")]
    AliasInUntypedField(String),

    #[error("unrecognized component field, value passed through unchanged")]
    UnrecognizedField,

    #[error("palette role `{0}` is not a standard role")]
    UnknownPaletteRole(String),
}

impl ValidationErrorKind {
    pub fn class(&self) -> IssueClass {
        use ValidationErrorKind::*;
        match self {
            MissingField | EmptyFontStack => IssueClass::MISSING,
            InvalidColor(_)
            | InvalidLength(_)
            | InvalidNumber(_)
            | WrongType { .. }
            | InvalidShadow(_)
            | InvalidBorderStyle(_)
            | UnknownDensity(_)
            | OutOfRange(_) => IssueClass::TYPE_MISMATCH,
            EmptyScale
            | ScaleNotIncreasing { .. }
            | NonPositive(_)
            | Negative(_)
            | NegativeLength(_)
            | RadiusNotZero(_)
            | RadiusOrder { .. }
            | EmptyShadows
            | FontWeightRange(_) => IssueClass::CONSTRAINT,
            UnknownAlias { .. } | AliasInUntypedField(_) => IssueClass::UNKNOWN_ALIAS,
            FontWeightStep(_) | UnrecognizedField | UnknownPaletteRole(_) => IssueClass::CONVENTION,
        }
    }

    pub fn severity(&self) -> Severity {
        if self.class() == IssueClass::CONVENTION {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

/// A problem found at a specific path in a theme pack (e.g. `palette.accent`).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {kind}")]
pub struct ValidationError {
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn class(&self) -> IssueClass {
        self.kind.class()
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

/// Formats a list of issues one per line, prefixed with their severity.
pub fn format_report(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.severity(), issue))
        .collect::<Vec<_>>()
        .join("\n")
}
