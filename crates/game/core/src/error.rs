//! Shared error classification for tactics-core.
//!
//! Concrete errors live next to the code that raises them: [`RangeParseError`]
//! in `item::range`, [`CombatError`] in `combat::error`.
//!
//! Most rules here are total. A missing weapon, a missing defender or an
//! unlisted rank falls back to zero terms. Errors only cover malformed data and
//! callers that skipped a precondition.
//!
//! [`RangeParseError`]: crate::item::RangeParseError
//! [`CombatError`]: crate::combat::CombatError

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Bad data. Reject it and do not retry with the same input.
    ///
    /// Examples: `"1..2"` as a weapon range
    Validation,

    /// The caller broke a precondition; there is a bug upstream.
    ///
    /// Examples: combat forecast against an empty tile
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every error type in this crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and UI lookups, e.g. `"ITEM_INVALID_RANGE"`.
    ///
    /// Defaults to the Rust type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
