//! Error types with diagnostics using miette
//!
//! Only recoverable, caller-facing failures live here. Contract violations
//! (a digit value outside -2..=15 passed to a panicking setter, a decomposition
//! that overflows its digit slots) stay panics.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Digit Errors
// ============================================================================

/// Errors from the fallible single-digit API
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    #[error("digit value {value} is outside -2..=15")]
    #[diagnostic(
        code(sevenseg::digit::value_out_of_range),
        help("use -2 for blank, -1 for a minus sign, 0..=15 for hex glyphs")
    )]
    ValueOutOfRange { value: i64 },
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors that occur while laying out a digit group
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("a digit group needs at least one digit")]
    #[diagnostic(code(sevenseg::layout::no_digits))]
    NoDigits,

    #[error("invalid {what}: {source}")]
    #[diagnostic(code(sevenseg::layout::invalid_dimension))]
    InvalidDimension {
        what: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("spacing {spacing} leaves no room for {digits} digits in width {width}")]
    #[diagnostic(
        code(sevenseg::layout::spacing_too_wide),
        help("reduce the spacing or widen the group")
    )]
    SpacingTooWide { spacing: f64, width: f64, digits: usize },

    #[error("unsupported number base: {radix}")]
    #[diagnostic(
        code(sevenseg::layout::unsupported_base),
        help("supported bases are 2, 8, 10 and 16")
    )]
    UnsupportedBase { radix: u32 },
}

impl LayoutError {
    pub(crate) fn dimension(what: &'static str) -> impl FnOnce(NumericError) -> LayoutError {
        move |source| LayoutError::InvalidDimension { what, source }
    }
}
