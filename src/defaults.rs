//! Default sizes and settings (all in display units)

use crate::group::NumberBase;

/// Width of the design canvas the segment shapes are laid out in.
pub const CANVAS_WIDTH: f64 = 250.0;
/// Height of the design canvas the segment shapes are laid out in.
pub const CANVAS_HEIGHT: f64 = 492.0;

pub const NUMBER_BASE: NumberBase = NumberBase::Hex;
pub const SPACING: f64 = 0.0;
pub const GROUP_VALUE: i64 = 0;

/// Decimal places kept when writing SVG path data.
pub const SVG_DECIMALS: usize = 3;
