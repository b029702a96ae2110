//! Seven-segment digits as vector outlines.
//!
//! `sevenseg` turns numbers into the closed polygon paths of a classic LED
//! display: which bars are lit, which are dark, the mask of every bar and the
//! outline of each cell. It does no drawing of its own; hand the [`Path`]s to
//! whatever fills and strokes them.
//!
//! ```
//! use sevenseg::{DigitGroup, GroupOptions, NumberBase, Size};
//!
//! let mut group = DigitGroup::with_options(
//!     4,
//!     Size::new(400.0, 200.0),
//!     GroupOptions::default()
//!         .with_number_base(NumberBase::Decimal)
//!         .with_negative(true),
//! )?;
//! group.set_value(-123);
//! assert_eq!(group.digit_values(), vec![-1, 1, 2, 3]);
//!
//! let lit = group.on_segments().to_svg_data();
//! assert!(lit.starts_with('M'));
//! # Ok::<(), sevenseg::LayoutError>(())
//! ```

pub mod defaults;
pub mod digit;
pub mod display;
pub mod errors;
pub mod group;
pub mod log;
pub mod path;
pub mod segment;
pub mod types;

pub use digit::{Digit, lit_segments};
pub use display::{AnyDisplay, SegmentDisplay};
pub use errors::{DigitError, LayoutError};
pub use group::{DigitGroup, GroupOptions, NumberBase};
pub use path::{Contour, Path, PathBuilder};
pub use segment::{Segment, SegmentSet};
pub use types::{BBox, NumericError, Point, Size};
