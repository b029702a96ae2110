//! A single seven-segment digit.
//!
//! A [`Digit`] knows its display size and its value, and derives four paths
//! from them on every access:
//!
//! - [`Digit::on_segments`]: the lit segments
//! - [`Digit::off_segments`]: the unlit segments
//! - [`Digit::segment_mask`]: all seven segments, whatever their state
//! - [`Digit::outline`]: the rectangle the digit occupies
//!
//! Values run from -2 to 15: -2 is blank, -1 is a minus sign (center bar only),
//! and 0..=15 are the hex glyphs `0 1 2 3 4 5 6 7 8 9 A b C d E F`.

use glam::DVec2;

use crate::errors::DigitError;
use crate::path::Path;
use crate::segment::{Segment, SegmentSet};
use crate::types::{NumericError, Size};

use Segment::*;

/// Lit segments for each value, indexed by `value + 2`.
const FONT: [&[Segment]; 18] = [
    // -2: blank
    &[],
    // -1: minus
    &[Center],
    // 0
    &[Top, TopRight, BottomRight, Bottom, BottomLeft, TopLeft],
    // 1
    &[TopRight, BottomRight],
    // 2
    &[Top, TopRight, BottomLeft, Center, Bottom],
    // 3
    &[Top, TopRight, BottomRight, Center, Bottom],
    // 4
    &[TopLeft, TopRight, BottomRight, Center],
    // 5
    &[Top, TopLeft, BottomRight, Center, Bottom],
    // 6
    &[Top, TopLeft, BottomLeft, BottomRight, Center, Bottom],
    // 7
    &[Top, TopRight, BottomRight],
    // 8
    &[Top, TopRight, BottomRight, Bottom, BottomLeft, TopLeft, Center],
    // 9
    &[Top, TopLeft, TopRight, BottomRight, Bottom, Center],
    // A
    &[Top, TopLeft, TopRight, BottomRight, BottomLeft, Center],
    // b
    &[TopLeft, BottomLeft, Bottom, BottomRight, Center],
    // C
    &[TopLeft, BottomLeft, Bottom, Top],
    // d
    &[TopRight, BottomRight, Bottom, BottomLeft, Center],
    // E
    &[TopLeft, BottomLeft, Bottom, Top, Center],
    // F
    &[TopLeft, BottomLeft, Top, Center],
];

/// Segments lit for `value`.
///
/// # Panics
///
/// Panics if `value` is outside -2..=15.
pub fn lit_segments(value: i64) -> SegmentSet {
    assert!(Digit::is_valid_value(value), "digit value {value} is outside -2..=15");
    FONT[(value - Digit::OFF) as usize].iter().copied().collect()
}

/// One seven-segment character cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Digit {
    size: Size,
    value: i8,
}

impl Default for Digit {
    fn default() -> Self {
        Digit {
            size: Size::CANVAS,
            value: Self::OFF as i8,
        }
    }
}

impl Digit {
    /// All segments off.
    pub const OFF: i64 = -2;
    /// Just the center bar.
    pub const MINUS: i64 = -1;
    /// Highest glyph value (`F`).
    pub const MAX: i64 = 15;

    /// Create a digit showing `value` at `size`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside -2..=15.
    pub fn new(size: Size, value: i64) -> Self {
        let mut digit = Digit {
            size,
            ..Default::default()
        };
        digit.set_value(value);
        digit
    }

    /// Fallible twin of [`Digit::new`].
    pub fn try_new(size: Size, value: i64) -> Result<Self, DigitError> {
        let mut digit = Digit {
            size,
            ..Default::default()
        };
        digit.try_set_value(value)?;
        Ok(digit)
    }

    /// A blank digit at `size`.
    pub fn blank(size: Size) -> Self {
        Digit {
            size,
            ..Default::default()
        }
    }

    pub fn is_valid_value(value: i64) -> bool {
        (Self::OFF..=Self::MAX).contains(&value)
    }

    pub fn value(&self) -> i64 {
        i64::from(self.value)
    }

    /// Set the displayed value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside -2..=15. That is a caller bug, not input to
    /// be cleaned up; use [`Digit::try_set_value`] for unchecked sources.
    pub fn set_value(&mut self, value: i64) {
        assert!(Self::is_valid_value(value), "digit value {value} is outside -2..=15");
        self.value = value as i8;
    }

    pub fn try_set_value(&mut self, value: i64) -> Result<(), DigitError> {
        if !Self::is_valid_value(value) {
            return Err(DigitError::ValueOutOfRange { value });
        }
        self.value = value as i8;
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The digit stretches to fill whatever size it is given.
    ///
    /// The size is taken as is. Sizes from untrusted sources should go through
    /// [`Size::try_new`] or [`Digit::try_set_size`].
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Like [`Digit::set_size`], but rejects NaN, infinite and negative sizes.
    pub fn try_set_size(&mut self, size: Size) -> Result<(), NumericError> {
        self.size = Size::try_new(size.width, size.height)?;
        Ok(())
    }

    pub fn is_blank(&self) -> bool {
        self.value() == Self::OFF
    }

    pub fn lit_segments(&self) -> SegmentSet {
        lit_segments(self.value())
    }

    pub fn unlit_segments(&self) -> SegmentSet {
        self.lit_segments().complement()
    }

    /// Combined path of the lit segments. Empty for a blank digit.
    pub fn on_segments(&self) -> Path {
        self.lit_segments().path_for_size(self.size)
    }

    /// Combined path of the unlit segments. Empty for an 8.
    pub fn off_segments(&self) -> Path {
        self.unlit_segments().path_for_size(self.size)
    }

    /// All seven segments, regardless of value.
    pub fn segment_mask(&self) -> Path {
        SegmentSet::ALL.path_for_size(self.size)
    }

    pub fn outline(&self) -> Path {
        Path::rectangle(DVec2::ZERO, self.size)
    }

    /// Aspect of the design canvas (width / height).
    pub fn default_aspect() -> f64 {
        Size::CANVAS.aspect()
    }

    pub fn current_aspect(&self) -> f64 {
        self.size.aspect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank_canvas() {
        let d = Digit::default();
        assert!(d.is_blank());
        assert_eq!(d.size(), Size::CANVAS);
        assert!(d.on_segments().is_empty());
        assert_eq!(d.off_segments().len(), 7);
    }

    #[test]
    fn minus_is_center_only() {
        let d = Digit::new(Size::CANVAS, Digit::MINUS);
        assert_eq!(d.lit_segments(), SegmentSet::from([Center]));
        assert_eq!(d.on_segments(), Center.shape().clone());
    }

    #[test]
    fn eight_lights_everything() {
        let d = Digit::new(Size::CANVAS, 8);
        assert_eq!(d.lit_segments(), SegmentSet::ALL);
        assert!(d.off_segments().is_empty());
    }

    #[test]
    fn zero_has_top_but_no_center() {
        let lit = lit_segments(0);
        assert!(lit.contains(Top));
        assert!(!lit.contains(Center));
        assert_eq!(lit.len(), 6);
    }

    #[test]
    #[should_panic(expected = "outside -2..=15")]
    fn set_value_panics_above_range() {
        Digit::default().set_value(16);
    }

    #[test]
    #[should_panic(expected = "outside -2..=15")]
    fn new_panics_below_range() {
        let _ = Digit::new(Size::CANVAS, -3);
    }

    #[test]
    fn try_set_value_reports_and_keeps_old_value() {
        let mut d = Digit::new(Size::CANVAS, 5);
        assert_eq!(d.try_set_value(99), Err(DigitError::ValueOutOfRange { value: 99 }));
        assert_eq!(d.value(), 5);
        assert!(Digit::try_new(Size::CANVAS, -3).is_err());
    }

    #[test]
    fn outline_follows_size() {
        let mut d = Digit::default();
        d.set_size(Size::new(40.0, 80.0));
        let b = d.outline().bounds().unwrap();
        assert_eq!(b.size(), Size::new(40.0, 80.0));
        assert_eq!(b.min, DVec2::ZERO);
    }

    #[test]
    fn try_set_size_rejects_bad_dimensions() {
        let mut d = Digit::new(Size::new(5.0, 10.0), 1);
        assert_eq!(d.try_set_size(Size::new(f64::NAN, 10.0)), Err(NumericError::NaN));
        assert_eq!(d.try_set_size(Size::new(5.0, f64::INFINITY)), Err(NumericError::Infinite));
        assert_eq!(d.try_set_size(Size::new(-5.0, 10.0)), Err(NumericError::Negative));
        assert_eq!(d.size(), Size::new(5.0, 10.0));

        d.try_set_size(Size::new(50.0, 100.0)).unwrap();
        assert_eq!(d.size(), Size::new(50.0, 100.0));
    }

    #[test]
    fn aspects() {
        let d = Digit::blank(Size::new(100.0, 100.0));
        assert_eq!(d.current_aspect(), 1.0);
        assert!((Digit::default_aspect() - 250.0 / 492.0).abs() < 1e-12);
    }
}
