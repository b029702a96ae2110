//! The surface shared by single digits and digit groups.
//!
//! Renderers usually hold "some seven-segment display" without caring which
//! kind; [`AnyDisplay`] dispatches to either without boxing.

use enum_dispatch::enum_dispatch;

use crate::digit::Digit;
use crate::errors::LayoutError;
use crate::group::DigitGroup;
use crate::path::Path;
use crate::types::Size;

/// Common behavior for everything that renders as seven-segment paths
#[enum_dispatch]
pub trait SegmentDisplay {
    /// The size the display stretches to fill
    fn size(&self) -> Size;

    /// Resize the display. On error the old size is kept.
    fn set_size(&mut self, size: Size) -> Result<(), LayoutError>;

    /// The value currently shown
    fn value(&self) -> i64;

    /// Assign a value, returning what is actually shown.
    ///
    /// A single digit panics outside -2..=15; a group clamps into its range.
    fn set_value(&mut self, value: i64) -> i64;

    fn on_segments(&self) -> Path;

    fn off_segments(&self) -> Path;

    /// All segments, whatever their state
    fn segment_mask(&self) -> Path;

    fn outline(&self) -> Path;

    fn current_aspect(&self) -> f64 {
        self.size().aspect()
    }
}

impl SegmentDisplay for Digit {
    fn size(&self) -> Size {
        Digit::size(self)
    }

    fn set_size(&mut self, size: Size) -> Result<(), LayoutError> {
        Digit::try_set_size(self, size).map_err(LayoutError::dimension("size"))
    }

    fn value(&self) -> i64 {
        Digit::value(self)
    }

    fn set_value(&mut self, value: i64) -> i64 {
        Digit::set_value(self, value);
        value
    }

    fn on_segments(&self) -> Path {
        Digit::on_segments(self)
    }

    fn off_segments(&self) -> Path {
        Digit::off_segments(self)
    }

    fn segment_mask(&self) -> Path {
        Digit::segment_mask(self)
    }

    fn outline(&self) -> Path {
        Digit::outline(self)
    }
}

impl SegmentDisplay for DigitGroup {
    fn size(&self) -> Size {
        DigitGroup::size(self)
    }

    fn set_size(&mut self, size: Size) -> Result<(), LayoutError> {
        DigitGroup::set_size(self, size)
    }

    fn value(&self) -> i64 {
        DigitGroup::value(self)
    }

    fn set_value(&mut self, value: i64) -> i64 {
        DigitGroup::set_value(self, value)
    }

    fn on_segments(&self) -> Path {
        DigitGroup::on_segments(self)
    }

    fn off_segments(&self) -> Path {
        DigitGroup::off_segments(self)
    }

    fn segment_mask(&self) -> Path {
        DigitGroup::segment_mask(self)
    }

    fn outline(&self) -> Path {
        DigitGroup::outline(self)
    }
}

/// Either kind of display, dispatched statically
#[enum_dispatch(SegmentDisplay)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDisplay {
    Digit(Digit),
    Group(DigitGroup),
}
