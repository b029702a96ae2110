//! Segment shapes for a single seven-segment digit.
//!
//! Every segment is one of two canonical hexagonal bars, rotated and moved into
//! its slot on the 250×492 design canvas. The placed shapes never change, so
//! they are built once per process and handed out by reference; display sizes
//! are applied afterwards as a separate scale transform.
//!
//! The transform order is fixed: rotate, then translate, then scale.

use std::fmt;
use std::sync::LazyLock;

use glam::{DAffine2, DVec2, dvec2};

use crate::path::{Path, PathBuilder};
use crate::types::Size;

/// Outline shared by the six outer bars (top-bar orientation).
const STANDARD_SHAPE: [DVec2; 6] = [
    dvec2(0.0, 4.0),
    dvec2(4.0, 0.0),
    dvec2(230.0, 0.0),
    dvec2(234.0, 4.0),
    dvec2(180.0, 58.0),
    dvec2(54.0, 58.0),
];

/// The center bar is symmetric top to bottom and a little thicker.
const CENTER_SHAPE: [DVec2; 6] = [
    dvec2(0.0, 34.0),
    dvec2(34.0, 0.0),
    dvec2(200.0, 0.0),
    dvec2(234.0, 34.0),
    dvec2(200.0, 68.0),
    dvec2(34.0, 68.0),
];

/// One bar of a seven-segment digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Top,
    TopRight,
    BottomRight,
    Bottom,
    BottomLeft,
    TopLeft,
    Center,
}

impl Segment {
    /// All segments, in canonical order.
    pub const ALL: [Segment; 7] = [
        Segment::Top,
        Segment::TopRight,
        Segment::BottomRight,
        Segment::Bottom,
        Segment::BottomLeft,
        Segment::TopLeft,
        Segment::Center,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Points of the unplaced shape, before rotation.
    pub fn shape_points(self) -> &'static [DVec2] {
        match self {
            Segment::Center => &CENTER_SHAPE,
            _ => &STANDARD_SHAPE,
        }
    }

    /// Rotation applied to the canonical shape, in degrees.
    ///
    /// Positive is clockwise on a Y-down canvas.
    pub fn rotation_degrees(self) -> f64 {
        match self {
            Segment::TopLeft | Segment::BottomLeft => -90.0,
            Segment::TopRight | Segment::BottomRight => 90.0,
            Segment::Bottom => 180.0,
            Segment::Top | Segment::Center => 0.0,
        }
    }

    /// Where the rotated shape's origin lands on the design canvas.
    pub fn offset(self) -> DVec2 {
        match self {
            Segment::Top => dvec2(8.0, 0.0),
            Segment::TopRight => dvec2(250.0, 8.0),
            Segment::BottomRight => dvec2(250.0, 250.0),
            Segment::Bottom => dvec2(242.0, 492.0),
            Segment::BottomLeft => dvec2(0.0, 484.0),
            Segment::TopLeft => dvec2(0.0, 242.0),
            Segment::Center => dvec2(8.0, 212.0),
        }
    }

    /// Rotate, then translate into the segment's slot.
    pub fn placement(self) -> DAffine2 {
        DAffine2::from_translation(self.offset())
            * DAffine2::from_angle(self.rotation_degrees().to_radians())
    }

    /// The placed shape on the design canvas (cached).
    pub fn shape(self) -> &'static Path {
        &SHAPES[self.index()]
    }

    /// The placed shape stretched from the design canvas onto `size`.
    pub fn shape_for_size(self, size: Size) -> Path {
        self.shape().transformed(&canvas_to(size))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Top => "top",
            Segment::TopRight => "top-right",
            Segment::BottomRight => "bottom-right",
            Segment::Bottom => "bottom",
            Segment::BottomLeft => "bottom-left",
            Segment::TopLeft => "top-left",
            Segment::Center => "center",
        };
        f.write_str(name)
    }
}

/// Non-uniform scale from the design canvas onto a display size.
pub fn canvas_to(size: Size) -> DAffine2 {
    DAffine2::from_scale(Size::CANVAS.scale_to(size))
}

static SHAPES: LazyLock<[Path; 7]> = LazyLock::new(|| Segment::ALL.map(build_shape));

/// Walk the canonical points backwards, close the loop, then place it.
fn build_shape(segment: Segment) -> Path {
    let points = segment.shape_points();
    let mut walk = points.iter().rev();
    let mut builder = PathBuilder::new();
    if let Some(start) = walk.next() {
        builder = builder.move_to(*start);
        for p in walk {
            builder = builder.line_to(*p);
        }
        builder = builder.line_to(*start);
    }
    builder.close().build().transformed(&segment.placement())
}

/// A set of segments, stored as one bit per segment.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SegmentSet {
    bits: u8,
}

impl SegmentSet {
    const MASK: u8 = 0b0111_1111;

    pub const EMPTY: SegmentSet = SegmentSet { bits: 0 };
    pub const ALL: SegmentSet = SegmentSet { bits: Self::MASK };

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn contains(self, segment: Segment) -> bool {
        self.bits & segment.bit() != 0
    }

    pub fn insert(&mut self, segment: Segment) {
        self.bits |= segment.bit();
    }

    pub fn remove(&mut self, segment: Segment) {
        self.bits &= !segment.bit();
    }

    pub fn union(self, other: SegmentSet) -> SegmentSet {
        SegmentSet {
            bits: self.bits | other.bits,
        }
    }

    pub fn intersection(self, other: SegmentSet) -> SegmentSet {
        SegmentSet {
            bits: self.bits & other.bits,
        }
    }

    /// Every segment not in this set.
    pub fn complement(self) -> SegmentSet {
        SegmentSet {
            bits: !self.bits & Self::MASK,
        }
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Segment> {
        Segment::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    /// Union of the members' shapes, stretched onto `size`.
    pub fn path_for_size(self, size: Size) -> Path {
        let scale = canvas_to(size);
        self.iter().map(|s| s.shape().transformed(&scale)).collect()
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut set = SegmentSet::new();
        for segment in iter {
            set.insert(segment);
        }
        set
    }
}

impl<const N: usize> From<[Segment; N]> for SegmentSet {
    fn from(segments: [Segment; N]) -> Self {
        segments.into_iter().collect()
    }
}

impl fmt::Debug for SegmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
