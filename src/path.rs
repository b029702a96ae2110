//! Vector paths made of closed polygon loops.
//!
//! A [`Path`] is what every display surface hands to the renderer: an ordered
//! list of [`Contour`]s, each an implicitly closed polygon in display units.
//! Paths never carry paint; filling and stroking belong to the caller.

use glam::{DAffine2, dvec2};

use crate::defaults;
use crate::types::{BBox, Point, Size};

/// One closed polygon loop.
///
/// The closing edge from the last point back to the first is implied and never
/// stored as a duplicate point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        let mut contour = Contour { points };
        contour.drop_closing_duplicate();
        contour
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> BBox {
        let mut bbox = BBox::new();
        for p in &self.points {
            bbox.expand_point(*p);
        }
        bbox
    }

    /// Apply an affine transform to every point.
    pub fn transformed(&self, transform: &DAffine2) -> Contour {
        Contour {
            points: self
                .points
                .iter()
                .map(|p| transform.transform_point2(*p))
                .collect(),
        }
    }

    /// Approximate equality, point by point, in the same winding and start.
    pub fn approx_eq(&self, other: &Contour, epsilon: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.abs_diff_eq(*b, epsilon))
    }

    fn drop_closing_duplicate(&mut self) {
        if self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
    }
}

/// An immutable-by-convention set of closed polygon loops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    contours: Vec<Contour>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    /// Axis-aligned rectangle with its top-left corner at `origin`.
    pub fn rectangle(origin: Point, size: Size) -> Self {
        PathBuilder::new()
            .move_to(origin)
            .line_to(origin + dvec2(size.width, 0.0))
            .line_to(origin + size.as_vec())
            .line_to(origin + dvec2(0.0, size.height))
            .close()
            .build()
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Number of contours.
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn push_contour(&mut self, contour: Contour) {
        if !contour.is_empty() {
            self.contours.push(contour);
        }
    }

    /// Add every contour of `other` to this path.
    pub fn append(&mut self, other: &Path) {
        self.contours.extend(other.contours.iter().cloned());
    }

    /// Returns the current [`Path`] with the given transform applied to it.
    pub fn transformed(&self, transform: &DAffine2) -> Path {
        Path {
            contours: self
                .contours
                .iter()
                .map(|c| c.transformed(transform))
                .collect(),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        self.transformed(&DAffine2::from_translation(dvec2(dx, dy)))
    }

    /// Bounds of all contours, or `None` for an empty path.
    pub fn bounds(&self) -> Option<BBox> {
        if self.is_empty() {
            return None;
        }
        let mut bbox = BBox::new();
        for contour in &self.contours {
            bbox.expand_bbox(&contour.bounds());
        }
        Some(bbox)
    }

    /// SVG `d` attribute text for this path.
    ///
    /// Each contour becomes `M x,y L x,y … Z`; contours are separated by a space.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for contour in &self.contours {
            for (i, p) in contour.points.iter().enumerate() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push(if i == 0 { 'M' } else { 'L' });
                out.push_str(&fmt_num(p.x));
                out.push(',');
                out.push_str(&fmt_num(p.y));
            }
            out.push_str(" Z");
        }
        out
    }
}

impl Extend<Contour> for Path {
    fn extend<I: IntoIterator<Item = Contour>>(&mut self, iter: I) {
        for contour in iter {
            self.push_contour(contour);
        }
    }
}

impl FromIterator<Path> for Path {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        let mut path = Path::new();
        for p in iter {
            path.contours.extend(p.contours);
        }
        path
    }
}

/// Incremental builder for [`Path`].
///
/// `move_to` starts a new contour, `line_to` extends it and `close` finishes
/// it. A contour left open when the next `move_to` or `build` arrives is closed
/// implicitly.
#[derive(Debug, Default)]
pub struct PathBuilder {
    contours: Vec<Contour>,
    current: Vec<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.finish_current();
        self.current.push(p);
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.current.push(p);
        self
    }

    pub fn close(mut self) -> Self {
        self.finish_current();
        self
    }

    pub fn build(mut self) -> Path {
        self.finish_current();
        Path {
            contours: self.contours,
        }
    }

    fn finish_current(&mut self) {
        if !self.current.is_empty() {
            let points = std::mem::take(&mut self.current);
            self.contours.push(Contour::new(points));
        }
    }
}

/// Format a coordinate with fixed decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let s = format!("{:.prec$}", value, prec = defaults::SVG_DECIMALS);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
