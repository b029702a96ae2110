//! A horizontal group of digits showing one signed integer.
//!
//! The group owns its digits and keeps them in step with a single aggregate
//! value. Every change that can move the legal range (value, base, sign and
//! leading-zero policies) runs the same clamp-then-decompose step, so the
//! digits never disagree with [`DigitGroup::value`].
//!
//! Layout: `count` equal-width digits separated by `spacing`, filling the
//! group's size. With `can_show_negative`, digit 0 is a sign slot and never
//! shows a numeral.

use std::fmt;

use glam::dvec2;

use crate::defaults;
use crate::digit::Digit;
use crate::errors::LayoutError;
use crate::log::{debug, warn};
use crate::path::Path;
use crate::types::{BBox, Size, check_dimension};

/// The numeral system a group displays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    #[default]
    Hex,
}

impl NumberBase {
    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
            NumberBase::Decimal => 10,
            NumberBase::Hex => 16,
        }
    }

    /// Largest value a single digit shows in this base.
    pub fn max_digit(self) -> i64 {
        i64::from(self.radix()) - 1
    }

    /// Largest magnitude that fits in `places` digits, saturating at `i64::MAX`.
    pub fn max_magnitude(self, places: usize) -> i64 {
        let places = u32::try_from(places).unwrap_or(u32::MAX);
        i64::from(self.radix())
            .checked_pow(places)
            .map_or(i64::MAX, |v| v - 1)
    }
}

impl TryFrom<u32> for NumberBase {
    type Error = LayoutError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(NumberBase::Binary),
            8 => Ok(NumberBase::Octal),
            10 => Ok(NumberBase::Decimal),
            16 => Ok(NumberBase::Hex),
            _ => Err(LayoutError::UnsupportedBase { radix }),
        }
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberBase::Binary => "binary",
            NumberBase::Octal => "octal",
            NumberBase::Decimal => "decimal",
            NumberBase::Hex => "hex",
        };
        f.write_str(name)
    }
}

/// Construction options for [`DigitGroup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupOptions {
    pub number_base: NumberBase,
    /// Initial value; clamped like any later assignment.
    pub value: i64,
    /// Reserve the leftmost digit for a minus sign.
    pub can_show_negative: bool,
    pub show_leading_zeroes: bool,
    /// Gap between neighboring digits, in display units.
    pub spacing: f64,
}

impl Default for GroupOptions {
    fn default() -> Self {
        GroupOptions {
            number_base: defaults::NUMBER_BASE,
            value: defaults::GROUP_VALUE,
            can_show_negative: false,
            show_leading_zeroes: false,
            spacing: defaults::SPACING,
        }
    }
}

impl GroupOptions {
    pub fn with_number_base(mut self, number_base: NumberBase) -> Self {
        self.number_base = number_base;
        self
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    pub fn with_negative(mut self, can_show_negative: bool) -> Self {
        self.can_show_negative = can_show_negative;
        self
    }

    pub fn with_leading_zeroes(mut self, show_leading_zeroes: bool) -> Self {
        self.show_leading_zeroes = show_leading_zeroes;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }
}

/// A row of [`Digit`]s representing one integer in a chosen base.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitGroup {
    size: Size,
    digits: Vec<Digit>,
    number_base: NumberBase,
    spacing: f64,
    can_show_negative: bool,
    show_leading_zeroes: bool,
    value: i64,
}

impl DigitGroup {
    /// A hex group with no sign slot, no leading zeroes and no spacing.
    pub fn new(number_of_digits: usize, size: Size) -> Result<Self, LayoutError> {
        Self::with_options(number_of_digits, size, GroupOptions::default())
    }

    /// `number_of_digits` counts every cell, including the sign slot when
    /// `options.can_show_negative` is set.
    pub fn with_options(
        number_of_digits: usize,
        size: Size,
        options: GroupOptions,
    ) -> Result<Self, LayoutError> {
        let spacing = check_dimension(options.spacing).map_err(LayoutError::dimension("spacing"))?;
        let digit_size = digit_size_for(number_of_digits, size, spacing)?;

        let mut group = DigitGroup {
            size,
            digits: vec![Digit::blank(digit_size); number_of_digits],
            number_base: options.number_base,
            spacing,
            can_show_negative: false,
            show_leading_zeroes: false,
            value: 0,
        };
        group.can_show_negative = group.allow_policy(options.can_show_negative);
        group.show_leading_zeroes = group.allow_policy(options.show_leading_zeroes);
        group.set_value(options.value);
        Ok(group)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn digit(&self, index: usize) -> Option<&Digit> {
        self.digits.get(index)
    }

    /// Total cells, sign slot included.
    pub fn number_of_digits(&self) -> usize {
        self.digits.len()
    }

    /// Cells available for numerals.
    pub fn numerical_digit_count(&self) -> usize {
        self.digits.len() - usize::from(self.can_show_negative)
    }

    pub fn number_base(&self) -> NumberBase {
        self.number_base
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn can_show_negative(&self) -> bool {
        self.can_show_negative
    }

    pub fn show_leading_zeroes(&self) -> bool {
        self.show_leading_zeroes
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// The value each digit shows, left to right.
    pub fn digit_values(&self) -> Vec<i64> {
        self.digits.iter().map(Digit::value).collect()
    }

    pub fn max_value(&self) -> i64 {
        self.number_base.max_magnitude(self.numerical_digit_count())
    }

    pub fn min_value(&self) -> i64 {
        if self.can_show_negative {
            -self.max_value()
        } else {
            0
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Clamp `value` into the representable range and redistribute it over the
    /// digits. Returns the value actually stored.
    pub fn set_value(&mut self, value: i64) -> i64 {
        let clamped = value.clamp(self.min_value(), self.max_value());
        if clamped != value {
            debug!(
                requested = value,
                clamped,
                min = self.min_value(),
                max = self.max_value(),
                "group value clamped"
            );
        }
        self.value = clamped;
        self.decompose();
        clamped
    }

    /// Forced off for groups of one digit.
    pub fn set_can_show_negative(&mut self, can_show_negative: bool) {
        self.can_show_negative = self.allow_policy(can_show_negative);
        self.set_value(self.value);
    }

    /// Forced off for groups of one digit.
    pub fn set_show_leading_zeroes(&mut self, show_leading_zeroes: bool) {
        self.show_leading_zeroes = self.allow_policy(show_leading_zeroes);
        self.set_value(self.value);
    }

    pub fn set_number_base(&mut self, number_base: NumberBase) {
        self.number_base = number_base;
        self.set_value(self.value);
    }

    /// Resize the group. Digits are rebuilt at the new width and keep their values.
    pub fn set_size(&mut self, size: Size) -> Result<(), LayoutError> {
        let digit_size = digit_size_for(self.digits.len(), size, self.spacing)?;
        debug!(width = size.width, height = size.height, "digit group resized");
        self.size = size;
        self.digits = self
            .digits
            .iter()
            .map(|d| Digit::new(digit_size, d.value()))
            .collect();
        Ok(())
    }

    fn allow_policy(&self, requested: bool) -> bool {
        let allowed = requested && self.digits.len() > 1;
        if requested && !allowed {
            debug!(
                digits = self.digits.len(),
                "sign/leading-zero policy needs more than one digit"
            );
        }
        allowed
    }

    /// Spread `self.value` over the digits, right-aligned.
    fn decompose(&mut self) {
        let radix = u64::from(self.number_base.radix());
        let is_negative = self.value < 0;
        let mut magnitude = self.value.unsigned_abs();
        let first_numeral = usize::from(self.can_show_negative);
        let slots = self.digits.len() - first_numeral;

        for digit in &mut self.digits {
            digit.set_value(Digit::OFF);
        }

        // Least significant first.
        let mut numerals = Vec::with_capacity(slots);
        if magnitude == 0 {
            numerals.push(0);
        }
        while magnitude > 0 {
            numerals.push((magnitude % radix) as i64);
            magnitude /= radix;
        }

        assert!(
            numerals.len() <= slots,
            "value {} needs {} {} digits but only {} are available",
            self.value,
            numerals.len(),
            self.number_base,
            slots
        );

        let last = self.digits.len() - 1;
        for (place, numeral) in numerals.iter().enumerate() {
            self.digits[last - place].set_value(*numeral);
        }

        if self.show_leading_zeroes {
            let first_shown = self.digits.len() - numerals.len();
            for digit in &mut self.digits[first_numeral..first_shown] {
                digit.set_value(0);
            }
        }

        if self.can_show_negative {
            self.digits[0].set_value(if is_negative { Digit::MINUS } else { Digit::OFF });
        }

        debug!(value = self.value, digits = ?self.digit_values(), "decomposed group value");
    }

    /// Read the shown integer back from the digit values.
    ///
    /// Blank cells count as nothing; a minus in the sign slot negates.
    pub fn displayed_value(&self) -> i64 {
        let radix = i64::from(self.number_base.radix());
        let mut magnitude: i64 = 0;
        let mut negative = false;
        for digit in &self.digits {
            match digit.value() {
                Digit::MINUS => negative = true,
                Digit::OFF => {}
                numeral => magnitude = magnitude * radix + numeral,
            }
        }
        if negative { -magnitude } else { magnitude }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Horizontal offset of digit `index` inside the group.
    fn digit_x(&self, index: usize) -> f64 {
        let width = self.digits.first().map_or(0.0, |d| d.size().width);
        index as f64 * (width + self.spacing)
    }

    /// Frame of digit `index` in group coordinates (0 is leftmost).
    pub fn digit_frame(&self, index: usize) -> Option<BBox> {
        let digit = self.digits.get(index)?;
        Some(BBox::from_origin_size(
            dvec2(self.digit_x(index), 0.0),
            digit.size(),
        ))
    }

    /// Union of one per-digit path, each moved to its slot.
    fn compose(&self, path_of: impl Fn(&Digit) -> Path) -> Path {
        self.digits
            .iter()
            .enumerate()
            .map(|(i, d)| path_of(d).translated(self.digit_x(i), 0.0))
            .collect()
    }

    pub fn on_segments(&self) -> Path {
        self.compose(Digit::on_segments)
    }

    pub fn off_segments(&self) -> Path {
        self.compose(Digit::off_segments)
    }

    pub fn segment_mask(&self) -> Path {
        self.compose(Digit::segment_mask)
    }

    /// The digit outlines, side by side.
    pub fn outline(&self) -> Path {
        self.compose(Digit::outline)
    }

    /// Group width that keeps each digit at the design aspect for `height`.
    pub fn ideal_width_for(number_of_digits: usize, spacing: f64, height: f64) -> f64 {
        let count = number_of_digits as f64;
        count * height * Size::CANVAS.aspect() + spacing * (count - 1.0).max(0.0)
    }

    /// Inverse of [`DigitGroup::ideal_width_for`].
    pub fn ideal_height_for(number_of_digits: usize, spacing: f64, width: f64) -> f64 {
        let count = number_of_digits as f64;
        if count == 0.0 {
            return 0.0;
        }
        let digit_width = (width - spacing * (count - 1.0)) / count;
        (digit_width / Size::CANVAS.aspect()).max(0.0)
    }

    pub fn ideal_width_from(&self, height: f64) -> f64 {
        Self::ideal_width_for(self.digits.len(), self.spacing, height)
    }

    pub fn ideal_height_from(&self, width: f64) -> f64 {
        Self::ideal_height_for(self.digits.len(), self.spacing, width)
    }
}

/// Size of one digit when `count` digits and their gaps fill `size`.
fn digit_size_for(count: usize, size: Size, spacing: f64) -> Result<Size, LayoutError> {
    if count == 0 {
        return Err(LayoutError::NoDigits);
    }
    let size = Size::try_new(size.width, size.height).map_err(LayoutError::dimension("size"))?;
    let gaps = spacing * (count - 1) as f64;
    let width = (size.width - gaps) / count as f64;
    if width <= 0.0 && size.width > 0.0 {
        return Err(LayoutError::SpacingTooWide {
            spacing,
            width: size.width,
            digits: count,
        });
    }
    if width <= 0.0 || size.height == 0.0 {
        warn!(width = size.width, height = size.height, "digit group has an empty digit size");
    }
    Ok(Size::new(width.max(0.0), size.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn group(count: usize, options: GroupOptions) -> DigitGroup {
        DigitGroup::with_options(count, Size::new(100.0 * count as f64, 200.0), options).unwrap()
    }

    #[test]
    fn negative_decimal_uses_sign_slot() {
        let mut g = group(
            4,
            GroupOptions::default()
                .with_number_base(NumberBase::Decimal)
                .with_negative(true),
        );
        assert_eq!(g.set_value(-123), -123);
        assert_eq!(g.digit_values(), vec![Digit::MINUS, 1, 2, 3]);
    }

    #[test]
    fn positive_value_blanks_sign_slot() {
        let g = group(
            4,
            GroupOptions::default()
                .with_number_base(NumberBase::Decimal)
                .with_negative(true)
                .with_value(45),
        );
        assert_eq!(g.digit_values(), vec![Digit::OFF, Digit::OFF, 4, 5]);
    }

    #[test]
    fn hex_leading_zeroes() {
        let g = group(3, GroupOptions::default().with_leading_zeroes(true).with_value(10));
        assert_eq!(g.digit_values(), vec![0, 0, 10]);
    }

    #[test]
    fn leading_zeroes_skip_sign_slot() {
        let g = group(
            4,
            GroupOptions::default()
                .with_number_base(NumberBase::Decimal)
                .with_negative(true)
                .with_leading_zeroes(true)
                .with_value(-7),
        );
        assert_eq!(g.digit_values(), vec![Digit::MINUS, 0, 0, 7]);
    }

    #[test]
    fn zero_without_leading_zeroes() {
        let g = group(3, GroupOptions::default());
        assert_eq!(g.digit_values(), vec![Digit::OFF, Digit::OFF, 0]);
    }

    #[test]
    fn zero_with_leading_zeroes_and_sign() {
        let g = group(
            3,
            GroupOptions::default().with_negative(true).with_leading_zeroes(true),
        );
        assert_eq!(g.digit_values(), vec![Digit::OFF, 0, 0]);
    }

    #[test]
    fn binary_range_clamps() {
        let mut g = group(2, GroupOptions::default().with_number_base(NumberBase::Binary));
        assert_eq!(g.min_value(), 0);
        assert_eq!(g.max_value(), 3);
        assert_eq!(g.set_value(5), 3);
        assert_eq!(g.digit_values(), vec![1, 1]);
        assert_eq!(g.set_value(-5), 0);
    }

    #[test]
    fn negative_range_is_symmetric() {
        let mut g = group(3, GroupOptions::default().with_negative(true));
        assert_eq!(g.max_value(), 255);
        assert_eq!(g.min_value(), -255);
        assert_eq!(g.set_value(-1000), -255);
        assert_eq!(g.digit_values(), vec![Digit::MINUS, 15, 15]);
    }

    #[test]
    fn single_digit_refuses_policies() {
        let mut g = group(1, GroupOptions::default().with_negative(true).with_leading_zeroes(true));
        assert!(!g.can_show_negative());
        assert!(!g.show_leading_zeroes());
        g.set_can_show_negative(true);
        g.set_show_leading_zeroes(true);
        assert!(!g.can_show_negative());
        assert!(!g.show_leading_zeroes());
        assert_eq!(g.set_value(-3), 0);
    }

    #[test]
    fn dropping_sign_reclamps() {
        let mut g = group(
            3,
            GroupOptions::default()
                .with_number_base(NumberBase::Decimal)
                .with_negative(true)
                .with_value(-42),
        );
        g.set_can_show_negative(false);
        assert_eq!(g.value(), 0);
        assert_eq!(g.max_value(), 999);
    }

    #[test]
    fn changing_base_redecomposes() {
        let mut g = group(
            4,
            GroupOptions::default()
                .with_number_base(NumberBase::Decimal)
                .with_value(255),
        );
        g.set_number_base(NumberBase::Hex);
        assert_eq!(g.digit_values(), vec![Digit::OFF, Digit::OFF, 15, 15]);
        g.set_number_base(NumberBase::Binary);
        assert_eq!(g.value(), 15);
        assert_eq!(g.digit_values(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn huge_groups_saturate_range() {
        let g = group(40, GroupOptions::default().with_value(i64::MAX));
        assert_eq!(g.max_value(), i64::MAX);
        assert_eq!(g.displayed_value(), i64::MAX);
    }

    #[test]
    fn digit_widths_share_space_between_gaps() {
        let g = DigitGroup::with_options(
            4,
            Size::new(430.0, 100.0),
            GroupOptions::default().with_spacing(10.0),
        )
        .unwrap();
        for d in g.digits() {
            assert!((d.size().width - 100.0).abs() < EPSILON);
            assert_eq!(d.size().height, 100.0);
        }
        let last = g.digit_frame(3).unwrap();
        assert!((last.min.x - 330.0).abs() < EPSILON);
        assert!((last.max.x - 430.0).abs() < EPSILON);
        assert!(g.digit_frame(4).is_none());
    }

    #[test]
    fn group_outline_spans_size() {
        let g = DigitGroup::with_options(
            3,
            Size::new(320.0, 100.0),
            GroupOptions::default().with_spacing(10.0),
        )
        .unwrap();
        let outline = g.outline();
        assert_eq!(outline.len(), 3);
        let b = outline.bounds().unwrap();
        assert!((b.width() - 320.0).abs() < EPSILON);
        assert!((b.height() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn resize_keeps_values() {
        let mut g = group(3, GroupOptions::default().with_value(0xAB));
        g.set_size(Size::new(60.0, 40.0)).unwrap();
        assert_eq!(g.digit_values(), vec![Digit::OFF, 10, 11]);
        assert!((g.digits()[0].size().width - 20.0).abs() < EPSILON);
    }

    #[test]
    fn resize_narrower_than_gaps_is_rejected() {
        let mut g = DigitGroup::with_options(
            3,
            Size::new(300.0, 100.0),
            GroupOptions::default().with_spacing(10.0).with_value(0x2F),
        )
        .unwrap();
        let before = g.digit_values();
        assert!(matches!(
            g.set_size(Size::new(15.0, 100.0)),
            Err(LayoutError::SpacingTooWide { digits: 3, .. })
        ));
        assert_eq!(g.size(), Size::new(300.0, 100.0));
        assert_eq!(g.digit_values(), before);
        assert!((g.digits()[0].size().width - 280.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    #[should_panic(expected = "are available")]
    fn decompose_refuses_values_wider_than_the_group() {
        let mut g = group(2, GroupOptions::default().with_number_base(NumberBase::Decimal));
        g.value = 1000;
        g.decompose();
    }

    #[test]
    fn construction_errors() {
        assert_eq!(DigitGroup::new(0, Size::new(10.0, 10.0)), Err(LayoutError::NoDigits));
        assert!(matches!(
            DigitGroup::with_options(
                3,
                Size::new(10.0, 10.0),
                GroupOptions::default().with_spacing(5.0),
            ),
            Err(LayoutError::SpacingTooWide { digits: 3, .. })
        ));
        assert!(matches!(
            DigitGroup::new(2, Size::new(f64::NAN, 10.0)),
            Err(LayoutError::InvalidDimension { what: "size", .. })
        ));
        assert!(matches!(
            DigitGroup::with_options(
                2,
                Size::new(10.0, 10.0),
                GroupOptions::default().with_spacing(-1.0),
            ),
            Err(LayoutError::InvalidDimension { what: "spacing", .. })
        ));
    }

    #[test]
    fn number_base_conversions() {
        assert_eq!(NumberBase::try_from(8), Ok(NumberBase::Octal));
        assert_eq!(NumberBase::try_from(7), Err(LayoutError::UnsupportedBase { radix: 7 }));
        assert_eq!(NumberBase::Decimal.max_digit(), 9);
        assert_eq!(NumberBase::Hex.max_magnitude(2), 255);
        assert_eq!(NumberBase::Hex.to_string(), "hex");
    }

    #[test]
    fn ideal_sizes_round_trip() {
        let g = DigitGroup::with_options(
            5,
            Size::new(500.0, 200.0),
            GroupOptions::default().with_spacing(7.5),
        )
        .unwrap();
        for h in [1.0, 37.5, 492.0, 1234.5] {
            let w = g.ideal_width_from(h);
            assert!((g.ideal_height_from(w) - h).abs() < 1e-9 * h.max(1.0));
        }
        let w = DigitGroup::ideal_width_for(2, 10.0, 492.0);
        assert!((w - 510.0).abs() < EPSILON);
    }

    #[test]
    fn ideal_height_is_never_negative() {
        assert_eq!(DigitGroup::ideal_height_for(3, 10.0, 5.0), 0.0);
        assert_eq!(DigitGroup::ideal_height_for(3, 10.0, 20.0), 0.0);
        assert!(DigitGroup::ideal_height_for(3, 10.0, 21.0) > 0.0);
    }
}
