//! Layout primitives and geometry types for the Flowstack layout system.
//!
//! # Units
//!
//! All values are whole, non-negative units chosen by the host framework
//! (points, dp, terminal cells). The engine never converts between unit
//! systems; it only adds, subtracts and divides what it is given.
//!
//! # Unbounded values
//!
//! A maximum of [`Constraints::INFINITY`] means "no upper bound", which is what
//! a scrolling container hands to its content along the scroll axis. Helpers
//! in this module never subtract from an unbounded value.

use alloc::vec::Vec;

// ============================================================================
// Axis & Direction
// ============================================================================

/// One of the two concrete layout axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// The x axis.
    #[default]
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Reading direction of the surrounding content.
///
/// Right-to-left mirrors horizontal placement only; vertical placement is
/// always top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    /// Returns true for right-to-left content.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Two-dimensional size in whole units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntSize {
    /// The width.
    pub width: i32,
    /// The height.
    pub height: i32,
}

impl IntSize {
    /// Constructs an [`IntSize`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Creates an [`IntSize`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// Returns the extent along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntPoint {
    /// The x-coordinate.
    pub x: i32,
    /// The y-coordinate.
    pub y: i32,
}

impl IntPoint {
    /// Constructs an [`IntPoint`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates an [`IntPoint`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// Bounds a parent hands to a child when asking it to measure.
///
/// Each maximum is either a concrete value or [`Constraints::INFINITY`].
/// A child should answer with a size inside the bounds; if it does not, the
/// parent coerces the answer with [`Constraints::constrain`] and centres the
/// overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constraints {
    /// Smallest acceptable width.
    pub min_width: i32,
    /// Largest acceptable width, or [`Constraints::INFINITY`].
    pub max_width: i32,
    /// Smallest acceptable height.
    pub min_height: i32,
    /// Largest acceptable height, or [`Constraints::INFINITY`].
    pub max_height: i32,
    /// Axis whose bounds must be honoured exactly.
    ///
    /// When set, a child that cannot satisfy both axes keeps this axis and
    /// loosens the other one instead.
    pub priority: Option<Axis>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    /// Sentinel for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    /// Creates constraints from explicit bounds.
    #[must_use]
    pub const fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
            priority: None,
        }
    }

    /// Constraints that accept exactly `size`.
    #[must_use]
    pub const fn fixed(size: IntSize) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Constraints that accept anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: IntSize) -> Self {
        Self::new(0, size.width, 0, size.height)
    }

    /// Constraints without any upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0, Self::INFINITY, 0, Self::INFINITY)
    }

    /// Marks `axis` as the one that must be honoured exactly.
    #[must_use]
    pub const fn prioritizing(mut self, axis: Axis) -> Self {
        self.priority = Some(axis);
        self
    }

    /// Returns true when the width has an upper bound.
    #[must_use]
    pub const fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    /// Returns true when the height has an upper bound.
    #[must_use]
    pub const fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Returns the `(min, max)` pair along `axis`.
    #[must_use]
    pub const fn range(&self, axis: Axis) -> (i32, i32) {
        match axis {
            Axis::Horizontal => (self.min_width, self.max_width),
            Axis::Vertical => (self.min_height, self.max_height),
        }
    }

    /// Normalises malformed bounds: negatives become zero and a minimum above
    /// its maximum is lowered to the maximum.
    #[must_use]
    pub fn clamped(self) -> Self {
        let (min_width, max_width) = clamp_range(self.min_width, self.max_width);
        let (min_height, max_height) = clamp_range(self.min_height, self.max_height);
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
            priority: self.priority,
        }
    }

    /// Coerces `size` into these bounds.
    #[must_use]
    pub fn constrain(&self, size: IntSize) -> IntSize {
        IntSize::new(
            size.width.clamp(self.min_width, self.max_width.max(self.min_width)),
            size.height
                .clamp(self.min_height, self.max_height.max(self.min_height)),
        )
    }
}

/// Clamps a single `(min, max)` pair so that `0 <= min <= max`.
#[must_use]
pub fn clamp_range(min: i32, max: i32) -> (i32, i32) {
    let max = max.max(0);
    (min.clamp(0, max), max)
}

/// Subtracts `used` from a possibly unbounded `budget`, never going below zero.
#[must_use]
pub const fn remaining(budget: i32, used: i32) -> i32 {
    if budget == Constraints::INFINITY {
        return Constraints::INFINITY;
    }
    let left = budget.saturating_sub(used);
    if left < 0 { 0 } else { left }
}

/// Rounds to the nearest integer, with halves going towards positive infinity.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn round_half_up(value: f32) -> i32 {
    let shifted = value + 0.5;
    let truncated = shifted as i32;
    if (truncated as f32) > shifted {
        truncated - 1
    } else {
        truncated
    }
}

// ============================================================================
// Alignment Lines
// ============================================================================

/// A named reference offset inside a child, such as a text baseline.
///
/// Offsets are measured from the child's leading edge on the axis the line
/// crosses: a baseline is a distance from the child's top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlignmentLine {
    /// Baseline of the first line of text.
    FirstBaseline,
    /// Baseline of the last line of text.
    LastBaseline,
    /// Framework-defined line.
    Custom(u16),
}

impl AlignmentLine {
    /// Offset used for a child that does not report this line.
    ///
    /// Baselines fall back to the bottom edge, custom lines to the top edge.
    #[must_use]
    pub const fn fallback(self, cross_size: i32) -> i32 {
        match self {
            Self::FirstBaseline | Self::LastBaseline => cross_size,
            Self::Custom(_) => 0,
        }
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// What a child reported after being measured.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MeasuredChild {
    size: IntSize,
    lines: Vec<(AlignmentLine, i32)>,
}

impl MeasuredChild {
    /// Creates a measurement without alignment lines.
    #[must_use]
    pub const fn new(size: IntSize) -> Self {
        Self {
            size,
            lines: Vec::new(),
        }
    }

    /// Records the offset of `line` within this child.
    #[must_use]
    pub fn with_alignment_line(mut self, line: AlignmentLine, offset: i32) -> Self {
        match self.lines.iter_mut().find(|(l, _)| *l == line) {
            Some(slot) => slot.1 = offset,
            None => self.lines.push((line, offset)),
        }
        self
    }

    /// Returns the measured size.
    #[must_use]
    pub const fn size(&self) -> IntSize {
        self.size
    }

    /// Returns the measured width.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.size.width
    }

    /// Returns the measured height.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.size.height
    }

    /// Looks up the offset of `line`, if this child provides it.
    #[must_use]
    pub fn alignment_line(&self, line: AlignmentLine) -> Option<i32> {
        self.lines
            .iter()
            .find_map(|(l, offset)| (*l == line).then_some(*offset))
    }
}

/// A child that can be asked how large it would be.
///
/// Implementations must behave as pure functions for the duration of one
/// layout pass: the same constraints give the same answer. Any caching
/// belongs to the implementation, never to the container measuring it.
pub trait Measurable {
    /// Measures the child under `constraints`.
    fn measure(&self, constraints: Constraints) -> MeasuredChild;

    /// Width the child would like when given `height`.
    fn max_intrinsic_width(&self, height: i32) -> i32;

    /// Height the child would like when given `width`.
    fn max_intrinsic_height(&self, width: i32) -> i32;

    /// Intrinsic extent along `axis`, given the extent along the other axis.
    fn intrinsic_size(&self, axis: Axis, cross: i32) -> i32 {
        match axis {
            Axis::Horizontal => self.max_intrinsic_width(cross),
            Axis::Vertical => self.max_intrinsic_height(cross),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_constraints() {
        let constraints = Constraints::new(-5, 10, 30, 20).clamped();

        assert_eq!(constraints.min_width, 0);
        assert_eq!(constraints.max_width, 10);
        assert_eq!(constraints.min_height, 20);
        assert_eq!(constraints.max_height, 20);

        let negative = Constraints::new(3, -4, 0, Constraints::INFINITY).clamped();
        assert_eq!(negative.range(Axis::Horizontal), (0, 0));
        assert!(!negative.has_bounded_height());
    }

    #[test]
    fn test_constrain_size() {
        let constraints = Constraints::new(10, 50, 0, Constraints::INFINITY);

        assert_eq!(constraints.constrain(IntSize::new(80, 7)), IntSize::new(50, 7));
        assert_eq!(constraints.constrain(IntSize::new(3, 7)), IntSize::new(10, 7));
    }

    #[test]
    fn test_remaining_never_negative() {
        assert_eq!(remaining(100, 30), 70);
        assert_eq!(remaining(10, 30), 0);
        assert_eq!(remaining(Constraints::INFINITY, 30), Constraints::INFINITY);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_alignment_line_lookup() {
        let measured = MeasuredChild::new(IntSize::new(40, 20))
            .with_alignment_line(AlignmentLine::FirstBaseline, 14)
            .with_alignment_line(AlignmentLine::FirstBaseline, 15);

        assert_eq!(measured.alignment_line(AlignmentLine::FirstBaseline), Some(15));
        assert_eq!(measured.alignment_line(AlignmentLine::LastBaseline), None);
        assert_eq!(AlignmentLine::LastBaseline.fallback(measured.height()), 20);
        assert_eq!(AlignmentLine::Custom(3).fallback(measured.height()), 0);
    }
}
