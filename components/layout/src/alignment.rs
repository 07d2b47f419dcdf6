//! Cross-axis alignment of stack children.
//!
//! Absolute alignments (start/center/end) only need the container's final
//! cross extent. Relative alignments line children up on a shared
//! [`AlignmentLine`] and therefore need one aggregation step over every child
//! using them before any offset is known.

use flowstack_core::{AlignmentLine, MeasuredChild, round_half_up};

/// How a child is positioned along the cross axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CrossAlignment {
    /// Leading edge (top in a row, left in a left-to-right column).
    #[default]
    Start,
    /// Centred.
    Center,
    /// Trailing edge.
    End,
    /// Aligned so every relative child's line sits at the same offset.
    Relative(AlignmentLine),
}

impl CrossAlignment {
    /// Returns true for line-based alignment.
    #[must_use]
    pub const fn is_relative(self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Offset of this alignment's line inside `measured`, if relative.
    ///
    /// A child that does not report the line uses the line's fallback.
    #[must_use]
    pub fn line_offset(self, measured: &MeasuredChild, cross_size: i32) -> Option<i32> {
        match self {
            Self::Relative(line) => Some(
                measured
                    .alignment_line(line)
                    .unwrap_or_else(|| line.fallback(cross_size)),
            ),
            _ => None,
        }
    }
}

/// Running extents of the shared alignment line.
///
/// `before` is the largest distance from a child's leading edge to its line,
/// `after` the largest distance from the line to a child's trailing edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AlignmentResolver {
    before_line: i32,
    after_line: i32,
    relative_children: usize,
}

impl AlignmentResolver {
    /// Creates an empty aggregate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            before_line: 0,
            after_line: 0,
            relative_children: 0,
        }
    }

    /// Folds in one relative child.
    pub fn include(&mut self, line_offset: i32, cross_size: i32) {
        self.before_line = self.before_line.max(line_offset);
        self.after_line = self.after_line.max(cross_size - line_offset);
        self.relative_children += 1;
    }

    /// Largest leading-edge-to-line distance.
    #[must_use]
    pub const fn before_line(&self) -> i32 {
        self.before_line
    }

    /// Largest line-to-trailing-edge distance.
    #[must_use]
    pub const fn after_line(&self) -> i32 {
        self.after_line
    }

    /// Returns true once a relative child has been folded in.
    #[must_use]
    pub const fn has_relative(&self) -> bool {
        self.relative_children > 0
    }

    /// Final cross extent of the container.
    #[must_use]
    pub fn container_cross(&self, measured_cross_max: i32, cross_min: i32) -> i32 {
        let line_extent = if self.has_relative() {
            self.before_line.saturating_add(self.after_line)
        } else {
            0
        };
        measured_cross_max.max(cross_min).max(line_extent)
    }

    /// Cross offset of a child of size `child_cross` inside a container of
    /// size `container_cross`.
    ///
    /// `line_offset` must be provided for relative alignments. With `mirrored`
    /// set (a right-to-left column), offsets are reflected across the
    /// container.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(
        &self,
        alignment: CrossAlignment,
        line_offset: Option<i32>,
        child_cross: i32,
        container_cross: i32,
        mirrored: bool,
    ) -> i32 {
        let free = container_cross - child_cross;
        let leading = match alignment {
            CrossAlignment::Start => 0,
            CrossAlignment::Center => return round_half_up(free as f32 / 2.0),
            CrossAlignment::End => free,
            CrossAlignment::Relative(_) => self.before_line - line_offset.unwrap_or(0),
        };
        if mirrored { free - leading } else { leading }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowstack_core::IntSize;

    #[test]
    fn test_absolute_offsets() {
        let resolver = AlignmentResolver::new();

        assert_eq!(resolver.offset(CrossAlignment::Start, None, 10, 40, false), 0);
        assert_eq!(resolver.offset(CrossAlignment::Center, None, 10, 40, false), 15);
        assert_eq!(resolver.offset(CrossAlignment::Center, None, 10, 41, false), 16);
        assert_eq!(resolver.offset(CrossAlignment::End, None, 10, 40, false), 30);
        assert_eq!(resolver.offset(CrossAlignment::Start, None, 10, 40, true), 30);
        assert_eq!(resolver.offset(CrossAlignment::End, None, 10, 40, true), 0);
    }

    #[test]
    fn test_relative_aggregation() {
        let mut resolver = AlignmentResolver::new();
        resolver.include(4, 20);
        resolver.include(10, 30);

        assert_eq!(resolver.before_line(), 10);
        assert_eq!(resolver.after_line(), 20);
        assert_eq!(resolver.container_cross(30, 0), 30);

        let baseline = CrossAlignment::Relative(AlignmentLine::FirstBaseline);
        assert_eq!(resolver.offset(baseline, Some(4), 20, 30, false), 6);
        assert_eq!(resolver.offset(baseline, Some(10), 30, 30, false), 0);
        assert_eq!(resolver.offset(baseline, Some(4), 20, 30, true), 4);
    }

    #[test]
    fn test_line_offset_fallback() {
        let measured = MeasuredChild::new(IntSize::new(30, 18));
        let baseline = CrossAlignment::Relative(AlignmentLine::FirstBaseline);

        assert_eq!(baseline.line_offset(&measured, 18), Some(18));
        assert_eq!(CrossAlignment::Center.line_offset(&measured, 18), None);

        let with_line = measured.with_alignment_line(AlignmentLine::FirstBaseline, 12);
        assert_eq!(baseline.line_offset(&with_line, 18), Some(12));
    }

    #[test]
    fn test_container_cross_respects_minimum() {
        let resolver = AlignmentResolver::new();
        assert_eq!(resolver.container_cross(12, 40), 40);
        assert_eq!(resolver.container_cross(52, 40), 52);
    }
}
