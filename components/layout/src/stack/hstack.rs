//! Horizontal stack layout.

use flowstack_core::{Constraints, LayoutDirection};

use crate::{
    Arrangement, LayoutResult, StackChild, StackMeasure,
    orientation::Orientation,
    stack::{DEFAULT_SPACING, VerticalAlignment},
};

/// Lays children out in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HStackLayout {
    /// The vertical alignment of children within the stack.
    pub alignment: VerticalAlignment,
    /// The spacing between children in the stack.
    pub spacing: i32,
    /// How free horizontal space is distributed.
    pub arrangement: Arrangement,
    /// Reading direction; right-to-left starts at the right edge.
    pub direction: LayoutDirection,
}

impl Default for HStackLayout {
    fn default() -> Self {
        Self {
            alignment: VerticalAlignment::Center,
            spacing: DEFAULT_SPACING,
            arrangement: Arrangement::Start,
            direction: LayoutDirection::Ltr,
        }
    }
}

impl HStackLayout {
    /// Creates a row with the provided alignment and spacing.
    #[must_use]
    pub const fn new(alignment: VerticalAlignment, spacing: i32) -> Self {
        Self {
            alignment,
            spacing,
            arrangement: Arrangement::Start,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Sets the vertical alignment for children in the stack.
    #[must_use]
    pub const fn alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the spacing between children in the stack.
    #[must_use]
    pub const fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the arrangement of children along the row.
    #[must_use]
    pub const fn arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub const fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Measures and places `children`.
    #[must_use]
    pub fn measure(&self, children: &[StackChild<'_>], constraints: Constraints) -> LayoutResult {
        StackMeasure::new(Orientation::Horizontal, self.spacing, &self.arrangement)
            .alignment(self.alignment.into())
            .direction(self.direction)
            .measure(children, constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use flowstack_core::{AlignmentLine, IntPoint, IntSize, Measurable, MeasuredChild};

    use crate::{FlexibilityDescriptor, Spacer};

    struct MockView {
        size: IntSize,
        baseline: Option<i32>,
    }

    impl Measurable for MockView {
        fn measure(&self, constraints: Constraints) -> MeasuredChild {
            let measured = MeasuredChild::new(constraints.constrain(self.size));
            match self.baseline {
                Some(baseline) => measured.with_alignment_line(AlignmentLine::FirstBaseline, baseline),
                None => measured,
            }
        }
        fn max_intrinsic_width(&self, _height: i32) -> i32 {
            self.size.width
        }
        fn max_intrinsic_height(&self, _width: i32) -> i32 {
            self.size.height
        }
    }

    #[test]
    fn test_hstack_size_two_children() {
        let layout = HStackLayout::default();

        let child1 = MockView { size: IntSize::new(50, 30), baseline: None };
        let child2 = MockView { size: IntSize::new(60, 40), baseline: None };
        let children = [StackChild::new(&child1), StackChild::new(&child2)];

        let result = layout.measure(&children, Constraints::unbounded());

        assert_eq!(result.size(), IntSize::new(120, 40)); // 50 + 10 + 60, max height
        assert_eq!(result.positions(), vec![IntPoint::new(0, 5), IntPoint::new(60, 0)]);
    }

    #[test]
    fn test_hstack_with_spacer() {
        let layout = HStackLayout::default().spacing(0);

        let child1 = MockView { size: IntSize::new(30, 40), baseline: None };
        let spacer = Spacer::flexible();
        let child2 = MockView { size: IntSize::new(30, 40), baseline: None };
        let children = [StackChild::new(&child1), spacer.child(), StackChild::new(&child2)];

        let result = layout.measure(&children, Constraints::loose(IntSize::new(200, 40)));

        assert_eq!(result.container_main_size, 200);
        assert_eq!(result.placements[1].size.width, 140); // 200 - 30 - 30
        assert_eq!(result.placements[2].main_offset, 170);
    }

    #[test]
    fn test_hstack_rtl_starts_at_right_edge() {
        let layout = HStackLayout::new(VerticalAlignment::Top, 0).direction(LayoutDirection::Rtl);

        let child1 = MockView { size: IntSize::new(20, 10), baseline: None };
        let field = MockView { size: IntSize::new(0, 10), baseline: None };
        let children = [
            StackChild::new(&child1),
            StackChild::new(&field).flexible(FlexibilityDescriptor::fill()),
        ];

        let result = layout.measure(&children, Constraints::loose(IntSize::new(100, 10)));

        assert_eq!(result.placements[0].main_offset, 80);
        assert_eq!(result.placements[1].main_offset, 0);
        assert_eq!(result.placements[1].size.width, 80);
    }

    #[test]
    fn test_hstack_first_baseline() {
        let layout = HStackLayout::new(VerticalAlignment::FirstTextBaseline, 4);

        let title = MockView { size: IntSize::new(40, 30), baseline: Some(24) };
        let caption = MockView { size: IntSize::new(40, 14), baseline: Some(11) };
        let children = [StackChild::new(&title), StackChild::new(&caption)];

        let result = layout.measure(&children, Constraints::unbounded());

        assert_eq!(result.placements[0].cross_offset, 0);
        assert_eq!(result.placements[1].cross_offset, 13);
        assert_eq!(result.container_cross_size, 30);
    }
}
