//! Vertical stack layout.

use flowstack_core::{Constraints, LayoutDirection};

use crate::{
    Arrangement, LayoutResult, StackChild, StackMeasure,
    orientation::Orientation,
    stack::{DEFAULT_SPACING, HorizontalAlignment},
};

/// Lays children out in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VStackLayout {
    /// The horizontal alignment of children within the stack.
    pub alignment: HorizontalAlignment,
    /// The spacing between children in the stack.
    pub spacing: i32,
    /// How free vertical space is distributed.
    pub arrangement: Arrangement,
    /// Reading direction; right-to-left mirrors leading and trailing.
    pub direction: LayoutDirection,
}

impl Default for VStackLayout {
    fn default() -> Self {
        Self::new(HorizontalAlignment::Center, DEFAULT_SPACING)
    }
}

impl VStackLayout {
    /// Creates a column with the provided alignment and spacing.
    #[must_use]
    pub const fn new(alignment: HorizontalAlignment, spacing: i32) -> Self {
        Self {
            alignment,
            spacing,
            arrangement: Arrangement::Start,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Sets the horizontal alignment for children in the stack.
    #[must_use]
    pub const fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the spacing between children in the stack.
    #[must_use]
    pub const fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the arrangement of children down the column.
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
        StackMeasure::new(Orientation::Vertical, self.spacing, &self.arrangement)
            .alignment(self.alignment.into())
            .direction(self.direction)
            .measure(children, constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use flowstack_core::{IntPoint, IntSize, Measurable, MeasuredChild};

    use crate::{FlexibilityDescriptor, spacer_min};

    struct Block {
        size: IntSize,
    }

    impl Measurable for Block {
        fn measure(&self, constraints: Constraints) -> MeasuredChild {
            MeasuredChild::new(constraints.constrain(self.size))
        }
        fn max_intrinsic_width(&self, _height: i32) -> i32 {
            self.size.width
        }
        fn max_intrinsic_height(&self, _width: i32) -> i32 {
            self.size.height
        }
    }

    #[test]
    fn test_vstack_sums_heights() {
        let layout = VStackLayout::new(HorizontalAlignment::Leading, 10);

        let a = Block { size: IntSize::new(100, 50) };
        let b = Block { size: IntSize::new(80, 50) };
        let children = [StackChild::new(&a), StackChild::new(&b)];

        let result = layout.measure(&children, Constraints::loose(IntSize::new(300, 400)));

        assert_eq!(result.size(), IntSize::new(100, 110));
        assert_eq!(result.positions(), vec![IntPoint::new(0, 0), IntPoint::new(0, 60)]);
    }

    #[test]
    fn test_vstack_trailing_mirrors_in_rtl() {
        let layout = VStackLayout::new(HorizontalAlignment::Trailing, 0)
            .direction(LayoutDirection::Rtl);

        let wide = Block { size: IntSize::new(100, 20) };
        let narrow = Block { size: IntSize::new(40, 20) };
        let children = [StackChild::new(&wide), StackChild::new(&narrow)];

        let result = layout.measure(&children, Constraints::unbounded());

        // Trailing is the left edge in right-to-left content; rows still run
        // top to bottom.
        assert_eq!(result.positions(), vec![IntPoint::new(0, 0), IntPoint::new(0, 20)]);
    }

    #[test]
    fn test_vstack_fill_and_spacer_share_height() {
        let layout = VStackLayout::new(HorizontalAlignment::Center, 0);

        let header = Block { size: IntSize::new(50, 20) };
        let body = Block { size: IntSize::new(50, 0) };
        let gap = spacer_min(10);
        let children = [
            StackChild::new(&header),
            StackChild::new(&body).flexible(FlexibilityDescriptor::fill()),
            gap.child(),
        ];

        let result = layout.measure(&children, Constraints::loose(IntSize::new(50, 100)));

        // The spacer keeps its minimum; the body fills the rest.
        assert_eq!(result.placements[1].size.height, 70);
        assert_eq!(result.placements[2].size.height, 10);
        assert_eq!(result.placements[2].main_offset, 90);
        assert_eq!(result.container_main_size, 100);
    }
}
