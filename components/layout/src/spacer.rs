//! Flexible gaps used by stacks.

use flowstack_core::{Constraints, IntSize, Measurable, MeasuredChild};

use crate::flex::{FlexibilityDescriptor, StackChild};

/// A flexible space that expands to push siblings apart.
///
/// Spacers adapt to their parent: in a row they grow horizontally, in a
/// column vertically. They are resolved after every other child, so they
/// only ever receive space nobody else wanted.
///
/// # Examples
///
/// ```ignore
/// // Push the button to the trailing edge
/// let title = text("Title");
/// let gap = spacer();
/// let done = button("Done");
/// row.measure(&[StackChild::new(&title), gap.child(), StackChild::new(&done)], constraints);
/// ```
//
// Measurement: reports (min_length, min_length), coerced into the bounds.
// Layout: handed an exact main-axis size by the stack's space pass.
// Overflow: collapses to min_length when there is nothing left.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    min_length: i32,
}

impl Spacer {
    /// Creates a new spacer with the specified minimum length.
    #[must_use]
    pub const fn new(min_length: i32) -> Self {
        Self {
            min_length: if min_length < 0 { 0 } else { min_length },
        }
    }

    /// Creates a spacer with zero minimum length.
    #[must_use]
    pub const fn flexible() -> Self {
        Self { min_length: 0 }
    }

    /// The length this spacer never shrinks below.
    #[must_use]
    pub const fn min_length(&self) -> i32 {
        self.min_length
    }

    /// Wraps this spacer as a stack child in the space-filler tier.
    #[must_use]
    pub fn child(&self) -> StackChild<'_> {
        StackChild::new(self).flexible(FlexibilityDescriptor::space(self.min_length))
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::flexible()
    }
}

impl Measurable for Spacer {
    fn measure(&self, constraints: Constraints) -> MeasuredChild {
        MeasuredChild::new(constraints.constrain(IntSize::new(self.min_length, self.min_length)))
    }

    fn max_intrinsic_width(&self, _height: i32) -> i32 {
        self.min_length
    }

    fn max_intrinsic_height(&self, _width: i32) -> i32 {
        self.min_length
    }
}

/// Creates a flexible spacer with zero minimum length.
#[must_use]
pub const fn spacer() -> Spacer {
    Spacer::flexible()
}

/// Creates a spacer that never shrinks below `min_length`.
#[must_use]
pub const fn spacer_min(min_length: i32) -> Spacer {
    Spacer::new(min_length)
}
