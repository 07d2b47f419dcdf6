//! The one-dimensional stack layout engine.
//!
//! A single call to [`measure`] (or [`StackMeasure::measure`]) resolves every
//! child's size, the container's size and every child's position. The engine
//! keeps no state between calls; two calls with the same inputs give the
//! same [`LayoutResult`].
//!
//! ```
//! use flowstack_core::{Constraints, IntSize, Measurable, MeasuredChild};
//! use flowstack_layout::{Arrangement, FlexibilityDescriptor, Orientation, StackChild, measure};
//!
//! struct Block(i32);
//!
//! impl Measurable for Block {
//!     fn measure(&self, c: Constraints) -> MeasuredChild {
//!         MeasuredChild::new(IntSize::new(self.0.clamp(c.min_width, c.max_width), 10))
//!     }
//!     fn max_intrinsic_width(&self, _height: i32) -> i32 { self.0 }
//!     fn max_intrinsic_height(&self, _width: i32) -> i32 { 10 }
//! }
//!
//! let (label, field) = (Block(30), Block(0));
//! let children = [
//!     StackChild::new(&label),
//!     StackChild::new(&field).flexible(FlexibilityDescriptor::fill()),
//! ];
//! let result = measure(
//!     &children,
//!     Constraints::loose(IntSize::new(100, 40)),
//!     0,
//!     Orientation::Horizontal,
//!     &Arrangement::Start,
//! );
//!
//! assert_eq!(result.size(), IntSize::new(100, 10));
//! assert_eq!(result.placements[1].main_offset, 30);
//! ```

mod placer;
mod solver;

pub use placer::{LayoutResult, Placement};

use flowstack_core::{Constraints, LayoutDirection};

use crate::{
    alignment::CrossAlignment,
    arrangement::{Arrange, Arrangement},
    flex::StackChild,
    orientation::{AxisConstraints, Orientation},
};
use placer::PlacerInput;
use solver::Solver;

/// Fully parameterised stack measurement.
#[derive(Debug, Clone, Copy)]
pub struct StackMeasure<'p> {
    /// Row or column.
    pub orientation: Orientation,
    /// Gap between adjacent children.
    pub spacing: i32,
    /// Main-axis positioning policy.
    pub arrangement: &'p dyn Arrange,
    /// Cross alignment for children without their own.
    pub alignment: CrossAlignment,
    /// Reading direction.
    pub direction: LayoutDirection,
}

impl<'p> StackMeasure<'p> {
    /// Start-aligned, left-to-right measurement.
    #[must_use]
    pub const fn new(orientation: Orientation, spacing: i32, arrangement: &'p dyn Arrange) -> Self {
        Self {
            orientation,
            spacing,
            arrangement,
            alignment: CrossAlignment::Start,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Sets the default cross alignment.
    #[must_use]
    pub const fn alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub const fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Measures and places `children` under `constraints`.
    #[must_use]
    pub fn measure(&self, children: &[StackChild<'_>], constraints: Constraints) -> LayoutResult {
        let axis = AxisConstraints::from_constraints(constraints, self.orientation).clamped();
        let spacing = self.spacing.max(0);

        tracing::trace!(
            orientation = ?self.orientation,
            children = children.len(),
            main_max = axis.main_max,
            cross_max = axis.cross_max,
            "measuring stack"
        );

        if children.is_empty() {
            return LayoutResult::empty(self.orientation, axis.main_min, axis.cross_min);
        }

        let solved = Solver::new(children, axis, spacing, self.orientation, self.alignment).run();

        placer::place(
            &solved,
            PlacerInput {
                orientation: self.orientation,
                spacing,
                direction: self.direction,
                arrangement: self.arrangement,
                cross_min: axis.cross_min,
            },
        )
    }
}

impl Default for StackMeasure<'static> {
    fn default() -> Self {
        Self::new(Orientation::Horizontal, 0, &Arrangement::Start)
    }
}

/// Measures and places `children` along `orientation`.
///
/// Children are start-aligned on the cross axis and laid out left to right;
/// use [`StackMeasure`] for the other options.
#[must_use]
pub fn measure(
    children: &[StackChild<'_>],
    constraints: Constraints,
    spacing: i32,
    orientation: Orientation,
    arrangement: &dyn Arrange,
) -> LayoutResult {
    StackMeasure::new(orientation, spacing, arrangement).measure(children, constraints)
}
