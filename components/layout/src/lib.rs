#![no_std]
//! One-dimensional stack layout for `flowstack`.
//!
//! Given an ordered list of children, each with a flexibility descriptor and
//! an optional cross-axis alignment, a stack decides how large every child is
//! along the main axis, how large the container is, and where each child goes.
//! It contains:
//!
//! - the [`measure`] entry point and its configurable form [`StackMeasure`],
//! - the flexibility model ([`FlexibilityDescriptor`], [`ParentData`]),
//! - cross-axis alignment and main-axis [`Arrangement`],
//! - ready-made [`HStackLayout`] and [`VStackLayout`] plus [`spacer()`].
//!
//! # Integer Units
//!
//! Every size and offset is an `i32`. [`Constraints::INFINITY`] stands for an
//! unbounded maximum; anything else is a concrete bound. Negative inputs are
//! treated as zero.
//!
//! # Example
//!
//! ```rust,ignore
//! use flowstack_layout::{HStackLayout, StackChild, spacer};
//!
//! let gap = spacer();
//! let result = HStackLayout::default().measure(
//!     &[StackChild::new(&title), gap.child(), StackChild::new(&done)],
//!     Constraints::loose(IntSize::new(320, 44)),
//! );
//! ```

extern crate alloc;

pub use flowstack_core::layout::*;

pub mod alignment;
pub mod arrangement;
pub mod engine;
pub mod flex;
pub mod orientation;
pub mod spacer;
pub mod stack;

pub use alignment::{AlignmentResolver, CrossAlignment};
pub use arrangement::{Arrange, Arrangement};
pub use engine::{LayoutResult, Placement, StackMeasure, measure};
pub use flex::{Cap, DescriptorError, FlexMax, FlexibilityDescriptor, ParentData, StackChild, Tier};
pub use orientation::{AxisConstraints, Orientation, create_axis_constraints};
pub use spacer::{Spacer, spacer, spacer_min};
pub use stack::{HStackLayout, HorizontalAlignment, VStackLayout, VerticalAlignment};
