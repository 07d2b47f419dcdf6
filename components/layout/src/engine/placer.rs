//! Turns solved sizes into positions.

use alloc::vec::Vec;

use flowstack_core::{IntPoint, IntSize, LayoutDirection};

use super::solver::Solved;
use crate::{alignment::AlignmentResolver, arrangement::Arrange, orientation::Orientation};

/// Where one child goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the child in the input order.
    pub index: usize,
    /// Offset along the main axis.
    pub main_offset: i32,
    /// Offset along the cross axis.
    pub cross_offset: i32,
    /// Size the child reported when measured.
    pub size: IntSize,
}

impl Placement {
    /// Concrete position of the child inside a container of `orientation`.
    #[must_use]
    pub const fn position(&self, orientation: Orientation) -> IntPoint {
        orientation.point(self.main_offset, self.cross_offset)
    }
}

/// Final size and child placements of one stack measurement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutResult {
    /// Orientation the result was computed for.
    pub orientation: Orientation,
    /// Container extent along the main axis.
    pub container_main_size: i32,
    /// Container extent along the cross axis.
    pub container_cross_size: i32,
    /// One entry per child, in input order.
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    /// A result with no children.
    #[must_use]
    pub const fn empty(orientation: Orientation, main: i32, cross: i32) -> Self {
        Self {
            orientation,
            container_main_size: main,
            container_cross_size: cross,
            placements: Vec::new(),
        }
    }

    /// Concrete container size.
    #[must_use]
    pub const fn size(&self) -> IntSize {
        self.orientation
            .size(self.container_main_size, self.container_cross_size)
    }

    /// Concrete position of every child, in input order.
    #[must_use]
    pub fn positions(&self) -> Vec<IntPoint> {
        self.placements
            .iter()
            .map(|placement| placement.position(self.orientation))
            .collect()
    }
}

/// Inputs the placer needs besides the solved children.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacerInput<'p> {
    pub(crate) orientation: Orientation,
    pub(crate) spacing: i32,
    pub(crate) direction: LayoutDirection,
    pub(crate) arrangement: &'p dyn Arrange,
    pub(crate) cross_min: i32,
}

pub(crate) fn place(solved: &Solved<'_>, input: PlacerInput<'_>) -> LayoutResult {
    let orientation = input.orientation;

    let mut resolver = AlignmentResolver::new();
    let any_relative = solved.aggregate.any_relative_alignment;
    let line_offsets: Vec<Option<i32>> = solved
        .entries
        .iter()
        .map(|entry| {
            if !any_relative {
                return None;
            }
            let measured = entry.measured.as_ref()?;
            let offset = entry
                .alignment
                .line_offset(measured, entry.measured_cross_size)?;
            resolver.include(offset, entry.measured_cross_size);
            Some(offset)
        })
        .collect();
    let container_cross =
        resolver.container_cross(solved.aggregate.cross_axis_max, input.cross_min);

    // Vertical main axes always run top to bottom.
    let main_direction = match orientation {
        Orientation::Horizontal => input.direction,
        Orientation::Vertical => LayoutDirection::Ltr,
    };
    let mirrored_cross = orientation == Orientation::Vertical && input.direction.is_rtl();

    let slots: Vec<i32> = solved
        .entries
        .iter()
        .map(|entry| entry.constrained_main_size)
        .collect();
    let offsets = input
        .arrangement
        .arrange(solved.main_size, &slots, input.spacing, main_direction);

    let placements = solved
        .entries
        .iter()
        .zip(offsets)
        .zip(line_offsets)
        .map(|((entry, offset), line_offset)| {
            // Children that ignored their bounds are centred on their slot.
            let overflow = entry.constrained_main_size - entry.measured_main_size;
            if overflow != 0 {
                tracing::debug!(
                    index = entry.index,
                    constrained = entry.constrained_main_size,
                    measured = entry.measured_main_size,
                    "child size disagrees with its slot"
                );
            }

            Placement {
                index: entry.index,
                main_offset: offset + overflow / 2,
                cross_offset: resolver.offset(
                    entry.alignment,
                    line_offset,
                    entry.measured_cross_size,
                    container_cross,
                    mirrored_cross,
                ),
                size: orientation.size(entry.measured_main_size, entry.measured_cross_size),
            }
        })
        .collect();

    LayoutResult {
        orientation,
        container_main_size: solved.main_size,
        container_cross_size: container_cross,
        placements,
    }
}
