//! Mapping between main/cross axes and concrete width/height.
//!
//! The solver only ever reasons about a *main* axis (the direction children
//! follow each other) and a *cross* axis. [`Orientation`] decides which of
//! those is horizontal, and [`AxisConstraints`] carries bounds in those terms
//! until the moment a child is actually measured.

use flowstack_core::{Axis, Constraints, IntPoint, IntSize, clamp_range};

/// The two container kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Children follow each other horizontally (a row).
    #[default]
    Horizontal,
    /// Children follow each other vertically (a column).
    Vertical,
}

impl Orientation {
    /// Concrete axis children are laid out along.
    #[must_use]
    pub const fn main_axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::Horizontal,
            Self::Vertical => Axis::Vertical,
        }
    }

    /// Concrete axis perpendicular to the main axis.
    #[must_use]
    pub const fn cross_axis(self) -> Axis {
        self.main_axis().cross()
    }

    /// Main-axis extent of `size`.
    #[must_use]
    pub const fn main(self, size: IntSize) -> i32 {
        size.along(self.main_axis())
    }

    /// Cross-axis extent of `size`.
    #[must_use]
    pub const fn cross(self, size: IntSize) -> i32 {
        size.along(self.cross_axis())
    }

    /// Builds a concrete size from main/cross extents.
    #[must_use]
    pub const fn size(self, main: i32, cross: i32) -> IntSize {
        match self {
            Self::Horizontal => IntSize::new(main, cross),
            Self::Vertical => IntSize::new(cross, main),
        }
    }

    /// Builds a concrete point from main/cross offsets.
    #[must_use]
    pub const fn point(self, main: i32, cross: i32) -> IntPoint {
        match self {
            Self::Horizontal => IntPoint::new(main, cross),
            Self::Vertical => IntPoint::new(cross, main),
        }
    }
}

/// Orientation-independent bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisConstraints {
    /// Smallest main-axis extent.
    pub main_min: i32,
    /// Largest main-axis extent, or [`Constraints::INFINITY`].
    pub main_max: i32,
    /// Smallest cross-axis extent.
    pub cross_min: i32,
    /// Largest cross-axis extent, or [`Constraints::INFINITY`].
    pub cross_max: i32,
    /// Whether the main-axis bounds win over the cross-axis bounds.
    pub prioritize_main: bool,
}

impl AxisConstraints {
    /// Creates axis constraints.
    ///
    /// With `prioritize_main` set, the resulting concrete constraints ask the
    /// child to honour the main-axis bounds exactly, loosening the cross axis
    /// if both cannot be met.
    #[must_use]
    pub const fn new(
        main_min: i32,
        cross_min: i32,
        main_max: i32,
        cross_max: i32,
        prioritize_main: bool,
    ) -> Self {
        Self {
            main_min,
            main_max,
            cross_min,
            cross_max,
            prioritize_main,
        }
    }

    /// Reads concrete constraints in terms of `orientation`.
    #[must_use]
    pub const fn from_constraints(constraints: Constraints, orientation: Orientation) -> Self {
        let (main_min, main_max) = constraints.range(orientation.main_axis());
        let (cross_min, cross_max) = constraints.range(orientation.cross_axis());
        let prioritize_main = matches!(
            constraints.priority,
            Some(axis) if axis as u8 == orientation.main_axis() as u8
        );
        Self::new(main_min, cross_min, main_max, cross_max, prioritize_main)
    }

    /// Converts back to concrete width/height constraints.
    #[must_use]
    pub const fn to_constraints(self, orientation: Orientation) -> Constraints {
        let constraints = match orientation {
            Orientation::Horizontal => {
                Constraints::new(self.main_min, self.main_max, self.cross_min, self.cross_max)
            }
            Orientation::Vertical => {
                Constraints::new(self.cross_min, self.cross_max, self.main_min, self.main_max)
            }
        };
        if self.prioritize_main {
            constraints.prioritizing(orientation.main_axis())
        } else {
            constraints
        }
    }

    /// Normalises negative or inverted bounds.
    #[must_use]
    pub fn clamped(self) -> Self {
        let (main_min, main_max) = clamp_range(self.main_min, self.main_max);
        let (cross_min, cross_max) = clamp_range(self.cross_min, self.cross_max);
        Self::new(main_min, cross_min, main_max, cross_max, self.prioritize_main)
    }

    /// Returns true when the main axis has an upper bound.
    #[must_use]
    pub const fn has_bounded_main(&self) -> bool {
        self.main_max != Constraints::INFINITY
    }

    /// Returns true when the cross axis has an upper bound.
    #[must_use]
    pub const fn has_bounded_cross(&self) -> bool {
        self.cross_max != Constraints::INFINITY
    }
}

/// Builds the concrete constraints a child is measured with.
///
/// Negative inputs are clamped to zero before use.
#[must_use]
pub fn create_axis_constraints(
    orientation: Orientation,
    main_min: i32,
    cross_min: i32,
    main_max: i32,
    cross_max: i32,
    prioritize_main: bool,
) -> Constraints {
    AxisConstraints::new(main_min, cross_min, main_max, cross_max, prioritize_main)
        .clamped()
        .to_constraints(orientation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_round_trip() {
        let concrete = Constraints::new(10, 200, 0, 40);
        let axis = AxisConstraints::from_constraints(concrete, Orientation::Horizontal);

        assert_eq!(axis.main_min, 10);
        assert_eq!(axis.main_max, 200);
        assert_eq!(axis.cross_max, 40);
        assert_eq!(axis.to_constraints(Orientation::Horizontal), concrete);
    }

    #[test]
    fn test_column_swaps_axes() {
        let concrete = Constraints::new(0, 120, 5, Constraints::INFINITY);
        let axis = AxisConstraints::from_constraints(concrete, Orientation::Vertical);

        assert_eq!(axis.main_min, 5);
        assert!(!axis.has_bounded_main());
        assert_eq!(axis.cross_max, 120);
        assert_eq!(
            Orientation::Vertical.size(30, 12),
            IntSize::new(12, 30),
        );
        assert_eq!(Orientation::Vertical.point(7, 3), IntPoint::new(3, 7));
    }

    #[test]
    fn test_prioritize_main_marks_axis() {
        let row = create_axis_constraints(Orientation::Horizontal, 50, 0, 50, 20, true);
        assert_eq!(row.priority, Some(Axis::Horizontal));
        assert_eq!(row.range(Axis::Horizontal), (50, 50));

        let column = create_axis_constraints(Orientation::Vertical, 50, 0, 50, 20, true);
        assert_eq!(column.priority, Some(Axis::Vertical));
        assert_eq!(column.range(Axis::Vertical), (50, 50));
        assert!(
            AxisConstraints::from_constraints(column, Orientation::Vertical).prioritize_main
        );
        assert!(
            !AxisConstraints::from_constraints(column, Orientation::Horizontal).prioritize_main
        );
    }

    #[test]
    fn test_create_clamps_negative_values() {
        let constraints = create_axis_constraints(Orientation::Horizontal, -3, -1, -10, 5, false);

        assert_eq!(constraints.range(Axis::Horizontal), (0, 0));
        assert_eq!(constraints.range(Axis::Vertical), (0, 5));
        assert_eq!(constraints.priority, None);
    }
}
