//! Row and column containers.
//!
//! [`HStackLayout`] and [`VStackLayout`] are thin front-ends over the
//! [`engine`](crate::engine): they hold a container's alignment, spacing,
//! arrangement and direction, and translate their alignment enums into the
//! engine's [`CrossAlignment`].

mod hstack;
mod vstack;

pub use hstack::HStackLayout;
pub use vstack::VStackLayout;

use flowstack_core::AlignmentLine;

use crate::alignment::CrossAlignment;

/// Spacing used by stacks unless told otherwise.
pub const DEFAULT_SPACING: i32 = 10;

/// Vertical alignment of children inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VerticalAlignment {
    /// Top edges line up.
    Top,
    /// Centres line up.
    #[default]
    Center,
    /// Bottom edges line up.
    Bottom,
    /// First text baselines line up.
    FirstTextBaseline,
    /// Last text baselines line up.
    LastTextBaseline,
}

impl From<VerticalAlignment> for CrossAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Top => Self::Start,
            VerticalAlignment::Center => Self::Center,
            VerticalAlignment::Bottom => Self::End,
            VerticalAlignment::FirstTextBaseline => Self::Relative(AlignmentLine::FirstBaseline),
            VerticalAlignment::LastTextBaseline => Self::Relative(AlignmentLine::LastBaseline),
        }
    }
}

/// Horizontal alignment of children inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HorizontalAlignment {
    /// Leading edges line up (left in left-to-right content).
    Leading,
    /// Centres line up.
    #[default]
    Center,
    /// Trailing edges line up.
    Trailing,
}

impl From<HorizontalAlignment> for CrossAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Leading => Self::Start,
            HorizontalAlignment::Center => Self::Center,
            HorizontalAlignment::Trailing => Self::End,
        }
    }
}
