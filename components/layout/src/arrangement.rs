//! Main-axis arrangement policies.
//!
//! Once every child's main-axis slot is known, an [`Arrange`] implementation
//! decides where each slot starts. Spacing between children is always kept;
//! the policy only distributes whatever free space is left on top of it.

use alloc::vec::Vec;
use core::fmt::Debug;

use flowstack_core::{LayoutDirection, round_half_up};

/// Pluggable main-axis positioning.
pub trait Arrange: Debug {
    /// Returns the start offset of each slot in `sizes`.
    ///
    /// `total` is the container's main extent, `spacing` the minimum gap
    /// between adjacent slots. Right-to-left `direction` mirrors the result.
    fn arrange(
        &self,
        total: i32,
        sizes: &[i32],
        spacing: i32,
        direction: LayoutDirection,
    ) -> Vec<i32>;
}

/// Built-in arrangement policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Arrangement {
    /// Packed against the leading edge.
    #[default]
    Start,
    /// Packed in the middle.
    Center,
    /// Packed against the trailing edge.
    End,
    /// First and last slots touch the edges; free space goes between slots.
    SpaceBetween,
    /// Free space split evenly around each slot (half-size gaps at the edges).
    SpaceAround,
    /// Free space split evenly between slots and both edges.
    SpaceEvenly,
}

impl Arrangement {
    /// Leading offset and extra per-gap space for `count` slots sharing
    /// `free` units.
    #[allow(clippy::cast_precision_loss)]
    fn distribute(self, free: f32, count: usize) -> (f32, f32) {
        let count = count as f32;
        match self {
            Self::Start => (0.0, 0.0),
            Self::Center => (free / 2.0, 0.0),
            Self::End => (free, 0.0),
            Self::SpaceBetween if count > 1.0 => (0.0, free / (count - 1.0)),
            Self::SpaceBetween => (0.0, 0.0),
            Self::SpaceAround => {
                let around = free / count;
                (around / 2.0, around)
            }
            Self::SpaceEvenly => {
                let gap = free / (count + 1.0);
                (gap, gap)
            }
        }
    }
}

impl Arrange for Arrangement {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn arrange(
        &self,
        total: i32,
        sizes: &[i32],
        spacing: i32,
        direction: LayoutDirection,
    ) -> Vec<i32> {
        if sizes.is_empty() {
            return Vec::new();
        }

        let spacing = spacing.max(0);
        let gaps = (sizes.len() - 1) as i32;
        let used = sizes
            .iter()
            .fold(spacing.saturating_mul(gaps), |acc, size| acc.saturating_add(*size));
        let free = total.saturating_sub(used).max(0);

        let (leading, extra) = self.distribute(free as f32, sizes.len());

        let mut cursor = leading;
        let mut offsets = Vec::with_capacity(sizes.len());
        for size in sizes {
            offsets.push(round_half_up(cursor));
            cursor += *size as f32 + spacing as f32 + extra;
        }

        if direction.is_rtl() {
            for (offset, size) in offsets.iter_mut().zip(sizes) {
                *offset = total - *offset - size;
            }
        }

        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const LTR: LayoutDirection = LayoutDirection::Ltr;

    #[test]
    fn test_start_keeps_spacing() {
        let offsets = Arrangement::Start.arrange(100, &[10, 20, 30], 5, LTR);
        assert_eq!(offsets, vec![0, 15, 40]);
    }

    #[test]
    fn test_center_and_end() {
        assert_eq!(Arrangement::Center.arrange(100, &[20, 20], 0, LTR), vec![30, 50]);
        assert_eq!(Arrangement::End.arrange(100, &[20, 20], 10, LTR), vec![50, 80]);
    }

    #[test]
    fn test_space_between() {
        let offsets = Arrangement::SpaceBetween.arrange(100, &[10, 10, 10], 0, LTR);
        assert_eq!(offsets, vec![0, 45, 90]);

        // A single child sits at the start.
        assert_eq!(Arrangement::SpaceBetween.arrange(100, &[10], 0, LTR), vec![0]);
    }

    #[test]
    fn test_space_around_and_evenly() {
        // 60 free units, 20 around each child, 10 at each edge.
        let around = Arrangement::SpaceAround.arrange(90, &[10, 10, 10], 0, LTR);
        assert_eq!(around, vec![10, 40, 70]);

        // 60 free units over four gaps of 15.
        let evenly = Arrangement::SpaceEvenly.arrange(90, &[10, 10, 10], 0, LTR);
        assert_eq!(evenly, vec![15, 40, 65]);
    }

    #[test]
    fn test_rtl_mirrors_offsets() {
        let offsets = Arrangement::Start.arrange(100, &[10, 20], 5, LayoutDirection::Rtl);
        assert_eq!(offsets, vec![90, 65]);
    }

    #[test]
    fn test_overflow_does_not_produce_negative_free_space() {
        let offsets = Arrangement::Center.arrange(20, &[15, 15], 0, LTR);
        assert_eq!(offsets, vec![0, 15]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Arrangement::SpaceEvenly.arrange(50, &[], 4, LTR).is_empty());
    }
}
