//! Multi-pass resolution of main-axis sizes.
//!
//! Children are resolved in a fixed sequence of passes. Each pass only looks
//! at children that are still unmeasured and match its predicate, and each
//! flexible pass recomputes the per-child unit size from what is left:
//!
//! 1. fixed children, with the remaining budget as their maximum;
//! 2. capped children whose cap fits in a unit share, repeated until a sweep
//!    pins nobody;
//! 3. expanding children, each getting exactly one share;
//! 4. any other non-spacer child still unmeasured;
//! 5. spacers, splitting the final leftover.
//!
//! With an unbounded main axis there is no leftover to split, so flexible
//! children fall back to their intrinsic (or ideal) size.

use alloc::vec::Vec;
use core::fmt;

use flowstack_core::{Constraints, Measurable, MeasuredChild, remaining, round_half_up};

use crate::{
    alignment::CrossAlignment,
    flex::{Cap, StackChild, Tier},
    orientation::{AxisConstraints, Orientation, create_axis_constraints},
};

/// Per-child working state, owned by one solver run.
pub(crate) struct ChildEntry<'a> {
    pub(crate) index: usize,
    measurable: &'a dyn Measurable,
    pub(crate) tier: Tier,
    pub(crate) alignment: CrossAlignment,
    min_main: i32,
    ideal: Option<i32>,
    cross_fill: Option<f32>,
    pub(crate) constrained_main_size: i32,
    pub(crate) measured_main_size: i32,
    pub(crate) measured_cross_size: i32,
    cached_intrinsic_main_size: Option<i32>,
    pub(crate) measured: Option<MeasuredChild>,
}

impl fmt::Debug for ChildEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildEntry")
            .field("index", &self.index)
            .field("tier", &self.tier)
            .field("constrained_main_size", &self.constrained_main_size)
            .field("measured_main_size", &self.measured_main_size)
            .field("measured_cross_size", &self.measured_cross_size)
            .finish_non_exhaustive()
    }
}

impl ChildEntry<'_> {
    pub(crate) const fn is_measured(&self) -> bool {
        self.measured.is_some()
    }
}

/// Running totals, mutated only while passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SolverAggregate {
    pub(crate) fixed_size: i32,
    pub(crate) flexible_size_consumed: i32,
    pub(crate) remaining_flexible_count: usize,
    pub(crate) cross_axis_max: i32,
    pub(crate) any_relative_alignment: bool,
}

/// Output of a solver run.
#[derive(Debug)]
pub(crate) struct Solved<'a> {
    pub(crate) entries: Vec<ChildEntry<'a>>,
    pub(crate) aggregate: SolverAggregate,
    pub(crate) main_size: i32,
}

/// Per-pass share of the remaining main-axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UnitShare {
    base: i32,
    remainder: i32,
}

impl UnitShare {
    /// Share of the `rank`-th eligible child; the lowest ranks take the
    /// remainder units.
    fn for_rank(self, rank: usize) -> i32 {
        let bonus = i32::from(i32::try_from(rank).is_ok_and(|rank| rank < self.remainder));
        self.base + bonus
    }
}

pub(crate) struct Solver<'a> {
    orientation: Orientation,
    constraints: AxisConstraints,
    total_spacing: i32,
    entries: Vec<ChildEntry<'a>>,
    aggregate: SolverAggregate,
}

impl<'a> Solver<'a> {
    pub(crate) fn new(
        children: &[StackChild<'a>],
        constraints: AxisConstraints,
        spacing: i32,
        orientation: Orientation,
        default_alignment: CrossAlignment,
    ) -> Self {
        let gaps = i32::try_from(children.len().saturating_sub(1)).unwrap_or(i32::MAX);
        let mut aggregate = SolverAggregate::default();

        let entries: Vec<ChildEntry<'a>> = children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let data = child.data();
                let tier = data.tier();
                let alignment = data.alignment.unwrap_or(default_alignment);
                let flexibility = data.flexibility.as_ref();

                if tier.is_flexible() {
                    aggregate.remaining_flexible_count += 1;
                }
                aggregate.any_relative_alignment |= alignment.is_relative();

                ChildEntry {
                    index,
                    measurable: child.measurable(),
                    tier,
                    alignment,
                    min_main: flexibility
                        .and_then(|f| f.min())
                        .map_or(0, |min| min.max(0)),
                    ideal: flexibility.and_then(|f| f.ideal()).map(|ideal| ideal.max(0)),
                    cross_fill: data.cross_fill,
                    constrained_main_size: 0,
                    measured_main_size: 0,
                    measured_cross_size: 0,
                    cached_intrinsic_main_size: None,
                    measured: None,
                }
            })
            .collect();

        Self {
            orientation,
            constraints,
            total_spacing: spacing.max(0).saturating_mul(gaps),
            entries,
            aggregate,
        }
    }

    pub(crate) fn run(mut self) -> Solved<'a> {
        self.fixed_pass();
        self.capacity_pass();
        self.expanding_pass();
        self.non_space_pass();
        self.space_pass();

        let used = self
            .aggregate
            .fixed_size
            .saturating_add(self.aggregate.flexible_size_consumed)
            .saturating_add(self.total_spacing);
        let mut main_size = used.max(self.constraints.main_min);

        let fills_main = self
            .entries
            .iter()
            .any(|e| matches!(e.tier, Tier::Expanding | Tier::SpaceFiller(_)));
        if fills_main && self.constraints.has_bounded_main() {
            main_size = main_size.max(self.constraints.main_max);
        }

        tracing::trace!(
            main_size,
            unresolved = self.aggregate.remaining_flexible_count,
            "main axis resolved"
        );

        Solved {
            entries: self.entries,
            aggregate: self.aggregate,
            main_size,
        }
    }

    // ------------------------------------------------------------------------
    // Passes
    // ------------------------------------------------------------------------

    fn fixed_pass(&mut self) {
        for idx in self.pending(|tier| !tier.is_flexible()) {
            let used = self.total_spacing.saturating_add(self.aggregate.fixed_size);
            let budget = remaining(self.constraints.main_max, used);
            let floor = self.entries[idx].min_main.min(budget);

            self.measure(idx, floor, budget, false);
            self.aggregate.fixed_size = self
                .aggregate
                .fixed_size
                .saturating_add(self.entries[idx].constrained_main_size);
        }

        tracing::trace!(
            fixed_size = self.aggregate.fixed_size,
            cross_axis_max = self.aggregate.cross_axis_max,
            "fixed pass done"
        );
    }

    fn capacity_pass(&mut self) {
        if !self.constraints.has_bounded_main() {
            return;
        }

        loop {
            let eligible = self.pending(|tier| tier.is_flexible() && !tier.is_space());
            let Some(unit) = self.unit_share(eligible.len(), self.space_reserve()) else {
                break;
            };

            let mut measured_this_sweep = 0_usize;
            for idx in eligible {
                let Tier::Capped(cap) = self.entries[idx].tier else {
                    continue;
                };
                let cap = self.cap_size(idx, cap);
                if cap <= unit.base {
                    let floor = self.entries[idx].min_main;
                    self.measure_flexible(idx, floor, cap);
                    measured_this_sweep += 1;
                }
            }

            tracing::trace!(
                unit = unit.base,
                pinned = measured_this_sweep,
                "capacity sweep done"
            );
            if measured_this_sweep == 0 {
                break;
            }
        }
    }

    fn expanding_pass(&mut self) {
        let eligible = self.pending(|tier| tier.is_flexible() && !tier.is_space());
        let unit = self.unit_share(eligible.len(), self.space_reserve());

        for (rank, idx) in eligible.into_iter().enumerate() {
            if self.entries[idx].tier != Tier::Expanding {
                continue;
            }
            let size = match unit {
                Some(unit) => unit.for_rank(rank),
                None => self.ideal_or_intrinsic(idx),
            };
            let size = size.max(self.entries[idx].min_main);
            self.measure_flexible(idx, size, size);
        }

        if unit.is_none() && !self.constraints.has_bounded_main() {
            tracing::debug!("unbounded main axis: expanding children use intrinsic sizes");
        }
        tracing::trace!(
            consumed = self.aggregate.flexible_size_consumed,
            "expanding pass done"
        );
    }

    fn non_space_pass(&mut self) {
        let eligible = self.pending(|tier| !tier.is_space());
        if eligible.is_empty() {
            return;
        }
        let unit = self.unit_share(eligible.len(), self.space_reserve());

        for (rank, idx) in eligible.into_iter().enumerate() {
            let min_main = self.entries[idx].min_main;
            match self.entries[idx].tier {
                Tier::Capped(cap) => {
                    let cap = self.cap_size(idx, cap);
                    let max = unit
                        .map_or(cap, |unit| cap.min(unit.for_rank(rank)))
                        .max(min_main);
                    self.measure_flexible(idx, min_main, max);
                }
                _ => {
                    let size = unit
                        .map_or_else(|| self.ideal_or_intrinsic(idx), |unit| unit.for_rank(rank))
                        .max(min_main);
                    self.measure_flexible(idx, size, size);
                }
            }
        }

        tracing::trace!(
            consumed = self.aggregate.flexible_size_consumed,
            "non-space pass done"
        );
    }

    fn space_pass(&mut self) {
        let eligible = self.pending(Tier::is_space);
        if eligible.is_empty() {
            return;
        }
        let unit = self.unit_share(eligible.len(), 0);

        for (rank, idx) in eligible.into_iter().enumerate() {
            let Tier::SpaceFiller(min) = self.entries[idx].tier else {
                continue;
            };
            let size = unit
                .map_or_else(|| self.ideal_or_intrinsic(idx), |unit| unit.for_rank(rank))
                .max(min);
            self.measure_flexible(idx, size, size);
        }

        tracing::trace!(
            consumed = self.aggregate.flexible_size_consumed,
            "space pass done"
        );
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    /// Indices of unmeasured children whose tier matches, in index order.
    fn pending(&self, matches: impl Fn(Tier) -> bool) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|e| !e.is_measured() && matches(e.tier))
            .map(|e| e.index)
            .collect()
    }

    /// Minimum lengths still owed to unmeasured spacers.
    fn space_reserve(&self) -> i32 {
        self.entries
            .iter()
            .filter(|e| !e.is_measured())
            .map(|e| match e.tier {
                Tier::SpaceFiller(min) => min.max(0),
                _ => 0,
            })
            .fold(0, i32::saturating_add)
    }

    /// Splits what is left of the main axis between `count` children.
    ///
    /// Returns `None` for an unbounded main axis or when nobody is eligible.
    fn unit_share(&self, count: usize, reserve: i32) -> Option<UnitShare> {
        if count == 0 || !self.constraints.has_bounded_main() {
            return None;
        }
        let used = self
            .total_spacing
            .saturating_add(self.aggregate.fixed_size)
            .saturating_add(self.aggregate.flexible_size_consumed)
            .saturating_add(reserve);
        let available = remaining(self.constraints.main_max, used);
        let count = i32::try_from(count).unwrap_or(i32::MAX);

        if available == 0 {
            tracing::debug!(count, "no main-axis space left for flexible children");
        }
        Some(UnitShare {
            base: available / count,
            remainder: available % count,
        })
    }

    /// Effective cap of a capped child; never below its minimum.
    fn cap_size(&mut self, idx: usize, cap: Cap) -> i32 {
        let size = match cap {
            Cap::Size(size) => size.max(0),
            Cap::Intrinsic => self.ideal_or_intrinsic(idx),
        };
        size.max(self.entries[idx].min_main)
    }

    fn ideal_or_intrinsic(&mut self, idx: usize) -> i32 {
        match self.entries[idx].ideal {
            Some(ideal) => ideal,
            None => self.intrinsic_main(idx),
        }
    }

    /// Intrinsic main size, queried at most once per child.
    fn intrinsic_main(&mut self, idx: usize) -> i32 {
        if let Some(size) = self.entries[idx].cached_intrinsic_main_size {
            return size;
        }
        let axis = self.orientation.main_axis();
        let size = self.entries[idx]
            .measurable
            .intrinsic_size(axis, self.constraints.cross_max)
            .max(0);
        self.entries[idx].cached_intrinsic_main_size = Some(size);
        size
    }

    #[allow(clippy::cast_precision_loss)]
    fn cross_bounds(&self, idx: usize) -> (i32, i32) {
        match self.entries[idx].cross_fill {
            Some(fraction) if self.constraints.has_bounded_cross() => {
                let size = round_half_up(fraction * self.constraints.cross_max as f32);
                (size, size)
            }
            _ => (0, self.constraints.cross_max),
        }
    }

    fn measure_flexible(&mut self, idx: usize, main_min: i32, main_max: i32) {
        self.measure(idx, main_min, main_max, true);
        self.aggregate.flexible_size_consumed = self
            .aggregate
            .flexible_size_consumed
            .saturating_add(self.entries[idx].constrained_main_size);
        self.aggregate.remaining_flexible_count =
            self.aggregate.remaining_flexible_count.saturating_sub(1);
    }

    fn measure(&mut self, idx: usize, main_min: i32, main_max: i32, prioritize_main: bool) {
        let (cross_min, cross_max) = self.cross_bounds(idx);
        let constraints: Constraints = create_axis_constraints(
            self.orientation,
            main_min,
            cross_min,
            main_max,
            cross_max,
            prioritize_main,
        );

        let entry = &mut self.entries[idx];
        let measured = entry.measurable.measure(constraints);
        let size = measured.size();

        entry.measured_main_size = self.orientation.main(size);
        entry.measured_cross_size = self.orientation.cross(size);
        entry.constrained_main_size = self.orientation.main(constraints.constrain(size));
        entry.measured = Some(measured);

        self.aggregate.cross_axis_max = self.aggregate.cross_axis_max.max(entry.measured_cross_size);
    }
}
