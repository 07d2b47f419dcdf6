//! Flexibility descriptors attached to stack children.
//!
//! A parent decides how each child may grow before measuring starts, and
//! hands the engine an immutable [`StackChild`] per child. The engine reads
//! these descriptors and never changes them.
//!
//! The flexibility of a child is classified into a closed set of [`Tier`]s,
//! which also fixes the order children are resolved in:
//!
//! 1. [`Tier::Fixed`] children take what they need first.
//! 2. [`Tier::Capped`] children that would not use a full share are pinned to
//!    their cap.
//! 3. [`Tier::Expanding`] children split what is left evenly.
//! 4. [`Tier::SpaceFiller`] children (spacers) absorb the remaining slack.

use core::fmt;

use flowstack_core::Measurable;

use crate::alignment::CrossAlignment;

/// Errors raised while building child descriptors.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    /// A size was negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeSize {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// The minimum exceeds a literal cap.
    #[error("minimum {min} exceeds maximum {max}")]
    MinExceedsMax {
        /// Requested minimum.
        min: i32,
        /// Requested cap.
        max: i32,
    },
    /// The minimum exceeds the ideal size.
    #[error("minimum {min} exceeds ideal {ideal}")]
    MinExceedsIdeal {
        /// Requested minimum.
        min: i32,
        /// Requested ideal size.
        ideal: i32,
    },
    /// A cross-axis fill fraction outside `0.0..=1.0`.
    #[error("cross fill fraction must be within 0.0..=1.0 (got {0})")]
    InvalidFraction(f32),
}

/// Upper bound of a flexible child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlexMax {
    /// Never grows beyond this many units.
    Size(i32),
    /// Never grows beyond its intrinsic size.
    Intrinsic,
    /// Takes an equal share of the leftover space.
    Fill,
    /// Absorbs whatever is left after everything else.
    Space,
}

impl FlexMax {
    /// Raw value meaning "capped at intrinsic size".
    pub const RAW_INTRINSIC: f32 = -1.0;
    /// Raw value meaning "space filler".
    pub const RAW_SPACE: f32 = -2.0;

    /// Decodes the sentinel-float encoding used by host toolkits.
    ///
    /// Positive finite values are literal caps (fractions round up), `+∞`
    /// fills, [`Self::RAW_INTRINSIC`] and [`Self::RAW_SPACE`] are the two
    /// reserved tags. Anything else is unrecognized and yields `None`, which
    /// stacks treat as a fixed child.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn from_raw(raw: f32) -> Option<Self> {
        if raw == f32::INFINITY {
            Some(Self::Fill)
        } else if raw == Self::RAW_INTRINSIC {
            Some(Self::Intrinsic)
        } else if raw == Self::RAW_SPACE {
            Some(Self::Space)
        } else if raw.is_finite() && raw > 0.0 {
            let whole = raw as i32;
            Some(Self::Size(if whole as f32 >= raw {
                whole
            } else {
                whole.saturating_add(1)
            }))
        } else {
            None
        }
    }
}

/// What a capped child is capped at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cap {
    /// A literal size.
    Size(i32),
    /// The child's intrinsic (or ideal) size.
    Intrinsic,
}

/// Flexibility classification deciding when a child is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    /// Not flexible: measured first, with whatever budget remains.
    #[default]
    Fixed,
    /// Grows up to a cap, but no further.
    Capped(Cap),
    /// Grows to an equal share of leftover space.
    Expanding,
    /// Lowest priority growth, with a minimum length.
    SpaceFiller(i32),
}

impl Tier {
    /// Returns true for every tier resolved after the fixed pass.
    #[must_use]
    pub const fn is_flexible(self) -> bool {
        !matches!(self, Self::Fixed)
    }

    /// Returns true for the spacer tier.
    #[must_use]
    pub const fn is_space(self) -> bool {
        matches!(self, Self::SpaceFiller(_))
    }
}

/// Ideal/minimum/maximum sizing of a child along its parent's main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct FlexibilityDescriptor {
    ideal: Option<i32>,
    min: Option<i32>,
    max: Option<FlexMax>,
}

impl FlexibilityDescriptor {
    /// Creates a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] when a size is negative, or when `min`
    /// exceeds `ideal` or a literal `max`.
    pub fn new(
        ideal: Option<i32>,
        min: Option<i32>,
        max: Option<FlexMax>,
    ) -> Result<Self, DescriptorError> {
        check_non_negative("ideal", ideal)?;
        check_non_negative("min", min)?;
        if let Some(FlexMax::Size(cap)) = max {
            check_non_negative("max", Some(cap))?;
            if let Some(min) = min {
                if min > cap {
                    return Err(DescriptorError::MinExceedsMax { min, max: cap });
                }
            }
        }
        if let (Some(min), Some(ideal)) = (min, ideal) {
            if min > ideal {
                return Err(DescriptorError::MinExceedsIdeal { min, ideal });
            }
        }
        Ok(Self { ideal, min, max })
    }

    /// A child that takes an equal share of leftover space.
    #[must_use]
    pub const fn fill() -> Self {
        Self {
            ideal: None,
            min: None,
            max: Some(FlexMax::Fill),
        }
    }

    /// A child that grows up to `cap` units.
    #[must_use]
    pub const fn capped(cap: i32) -> Self {
        Self {
            ideal: None,
            min: None,
            max: Some(FlexMax::Size(if cap < 0 { 0 } else { cap })),
        }
    }

    /// A child that grows up to its intrinsic size.
    #[must_use]
    pub const fn hugging() -> Self {
        Self {
            ideal: None,
            min: None,
            max: Some(FlexMax::Intrinsic),
        }
    }

    /// A spacer that never shrinks below `min`.
    #[must_use]
    pub const fn space(min: i32) -> Self {
        Self {
            ideal: None,
            min: Some(if min < 0 { 0 } else { min }),
            max: Some(FlexMax::Space),
        }
    }

    /// Ideal size, overriding the intrinsic size when present.
    #[must_use]
    pub const fn ideal(&self) -> Option<i32> {
        self.ideal
    }

    /// Minimum size.
    #[must_use]
    pub const fn min(&self) -> Option<i32> {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> Option<FlexMax> {
        self.max
    }

    /// Classifies this descriptor.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        match self.max {
            None => Tier::Fixed,
            Some(FlexMax::Size(cap)) => Tier::Capped(Cap::Size(cap)),
            Some(FlexMax::Intrinsic) => Tier::Capped(Cap::Intrinsic),
            Some(FlexMax::Fill) => Tier::Expanding,
            Some(FlexMax::Space) => Tier::SpaceFiller(match self.min {
                Some(min) => min,
                None => 0,
            }),
        }
    }
}

fn check_non_negative(field: &'static str, value: Option<i32>) -> Result<(), DescriptorError> {
    match value {
        Some(value) if value < 0 => Err(DescriptorError::NegativeSize { field, value }),
        _ => Ok(()),
    }
}

/// Everything a parent attaches to a child before measuring it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ParentData {
    /// Main-axis flexibility; `None` means fixed.
    pub flexibility: Option<FlexibilityDescriptor>,
    /// Cross-axis alignment; `None` uses the container's alignment.
    pub alignment: Option<CrossAlignment>,
    /// Fraction of the container's cross extent the child must fill.
    pub cross_fill: Option<f32>,
}

impl ParentData {
    /// Attaches a flexibility descriptor.
    #[must_use]
    pub const fn with_flexibility(mut self, flexibility: FlexibilityDescriptor) -> Self {
        self.flexibility = Some(flexibility);
        self
    }

    /// Attaches a cross-axis alignment.
    #[must_use]
    pub const fn with_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Attaches a cross-axis fill fraction.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::InvalidFraction`] unless
    /// `0.0 <= fraction <= 1.0`.
    pub fn with_cross_fill(mut self, fraction: f32) -> Result<Self, DescriptorError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(DescriptorError::InvalidFraction(fraction));
        }
        self.cross_fill = Some(fraction);
        Ok(self)
    }

    /// The tier this child is resolved in.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.flexibility
            .as_ref()
            .map_or(Tier::Fixed, FlexibilityDescriptor::tier)
    }
}

/// A child handed to the stack engine: a measurement capability plus the
/// descriptors its parent attached.
#[derive(Clone, Copy)]
pub struct StackChild<'a> {
    measurable: &'a dyn Measurable,
    data: ParentData,
}

impl fmt::Debug for StackChild<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackChild")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<'a> StackChild<'a> {
    /// Wraps a fixed, container-aligned child.
    #[must_use]
    pub fn new(measurable: &'a dyn Measurable) -> Self {
        Self {
            measurable,
            data: ParentData::default(),
        }
    }

    /// Wraps a child with explicit parent data.
    #[must_use]
    pub const fn with_data(measurable: &'a dyn Measurable, data: ParentData) -> Self {
        Self { measurable, data }
    }

    /// Attaches a flexibility descriptor.
    #[must_use]
    pub const fn flexible(mut self, flexibility: FlexibilityDescriptor) -> Self {
        self.data = self.data.with_flexibility(flexibility);
        self
    }

    /// Attaches a cross-axis alignment.
    #[must_use]
    pub const fn aligned(mut self, alignment: CrossAlignment) -> Self {
        self.data = self.data.with_alignment(alignment);
        self
    }

    /// Attaches a cross-axis fill fraction.
    ///
    /// # Errors
    ///
    /// See [`ParentData::with_cross_fill`].
    pub fn fill_cross(mut self, fraction: f32) -> Result<Self, DescriptorError> {
        self.data = self.data.with_cross_fill(fraction)?;
        Ok(self)
    }

    /// The measurement capability.
    #[must_use]
    pub fn measurable(&self) -> &'a dyn Measurable {
        self.measurable
    }

    /// The attached descriptors.
    #[must_use]
    pub const fn data(&self) -> &ParentData {
        &self.data
    }
}
