//! Serializable stack configuration.
//!
//! Hosts that describe their containers as data (for example a JSON layout
//! file) can deserialize a [`StackConfig`] and measure with it directly.
//!
//! ```rust
//! use flowstack::StackConfig;
//! use flowstack::layout::{Arrangement, Orientation};
//!
//! let config = StackConfig::from_json(r#"{ "orientation": "vertical", "arrangement": "space_between" }"#)?;
//! assert_eq!(config.orientation, Orientation::Vertical);
//! assert_eq!(config.arrangement, Arrangement::SpaceBetween);
//! assert_eq!(config.spacing, 10);
//! # Ok::<(), flowstack::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use flowstack_layout::{
    AlignmentLine, Arrangement, Constraints, CrossAlignment, LayoutDirection, LayoutResult,
    Orientation, StackChild, StackMeasure, stack::DEFAULT_SPACING,
};

/// Errors raised while loading a [`StackConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a stack configuration.
    #[error("Invalid stack configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Spacing must be zero or positive.
    #[error("Spacing must not be negative (got {0})")]
    NegativeSpacing(i32),
}

/// Cross-axis alignment as written in configuration files.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StackAlignment {
    /// Leading edge.
    #[default]
    Start,
    /// Centred.
    Center,
    /// Trailing edge.
    End,
    /// Shared first text baseline.
    FirstBaseline,
    /// Shared last text baseline.
    LastBaseline,
}

impl From<StackAlignment> for CrossAlignment {
    fn from(alignment: StackAlignment) -> Self {
        match alignment {
            StackAlignment::Start => Self::Start,
            StackAlignment::Center => Self::Center,
            StackAlignment::End => Self::End,
            StackAlignment::FirstBaseline => Self::Relative(AlignmentLine::FirstBaseline),
            StackAlignment::LastBaseline => Self::Relative(AlignmentLine::LastBaseline),
        }
    }
}

/// Everything needed to measure one stack, in a serializable form.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// Row or column.
    pub orientation: Orientation,
    /// Minimum gap between adjacent children.
    pub spacing: i32,
    /// Cross alignment for children without their own.
    pub alignment: StackAlignment,
    /// Main-axis positioning policy.
    pub arrangement: Arrangement,
    /// Reading direction.
    pub direction: LayoutDirection,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            spacing: DEFAULT_SPACING,
            alignment: StackAlignment::Start,
            arrangement: Arrangement::Start,
            direction: LayoutDirection::Ltr,
        }
    }
}

impl StackConfig {
    /// Parses and validates a JSON configuration. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::NegativeSpacing`] for a negative `spacing`.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        tracing::debug!(?config, "loaded stack configuration");
        Ok(config)
    }

    /// Serializes this configuration as JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures as [`ConfigError::Parse`].
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks values serde cannot rule out on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeSpacing`] for a negative `spacing`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.spacing < 0 {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        Ok(())
    }

    /// Measures and places `children` with this configuration.
    #[must_use]
    pub fn measure(&self, children: &[StackChild<'_>], constraints: Constraints) -> LayoutResult {
        StackMeasure::new(self.orientation, self.spacing, &self.arrangement)
            .alignment(self.alignment.into())
            .direction(self.direction)
            .measure(children, constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowstack_layout::{FlexibilityDescriptor, IntSize, Measurable, MeasuredChild};

    struct Block(IntSize);

    impl Measurable for Block {
        fn measure(&self, constraints: Constraints) -> MeasuredChild {
            MeasuredChild::new(constraints.constrain(self.0))
        }
        fn max_intrinsic_width(&self, _height: i32) -> i32 {
            self.0.width
        }
        fn max_intrinsic_height(&self, _width: i32) -> i32 {
            self.0.height
        }
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let config = StackConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(config, StackConfig::default());
        assert_eq!(config.spacing, 10);
    }

    #[test]
    fn test_full_config() {
        let config = StackConfig::from_json(
            r#"{
                "orientation": "vertical",
                "spacing": 4,
                "alignment": "last_baseline",
                "arrangement": "space_evenly",
                "direction": "rtl"
            }"#,
        )
        .expect("config is valid");

        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.spacing, 4);
        assert_eq!(config.alignment, StackAlignment::LastBaseline);
        assert_eq!(config.arrangement, Arrangement::SpaceEvenly);
        assert_eq!(config.direction, LayoutDirection::Rtl);
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let err = StackConfig::from_json(r#"{ "spacing": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeSpacing(-1)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            StackConfig::from_json(r#"{ "orientation": "diagonal" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StackConfig::from_json(r#"{ "gap": 3 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = StackConfig {
            spacing: 6,
            alignment: StackAlignment::Center,
            ..StackConfig::default()
        };
        let json = config.to_json().expect("serializes");
        assert_eq!(StackConfig::from_json(&json).expect("parses"), config);
    }

    #[test]
    fn test_measure_with_config() {
        let config = StackConfig::from_json(r#"{ "spacing": 0, "alignment": "center" }"#)
            .expect("config is valid");
        let label = Block(IntSize::new(30, 10));
        let field = Block(IntSize::new(0, 20));
        let children = [
            StackChild::new(&label),
            StackChild::new(&field).flexible(FlexibilityDescriptor::fill()),
        ];

        let result = config.measure(&children, Constraints::loose(IntSize::new(100, 40)));

        assert_eq!(result.size(), IntSize::new(100, 20));
        assert_eq!(result.placements[1].main_offset, 30);
        assert_eq!(result.placements[1].size.width, 70);
        assert_eq!(result.placements[0].cross_offset, 5);
    }
}
