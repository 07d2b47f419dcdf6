#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod debug;

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! ```rust
    //! use flowstack::prelude::*;
    //!
    //! let row = HStackLayout::default().spacing(8);
    //! assert_eq!(row.spacing, 8);
    //! ```
    pub use super::config::StackConfig;
    pub use flowstack_layout::{
        Arrangement, Constraints, CrossAlignment, FlexibilityDescriptor, HStackLayout,
        HorizontalAlignment, IntSize, LayoutDirection, LayoutResult, Measurable, MeasuredChild,
        Orientation, StackChild, StackMeasure, VStackLayout, VerticalAlignment, spacer,
        spacer_min,
    };
}

pub use config::{ConfigError, StackConfig};
pub use flowstack_layout as layout;
pub use flowstack_layout::measure;
pub use tracing as log;
