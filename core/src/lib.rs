#![no_std]
//! Core primitives for the Flowstack layout system.
//!
//! Every container in Flowstack speaks the same small vocabulary: integer
//! sizes and points, [`Constraints`] handed from parent to child, and the
//! [`Measurable`] capability a child exposes so its parent can ask "how big
//! would you be under these bounds?". Nothing here knows about views, colors
//! or the host toolkit; the values are abstract units handed in by the
//! surrounding framework.

extern crate alloc;

pub mod layout;

pub use layout::*;
