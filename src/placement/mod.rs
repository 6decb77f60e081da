//! Placement engine: spec parsing, auto flipping and coordinate math
//!
//! [`compute_placement`] is the entry point. It parses the placement
//! string, measures the anchor relative to its offset parent, lets the
//! resolver flip an `auto` axis on viewport overflow, and produces the
//! panel and arrow offsets.

pub mod calculator;
pub mod lexer;
pub mod resolver;
pub mod spec;

pub use calculator::{
    compute_placement, compute_placement_for, place, Placement, PlacementResult,
    ResolvedPlacement,
};
pub use resolver::{resolve_alignment, resolve_placement};
pub use spec::{Alignment, Axis, PlacementSpec};
