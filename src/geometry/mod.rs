//! Element geometry: page boxes, style lookup and offset frames
//!
//! These are the read-only building blocks the placement calculator
//! composes. Each takes the [`Platform`](crate::platform::Platform)
//! explicitly and performs no writes.

pub mod offset_parent;
pub mod reader;
pub mod style;
pub mod types;

pub use offset_parent::{find_offset_parent, frame_origin, position, OffsetFrame};
pub use reader::{page_scroll, read_box};
pub use style::{computed_position, css_property, is_static_positioned};
pub use types::*;
