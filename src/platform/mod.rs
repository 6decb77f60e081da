//! Host platform capabilities consumed by the placement engine
//!
//! Everything the engine needs to know about the rendering surface goes
//! through [`Platform`]: element rectangles, computed styles, scroll
//! offsets, the viewport and the DOM ancestor chain. The engine itself
//! never touches globals, so any implementation (a browser binding, a
//! native toolkit, or the in-memory [`Scene`]) can drive it.

pub mod scene;

pub use scene::{NodeId, Scene, SceneElement, SceneError};

use crate::geometry::{ClientRect, Point, Size};

/// Geometry and style queries against the host rendering surface
pub trait Platform {
    /// Handle to an element in the host's tree
    type Node: Copy + Eq + std::fmt::Debug;

    /// Viewport-relative bounding rectangle (may carry subpixel values)
    fn bounding_client_rect(&self, node: Self::Node) -> ClientRect;

    /// Integer layout size, used when the bounding rectangle is empty
    fn offset_size(&self, node: Self::Node) -> Size;

    /// Nearest positioned ancestor as reported by the layout engine.
    /// `None` means the document itself.
    fn offset_parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Legacy proprietary current-style object
    fn legacy_style(&self, _node: Self::Node, _property: &str) -> Option<String> {
        None
    }

    /// Standard computed-style lookup
    fn computed_style(&self, node: Self::Node, property: &str) -> Option<String>;

    /// Inline `style` attribute
    fn inline_style(&self, _node: Self::Node, _property: &str) -> Option<String> {
        None
    }

    /// Border widths as `client_left` (x) and `client_top` (y)
    fn client_offset(&self, node: Self::Node) -> Point;

    /// Element scroll position as `scroll_left` (x) and `scroll_top` (y)
    fn scroll_offset(&self, node: Self::Node) -> Point;

    /// Window page offset (`page_x_offset`, `page_y_offset`)
    fn page_offset(&self) -> Point;

    /// Scroll position of the root element, consulted when the page offset is zero
    fn root_scroll(&self) -> Point {
        Point::zero()
    }

    /// Inner size of the viewport
    fn viewport_size(&self) -> Size;

    /// Whether `node` is `ancestor` or lies inside it
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool;
}
