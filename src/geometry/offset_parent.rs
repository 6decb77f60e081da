//! Offset-parent resolution and frame-relative positions

use tracing::trace;

use super::reader::read_box;
use super::style::is_static_positioned;
use super::{Point, Rect};
use crate::platform::Platform;

/// Coordinate frame that absolutely positioned content is placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetFrame<N> {
    /// No positioned ancestor; page coordinates apply
    Document,
    /// The nearest non-statically positioned ancestor
    Element(N),
}

impl<N> OffsetFrame<N> {
    pub fn is_document(&self) -> bool {
        matches!(self, OffsetFrame::Document)
    }
}

/// Walk up from the layout engine's offset parent, skipping statically
/// positioned ancestors, until a frame-establishing ancestor or the
/// document is reached.
pub fn find_offset_parent<P: Platform>(platform: &P, node: P::Node) -> OffsetFrame<P::Node> {
    let mut current = platform.offset_parent(node);
    while let Some(ancestor) = current {
        if !is_static_positioned(platform, ancestor) {
            trace!(?node, ?ancestor, "offset parent resolved");
            return OffsetFrame::Element(ancestor);
        }
        current = platform.offset_parent(ancestor);
    }
    trace!(?node, "offset parent is the document");
    OffsetFrame::Document
}

/// Page-coordinate origin of a frame's content box: the frame's box
/// shifted by its border and by how far its content is scrolled.
pub fn frame_origin<P: Platform>(platform: &P, frame: OffsetFrame<P::Node>) -> Point {
    match frame {
        OffsetFrame::Document => Point::zero(),
        OffsetFrame::Element(parent) => {
            let parent_box = read_box(platform, parent);
            let border = platform.client_offset(parent);
            let scroll = platform.scroll_offset(parent);
            Point::new(
                parent_box.left + border.x - scroll.x,
                parent_box.top + border.y - scroll.y,
            )
        }
    }
}

/// An element's box relative to its offset frame
pub fn position<P: Platform>(platform: &P, node: P::Node) -> Rect {
    let page_box = read_box(platform, node);
    let frame = find_offset_parent(platform, node);
    let origin = frame_origin(platform, frame);

    page_box.translate(Point::new(-origin.x, -origin.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Scene, SceneElement};

    #[test]
    fn test_no_ancestors_resolves_to_document() {
        let mut scene = Scene::new();
        let node = scene.insert(SceneElement::new("a")).unwrap();
        assert_eq!(find_offset_parent(&scene, node), OffsetFrame::Document);
    }

    #[test]
    fn test_static_ancestors_are_skipped() {
        let mut scene = Scene::new();
        let outer = scene
            .insert(SceneElement::new("outer").position("relative"))
            .unwrap();
        scene
            .insert(SceneElement::new("middle").parent("outer").position("static"))
            .unwrap();
        scene
            .insert(SceneElement::new("inner").parent("middle"))
            .unwrap();
        let leaf = scene
            .insert(SceneElement::new("leaf").parent("inner"))
            .unwrap();
        assert_eq!(find_offset_parent(&scene, leaf), OffsetFrame::Element(outer));
    }

    #[test]
    fn test_all_static_chain_resolves_to_document() {
        let mut scene = Scene::new();
        scene.insert(SceneElement::new("body")).unwrap();
        let leaf = scene
            .insert(SceneElement::new("leaf").parent("body"))
            .unwrap();
        assert!(find_offset_parent(&scene, leaf).is_document());
    }

    #[test]
    fn test_position_relative_to_document_is_page_box() {
        let mut scene = Scene::new().with_page_scroll(0.0, 30.0);
        let node = scene
            .insert(SceneElement::new("a").rect(10.0, 20.0, 30.0, 40.0))
            .unwrap();
        assert_eq!(position(&scene, node), Rect::new(40.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_position_subtracts_frame_border_and_scroll() {
        let mut scene = Scene::new();
        scene
            .insert(
                SceneElement::new("frame")
                    .rect(50.0, 50.0, 500.0, 500.0)
                    .position("relative")
                    .border(2.0, 2.0)
                    .scroll(0.0, 25.0),
            )
            .unwrap();
        let node = scene
            .insert(
                SceneElement::new("a")
                    .parent("frame")
                    .rect(200.0, 150.0, 10.0, 10.0),
            )
            .unwrap();
        // top: 200 - (50 + 2 - 25), left: 150 - (50 + 2)
        assert_eq!(position(&scene, node), Rect::new(173.0, 98.0, 10.0, 10.0));
    }
}
