//! Reading element boxes in page coordinates

use super::{Point, Rect};
use crate::platform::Platform;

/// Current page scroll, per axis preferring the window page offset and
/// falling back to the root element's scroll position when it is zero
pub fn page_scroll<P: Platform>(platform: &P) -> Point {
    let page = platform.page_offset();
    let root = platform.root_scroll();
    Point::new(
        if page.x != 0.0 { page.x } else { root.x },
        if page.y != 0.0 { page.y } else { root.y },
    )
}

/// Read an element's rendered box in page coordinates.
///
/// Width and height fall back to the element's integer layout size when
/// the bounding rectangle reports zero, which happens for elements that
/// are not laid out yet.
pub fn read_box<P: Platform>(platform: &P, node: P::Node) -> Rect {
    let client = platform.bounding_client_rect(node);
    let scroll = page_scroll(platform);
    let (width, height) = measured_size(platform, node, client);

    Rect::new(client.top + scroll.y, client.left + scroll.x, width, height)
}

/// Bounding-rect size with the offset-size fallback applied
fn measured_size<P: Platform>(platform: &P, node: P::Node, client: Rect) -> (f64, f64) {
    if client.width != 0.0 && client.height != 0.0 {
        return (client.width, client.height);
    }
    let offset = platform.offset_size(node);
    let width = if client.width != 0.0 {
        client.width
    } else {
        offset.width
    };
    let height = if client.height != 0.0 {
        client.height
    } else {
        offset.height
    };
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Scene, SceneElement};

    #[test]
    fn test_read_box_adds_page_scroll() {
        let mut scene = Scene::new().with_page_scroll(15.0, 120.0);
        let node = scene
            .insert(SceneElement::new("a").rect(10.0, 20.0, 30.0, 40.0))
            .unwrap();
        assert_eq!(read_box(&scene, node), Rect::new(130.0, 35.0, 30.0, 40.0));
    }

    #[test]
    fn test_root_scroll_used_when_page_offset_is_zero() {
        let mut scene = Scene::new()
            .with_page_scroll(0.0, 50.0)
            .with_root_scroll(7.0, 99.0);
        let node = scene
            .insert(SceneElement::new("a").rect(10.0, 20.0, 30.0, 40.0))
            .unwrap();
        let rect = read_box(&scene, node);
        assert_eq!(rect.left, 27.0);
        assert_eq!(rect.top, 60.0);
    }

    #[test]
    fn test_zero_size_falls_back_to_offset_size() {
        let mut scene = Scene::new();
        let node = scene
            .insert(
                SceneElement::new("hidden")
                    .rect(10.0, 20.0, 0.0, 0.0)
                    .offset_size(120.0, 48.0),
            )
            .unwrap();
        assert_eq!(read_box(&scene, node), Rect::new(10.0, 20.0, 120.0, 48.0));
    }

    #[test]
    fn test_fallback_is_per_dimension() {
        let mut scene = Scene::new();
        let node = scene
            .insert(
                SceneElement::new("flat")
                    .rect(0.0, 0.0, 33.5, 0.0)
                    .offset_size(34.0, 12.0),
            )
            .unwrap();
        let rect = read_box(&scene, node);
        assert_eq!(rect.width, 33.5);
        assert_eq!(rect.height, 12.0);
    }
}
