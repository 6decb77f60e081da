//! Integration tests for placement behavior through the public API

use pretty_assertions::assert_eq;

use popover_placement::{
    compute_placement, position, Alignment, Axis, NodeId, PlacementConfig, PlacementError,
    PlacementSpec, Rect, Scene, SceneElement,
};

/// Scene with one anchor and one panel, no positioned ancestors
fn simple_scene(anchor: Rect, panel_width: f64, panel_height: f64) -> (Scene, NodeId, NodeId) {
    let mut scene = Scene::new().with_viewport(800.0, 600.0);
    let anchor = scene
        .insert(SceneElement::new("anchor").rect(anchor.top, anchor.left, anchor.width, anchor.height))
        .unwrap();
    let panel = scene
        .insert(SceneElement::new("panel").rect(0.0, 0.0, panel_width, panel_height))
        .unwrap();
    (scene, anchor, panel)
}

fn spec_string(axis: Axis, alignment: Alignment) -> String {
    format!("{}-{}", axis, alignment)
}

#[test]
fn test_repeated_calls_are_identical() {
    let (scene, anchor, panel) = simple_scene(Rect::new(300.0, 200.0, 40.0, 20.0), 80.0, 50.0);
    let config = PlacementConfig::default();
    let first = compute_placement(&scene, anchor, panel, "auto left-right", &config).unwrap();
    for _ in 0..5 {
        let again = compute_placement(&scene, anchor, panel, "auto left-right", &config).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_alignment_example() {
    let (scene, anchor, panel) = simple_scene(Rect::new(300.0, 100.0, 40.0, 20.0), 80.0, 50.0);
    let config = PlacementConfig::default();
    let left_of = |spec: &str| {
        compute_placement(&scene, anchor, panel, spec, &config)
            .unwrap()
            .result
            .left
    };
    assert_eq!(left_of("bottom-center"), 80.0);
    assert_eq!(left_of("bottom-left"), 100.0);
    assert_eq!(left_of("bottom-right"), 60.0);
}

#[test]
fn test_axis_and_alignment_are_independent() {
    let (scene, anchor, panel) = simple_scene(Rect::new(300.0, 100.0, 40.0, 20.0), 80.0, 50.0);
    let config = PlacementConfig::default();
    let place = |axis, alignment| {
        compute_placement(&scene, anchor, panel, &spec_string(axis, alignment), &config)
            .unwrap()
            .result
    };

    for axis in Axis::ALL {
        let reference = place(axis, Alignment::Center);
        for alignment in Alignment::ALL {
            let result = place(axis, alignment);
            assert_eq!(result.top, reference.top, "{}-{}", axis, alignment);
            assert_eq!(result.arrow_top, reference.arrow_top, "{}-{}", axis, alignment);
        }
    }

    for alignment in Alignment::ALL {
        let reference = place(Axis::Center, alignment);
        for axis in [Axis::Top, Axis::Bottom] {
            let result = place(axis, alignment);
            assert_eq!(result.left, reference.left, "{}-{}", axis, alignment);
            assert_eq!(result.arrow_left, reference.arrow_left, "{}-{}", axis, alignment);
        }
    }
}

#[test]
fn test_auto_top_flips_when_anchor_hugs_top() {
    let (scene, anchor, panel) = simple_scene(Rect::new(5.0, 100.0, 40.0, 20.0), 80.0, 50.0);
    let placement =
        compute_placement(&scene, anchor, panel, "auto top", &PlacementConfig::default()).unwrap();
    assert_eq!(placement.resolved.axis, Axis::Bottom);
    assert_eq!(placement.result.arrow_top, -11.0);
}

#[test]
fn test_auto_bottom_flips_when_anchor_hugs_bottom() {
    // anchor bottom = 600 - 10
    let (scene, anchor, panel) = simple_scene(Rect::new(570.0, 100.0, 40.0, 20.0), 80.0, 50.0);
    let placement =
        compute_placement(&scene, anchor, panel, "auto bottom", &PlacementConfig::default())
            .unwrap();
    assert_eq!(placement.resolved.axis, Axis::Top);
    assert_eq!(placement.result.top, 570.0 - 50.0 - 11.0);
}

#[test]
fn test_explicit_placement_passes_through() {
    // Panel larger than the viewport in every direction
    let (scene, anchor, panel) = simple_scene(Rect::new(5.0, 5.0, 40.0, 20.0), 2000.0, 2000.0);
    let config = PlacementConfig::default();
    for axis in Axis::ALL {
        for alignment in Alignment::ALL {
            let placement =
                compute_placement(&scene, anchor, panel, &spec_string(axis, alignment), &config)
                    .unwrap();
            assert_eq!(placement.resolved.axis, axis);
            assert_eq!(placement.resolved.alignment, alignment);
        }
    }
}

#[test]
fn test_auto_flip_uses_viewport_rect_not_page_rect() {
    // Scrolled far down: the page box is at 1005 but the anchor is 5px from
    // the top of the viewport, so `auto top` still has no room.
    let mut scene = Scene::new().with_page_scroll(0.0, 1000.0);
    let anchor = scene
        .insert(SceneElement::new("anchor").rect(5.0, 100.0, 40.0, 20.0))
        .unwrap();
    let panel = scene
        .insert(SceneElement::new("panel").rect(0.0, 0.0, 80.0, 50.0))
        .unwrap();
    let placement =
        compute_placement(&scene, anchor, panel, "auto top", &PlacementConfig::default()).unwrap();
    assert_eq!(placement.resolved.axis, Axis::Bottom);
    assert_eq!(placement.result.top, 1005.0 + 20.0 + 11.0);
}

#[test]
fn test_offset_parent_subtraction() {
    let mut scene = Scene::new();
    scene
        .insert(
            SceneElement::new("frame")
                .rect(50.0, 50.0, 600.0, 600.0)
                .position("absolute")
                .border(2.0, 2.0),
        )
        .unwrap();
    let anchor = scene
        .insert(
            SceneElement::new("anchor")
                .parent("frame")
                .rect(200.0, 150.0, 40.0, 20.0),
        )
        .unwrap();
    assert_eq!(position(&scene, anchor), Rect::new(148.0, 98.0, 40.0, 20.0));
}

#[test]
fn test_flip_alignment_is_opt_in() {
    let (scene, anchor, panel) = simple_scene(Rect::new(300.0, 700.0, 40.0, 20.0), 200.0, 50.0);
    let off = compute_placement(&scene, anchor, panel, "bottom-left", &PlacementConfig::default())
        .unwrap();
    assert_eq!(off.resolved.alignment, Alignment::Left);
    assert_eq!(off.result.left, 700.0);

    let config = PlacementConfig::new().with_flip_alignment(true);
    let on = compute_placement(&scene, anchor, panel, "bottom-left", &config).unwrap();
    assert_eq!(on.resolved.alignment, Alignment::Right);
    assert_eq!(on.result.left, 700.0 + 40.0 - 200.0);
}

#[test]
fn test_invalid_placement_is_an_error() {
    let (scene, anchor, panel) = simple_scene(Rect::new(300.0, 100.0, 40.0, 20.0), 80.0, 50.0);
    let err = compute_placement(&scene, anchor, panel, "bottom-middle", &PlacementConfig::default())
        .unwrap_err();
    let PlacementError::InvalidPlacement { span, .. } = &err;
    assert_eq!(span, &(7..13));
    assert!(err.format("placement").contains("unknown alignment"));
}

#[test]
fn test_parsed_and_string_forms_agree() {
    let spec: PlacementSpec = "auto right-left".parse().unwrap();
    assert!(spec.auto);
    assert_eq!(spec.axis, Axis::Right);
    assert_eq!(spec.alignment, Alignment::Left);
}
