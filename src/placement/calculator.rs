//! Panel and arrow coordinates for a resolved placement

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::resolver::{resolve_alignment, resolve_placement};
use super::spec::{Alignment, Axis, PlacementSpec};
use crate::config::PlacementConfig;
use crate::error::PlacementError;
use crate::geometry::{position, read_box, Rect, Size};
use crate::platform::Platform;

/// Panel corner plus arrow offset.
///
/// `top`/`left` are in the anchor's offset-parent frame (or page
/// coordinates with `append_to_body`); the arrow offsets are relative to
/// the panel's own box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementResult {
    pub top: f64,
    pub left: f64,
    pub arrow_left: f64,
    pub arrow_top: f64,
}

impl fmt::Display for PlacementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top={} left={} arrow_top={} arrow_left={}",
            self.top, self.left, self.arrow_top, self.arrow_left
        )
    }
}

/// Axis and alignment actually used, after any auto flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedPlacement {
    pub axis: Axis,
    pub alignment: Alignment,
}

impl ResolvedPlacement {
    /// Class tokens the panel carries for arrow and border styling,
    /// e.g. `["top", "top-left"]`
    pub fn css_classes(&self) -> [String; 2] {
        [self.axis.to_string(), self.to_string()]
    }
}

impl fmt::Display for ResolvedPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.axis, self.alignment)
    }
}

/// Result of a placement computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub result: PlacementResult,
    pub resolved: ResolvedPlacement,
}

/// Compute panel and arrow coordinates for `target` attached to `anchor`.
///
/// `spec` is parsed with [`PlacementSpec::parse`]; an unknown axis or
/// alignment is an error rather than an undefined position.
pub fn compute_placement<P: Platform>(
    platform: &P,
    anchor: P::Node,
    target: P::Node,
    spec: &str,
    config: &PlacementConfig,
) -> Result<Placement, PlacementError> {
    let spec = PlacementSpec::parse(spec)?;
    Ok(compute_placement_for(platform, anchor, target, &spec, config))
}

/// Same as [`compute_placement`] for an already parsed specification
pub fn compute_placement_for<P: Platform>(
    platform: &P,
    anchor: P::Node,
    target: P::Node,
    spec: &PlacementSpec,
    config: &PlacementConfig,
) -> Placement {
    let anchor_box = if config.append_to_body {
        read_box(platform, anchor)
    } else {
        position(platform, anchor)
    };
    let target_size = platform.offset_size(target);

    let anchor_client = platform.bounding_client_rect(anchor);
    let viewport = platform.viewport_size();
    let axis = resolve_placement(spec, &anchor_client, target_size, viewport);
    let alignment = if config.flip_alignment {
        resolve_alignment(spec.alignment, &anchor_client, target_size, viewport)
    } else {
        spec.alignment
    };

    let resolved = ResolvedPlacement { axis, alignment };
    let result = place(&anchor_box, target_size, resolved, config);
    debug!(
        requested = %spec,
        resolved = %resolved,
        %result,
        "placement computed"
    );

    Placement { result, resolved }
}

/// Pure coordinate math for a resolved placement.
///
/// The vertical pair depends only on the axis. The horizontal pair depends
/// on the alignment for `top`/`center`/`bottom`, and on the axis alone for
/// the side axes.
pub fn place(
    anchor: &Rect,
    target: Size,
    resolved: ResolvedPlacement,
    config: &PlacementConfig,
) -> PlacementResult {
    let (top, arrow_top) = vertical(anchor, target, resolved.axis, config);
    let (left, arrow_left) = match resolved.axis {
        Axis::Left | Axis::Right => side(anchor, target, resolved.axis, config),
        Axis::Top | Axis::Center | Axis::Bottom => {
            horizontal(anchor, target, resolved.alignment, config)
        }
    };

    PlacementResult {
        top,
        left,
        arrow_left,
        arrow_top,
    }
}

fn vertical(anchor: &Rect, target: Size, axis: Axis, config: &PlacementConfig) -> (f64, f64) {
    let clearance = config.arrow_clearance;
    match axis {
        Axis::Top => (anchor.top - target.height - clearance, target.height),
        Axis::Bottom => (anchor.top + anchor.height + clearance, -clearance),
        Axis::Center | Axis::Left | Axis::Right => (
            anchor.top + anchor.height / 2.0 - target.height / 2.0,
            target.height / 2.0,
        ),
    }
}

fn horizontal(
    anchor: &Rect,
    target: Size,
    alignment: Alignment,
    config: &PlacementConfig,
) -> (f64, f64) {
    match alignment {
        Alignment::Left => (
            anchor.left,
            anchor.width / 2.0 - config.arrow_width / 2.0,
        ),
        Alignment::Center => (
            anchor.left + anchor.width / 2.0 - target.width / 2.0,
            target.width / 2.0,
        ),
        Alignment::Right => (
            anchor.left + anchor.width - target.width,
            target.width - anchor.width / 2.0,
        ),
    }
}

fn side(anchor: &Rect, target: Size, axis: Axis, config: &PlacementConfig) -> (f64, f64) {
    let clearance = config.arrow_clearance;
    match axis {
        Axis::Left => (anchor.left - target.width - clearance, target.width),
        _ => (anchor.left + anchor.width + clearance, -clearance),
    }
}
