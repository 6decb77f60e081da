//! Overflow-driven placement flipping

use tracing::debug;

use super::spec::{Alignment, Axis, PlacementSpec};
use crate::geometry::{ClientRect, Size};

/// Pick the axis to render on.
///
/// Explicit placements are returned unchanged. Auto placements run one
/// overflow check, chosen by the desired axis, and flip to the opposite
/// side only when the panel would cross the viewport edge; touching the
/// edge keeps the desired axis.
pub fn resolve_placement(
    spec: &PlacementSpec,
    anchor: &ClientRect,
    target: Size,
    viewport: Size,
) -> Axis {
    if !spec.auto {
        return spec.axis;
    }

    let overflows = match spec.axis {
        Axis::Top => anchor.top - target.height < 0.0,
        Axis::Bottom => anchor.bottom() + target.height > viewport.height,
        Axis::Left => anchor.left - target.width < 0.0,
        Axis::Right => anchor.right() + target.width > viewport.width,
        Axis::Center => false,
    };

    if overflows {
        let flipped = spec.axis.opposite();
        debug!(desired = %spec.axis, resolved = %flipped, "auto placement flipped");
        flipped
    } else {
        spec.axis
    }
}

/// Flip `left`/`right` alignment when the panel would overflow horizontally.
///
/// A `left`-aligned panel starts at the anchor's left edge and grows to the
/// right; it flips when it would pass the viewport's right edge. A
/// `right`-aligned panel ends at the anchor's right edge and flips when it
/// would pass the viewport's left edge.
pub fn resolve_alignment(
    alignment: Alignment,
    anchor: &ClientRect,
    target: Size,
    viewport: Size,
) -> Alignment {
    let overflows = match alignment {
        Alignment::Left => anchor.left + target.width > viewport.width,
        Alignment::Right => anchor.right() - target.width < 0.0,
        Alignment::Center => false,
    };

    if overflows {
        let flipped = alignment.opposite();
        debug!(desired = %alignment, resolved = %flipped, "alignment flipped");
        flipped
    } else {
        alignment
    }
}
