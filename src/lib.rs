//! Popover placement - panel and arrow coordinates for floating popovers
//!
//! Given an anchor element, a panel element and a placement string such as
//! `"bottom-left"` or `"auto top"`, this library computes where the panel
//! and its arrow go. All environment queries go through the
//! [`Platform`] trait; [`Scene`] is an in-memory implementation.
//!
//! # Example
//!
//! ```rust
//! use popover_placement::{compute_placement, PlacementConfig, Scene, SceneElement};
//!
//! let mut scene = Scene::new();
//! let button = scene
//!     .insert(SceneElement::new("button").rect(100.0, 100.0, 40.0, 20.0))
//!     .unwrap();
//! let panel = scene
//!     .insert(SceneElement::new("panel").rect(0.0, 0.0, 80.0, 50.0))
//!     .unwrap();
//!
//! let placement =
//!     compute_placement(&scene, button, panel, "bottom", &PlacementConfig::default()).unwrap();
//! assert_eq!(placement.result.top, 131.0);
//! assert_eq!(placement.result.left, 80.0);
//! assert_eq!(placement.resolved.to_string(), "bottom-center");
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod platform;
pub mod session;

pub use config::{ConfigError, PlacementConfig};
pub use error::PlacementError;
pub use geometry::{find_offset_parent, position, read_box, OffsetFrame, Point, Rect, Size};
pub use placement::{
    compute_placement, resolve_placement, Alignment, Axis, Placement, PlacementResult,
    PlacementSpec, ResolvedPlacement,
};
pub use platform::{NodeId, Platform, Scene, SceneElement, SceneError};
pub use session::{DismissTriggers, EventHub, OutsideEvent, PanelCoords, PopoverSession};

use thiserror::Error;

/// Errors that can occur when placing from files
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid placement string
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// Configuration file could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Scene could not be loaded or lacks a requested element
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// No placement string given on the command line or in the scene
    #[error("no {0} given; pass it as an option or set it in the scene")]
    MissingSelection(&'static str),
}

/// What to place inside a scene: element ids and a placement string
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub anchor: Option<String>,
    pub target: Option<String>,
    pub placement: Option<String>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = Some(placement.into());
        self
    }
}

/// Compute a placement inside a scene.
///
/// Values missing from `request` fall back to the scene's own
/// `anchor`/`target`/`placement` keys.
pub fn place_in_scene(
    scene: &Scene,
    request: &Request,
    config: &PlacementConfig,
) -> Result<Placement, Error> {
    let selection = &scene.selection;
    let anchor = request
        .anchor
        .as_deref()
        .or(selection.anchor.as_deref())
        .ok_or(Error::MissingSelection("anchor"))?;
    let target = request
        .target
        .as_deref()
        .or(selection.target.as_deref())
        .ok_or(Error::MissingSelection("target"))?;
    let spec = request
        .placement
        .as_deref()
        .or(selection.placement.as_deref())
        .ok_or(Error::MissingSelection("placement"))?;

    let anchor = scene.require(anchor)?;
    let target = scene.require(target)?;
    Ok(compute_placement(scene, anchor, target, spec, config)?)
}
