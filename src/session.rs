//! Panel state owned by one popover: coordinates, visibility and the
//! document listeners used for outside dismissal.
//!
//! Listeners are acquired on [`PopoverSession::show`] and released on
//! [`PopoverSession::hide`] or when the session is dropped, so none
//! outlive the panel.

use tracing::debug;

use crate::config::PlacementConfig;
use crate::error::PlacementError;
use crate::placement::{compute_placement, PlacementResult, ResolvedPlacement};
use crate::platform::Platform;

/// Off-screen coordinate used while the panel is hidden
pub const HIDDEN_OFFSET: f64 = -10000.0;

/// Document-level events a session can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEvent {
    MouseDown,
    MouseOver,
}

impl DocumentEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentEvent::MouseDown => "mousedown",
            DocumentEvent::MouseOver => "mouseover",
        }
    }
}

/// Subscription service for document-level events
pub trait EventHub {
    type Listener: Copy + Eq + std::fmt::Debug;

    fn listen(&mut self, event: DocumentEvent) -> Self::Listener;

    fn unlisten(&mut self, listener: Self::Listener);
}

impl<H: EventHub> EventHub for &mut H {
    type Listener = H::Listener;

    fn listen(&mut self, event: DocumentEvent) -> Self::Listener {
        (**self).listen(event)
    }

    fn unlisten(&mut self, listener: Self::Listener) {
        (**self).unlisten(listener)
    }
}

/// Which outside interactions close the panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissTriggers {
    /// Close on a mouse press outside panel and anchor
    pub click_outside: bool,
    /// Close when the pointer moves over anything outside panel and anchor
    pub mouse_outside: bool,
}

impl DismissTriggers {
    fn events(&self) -> impl Iterator<Item = DocumentEvent> {
        [
            (self.click_outside, DocumentEvent::MouseDown),
            (self.mouse_outside, DocumentEvent::MouseOver),
        ]
        .into_iter()
        .filter_map(|(enabled, event)| enabled.then_some(event))
    }
}

/// Coordinates the shell applies to the panel and its arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelCoords {
    pub top: f64,
    pub left: f64,
    pub arrow_left: f64,
    pub arrow_top: f64,
}

impl PanelCoords {
    /// Off-screen sentinel position
    pub fn hidden() -> Self {
        Self {
            top: HIDDEN_OFFSET,
            left: HIDDEN_OFFSET,
            arrow_left: HIDDEN_OFFSET,
            arrow_top: HIDDEN_OFFSET,
        }
    }

    pub fn is_hidden(&self) -> bool {
        *self == Self::hidden()
    }
}

impl Default for PanelCoords {
    fn default() -> Self {
        Self::hidden()
    }
}

impl From<PlacementResult> for PanelCoords {
    fn from(result: PlacementResult) -> Self {
        Self {
            top: result.top,
            left: result.left,
            arrow_left: result.arrow_left,
            arrow_top: result.arrow_top,
        }
    }
}

/// Outcome of an outside interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutsideEvent {
    /// Inside the panel or anchor, or the panel was not showing
    Ignored,
    /// The panel was hidden; the shell should emit its close notification
    Dismissed,
}

/// State of one popover panel
pub struct PopoverSession<H: EventHub> {
    hub: H,
    config: PlacementConfig,
    triggers: DismissTriggers,
    coords: PanelCoords,
    resolved: Option<ResolvedPlacement>,
    visible: bool,
    listeners: Vec<H::Listener>,
}

impl<H: EventHub> PopoverSession<H> {
    /// Create a hidden session that registers listeners on `hub`
    pub fn new(hub: H) -> Self {
        Self {
            hub,
            config: PlacementConfig::default(),
            triggers: DismissTriggers::default(),
            coords: PanelCoords::hidden(),
            resolved: None,
            visible: false,
            listeners: Vec::new(),
        }
    }

    /// Set the placement configuration
    pub fn with_config(mut self, config: PlacementConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the outside-dismissal triggers
    pub fn with_triggers(mut self, triggers: DismissTriggers) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn coords(&self) -> PanelCoords {
        self.coords
    }

    /// Placement used by the last successful [`show`](Self::show)
    pub fn resolved(&self) -> Option<ResolvedPlacement> {
        self.resolved
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of document listeners currently held
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Place the panel next to `anchor` and start listening for outside
    /// interactions. On error the session is left untouched.
    pub fn show<P: Platform>(
        &mut self,
        platform: &P,
        anchor: P::Node,
        target: P::Node,
        spec: &str,
    ) -> Result<PanelCoords, PlacementError> {
        let placement = compute_placement(platform, anchor, target, spec, &self.config)?;

        self.coords = placement.result.into();
        self.resolved = Some(placement.resolved);
        self.visible = true;
        self.subscribe();

        debug!(resolved = %placement.resolved, "popover shown");
        Ok(self.coords)
    }

    /// Move the panel off-screen and release all listeners. Idempotent.
    pub fn hide(&mut self) {
        self.coords = PanelCoords::hidden();
        self.visible = false;
        self.release();
    }

    /// React to a document event whose target is `event_target`.
    pub fn handle_outside_event<P: Platform>(
        &mut self,
        platform: &P,
        panel: P::Node,
        anchor: P::Node,
        event_target: P::Node,
    ) -> OutsideEvent {
        if !self.visible {
            return OutsideEvent::Ignored;
        }
        if platform.contains(panel, event_target) || platform.contains(anchor, event_target) {
            return OutsideEvent::Ignored;
        }

        debug!(?event_target, "outside interaction, dismissing popover");
        self.hide();
        OutsideEvent::Dismissed
    }

    fn subscribe(&mut self) {
        if !self.listeners.is_empty() {
            return;
        }
        for event in self.triggers.events() {
            let listener = self.hub.listen(event);
            debug!(event = event.as_str(), ?listener, "listener acquired");
            self.listeners.push(listener);
        }
    }

    fn release(&mut self) {
        for listener in self.listeners.drain(..) {
            debug!(?listener, "listener released");
            self.hub.unlisten(listener);
        }
    }
}

impl<H: EventHub> Drop for PopoverSession<H> {
    fn drop(&mut self) {
        self.release();
    }
}
