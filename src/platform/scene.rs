//! In-memory platform: a fixed set of elements with known geometry
//!
//! A scene is what tests and the CLI hand to the engine instead of a live
//! rendering surface. It can be built in code or loaded from TOML:
//!
//! ```toml
//! anchor = "button"
//! target = "panel"
//! placement = "auto top"
//!
//! [viewport]
//! width = 1024
//! height = 768
//!
//! [[element]]
//! id = "card"
//! rect = { top = 40, left = 40, width = 400, height = 300 }
//! computed_position = "relative"
//! border = { x = 2, y = 2 }
//!
//! [[element]]
//! id = "button"
//! parent = "card"
//! rect = { top = 100, left = 120, width = 40, height = 20 }
//! ```
//!
//! Elements are listed in document order; `parent` and `offset_parent`
//! may only name elements declared earlier. `offset_parent` defaults to
//! `parent`, and `offset_size` defaults to the rounded rectangle size.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::Platform;
use crate::geometry::{ClientRect, Point, Rect, Size};

/// Errors that can occur when building or loading a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("duplicate element id '{0}'")]
    DuplicateElement(String),
    #[error("element '{referenced_by}' refers to unknown element '{name}'")]
    UnknownReference { name: String, referenced_by: String },
    #[error("element '{0}' not found in scene")]
    MissingElement(String),
}

/// Handle to an element inside a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Description of one element: its geometry, styles and place in the tree
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SceneElement {
    pub id: String,
    /// Viewport-relative bounding rectangle
    pub rect: Rect,
    pub offset_size: Option<Size>,
    pub parent: Option<String>,
    pub offset_parent: Option<String>,
    pub legacy_position: Option<String>,
    pub computed_position: Option<String>,
    pub inline_position: Option<String>,
    /// Border widths (`client_left`, `client_top`)
    pub border: Point,
    /// Element scroll position (`scroll_left`, `scroll_top`)
    pub scroll: Point,
}

impl SceneElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the viewport-relative bounding rectangle
    pub fn rect(mut self, top: f64, left: f64, width: f64, height: f64) -> Self {
        self.rect = Rect::new(top, left, width, height);
        self
    }

    pub fn offset_size(mut self, width: f64, height: f64) -> Self {
        self.offset_size = Some(Size::new(width, height));
        self
    }

    pub fn parent(mut self, id: impl Into<String>) -> Self {
        self.parent = Some(id.into());
        self
    }

    pub fn offset_parent(mut self, id: impl Into<String>) -> Self {
        self.offset_parent = Some(id.into());
        self
    }

    /// Set the computed `position` style
    pub fn position(mut self, value: impl Into<String>) -> Self {
        self.computed_position = Some(value.into());
        self
    }

    pub fn legacy_position(mut self, value: impl Into<String>) -> Self {
        self.legacy_position = Some(value.into());
        self
    }

    pub fn inline_position(mut self, value: impl Into<String>) -> Self {
        self.inline_position = Some(value.into());
        self
    }

    pub fn border(mut self, left: f64, top: f64) -> Self {
        self.border = Point::new(left, top);
        self
    }

    pub fn scroll(mut self, left: f64, top: f64) -> Self {
        self.scroll = Point::new(left, top);
        self
    }
}

/// Default anchor, target and placement a scene file may carry
#[derive(Debug, Clone, Default)]
pub struct SceneSelection {
    pub anchor: Option<String>,
    pub target: Option<String>,
    pub placement: Option<String>,
}

#[derive(Debug, Clone)]
struct Node {
    element: SceneElement,
    parent: Option<NodeId>,
    offset_parent: Option<NodeId>,
}

/// A deterministic [`Platform`] backed by a list of elements
#[derive(Debug, Clone)]
pub struct Scene {
    viewport: Size,
    page_offset: Point,
    root_scroll: Point,
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    /// Selection loaded from a scene file, if any
    pub selection: SceneSelection,
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct TomlScene {
    anchor: Option<String>,
    target: Option<String>,
    placement: Option<String>,
    #[serde(default = "default_viewport")]
    viewport: Size,
    #[serde(default)]
    page_scroll: Point,
    #[serde(default)]
    root_scroll: Point,
    #[serde(default)]
    element: Vec<SceneElement>,
}

fn default_viewport() -> Size {
    Size::new(1024.0, 768.0)
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with a 1024x768 viewport and no scroll
    pub fn new() -> Self {
        Self {
            viewport: default_viewport(),
            page_offset: Point::zero(),
            root_scroll: Point::zero(),
            nodes: Vec::new(),
            index: HashMap::new(),
            selection: SceneSelection::default(),
        }
    }

    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let mut scene = Scene::new()
            .with_viewport(parsed.viewport.width, parsed.viewport.height)
            .with_page_scroll(parsed.page_scroll.x, parsed.page_scroll.y)
            .with_root_scroll(parsed.root_scroll.x, parsed.root_scroll.y);
        scene.selection = SceneSelection {
            anchor: parsed.anchor,
            target: parsed.target,
            placement: parsed.placement,
        };

        for element in parsed.element {
            scene.insert(element)?;
        }
        Ok(scene)
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn with_page_scroll(mut self, x: f64, y: f64) -> Self {
        self.page_offset = Point::new(x, y);
        self
    }

    pub fn with_root_scroll(mut self, x: f64, y: f64) -> Self {
        self.root_scroll = Point::new(x, y);
        self
    }

    /// Add an element after all previously inserted ones
    pub fn insert(&mut self, element: SceneElement) -> Result<NodeId, SceneError> {
        if self.index.contains_key(&element.id) {
            return Err(SceneError::DuplicateElement(element.id));
        }

        let parent = self.lookup_reference(element.parent.as_deref(), &element.id)?;
        let offset_parent = match element.offset_parent.as_deref() {
            Some(name) => self.lookup_reference(Some(name), &element.id)?,
            None => parent,
        };

        let id = NodeId(self.nodes.len());
        self.index.insert(element.id.clone(), id);
        self.nodes.push(Node {
            element,
            parent,
            offset_parent,
        });
        Ok(id)
    }

    fn lookup_reference(
        &self,
        name: Option<&str>,
        referenced_by: &str,
    ) -> Result<Option<NodeId>, SceneError> {
        match name {
            None => Ok(None),
            Some(name) => self
                .node(name)
                .map(Some)
                .ok_or_else(|| SceneError::UnknownReference {
                    name: name.to_string(),
                    referenced_by: referenced_by.to_string(),
                }),
        }
    }

    /// Find an element by id
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Find an element by id, failing if it is absent
    pub fn require(&self, id: &str) -> Result<NodeId, SceneError> {
        self.node(id)
            .ok_or_else(|| SceneError::MissingElement(id.to_string()))
    }

    /// Element id for a node handle
    pub fn name(&self, node: NodeId) -> &str {
        &self.get(node).element.id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn get(&self, node: NodeId) -> &Node {
        &self.nodes[node.0]
    }

    fn position_style(value: &Option<String>, property: &str) -> Option<String> {
        if property == "position" {
            value.clone()
        } else {
            None
        }
    }
}

impl Platform for Scene {
    type Node = NodeId;

    fn bounding_client_rect(&self, node: NodeId) -> ClientRect {
        self.get(node).element.rect
    }

    fn offset_size(&self, node: NodeId) -> Size {
        let element = &self.get(node).element;
        element.offset_size.unwrap_or_else(|| {
            Size::new(element.rect.width.round(), element.rect.height.round())
        })
    }

    fn offset_parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).offset_parent
    }

    fn legacy_style(&self, node: NodeId, property: &str) -> Option<String> {
        Self::position_style(&self.get(node).element.legacy_position, property)
    }

    fn computed_style(&self, node: NodeId, property: &str) -> Option<String> {
        Self::position_style(&self.get(node).element.computed_position, property)
    }

    fn inline_style(&self, node: NodeId, property: &str) -> Option<String> {
        Self::position_style(&self.get(node).element.inline_position, property)
    }

    fn client_offset(&self, node: NodeId) -> Point {
        self.get(node).element.border
    }

    fn scroll_offset(&self, node: NodeId) -> Point {
        self.get(node).element.scroll
    }

    fn page_offset(&self) -> Point {
        self.page_offset
    }

    fn root_scroll(&self) -> Point {
        self.root_scroll
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).parent;
        }
        false
    }
}
