//! Scene nodes: shape groups with a draw layer and a depth key.
//!
//! Nodes live in a generational [`Arena`]; the depth sorter addresses them by
//! [`DrawHandle`] through the [`DepthTarget`] impl on [`NodeStore`].

use isoffice_engine::coords::Vec2;
use isoffice_engine::paint::Color;
use isoffice_engine::scene::{DrawList, Stroke, ZIndex};
use isoffice_grid::{Arena, DepthTarget, DrawHandle, ScreenPoint};

use crate::geometry::{Fill, Outline, Shape};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Draw-list layer; see `DepthLayers`.
    pub layer: i32,
    /// Order within the layer. Higher paints later.
    pub depth: f64,
    /// Multiplied into every shape's alpha.
    pub alpha: f32,
    pub visible: bool,
    pub shapes: Vec<Shape>,
}

impl SceneNode {
    pub fn new(layer: i32, shapes: Vec<Shape>) -> Self {
        Self { layer, depth: 0.0, alpha: 1.0, visible: true, shapes }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }
}

#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: Arena<SceneNode>,
    dirty: bool,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether anything changed since the last [`record`](Self::record).
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn spawn(&mut self, node: SceneNode) -> DrawHandle {
        self.dirty = true;
        self.nodes.insert(node)
    }

    pub fn despawn(&mut self, handle: DrawHandle) -> Option<SceneNode> {
        let node = self.nodes.remove(handle);
        self.dirty |= node.is_some();
        node
    }

    #[inline]
    pub fn contains(&self, handle: DrawHandle) -> bool {
        self.nodes.contains(handle)
    }

    pub fn get(&self, handle: DrawHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }

    /// Mutable access marks the store dirty.
    pub fn get_mut(&mut self, handle: DrawHandle) -> Option<&mut SceneNode> {
        let node = self.nodes.get_mut(handle);
        self.dirty |= node.is_some();
        node
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.dirty = true;
    }

    /// Replaces the contents of `list` with every visible node's shapes.
    ///
    /// Each shape of a node shares the node's `ZIndex`, so the draw list keeps
    /// them in push order.
    pub fn record(&mut self, list: &mut DrawList) {
        list.clear();
        for (_, node) in self.nodes.iter() {
            if !node.visible || node.alpha <= 0.0 {
                continue;
            }
            let z = ZIndex::new(node.layer, node.depth as f32);
            for shape in &node.shapes {
                push_shape(list, z, shape, node.alpha);
            }
        }
        self.dirty = false;
    }
}

impl DepthTarget for NodeStore {
    fn set_depth(&mut self, handle: DrawHandle, depth: f64) {
        match self.nodes.get_mut(handle) {
            Some(node) => {
                if node.depth != depth {
                    node.depth = depth;
                    self.dirty = true;
                }
            }
            None => log::debug!("depth for despawned node {handle} dropped"),
        }
    }
}

fn push_shape(list: &mut DrawList, z: ZIndex, shape: &Shape, alpha: f32) {
    match shape {
        Shape::Polygon { points, fill, outline } => list.push_polygon(
            z,
            points.iter().copied().map(vec2).collect(),
            Some(color(*fill, alpha)),
            outline.map(|o| stroke(o, alpha)),
        ),
        Shape::Ellipse { center, width, height, fill, outline } => list.push_ellipse(
            z,
            vec2(*center),
            Vec2::new(*width as f32, *height as f32),
            fill.map(|f| color(f, alpha)),
            outline.map(|o| stroke(o, alpha)),
        ),
        Shape::Line { from, to, width, color: c } => {
            list.push_line(z, vec2(*from), vec2(*to), *width as f32, color(*c, alpha))
        }
    }
}

#[inline]
fn vec2(p: ScreenPoint) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

#[inline]
fn color(fill: Fill, alpha: f32) -> Color {
    Color::from_hex(fill.rgb, fill.alpha * alpha)
}

#[inline]
fn stroke(outline: Outline, alpha: f32) -> Stroke {
    Stroke::new(outline.width as f32, color(outline.color, alpha))
}
