use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Axis-aligned ellipse payload. `size` is the full width/height.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl EllipseCmd {
    #[inline]
    pub fn new(center: Vec2, size: Vec2, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { center, size, fill, stroke }
    }
}

impl DrawList {
    /// Records an ellipse draw command.
    #[inline]
    pub fn push_ellipse(
        &mut self,
        z: ZIndex,
        center: Vec2,
        size: Vec2,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd::new(center, size, fill, stroke)));
    }
}
