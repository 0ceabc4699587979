use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Filled polygon payload.
///
/// Points are expected to describe a convex polygon in either winding; the
/// renderer fan-triangulates from the first point. Every face the office
/// draws (tiles, walls, box faces, backrests) is convex.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { points, fill, stroke }
    }
}

impl DrawList {
    /// Records a polygon with optional fill and outline.
    #[inline]
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        points: Vec<Vec2>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(points, fill, stroke)));
    }

    /// Records a solid convex polygon.
    #[inline]
    pub fn push_solid_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, color: Color) {
        self.push_polygon(z, points, Some(color), None);
    }
}
