pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod polygon;

pub use ellipse::EllipseCmd;
pub use line::LineCmd;
pub use polygon::PolygonCmd;

use crate::paint::Color;

/// Outline drawn along the edge of a shape, centred on the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
