use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::polygon::PolygonCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` to turn it into triangles
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Ellipse(EllipseCmd),
    Line(LineCmd),
}
