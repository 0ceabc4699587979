//! CPU tessellation of draw commands into a single indexed triangle mesh.
//!
//! Kept free of wgpu so it can be tested without a device.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::{EllipseCmd, LineCmd, PolygonCmd};
use crate::scene::{DrawCmd, DrawList};

/// Segment count bounds for ellipse approximation.
const ELLIPSE_MIN_SEGMENTS: usize = 12;
const ELLIPSE_MAX_SEGMENTS: usize = 64;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2],   // world px
    pub color: [f32; 4], // linear premultiplied
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Triangle list in paint order. Buffers are reused across frames.
#[derive(Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn vertex(&mut self, p: Vec2, color: [f32; 4]) -> u32 {
        let i = self.vertices.len() as u32;
        self.vertices.push(MeshVertex { pos: [p.x, p.y], color });
        i
    }

    /// Fan-triangulates a convex polygon from its first point.
    pub fn fill_convex(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 || !visible(color) {
            return;
        }
        let c = color.to_array();
        let base = self.vertices.len() as u32;
        for &p in points {
            self.vertex(p, c);
        }
        for i in 1..(points.len() as u32 - 1) {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    /// Emits a quad of `width` centred on the segment. Zero-length segments are skipped.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        if width <= 0.0 || !visible(color) {
            return;
        }
        let d = to - from;
        let len = d.length();
        if len <= f32::EPSILON {
            return;
        }
        let n = Vec2::new(-d.y / len, d.x / len) * (width * 0.5);
        self.fill_convex(&[from + n, to + n, to - n, from - n], color);
    }

    /// Outlines a closed polygon with one quad per edge.
    pub fn outline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.line(a, b, width, color);
        }
    }

    pub fn fill_ellipse(&mut self, center: Vec2, size: Vec2, color: Color) {
        let rim = ellipse_points(center, size * 0.5);
        self.fill_convex(&rim, color);
    }

    /// Ring between the inner and outer edge of a stroke centred on the ellipse.
    pub fn stroke_ellipse(&mut self, center: Vec2, size: Vec2, width: f32, color: Color) {
        if width <= 0.0 || !visible(color) {
            return;
        }
        let half = width * 0.5;
        let radii = size * 0.5;
        let outer = ellipse_points(center, Vec2::new(radii.x + half, radii.y + half));
        let inner = ellipse_points(
            center,
            Vec2::new((radii.x - half).max(0.0), (radii.y - half).max(0.0)),
        );
        if outer.is_empty() {
            return;
        }

        let c = color.to_array();
        let base = self.vertices.len() as u32;
        for (&o, &i) in outer.iter().zip(inner.iter()) {
            self.vertex(o, c);
            self.vertex(i, c);
        }
        let n = outer.len().min(inner.len()) as u32;
        for k in 0..n {
            let o0 = base + 2 * k;
            let i0 = o0 + 1;
            let o1 = base + 2 * ((k + 1) % n);
            let i1 = o1 + 1;
            self.indices.extend_from_slice(&[o0, o1, i0, i0, o1, i1]);
        }
    }

    fn polygon(&mut self, cmd: &PolygonCmd) {
        if let Some(fill) = cmd.fill {
            self.fill_convex(&cmd.points, fill);
        }
        if let Some(stroke) = &cmd.stroke {
            self.outline(&cmd.points, stroke.width, stroke.color);
        }
    }

    fn ellipse(&mut self, cmd: &EllipseCmd) {
        if let Some(fill) = cmd.fill {
            self.fill_ellipse(cmd.center, cmd.size, fill);
        }
        if let Some(stroke) = &cmd.stroke {
            self.stroke_ellipse(cmd.center, cmd.size, stroke.width, stroke.color);
        }
    }

    fn segment(&mut self, cmd: &LineCmd) {
        self.line(cmd.from, cmd.to, cmd.width, cmd.color);
    }
}

/// Rebuilds `mesh` from `draw_list` in paint order.
///
/// Later commands land later in the index buffer, so a single draw call with
/// standard alpha blending reproduces the painter's algorithm.
pub fn tessellate(draw_list: &mut DrawList, mesh: &mut Mesh) {
    mesh.clear();
    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Polygon(cmd) => mesh.polygon(cmd),
            DrawCmd::Ellipse(cmd) => mesh.ellipse(cmd),
            DrawCmd::Line(cmd) => mesh.segment(cmd),
        }
    }
}

#[inline]
fn visible(color: Color) -> bool {
    color.a > 0.0 && color.is_finite()
}

fn ellipse_segments(radii: Vec2) -> usize {
    let r = radii.x.max(radii.y);
    ((r * 1.5).ceil() as usize).clamp(ELLIPSE_MIN_SEGMENTS, ELLIPSE_MAX_SEGMENTS)
}

fn ellipse_points(center: Vec2, radii: Vec2) -> Vec<Vec2> {
    if !(radii.x >= 0.0 && radii.y >= 0.0) || (radii.x == 0.0 && radii.y == 0.0) {
        return Vec::new();
    }
    let n = ellipse_segments(radii);
    (0..n)
        .map(|k| {
            let t = k as f32 / n as f32 * std::f32::consts::TAU;
            Vec2::new(center.x + radii.x * t.cos(), center.y + radii.y * t.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Stroke, ZIndex};

    fn red() -> Color {
        Color::from_premul(1.0, 0.0, 0.0, 1.0)
    }

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn quad_fans_into_two_triangles() {
        let mut mesh = Mesh::new();
        mesh.fill_convex(&square(), red());
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn degenerate_polygon_emits_nothing() {
        let mut mesh = Mesh::new();
        mesh.fill_convex(&square()[..2], red());
        assert!(mesh.is_empty());
    }

    #[test]
    fn transparent_fill_is_skipped() {
        let mut mesh = Mesh::new();
        mesh.fill_convex(&square(), Color::transparent());
        assert!(mesh.is_empty());
    }

    #[test]
    fn outline_emits_a_quad_per_edge() {
        let mut mesh = Mesh::new();
        mesh.outline(&square(), 2.0, red());
        assert_eq!(mesh.triangle_count(), 8);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn horizontal_line_is_offset_by_half_width() {
        let mut mesh = Mesh::new();
        mesh.line(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), 2.0, red());
        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.pos[1]).collect();
        assert_eq!(ys, vec![6.0, 6.0, 4.0, 4.0]);
    }

    #[test]
    fn zero_length_line_is_skipped() {
        let mut mesh = Mesh::new();
        mesh.line(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), 2.0, red());
        assert!(mesh.is_empty());
    }

    // ── ellipses ──────────────────────────────────────────────────────────

    #[test]
    fn ellipse_rim_stays_on_the_ellipse() {
        let mut mesh = Mesh::new();
        let c = Vec2::new(50.0, 20.0);
        mesh.fill_ellipse(c, Vec2::new(20.0, 8.0), red());
        assert!(mesh.triangle_count() >= ELLIPSE_MIN_SEGMENTS - 2);
        for v in &mesh.vertices {
            let dx = (v.pos[0] - c.x) / 10.0;
            let dy = (v.pos[1] - c.y) / 4.0;
            assert!((dx * dx + dy * dy - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn ellipse_stroke_is_a_closed_ring() {
        let mut mesh = Mesh::new();
        mesh.stroke_ellipse(Vec2::zero(), Vec2::new(20.0, 10.0), 1.0, red());
        let n = mesh.vertices.len() / 2;
        assert_eq!(mesh.triangle_count(), 2 * n);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn empty_ellipse_emits_nothing() {
        let mut mesh = Mesh::new();
        mesh.fill_ellipse(Vec2::zero(), Vec2::zero(), red());
        assert!(mesh.is_empty());
    }

    // ── draw list ─────────────────────────────────────────────────────────

    #[test]
    fn tessellation_follows_paint_order() {
        let mut list = DrawList::new();
        let front = Color::from_premul(0.0, 1.0, 0.0, 1.0);
        list.push_solid_polygon(ZIndex::new(0, 2.0), square(), front);
        list.push_solid_polygon(ZIndex::new(0, 1.0), square(), red());

        let mut mesh = Mesh::new();
        tessellate(&mut list, &mut mesh);

        assert_eq!(mesh.vertices[0].color, red().to_array());
        assert_eq!(mesh.vertices[4].color, front.to_array());
    }

    #[test]
    fn tessellate_reuses_and_resets_the_mesh() {
        let mut list = DrawList::new();
        list.push_polygon(
            ZIndex::layer(0),
            square(),
            Some(red()),
            Some(Stroke::new(1.0, red())),
        );

        let mut mesh = Mesh::new();
        tessellate(&mut list, &mut mesh);
        let first = mesh.indices.len();
        tessellate(&mut list, &mut mesh);
        assert_eq!(mesh.indices.len(), first);
    }
}
