//! Procedural office geometry.
//!
//! Every producer is a pure function from grid placement (plus palette) to a
//! list of [`Shape`]s in world pixels, painted in list order. Nothing here
//! touches the GPU; `node` turns shapes into draw commands.

use isoffice_grid::{diamond_path, Facing, IsoProjection, ScreenPoint};

use crate::config::{ChairPlacement, Footprint, Palette};
use crate::palette::{darken, lighten};

// ── shapes ────────────────────────────────────────────────────────────────

/// `0xRRGGBB` colour plus straight alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fill {
    pub rgb: u32,
    pub alpha: f32,
}

impl Fill {
    #[inline]
    pub const fn new(rgb: u32, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    #[inline]
    pub const fn solid(rgb: u32) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    #[inline]
    pub fn faded(self, factor: f32) -> Self {
        Self { rgb: self.rgb, alpha: self.alpha * factor }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Outline {
    pub width: f64,
    pub color: Fill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Convex polygon.
    Polygon {
        points: Vec<ScreenPoint>,
        fill: Fill,
        outline: Option<Outline>,
    },
    /// Axis-aligned ellipse; `width`/`height` are full extents.
    Ellipse {
        center: ScreenPoint,
        width: f64,
        height: f64,
        fill: Option<Fill>,
        outline: Option<Outline>,
    },
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        width: f64,
        color: Fill,
    },
}

impl Shape {
    pub fn polygon(points: impl Into<Vec<ScreenPoint>>, fill: Fill) -> Self {
        Shape::Polygon { points: points.into(), fill, outline: None }
    }

    /// Rectangle from its top-left corner.
    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: Fill) -> Self {
        Self::polygon(
            [
                pt(x, y),
                pt(x + width, y),
                pt(x + width, y + height),
                pt(x, y + height),
            ],
            fill,
        )
    }

    pub fn ellipse(center: ScreenPoint, width: f64, height: f64, fill: Fill) -> Self {
        Shape::Ellipse { center, width, height, fill: Some(fill), outline: None }
    }

    pub fn ellipse_outline(center: ScreenPoint, width: f64, height: f64, outline: Outline) -> Self {
        Shape::Ellipse { center, width, height, fill: None, outline: Some(outline) }
    }

    pub fn line(from: ScreenPoint, to: ScreenPoint, width: f64, color: Fill) -> Self {
        Shape::Line { from, to, width, color }
    }

    /// Multiplies every alpha in the shape by `factor`.
    pub fn faded(self, factor: f32) -> Self {
        let fade_outline = |o: Option<Outline>| {
            o.map(|o| Outline { width: o.width, color: o.color.faded(factor) })
        };
        match self {
            Shape::Polygon { points, fill, outline } => Shape::Polygon {
                points,
                fill: fill.faded(factor),
                outline: fade_outline(outline),
            },
            Shape::Ellipse { center, width, height, fill, outline } => Shape::Ellipse {
                center,
                width,
                height,
                fill: fill.map(|f| f.faded(factor)),
                outline: fade_outline(outline),
            },
            Shape::Line { from, to, width, color } => {
                Shape::Line { from, to, width, color: color.faded(factor) }
            }
        }
    }
}

#[inline]
fn pt(x: f64, y: f64) -> ScreenPoint {
    ScreenPoint::new(x, y)
}

const BLACK: u32 = 0x000000;
const WHITE: u32 = 0xFFFFFF;

// ── floor ─────────────────────────────────────────────────────────────────

/// A floor diamond centred on `(gx, gy)`: fill, faint outline, and a lighter
/// top-right edge.
pub fn tile(proj: &IsoProjection, gx: f64, gy: f64, rgb: u32) -> Vec<Shape> {
    let c = proj.grid_to_screen(gx, gy);
    let (w, h) = (2.0 * proj.half_width(), 2.0 * proj.half_height());

    vec![
        Shape::Polygon {
            points: diamond_path(c.x, c.y, w, h).to_vec(),
            fill: Fill::solid(rgb),
            outline: Some(Outline { width: 1.0, color: Fill::new(BLACK, 0.1) }),
        },
        Shape::line(
            pt(c.x, c.y - h / 2.0 + 1.0),
            pt(c.x + w / 2.0 - 1.0, c.y),
            1.0,
            Fill::new(lighten(rgb, 15.0), 0.5),
        ),
    ]
}

/// Checkerboard floor: odd `gx + gy` takes the dark shade.
pub fn floor_tile(proj: &IsoProjection, gx: u32, gy: u32, palette: &Palette) -> Vec<Shape> {
    let rgb = if (gx + gy) % 2 == 1 { palette.floor_dark } else { palette.floor_light };
    tile(proj, gx as f64, gy as f64, rgb)
}

pub const CARPET_ALPHA: f32 = 0.8;

/// Carpet tile; cells on the carpet's edge use the border shade.
pub fn carpet_tile(
    proj: &IsoProjection,
    gx: u32,
    gy: u32,
    carpet: &Footprint,
    palette: &Palette,
) -> Vec<Shape> {
    let rgb = if carpet.is_border(gx, gy) { palette.carpet_border } else { palette.carpet_main };
    tile(proj, gx as f64, gy as f64, rgb)
        .into_iter()
        .map(|s| s.faded(CARPET_ALPHA))
        .collect()
}

// ── walls ─────────────────────────────────────────────────────────────────

const TRIM_HEIGHT: f64 = 4.0;
const MOULDING_HEIGHT: f64 = 5.0;

fn wall_segment(
    a: ScreenPoint,
    b: ScreenPoint,
    wall_height: f64,
    face: u32,
    palette: &Palette,
    panel_line: bool,
) -> Vec<Shape> {
    let top = |p: ScreenPoint, dy: f64| pt(p.x, p.y - wall_height + dy);

    let mut shapes = vec![
        Shape::polygon([top(a, 0.0), top(b, 0.0), b, a], Fill::solid(face)),
        Shape::polygon(
            [top(a, 0.0), top(b, 0.0), top(b, TRIM_HEIGHT), top(a, TRIM_HEIGHT)],
            Fill::new(palette.wall_trim, 0.8),
        ),
        Shape::polygon(
            [a.offset(0.0, -MOULDING_HEIGHT), b.offset(0.0, -MOULDING_HEIGHT), b, a],
            Fill::new(palette.wall_trim, 0.6),
        ),
    ];

    if panel_line {
        let mid = pt((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        shapes.push(Shape::line(
            top(mid, TRIM_HEIGHT),
            mid.offset(0.0, -MOULDING_HEIGHT),
            1.0,
            Fill::new(palette.wall_side, 0.3),
        ));
    }

    shapes
}

/// Segment `i` of the back wall, standing on the far edge of row `gy = 0`.
/// Even segments carry a panel seam.
pub fn back_wall_segment(
    proj: &IsoProjection,
    i: u32,
    wall_height: f64,
    palette: &Palette,
) -> Vec<Shape> {
    let hh = proj.half_height();
    let a = proj.grid_to_screen(i as f64, 0.0).offset(0.0, -hh);
    let b = proj.grid_to_screen(i as f64 + 1.0, 0.0).offset(0.0, -hh);
    wall_segment(a, b, wall_height, palette.wall_back, palette, i % 2 == 0)
}

/// Segment `j` of the side wall along column `gx = 0`, one shade darker than
/// the back wall.
pub fn side_wall_segment(
    proj: &IsoProjection,
    j: u32,
    wall_height: f64,
    palette: &Palette,
) -> Vec<Shape> {
    let hh = proj.half_height();
    let a = proj.grid_to_screen(0.0, j as f64).offset(0.0, -hh);
    let b = proj.grid_to_screen(0.0, j as f64 + 1.0).offset(0.0, -hh);
    wall_segment(a, b, wall_height, palette.wall_side, palette, false)
}

// ── windows ───────────────────────────────────────────────────────────────

const WINDOW_WIDTH_RATIO: f64 = 0.6;
const WINDOW_HEIGHT: f64 = 30.0;
const WINDOW_BOTTOM: f64 = 25.0;
const GLASS_INSET: f64 = 2.0;

/// Window centre for the wall cell at `(gx, gy)`, plus its width.
fn window_frame_center(proj: &IsoProjection, gx: f64, gy: f64) -> (ScreenPoint, f64) {
    let pos = proj.grid_to_screen(gx, gy);
    let cy = pos.y - proj.half_height() - WINDOW_BOTTOM - WINDOW_HEIGHT / 2.0;
    (pt(pos.x, cy), 2.0 * proj.half_width() * WINDOW_WIDTH_RATIO)
}

/// Back-wall window: a sheared frame, inset glass, and a centre mullion.
pub fn back_window(proj: &IsoProjection, gx: u32, palette: &Palette) -> Vec<Shape> {
    let (c, ww) = window_frame_center(proj, gx as f64, 0.0);
    let (hw, hh) = (ww / 2.0, WINDOW_HEIGHT / 2.0);
    let skew = proj.half_width() / 2.0;
    let (s, i) = (skew / 2.0, GLASS_INSET);

    vec![
        Shape::polygon(
            [
                pt(c.x - hw + s, c.y - hh),
                pt(c.x + hw + s, c.y - hh),
                pt(c.x + hw - s, c.y + hh),
                pt(c.x - hw - s, c.y + hh),
            ],
            Fill::solid(palette.window_frame),
        ),
        Shape::polygon(
            [
                pt(c.x - hw + s + i, c.y - hh + i),
                pt(c.x + hw + s - i, c.y - hh + i),
                pt(c.x + hw - s - i, c.y + hh - i),
                pt(c.x - hw - s + i, c.y + hh - i),
            ],
            Fill::new(palette.window_glass, palette.glass_alpha),
        ),
        Shape::line(
            pt(c.x, c.y - hh + i),
            pt(c.x, c.y + hh - i),
            1.0,
            Fill::new(palette.window_frame, 0.8),
        ),
    ]
}

/// Side-wall window: frame and glass sheared along the wall's slope.
pub fn side_window(proj: &IsoProjection, gy: u32, palette: &Palette) -> Vec<Shape> {
    let (c, ww) = window_frame_center(proj, 0.0, gy as f64);
    let (hw, hh) = (ww / 2.0, WINDOW_HEIGHT / 2.0);
    let skew = proj.half_height() / 2.0;
    let (s, i) = (skew / 2.0, GLASS_INSET);

    vec![
        Shape::polygon(
            [
                pt(c.x - hw, c.y - hh + s),
                pt(c.x + hw, c.y - hh - s),
                pt(c.x + hw, c.y + hh - s),
                pt(c.x - hw, c.y + hh + s),
            ],
            Fill::solid(palette.window_frame),
        ),
        Shape::polygon(
            [
                pt(c.x - hw + i, c.y - hh + s + i),
                pt(c.x + hw - i, c.y - hh - s + i),
                pt(c.x + hw - i, c.y + hh - s - i),
                pt(c.x - hw + i, c.y + hh + s - i),
            ],
            Fill::new(palette.window_glass, palette.glass_alpha),
        ),
    ]
}

// ── table ─────────────────────────────────────────────────────────────────

pub const TABLE_HEIGHT: f64 = 18.0;
pub const TABLE_TOP_THICKNESS: f64 = 5.0;
const TABLE_LEG_INSET: f64 = 0.5;
const TABLE_GRAIN_LINES: u32 = 5;

const LEG_WIDTH: f64 = 6.0;
const LEG_DEPTH: f64 = 4.0;
const LEG_LEFT: u32 = 0x3A3A3A;
const LEG_RIGHT: u32 = 0x4A4A4A;
const LEG_TOP: u32 = 0x5A5A5A;

/// A square table leg of `height` px standing at `(gx, gy)`, with a floor shadow.
pub fn table_leg(proj: &IsoProjection, gx: f64, gy: f64, height: f64) -> Vec<Shape> {
    let p = proj.grid_to_screen(gx, gy);
    let (hw, hd) = (LEG_WIDTH / 2.0, LEG_DEPTH / 2.0);
    let top = p.y - height;

    vec![
        Shape::ellipse(p.offset(0.0, 2.0), LEG_WIDTH + 2.0, LEG_DEPTH + 1.0, Fill::new(BLACK, 0.15)),
        Shape::polygon(
            [pt(p.x - hw, top), pt(p.x, top + hd), pt(p.x, p.y + hd), pt(p.x - hw, p.y)],
            Fill::solid(LEG_LEFT),
        ),
        Shape::polygon(
            [pt(p.x + hw, top), pt(p.x, top + hd), pt(p.x, p.y + hd), pt(p.x + hw, p.y)],
            Fill::solid(LEG_RIGHT),
        ),
        Shape::polygon(
            [pt(p.x, top - hd), pt(p.x + hw, top), pt(p.x, top + hd), pt(p.x - hw, top)],
            Fill::solid(LEG_TOP),
        ),
    ]
}

/// Conference table covering `area`: four legs, the two visible edges of the
/// top slab, the top itself, a highlight along the back edge and wood grain.
pub fn table(proj: &IsoProjection, area: &Footprint, palette: &Palette) -> Vec<Shape> {
    let (x0, y0) = (area.x as f64, area.y as f64);
    let (x1, y1) = (x0 + area.width as f64, y0 + area.height as f64);

    let lift = |p: ScreenPoint| p.offset(0.0, -TABLE_HEIGHT);
    let top_left = lift(proj.grid_to_screen(x0, y0));
    let top_right = lift(proj.grid_to_screen(x1, y0));
    let bottom_left = lift(proj.grid_to_screen(x0, y1));
    let bottom_right = lift(proj.grid_to_screen(x1, y1));
    let thick = |p: ScreenPoint| p.offset(0.0, TABLE_TOP_THICKNESS);

    let mut shapes = Vec::new();

    let leg_height = TABLE_HEIGHT - TABLE_TOP_THICKNESS;
    let legs = [
        (x0 + TABLE_LEG_INSET, y0 + TABLE_LEG_INSET),
        (x1 - TABLE_LEG_INSET, y0 + TABLE_LEG_INSET),
        (x0 + TABLE_LEG_INSET, y1 - TABLE_LEG_INSET),
        (x1 - TABLE_LEG_INSET, y1 - TABLE_LEG_INSET),
    ];
    for (gx, gy) in legs {
        shapes.extend(table_leg(proj, gx, gy, leg_height));
    }

    shapes.push(Shape::polygon(
        [top_left, bottom_left, thick(bottom_left), thick(top_left)],
        Fill::solid(palette.table_side_dark),
    ));
    shapes.push(Shape::polygon(
        [bottom_left, bottom_right, thick(bottom_right), thick(bottom_left)],
        Fill::solid(palette.table_side_light),
    ));
    shapes.push(Shape::polygon(
        [top_left, top_right, bottom_right, bottom_left],
        Fill::solid(palette.table_top),
    ));

    shapes.push(Shape::line(
        top_left.offset(2.0, 0.0),
        top_right.offset(-2.0, 0.0),
        1.0,
        Fill::new(WHITE, 0.2),
    ));

    for i in 1..TABLE_GRAIN_LINES {
        let t = i as f64 / TABLE_GRAIN_LINES as f64;
        shapes.push(Shape::line(
            top_left.lerp(bottom_left, t),
            top_right.lerp(bottom_right, t),
            1.0,
            Fill::new(palette.table_side_dark, 0.15),
        ));
    }

    shapes
}

// ── chairs ────────────────────────────────────────────────────────────────

const SEAT_HEIGHT: f64 = 10.0;
const SEAT_WIDTH_RATIO: f64 = 0.45;
const SEAT_THICKNESS: f64 = 3.0;
const BACKREST_HEIGHT: f64 = 16.0;
const BACKREST_DEPTH: f64 = 3.0;
const STEM_WIDTH: f64 = 4.0;
const WHEEL_BASE: u32 = 0x1A202C;

/// Office chair at a grid cell: shadow, stem on a wheel base, seat with two
/// visible edges, and a backrest on the side opposite `facing`.
pub fn chair(proj: &IsoProjection, placement: &ChairPlacement, palette: &Palette) -> Vec<Shape> {
    let p = proj.grid_to_screen(placement.gx as f64, placement.gy as f64);
    let seat_w = 2.0 * proj.half_width() * SEAT_WIDTH_RATIO;
    let seat_d = 2.0 * proj.half_height() * SEAT_WIDTH_RATIO;

    let (seat, back) = if placement.boss {
        (palette.boss_seat, palette.boss_back)
    } else {
        (palette.chair_seat, palette.chair_back)
    };

    let mut shapes = vec![Shape::ellipse(
        p.offset(2.0, 2.0),
        seat_w * 0.7,
        seat_d * 0.5,
        Fill::new(BLACK, 0.12),
    )];

    shapes.extend(chair_base(p, SEAT_HEIGHT, palette.chair_frame));
    shapes.extend(chair_seat(p.offset(0.0, -SEAT_HEIGHT), seat_w, seat_d, seat));
    shapes.extend(chair_backrest(
        p.offset(0.0, -SEAT_HEIGHT - SEAT_THICKNESS / 2.0),
        seat_w,
        seat_d,
        placement.facing,
        back,
    ));

    shapes
}

fn chair_base(p: ScreenPoint, height: f64, frame: u32) -> [Shape; 3] {
    let x = p.x - STEM_WIDTH / 2.0;
    let y = p.y - height;
    [
        Shape::rect(x, y, STEM_WIDTH, height, Fill::solid(frame)),
        Shape::rect(x, y, 1.0, height, Fill::new(WHITE, 0.1)),
        Shape::ellipse(p, STEM_WIDTH * 2.0, STEM_WIDTH, Fill::solid(WHEEL_BASE)),
    ]
}

fn chair_seat(c: ScreenPoint, w: f64, d: f64, rgb: u32) -> [Shape; 4] {
    let (hw, hd, t) = (w / 2.0, d / 2.0, SEAT_THICKNESS);
    [
        Shape::polygon(
            [pt(c.x, c.y - hd), pt(c.x + hw, c.y), pt(c.x, c.y + hd), pt(c.x - hw, c.y)],
            Fill::solid(rgb),
        ),
        Shape::polygon(
            [pt(c.x, c.y + hd), pt(c.x + hw, c.y), pt(c.x + hw, c.y + t), pt(c.x, c.y + hd + t)],
            Fill::solid(darken(rgb, 15.0)),
        ),
        Shape::polygon(
            [pt(c.x, c.y + hd), pt(c.x - hw, c.y), pt(c.x - hw, c.y + t), pt(c.x, c.y + hd + t)],
            Fill::solid(darken(rgb, 25.0)),
        ),
        Shape::ellipse_outline(
            c,
            w * 0.4,
            d * 0.3,
            Outline { width: 1.0, color: Fill::new(BLACK, 0.1) },
        ),
    ]
}

/// Screen offset of the backrest from the seat centre.
fn backrest_offset(facing: Facing, seat_w: f64, seat_d: f64) -> (f64, f64) {
    match facing {
        Facing::SE => (0.0, -seat_d / 2.0),
        Facing::SW => (-seat_w / 2.0, 0.0),
        Facing::NW => (0.0, seat_d / 2.0),
        Facing::NE => (seat_w / 2.0, 0.0),
    }
}

fn chair_backrest(c: ScreenPoint, seat_w: f64, seat_d: f64, facing: Facing, rgb: u32) -> Vec<Shape> {
    let back_w = seat_w * 0.8;
    let (dx, dy) = backrest_offset(facing, seat_w, seat_d);
    let b = c.offset(dx, dy);
    let (h, depth) = (BACKREST_HEIGHT, BACKREST_DEPTH);
    let side = Fill::solid(darken(rgb, 20.0));

    if facing.is_rotated() {
        let slant = back_w * 0.2;
        vec![
            Shape::polygon(
                [
                    pt(b.x, b.y - h),
                    pt(b.x, b.y),
                    pt(b.x - depth, b.y + slant),
                    pt(b.x - depth, b.y - h + slant),
                ],
                Fill::solid(rgb),
            ),
            Shape::rect(b.x - depth, b.y - h + slant, depth, h, side),
        ]
    } else {
        let half = back_w / 2.0;
        vec![
            Shape::rect(b.x - half, b.y - h, back_w, h, Fill::solid(rgb)),
            Shape::polygon(
                [
                    pt(b.x + half, b.y - h),
                    pt(b.x + half + depth, b.y - h + 2.0),
                    pt(b.x + half + depth, b.y + 2.0),
                    pt(b.x + half, b.y),
                ],
                side,
            ),
            Shape::rect(
                b.x - half,
                b.y - h - 2.0,
                back_w + depth,
                3.0,
                Fill::solid(lighten(rgb, 10.0)),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proj() -> IsoProjection {
        IsoProjection::default()
    }

    fn polygon_points(shape: &Shape) -> &[ScreenPoint] {
        match shape {
            Shape::Polygon { points, .. } => points,
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    fn fill_of(shape: &Shape) -> Fill {
        match shape {
            Shape::Polygon { fill, .. } => *fill,
            Shape::Ellipse { fill: Some(fill), .. } => *fill,
            Shape::Line { color, .. } => *color,
            other => panic!("no fill on {other:?}"),
        }
    }

    // ── floor ─────────────────────────────────────────────────────────────

    #[test]
    fn tile_diamond_matches_tile_corners() {
        let p = proj();
        let shapes = tile(&p, 3.0, 2.0, 0xE8E4DC);
        assert_eq!(shapes.len(), 2);

        let corners = p.tile_corners(3.0, 2.0).to_array();
        assert_eq!(polygon_points(&shapes[0]), &corners[..]);
    }

    #[test]
    fn floor_is_checkered() {
        let (p, pal) = (proj(), Palette::default());
        assert_eq!(fill_of(&floor_tile(&p, 0, 0, &pal)[0]).rgb, pal.floor_light);
        assert_eq!(fill_of(&floor_tile(&p, 1, 0, &pal)[0]).rgb, pal.floor_dark);
        assert_eq!(fill_of(&floor_tile(&p, 1, 1, &pal)[0]).rgb, pal.floor_light);
    }

    #[test]
    fn carpet_border_and_alpha() {
        let (p, pal) = (proj(), Palette::default());
        let carpet = Footprint::new(4, 3, 6, 4);

        let edge = carpet_tile(&p, 4, 3, &carpet, &pal);
        let inner = carpet_tile(&p, 5, 4, &carpet, &pal);
        assert_eq!(fill_of(&edge[0]), Fill::new(pal.carpet_border, CARPET_ALPHA));
        assert_eq!(fill_of(&inner[0]), Fill::new(pal.carpet_main, CARPET_ALPHA));
        // The highlight keeps its own alpha, scaled by the tile's.
        assert!((fill_of(&inner[1]).alpha - 0.5 * CARPET_ALPHA).abs() < 1e-6);
    }

    // ── walls ─────────────────────────────────────────────────────────────

    #[test]
    fn back_wall_panel_seams_on_even_segments() {
        let (p, pal) = (proj(), Palette::default());
        assert_eq!(back_wall_segment(&p, 0, 96.0, &pal).len(), 4);
        assert_eq!(back_wall_segment(&p, 1, 96.0, &pal).len(), 3);
        assert_eq!(side_wall_segment(&p, 0, 96.0, &pal).len(), 3);
    }

    #[test]
    fn back_wall_face_spans_wall_height() {
        let (p, pal) = (proj(), Palette::default());
        let seg = back_wall_segment(&p, 2, 96.0, &pal);
        let face = polygon_points(&seg[0]);

        // Base corners sit on the far edge of row gy = 0.
        assert_eq!(face[3], ScreenPoint::new(64.0, 32.0 - 16.0));
        assert_eq!(face[2], ScreenPoint::new(96.0, 48.0 - 16.0));
        assert_eq!(face[0].y, face[3].y - 96.0);
        assert_eq!(fill_of(&seg[0]).rgb, pal.wall_back);
    }

    #[test]
    fn side_wall_uses_side_shade() {
        let (p, pal) = (proj(), Palette::default());
        let seg = side_wall_segment(&p, 0, 96.0, &pal);
        assert_eq!(fill_of(&seg[0]).rgb, pal.wall_side);
        // Runs down-left along gx = 0.
        let face = polygon_points(&seg[0]);
        assert!(face[2].x < face[3].x);
    }

    // ── windows ───────────────────────────────────────────────────────────

    #[test]
    fn back_window_is_a_sheared_frame_with_glass_and_mullion() {
        let (p, pal) = (proj(), Palette::default());
        let shapes = back_window(&p, 3, &pal);
        assert_eq!(shapes.len(), 3);

        let frame = polygon_points(&shapes[0]);
        // Top edge is shifted right of the bottom edge by the shear.
        assert!((frame[0].x - frame[3].x - 16.0).abs() < 1e-9);
        assert!((frame[3].y - frame[0].y - WINDOW_HEIGHT).abs() < 1e-9);
        assert_eq!(fill_of(&shapes[1]), Fill::new(pal.window_glass, pal.glass_alpha));

        // Bottom edge sits WINDOW_BOTTOM above the wall base.
        let base = p.grid_to_screen(3.0, 0.0).y - p.half_height();
        assert!((base - frame[3].y - WINDOW_BOTTOM).abs() < 1e-9);
    }

    #[test]
    fn side_window_has_no_mullion() {
        let (p, pal) = (proj(), Palette::default());
        let shapes = side_window(&p, 2, &pal);
        assert_eq!(shapes.len(), 2);
        let frame = polygon_points(&shapes[0]);
        assert!((frame[0].y - frame[1].y - 8.0).abs() < 1e-9);
    }

    // ── furniture ─────────────────────────────────────────────────────────

    #[test]
    fn table_has_legs_slab_and_grain() {
        let (p, pal) = (proj(), Palette::default());
        let shapes = table(&p, &Footprint::new(4, 3, 5, 3), &pal);
        // 4 legs x 4 shapes, 3 slab faces, 1 highlight, 4 grain lines.
        assert_eq!(shapes.len(), 16 + 3 + 1 + 4);

        let top = polygon_points(&shapes[18]);
        assert_eq!(top[0], p.grid_to_screen(4.0, 3.0).offset(0.0, -TABLE_HEIGHT));
        assert_eq!(top[2], p.grid_to_screen(9.0, 6.0).offset(0.0, -TABLE_HEIGHT));
        assert_eq!(fill_of(&shapes[18]).rgb, pal.table_top);
    }

    #[test]
    fn leg_faces_meet_on_the_centre_line() {
        let shapes = table_leg(&proj(), 1.0, 1.0, 13.0);
        let left = polygon_points(&shapes[1]);
        let right = polygon_points(&shapes[2]);
        assert_eq!(left[1], right[1]);
        assert_eq!(left[2], right[2]);
    }

    #[test]
    fn chair_backrest_follows_facing() {
        let (p, pal) = (proj(), Palette::default());
        let upright = chair(&p, &ChairPlacement::new(5, 2, Facing::SE), &pal);
        let sideways = chair(&p, &ChairPlacement::new(3, 4, Facing::NE), &pal);
        // shadow + 3 base + 4 seat + backrest (3 upright, 2 sideways)
        assert_eq!(upright.len(), 11);
        assert_eq!(sideways.len(), 10);

        let se = chair_backrest(pt(0.0, 0.0), 28.8, 14.4, Facing::SE, 0);
        let nw = chair_backrest(pt(0.0, 0.0), 28.8, 14.4, Facing::NW, 0);
        let se_y = polygon_points(&se[0])[3].y;
        let nw_y = polygon_points(&nw[0])[3].y;
        assert!((nw_y - se_y - 14.4).abs() < 1e-9);
    }

    #[test]
    fn boss_chair_is_red() {
        let (p, pal) = (proj(), Palette::default());
        let boss = chair(&p, &ChairPlacement::boss(11, 2, Facing::SW), &pal);
        let regular = chair(&p, &ChairPlacement::new(10, 4, Facing::SW), &pal);

        // Seat top follows shadow + base.
        assert_eq!(fill_of(&boss[4]).rgb, pal.boss_seat);
        assert_eq!(fill_of(&regular[4]).rgb, pal.chair_seat);
        assert_eq!(fill_of(&boss[8]).rgb, pal.boss_back);
    }

    #[test]
    fn faded_scales_every_alpha() {
        let s = Shape::Polygon {
            points: vec![],
            fill: Fill::new(0, 0.5),
            outline: Some(Outline { width: 1.0, color: Fill::new(0, 0.2) }),
        }
        .faded(0.5);
        let Shape::Polygon { fill, outline: Some(outline), .. } = s else {
            panic!("shape kind changed");
        };
        assert_eq!(fill.alpha, 0.25);
        assert!((outline.color.alpha - 0.1).abs() < 1e-6);
    }
}
