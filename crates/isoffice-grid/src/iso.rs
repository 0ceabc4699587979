use core::ops::{Add, Sub};

/// Isometric tile footprint in pixels.
///
/// The tile is drawn as a diamond `width` wide and `height` tall; 2:1 is the
/// classic pixel-art ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileSize {
    pub width: f64,
    pub height: f64,
}

impl TileSize {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::new(64.0, 32.0)
    }
}

/// Position on the (unbounded) isometric lattice.
///
/// Fractional values are allowed: table centres, leg insets and pointer picks
/// all land between cells.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GridPos {
    pub gx: f64,
    pub gy: f64,
}

impl GridPos {
    #[inline]
    pub const fn new(gx: f64, gy: f64) -> Self {
        Self { gx, gy }
    }

    /// Returns the cell containing this position (floor of both axes).
    #[inline]
    pub fn cell(self) -> (i64, i64) {
        (self.gx.floor() as i64, self.gy.floor() as i64)
    }

    #[inline]
    pub fn offset(self, dgx: f64, dgy: f64) -> Self {
        Self::new(self.gx + dgx, self.gy + dgy)
    }
}

/// Point on the flat 2D canvas after projection.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    pub fn lerp(self, other: ScreenPoint, t: f64) -> Self {
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

impl Add for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn add(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn sub(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The four screen corners of one tile diamond.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileCorners {
    /// North.
    pub top: ScreenPoint,
    /// East.
    pub right: ScreenPoint,
    /// South.
    pub bottom: ScreenPoint,
    /// West.
    pub left: ScreenPoint,
}

impl TileCorners {
    /// Corners in polygon winding order: top, right, bottom, left.
    #[inline]
    pub fn to_array(self) -> [ScreenPoint; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Visible faces of an extruded isometric box, relative to the footprint centre
/// on the floor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxFaces {
    /// Lid: north, east, south, west.
    pub top: [ScreenPoint; 4],
    /// West-south face: top west, top south, bottom south, bottom west.
    pub left: [ScreenPoint; 4],
    /// East-south face: top east, bottom east, bottom south, top south.
    pub right: [ScreenPoint; 4],
}

/// Fixed affine grid <-> screen transform (diamond projection).
///
/// `+gx` maps to screen right-down and `+gy` to screen left-down. Nothing in
/// the scene carries its own transform; every placement goes through one of
/// these.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IsoProjection {
    hw: f64,
    hh: f64,
}

impl IsoProjection {
    #[inline]
    pub fn new(tile: TileSize) -> Self {
        Self::from_half_extents(tile.width / 2.0, tile.height / 2.0)
    }

    #[inline]
    pub const fn from_half_extents(half_width: f64, half_height: f64) -> Self {
        Self { hw: half_width, hh: half_height }
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.hw
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.hh
    }

    #[inline]
    pub fn tile_size(&self) -> TileSize {
        TileSize::new(self.hw * 2.0, self.hh * 2.0)
    }

    /// `x = (gx - gy) * hw`, `y = (gx + gy) * hh`.
    #[inline]
    pub fn grid_to_screen(&self, gx: f64, gy: f64) -> ScreenPoint {
        ScreenPoint::new((gx - gy) * self.hw, (gx + gy) * self.hh)
    }

    /// Exact inverse of [`grid_to_screen`](Self::grid_to_screen). The result is
    /// fractional; use [`GridPos::cell`] to pick a tile.
    #[inline]
    pub fn screen_to_grid(&self, x: f64, y: f64) -> GridPos {
        let u = x / self.hw;
        let v = y / self.hh;
        GridPos::new((u + v) / 2.0, (v - u) / 2.0)
    }

    #[inline]
    pub fn project(&self, pos: GridPos) -> ScreenPoint {
        self.grid_to_screen(pos.gx, pos.gy)
    }

    #[inline]
    pub fn unproject(&self, p: ScreenPoint) -> GridPos {
        self.screen_to_grid(p.x, p.y)
    }

    /// Diamond around the projected centre of `(gx, gy)`.
    pub fn tile_corners(&self, gx: f64, gy: f64) -> TileCorners {
        let c = self.grid_to_screen(gx, gy);
        TileCorners {
            top: c.offset(0.0, -self.hh),
            right: c.offset(self.hw, 0.0),
            bottom: c.offset(0.0, self.hh),
            left: c.offset(-self.hw, 0.0),
        }
    }

    /// Vertices for a box of `width` x `depth` cells and `height` pixels.
    ///
    /// Faces are relative to the footprint centre at floor level, so callers
    /// translate them to wherever the box stands.
    pub fn box_vertices(&self, width: f64, depth: f64, height: f64) -> BoxFaces {
        let w = width * self.hw;
        let d = depth * self.hh;
        let h = height;

        BoxFaces {
            top: [
                ScreenPoint::new(0.0, -d - h),
                ScreenPoint::new(w, -h),
                ScreenPoint::new(0.0, d - h),
                ScreenPoint::new(-w, -h),
            ],
            left: [
                ScreenPoint::new(-w, -h),
                ScreenPoint::new(0.0, d - h),
                ScreenPoint::new(0.0, d),
                ScreenPoint::new(-w, 0.0),
            ],
            right: [
                ScreenPoint::new(w, -h),
                ScreenPoint::new(w, 0.0),
                ScreenPoint::new(0.0, d),
                ScreenPoint::new(0.0, d - h),
            ],
        }
    }
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::new(TileSize::default())
    }
}

/// Diamond of an arbitrary size centred on `(cx, cy)`: top, right, bottom, left.
pub fn diamond_path(cx: f64, cy: f64, width: f64, height: f64) -> [ScreenPoint; 4] {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    [
        ScreenPoint::new(cx, cy - half_h),
        ScreenPoint::new(cx + half_w, cy),
        ScreenPoint::new(cx, cy + half_h),
        ScreenPoint::new(cx - half_w, cy),
    ]
}

/// Direction something on the grid faces, named after the screen diagonal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Facing {
    NE,
    SE,
    SW,
    NW,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::NE, Facing::SE, Facing::SW, Facing::NW];

    /// One-cell step in the facing direction.
    #[inline]
    pub const fn grid_offset(self) -> (i32, i32) {
        match self {
            Facing::NE => (0, -1),
            Facing::SE => (1, 0),
            Facing::SW => (0, 1),
            Facing::NW => (-1, 0),
        }
    }

    /// Whether the facing runs along the screen's other diagonal, which turns
    /// chair backrests sideways.
    #[inline]
    pub const fn is_rotated(self) -> bool {
        matches!(self, Facing::NE | Facing::SW)
    }
}

/// `|dgx| + |dgy|` between two grid positions.
#[inline]
pub fn manhattan_distance(a: GridPos, b: GridPos) -> f64 {
    (a.gx - b.gx).abs() + (a.gy - b.gy).abs()
}

/// Rectangular region of cells `[0, width) x [0, height)`.
///
/// The projection itself is unbounded; this is the caller-side check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridBounds {
    pub width: u32,
    pub height: u32,
}

impl GridBounds {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.gx >= 0.0
            && pos.gx < self.width as f64
            && pos.gy >= 0.0
            && pos.gy < self.height as f64
    }

    /// Geometric centre of the region (a cell corner for even sizes).
    #[inline]
    pub fn center(&self) -> GridPos {
        GridPos::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Cells in `gx`-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let (w, h) = (self.width, self.height);
        (0..w).flat_map(move |gx| (0..h).map(move |gy| (gx, gy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn screen_point_lerp() {
        let a = ScreenPoint::new(0.0, 10.0);
        let b = ScreenPoint::new(10.0, 30.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), ScreenPoint::new(5.0, 20.0));
    }

    fn close(a: ScreenPoint, b: ScreenPoint) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn origin_projects_to_origin() {
        let p = IsoProjection::default();
        assert_eq!(p.grid_to_screen(0.0, 0.0), ScreenPoint::new(0.0, 0.0));
    }

    #[test]
    fn axes_map_to_screen_diagonals() {
        let p = IsoProjection::default();
        // +gx: right and down, +gy: left and down.
        assert_eq!(p.grid_to_screen(1.0, 0.0), ScreenPoint::new(32.0, 16.0));
        assert_eq!(p.grid_to_screen(0.0, 1.0), ScreenPoint::new(-32.0, 16.0));
    }

    #[test]
    fn screen_to_grid_inverts_known_points() {
        let p = IsoProjection::default();
        assert_eq!(p.screen_to_grid(32.0, 16.0), GridPos::new(1.0, 0.0));
        assert_eq!(p.screen_to_grid(0.0, 32.0), GridPos::new(1.0, 1.0));
    }

    #[test]
    fn custom_tile_size_changes_half_extents() {
        let p = IsoProjection::new(TileSize::new(100.0, 40.0));
        assert_eq!(p.half_width(), 50.0);
        assert_eq!(p.half_height(), 20.0);
        assert_eq!(p.tile_size(), TileSize::new(100.0, 40.0));
        assert_eq!(p.grid_to_screen(2.0, 1.0), ScreenPoint::new(50.0, 60.0));
    }

    #[test]
    fn cell_floors_fractional_positions() {
        assert_eq!(GridPos::new(2.7, 0.1).cell(), (2, 0));
        assert_eq!(GridPos::new(-0.5, 3.0).cell(), (-1, 3));
    }

    // ── tile corners / boxes ──────────────────────────────────────────────

    #[test]
    fn tile_corners_surround_projected_centre() {
        let p = IsoProjection::default();
        let c = p.tile_corners(2.0, 1.0);
        let centre = p.grid_to_screen(2.0, 1.0);
        assert_eq!(c.top, centre.offset(0.0, -16.0));
        assert_eq!(c.right, centre.offset(32.0, 0.0));
        assert_eq!(c.bottom, centre.offset(0.0, 16.0));
        assert_eq!(c.left, centre.offset(-32.0, 0.0));
    }

    #[test]
    fn neighbouring_tiles_share_edges() {
        let p = IsoProjection::default();
        let a = p.tile_corners(0.0, 0.0);
        let b = p.tile_corners(1.0, 0.0);
        // The east neighbour's top and left corners are this tile's right and bottom.
        assert!(close(b.top, a.right));
        assert!(close(b.left, a.bottom));
    }

    #[test]
    fn unit_box_lid_matches_raised_tile() {
        let p = IsoProjection::default();
        let faces = p.box_vertices(1.0, 1.0, 18.0);
        let tile = p.tile_corners(0.0, 0.0).to_array();
        for (lid, floor) in faces.top.iter().zip(tile.iter()) {
            assert!(close(*lid, floor.offset(0.0, -18.0)));
        }
        // Symmetric about (0, -18).
        assert_eq!(faces.top[0].y + faces.top[2].y, -36.0);
        assert_eq!(faces.top[1].x + faces.top[3].x, 0.0);
    }

    #[test]
    fn box_side_faces_hang_from_lid() {
        let p = IsoProjection::default();
        let faces = p.box_vertices(2.0, 1.0, 10.0);
        assert_eq!(faces.left[0], faces.top[3]);
        assert_eq!(faces.left[1], faces.top[2]);
        assert_eq!(faces.right[0], faces.top[1]);
        assert_eq!(faces.right[3], faces.top[2]);
        // Bottom edges sit `height` below the lid.
        assert_eq!(faces.left[2].y - faces.left[1].y, 10.0);
        assert_eq!(faces.right[1].y - faces.right[0].y, 10.0);
    }

    #[test]
    fn zero_height_box_is_flat() {
        let p = IsoProjection::default();
        let faces = p.box_vertices(1.0, 1.0, 0.0);
        assert_eq!(faces.left[0], faces.left[3]);
        assert_eq!(faces.left[1], faces.left[2]);
    }

    #[test]
    fn diamond_path_is_centred() {
        let d = diamond_path(10.0, 20.0, 8.0, 4.0);
        assert_eq!(d[0], ScreenPoint::new(10.0, 18.0));
        assert_eq!(d[1], ScreenPoint::new(14.0, 20.0));
        assert_eq!(d[2], ScreenPoint::new(10.0, 22.0));
        assert_eq!(d[3], ScreenPoint::new(6.0, 20.0));
    }

    // ── helpers ───────────────────────────────────────────────────────────

    #[test]
    fn facing_offsets_are_unit_steps() {
        for f in Facing::ALL {
            let (dx, dy) = f.grid_offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Facing::SE.grid_offset(), (1, 0));
        assert!(Facing::NE.is_rotated());
        assert!(!Facing::NW.is_rotated());
    }

    #[test]
    fn manhattan_distance_sums_axes() {
        let d = manhattan_distance(GridPos::new(1.0, 2.0), GridPos::new(4.0, -2.0));
        assert_eq!(d, 7.0);
    }

    #[test]
    fn bounds_are_half_open() {
        let b = GridBounds::new(14, 10);
        assert!(b.contains(GridPos::new(0.0, 0.0)));
        assert!(b.contains(GridPos::new(13.0, 9.0)));
        assert!(!b.contains(GridPos::new(14.0, 0.0)));
        assert!(!b.contains(GridPos::new(0.0, -0.5)));
    }

    #[test]
    fn bounds_cells_cover_region() {
        let b = GridBounds::new(3, 2);
        let cells: Vec<_> = b.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
        assert_eq!(b.center(), GridPos::new(1.5, 1.0));
    }
}
