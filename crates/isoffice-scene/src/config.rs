//! Office layout, colours and camera limits.
//!
//! Everything the scene builds from lives here as plain data with `Default`
//! values for the standard office. `OfficeConfig::validate` runs before a scene
//! is created.

use isoffice_grid::{Facing, GridBounds, GridPos, TileSize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tile size must be positive, got {width}x{height}")]
    TileSize { width: f64, height: f64 },

    #[error("room must be at least 1x1, got {width}x{height}")]
    EmptyRoom { width: u32, height: u32 },

    #[error("wall height must be positive, got {0}")]
    WallHeight(f64),

    #[error("{what} {area} does not fit in the {room_width}x{room_height} room")]
    OutsideRoom {
        what: &'static str,
        area: Footprint,
        room_width: u32,
        room_height: u32,
    },

    #[error("chair #{index} at ({gx}, {gy}) is outside the room")]
    ChairOutside { index: usize, gx: u32, gy: u32 },

    #[error("{wall} window at {at} is outside the wall")]
    WindowOutside { wall: &'static str, at: u32 },

    #[error("zoom limits must satisfy 0 < min <= default <= max, got {min} / {default} / {max}")]
    ZoomRange { min: f32, default: f32, max: f32 },
}

/// Axis-aligned block of cells: `x..x+width` by `y..y+height`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Footprint {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn fits_in(&self, room: GridBounds) -> bool {
        self.width > 0
            && self.height > 0
            && self.x.saturating_add(self.width) <= room.width
            && self.y.saturating_add(self.height) <= room.height
    }

    pub fn is_border(&self, gx: u32, gy: u32) -> bool {
        gx == self.x
            || gy == self.y
            || gx + 1 == self.x + self.width
            || gy + 1 == self.y + self.height
    }

    /// Centre of the block in grid units (a cell corner for even sizes).
    pub fn center(&self) -> GridPos {
        GridPos::new(
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let Footprint { x, y, width, height } = *self;
        (x..x + width).flat_map(move |gx| (y..y + height).map(move |gy| (gx, gy)))
    }
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomConfig {
    pub width: u32,
    pub height: u32,
    /// Wall height in pixels.
    pub wall_height: f64,
    pub carpet: Footprint,
    pub table: Footprint,
    /// `gx` of each window on the back wall (`gy = 0`).
    pub back_windows: Vec<u32>,
    /// `gy` of each window on the side wall (`gx = 0`).
    pub side_windows: Vec<u32>,
}

impl RoomConfig {
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.width, self.height)
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 14,
            height: 10,
            wall_height: 96.0,
            carpet: Footprint::new(4, 3, 6, 4),
            table: Footprint::new(4, 3, 5, 3),
            back_windows: vec![3, 7, 11],
            side_windows: vec![2, 6],
        }
    }
}

/// Colours as `0xRRGGBB` sRGB literals.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: u32,

    pub floor_light: u32,
    pub floor_dark: u32,
    pub carpet_main: u32,
    pub carpet_border: u32,

    pub wall_back: u32,
    pub wall_side: u32,
    pub wall_trim: u32,
    pub window_frame: u32,
    pub window_glass: u32,
    pub glass_alpha: f32,

    pub table_top: u32,
    pub table_side_light: u32,
    pub table_side_dark: u32,

    pub chair_seat: u32,
    pub chair_back: u32,
    pub chair_frame: u32,
    pub boss_seat: u32,
    pub boss_back: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: 0x1A1A2E,

            floor_light: 0xE8E4DC,
            floor_dark: 0xDFDBD3,
            carpet_main: 0x8B9DC3,
            carpet_border: 0x7A8CB2,

            wall_back: 0xF5F5F0,
            wall_side: 0xE8E8E0,
            wall_trim: 0xD8D8D0,
            window_frame: 0x9DB4C0,
            window_glass: 0xADD8E6,
            glass_alpha: 0.7,

            table_top: 0xD4A574,
            table_side_light: 0xBE9468,
            table_side_dark: 0xA67C52,

            chair_seat: 0x4A5568,
            chair_back: 0x3D4452,
            chair_frame: 0x2D3748,
            boss_seat: 0xB91C1C,
            boss_back: 0x991B1B,
        }
    }
}

/// Draw-list layer per kind of scene content. Higher layers paint on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DepthLayers {
    pub floor: i32,
    pub carpet: i32,
    pub wall: i32,
    pub furniture: i32,
    pub avatar: i32,
    pub effects: i32,
    pub ui: i32,
}

impl Default for DepthLayers {
    fn default() -> Self {
        Self {
            floor: 0,
            carpet: 10,
            wall: 100,
            furniture: 200,
            avatar: 300,
            effects: 400,
            ui: 500,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ChairPlacement {
    pub gx: u32,
    pub gy: u32,
    pub facing: Facing,
    pub boss: bool,
}

impl ChairPlacement {
    pub const fn new(gx: u32, gy: u32, facing: Facing) -> Self {
        Self { gx, gy, facing, boss: false }
    }

    pub const fn boss(gx: u32, gy: u32, facing: Facing) -> Self {
        Self { gx, gy, facing, boss: true }
    }
}

/// Seating around the conference table plus the boss seat by the window.
pub fn default_chairs() -> Vec<ChairPlacement> {
    use Facing::*;
    vec![
        ChairPlacement::new(5, 2, SE),
        ChairPlacement::new(6, 2, SE),
        ChairPlacement::new(7, 2, SE),
        ChairPlacement::new(5, 7, NW),
        ChairPlacement::new(6, 7, NW),
        ChairPlacement::new(7, 7, NW),
        ChairPlacement::new(3, 4, NE),
        ChairPlacement::new(3, 5, NE),
        ChairPlacement::new(10, 4, SW),
        ChairPlacement::new(10, 5, SW),
        ChairPlacement::boss(11, 2, SW),
    ]
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub default_zoom: f32,

    /// Multipliers for one wheel notch towards / away from the user.
    pub wheel_zoom_in: f32,
    pub wheel_zoom_out: f32,

    /// Multipliers for the zoom-in / zoom-out commands.
    pub step_zoom_in: f32,
    pub step_zoom_out: f32,

    pub drag_enabled: bool,

    /// Vertical screen offset applied when centring on the room, logical px.
    /// Negative lifts the room so the walls are not cut off.
    pub center_bias_y: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 2.5,
            default_zoom: 1.2,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            step_zoom_in: 1.2,
            step_zoom_out: 0.8,
            drag_enabled: true,
            center_bias_y: -30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfficeConfig {
    pub tile: TileSize,
    pub room: RoomConfig,
    pub palette: Palette,
    pub layers: DepthLayers,
    pub chairs: Vec<ChairPlacement>,
    pub camera: CameraConfig,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            tile: TileSize::default(),
            room: RoomConfig::default(),
            palette: Palette::default(),
            layers: DepthLayers::default(),
            chairs: default_chairs(),
            camera: CameraConfig::default(),
        }
    }
}

impl OfficeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let TileSize { width, height } = self.tile;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::TileSize { width, height });
        }

        let room = &self.room;
        if room.width == 0 || room.height == 0 {
            return Err(ConfigError::EmptyRoom { width: room.width, height: room.height });
        }
        if !(room.wall_height > 0.0) {
            return Err(ConfigError::WallHeight(room.wall_height));
        }

        let bounds = room.bounds();
        for (what, area) in [("carpet", room.carpet), ("table", room.table)] {
            if !area.fits_in(bounds) {
                return Err(ConfigError::OutsideRoom {
                    what,
                    area,
                    room_width: room.width,
                    room_height: room.height,
                });
            }
        }

        if let Some(&at) = room.back_windows.iter().find(|&&gx| gx >= room.width) {
            return Err(ConfigError::WindowOutside { wall: "back", at });
        }
        if let Some(&at) = room.side_windows.iter().find(|&&gy| gy >= room.height) {
            return Err(ConfigError::WindowOutside { wall: "side", at });
        }

        for (index, chair) in self.chairs.iter().enumerate() {
            if !bounds.contains(GridPos::new(chair.gx as f64, chair.gy as f64)) {
                return Err(ConfigError::ChairOutside { index, gx: chair.gx, gy: chair.gy });
            }
        }

        let CameraConfig { min_zoom: min, max_zoom: max, default_zoom: default, .. } = self.camera;
        if !(min > 0.0 && min <= default && default <= max) {
            return Err(ConfigError::ZoomRange { min, default, max });
        }

        Ok(())
    }
}
