use crate::coords::Vec2;

/// World-to-screen transform applied by the renderer.
///
/// `screen = world * scale + offset`, in logical pixels. This is the uniform
/// scale + translation a camera-controlled container applies to its children.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View2D {
    pub offset: Vec2,
    pub scale: f32,
}

impl Default for View2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl View2D {
    #[inline]
    pub const fn new(offset: Vec2, scale: f32) -> Self {
        Self { offset, scale }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self { offset: Vec2::zero(), scale: 1.0 }
    }

    #[inline]
    pub fn world_to_screen(self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    /// Inverse of [`View2D::world_to_screen`]. A zero scale maps everything to the origin.
    #[inline]
    pub fn screen_to_world(self, p: Vec2) -> Vec2 {
        if self.scale == 0.0 {
            return Vec2::zero();
        }
        (p - self.offset) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_screen_round_trip() {
        let v = View2D::new(Vec2::new(400.0, 270.0), 1.2);
        let p = Vec2::new(-32.0, 144.0);
        let back = v.screen_to_world(v.world_to_screen(p));
        assert!((back.x - p.x).abs() < 1e-4);
        assert!((back.y - p.y).abs() < 1e-4);
    }

    #[test]
    fn identity_is_noop() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(View2D::identity().world_to_screen(p), p);
    }
}
