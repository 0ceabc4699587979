//! Pan/zoom camera over the world container.
//!
//! `screen = world * zoom + offset`. Zoom is clamped to the configured limits
//! and zooming keeps the world point under the pivot fixed on screen.

use isoffice_engine::coords::{Vec2, Viewport};
use isoffice_engine::render::View2D;

use crate::config::CameraConfig;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    offset: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    /// Last pointer position while a drag is active.
    drag_anchor: Option<Vec2>,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            offset: Vec2::zero(),
            zoom: config.default_zoom.clamp(config.min_zoom, config.max_zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            drag_anchor: None,
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn view(&self) -> View2D {
        View2D::new(self.offset, self.zoom)
    }

    /// Sets the zoom directly (clamped), scaling around the world origin.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Places `world` at the viewport centre, shifted vertically by `bias_y`.
    pub fn center_on(&mut self, world: Vec2, viewport: Viewport, bias_y: f32) {
        self.offset = viewport.center() - world * self.zoom + Vec2::new(0.0, bias_y);
    }

    /// Multiplies the zoom by `factor` around the screen point `pivot`.
    ///
    /// Returns `false` when clamping leaves the zoom unchanged.
    pub fn zoom_at(&mut self, factor: f32, pivot: Vec2) -> bool {
        if !(factor > 0.0) || !factor.is_finite() {
            return false;
        }
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == self.zoom {
            return false;
        }

        let ratio = new_zoom / self.zoom;
        self.offset = pivot - (pivot - self.offset) * ratio;
        self.zoom = new_zoom;
        true
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag_anchor = Some(pointer);
    }

    /// Pans by the pointer movement since the previous call. No-op unless dragging.
    pub fn drag_to(&mut self, pointer: Vec2) -> bool {
        let Some(anchor) = self.drag_anchor else { return false };
        self.offset += pointer - anchor;
        self.drag_anchor = Some(pointer);
        true
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.view().world_to_screen(world)
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.view().screen_to_world(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(&CameraConfig::default())
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn starts_at_default_zoom() {
        assert_eq!(camera().zoom(), 1.2);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = camera();
        for _ in 0..50 {
            cam.zoom_at(1.1, Vec2::zero());
        }
        assert_eq!(cam.zoom(), 2.5);
        assert!(!cam.zoom_at(1.1, Vec2::zero()));

        for _ in 0..50 {
            cam.zoom_at(0.9, Vec2::zero());
        }
        assert_eq!(cam.zoom(), 0.5);
    }

    #[test]
    fn zoom_keeps_pivot_fixed() {
        let mut cam = camera();
        cam.pan(Vec2::new(120.0, -40.0));
        let pivot = Vec2::new(300.0, 200.0);
        let under = cam.screen_to_world(pivot);

        assert!(cam.zoom_at(1.1, pivot));
        assert!(close(cam.world_to_screen(under), pivot));
        assert!(cam.zoom_at(0.9, pivot));
        assert!(close(cam.world_to_screen(under), pivot));
    }

    #[test]
    fn rejects_degenerate_factors() {
        let mut cam = camera();
        assert!(!cam.zoom_at(0.0, Vec2::zero()));
        assert!(!cam.zoom_at(f32::NAN, Vec2::zero()));
        assert_eq!(cam.zoom(), 1.2);
    }

    #[test]
    fn center_on_puts_point_mid_screen() {
        let mut cam = camera();
        let world = Vec2::new(64.0, 160.0);
        cam.center_on(world, Viewport::new(800.0, 600.0), -30.0);
        assert!(close(cam.world_to_screen(world), Vec2::new(400.0, 270.0)));
    }

    #[test]
    fn drag_pans_by_pointer_delta() {
        let mut cam = camera();
        assert!(!cam.drag_to(Vec2::new(5.0, 5.0)));

        cam.begin_drag(Vec2::new(10.0, 10.0));
        assert!(cam.is_dragging());
        cam.drag_to(Vec2::new(15.0, 30.0));
        cam.drag_to(Vec2::new(20.0, 30.0));
        assert_eq!(cam.offset(), Vec2::new(10.0, 20.0));

        cam.end_drag();
        assert!(!cam.is_dragging());
        cam.drag_to(Vec2::new(100.0, 100.0));
        assert_eq!(cam.offset(), Vec2::new(10.0, 20.0));
    }
}
