//! The assembled office: static room, depth-sorted furniture and the camera.

use isoffice_engine::coords::{Vec2, Viewport};
use isoffice_engine::input::{
    InputEvent, InputFrame, InputState, Key, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
use isoffice_engine::paint::Color;
use isoffice_engine::render::View2D;
use isoffice_engine::scene::DrawList;
use isoffice_grid::{DepthError, DepthSorter, DrawHandle, GridPos, IsoProjection, ScreenPoint};
use thiserror::Error;

use crate::camera::Camera;
use crate::config::{ConfigError, OfficeConfig};
use crate::geometry;
use crate::node::{NodeStore, SceneNode};

/// Sorter layer offsets inside one `gx + gy` diagonal.
pub const CHAIR_SORT_LAYER: u32 = 5;
pub const TABLE_SORT_LAYER: u32 = 10;

/// Screen pixels one arrow-key press pans by.
const KEY_PAN_STEP: f32 = 32.0;

/// Windows paint over the wall faces they sit on.
const WINDOW_DEPTH: f64 = 50.0;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid office configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Depth(#[from] DepthError),
}

/// A worker as reported by whatever drives the office.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerInfo {
    pub id: String,
    pub name: String,
    pub position: GridPos,
}

pub struct OfficeScene {
    config: OfficeConfig,
    projection: IsoProjection,
    viewport: Viewport,

    nodes: NodeStore,
    sorter: DepthSorter,
    draw_list: DrawList,
    camera: Camera,

    table: DrawHandle,
    chairs: Vec<DrawHandle>,

    /// Pointer position at the end of the last handled frame.
    pointer: Option<Vec2>,
}

impl OfficeScene {
    /// Validates `config`, builds the room and centres the camera on it.
    pub fn create(config: OfficeConfig, viewport: Viewport) -> Result<Self, SceneError> {
        config.validate()?;

        let projection = IsoProjection::new(config.tile);
        let mut nodes = NodeStore::new();
        let mut sorter = DepthSorter::new();

        build_room(&config, &projection, &mut nodes);

        let layers = config.layers;
        let palette = &config.palette;

        // Furniture starts at its sorted depth so the first frame is already ordered.
        let keys = sorter.config();
        let table_area = config.room.table;
        let centre = table_area.center();
        let table = nodes.spawn(
            SceneNode::new(layers.furniture, geometry::table(&projection, &table_area, palette))
                .with_depth(keys.depth_key(centre.gx, centre.gy, TABLE_SORT_LAYER)),
        );
        sorter.add(table, centre.gx, centre.gy, TABLE_SORT_LAYER)?;

        let mut chairs = Vec::with_capacity(config.chairs.len());
        for placement in &config.chairs {
            let (gx, gy) = (placement.gx as f64, placement.gy as f64);
            let h = nodes.spawn(
                SceneNode::new(layers.furniture, geometry::chair(&projection, placement, palette))
                    .with_depth(keys.depth_key(gx, gy, CHAIR_SORT_LAYER)),
            );
            sorter.add(h, gx, gy, CHAIR_SORT_LAYER)?;
            chairs.push(h);
        }

        let mut scene = Self {
            camera: Camera::new(&config.camera),
            config,
            projection,
            viewport,
            nodes,
            sorter,
            draw_list: DrawList::new(),
            pointer: None,
            table,
            chairs,
        };

        scene.center_camera();
        scene.sorter.sort(&mut scene.nodes);

        log::info!(
            "office scene created: {}x{} room, {} nodes, {} sorted",
            scene.config.room.width,
            scene.config.room.height,
            scene.nodes.len(),
            scene.sorter.len(),
        );
        Ok(scene)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    #[inline]
    pub fn projection(&self) -> &IsoProjection {
        &self.projection
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    #[inline]
    pub fn sorter(&self) -> &DepthSorter {
        &self.sorter
    }

    #[inline]
    pub fn table(&self) -> DrawHandle {
        self.table
    }

    #[inline]
    pub fn chairs(&self) -> &[DrawHandle] {
        &self.chairs
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn view(&self) -> View2D {
        self.camera.view()
    }

    pub fn background(&self) -> Color {
        Color::from_hex(self.config.palette.background, 1.0)
    }

    /// The draw list for the current frame, re-recorded only when nodes changed.
    pub fn draw_list(&mut self) -> &mut DrawList {
        if self.nodes.is_dirty() {
            self.nodes.record(&mut self.draw_list);
        }
        &mut self.draw_list
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Applies pending depth changes. Cheap when nothing moved.
    pub fn update(&mut self, _dt: f32) {
        self.sorter.sort(&mut self.nodes);
    }

    /// Wheel zoom around the pointer, right/middle-button drag panning, `+` / `-`
    /// zoom steps, `0` / `R` / Home to reset and arrow keys to pan. Returns
    /// whether the view changed.
    pub fn handle_input(&mut self, input: &InputState, frame: &InputFrame) -> bool {
        let camera_cfg = self.config.camera;
        let mut changed = false;
        let end_of_frame = input.pointer_pos.map(|(x, y)| Vec2::new(x, y));
        // Tracked through the events so wheel notches pivot where they happened.
        let mut pointer = self.pointer.or(end_of_frame);

        for ev in &frame.events {
            match ev {
                InputEvent::MouseWheel { delta, .. } => {
                    let lines = delta.lines_y();
                    if lines == 0.0 {
                        continue;
                    }
                    let factor = if lines > 0.0 {
                        camera_cfg.wheel_zoom_in
                    } else {
                        camera_cfg.wheel_zoom_out
                    };
                    let pivot = pointer.unwrap_or_else(|| self.viewport.center());
                    changed |= self.camera.zoom_at(factor, pivot);
                }

                InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, .. }) => {
                    pointer = Some(Vec2::new(*x, *y));
                    match state {
                        MouseButtonState::Pressed
                            if camera_cfg.drag_enabled
                                && matches!(button, MouseButton::Right | MouseButton::Middle) =>
                        {
                            self.camera.begin_drag(Vec2::new(*x, *y));
                        }
                        MouseButtonState::Released => self.camera.end_drag(),
                        _ => {}
                    }
                }

                InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                    pointer = Some(Vec2::new(*x, *y));
                    changed |= self.camera.drag_to(Vec2::new(*x, *y));
                }

                InputEvent::PointerLeft => pointer = None,

                _ => {}
            }
        }

        self.pointer = end_of_frame;

        if frame.key_pressed(Key::Plus) {
            changed |= self.zoom_in();
        }
        if frame.key_pressed(Key::Minus) {
            changed |= self.zoom_out();
        }
        if [Key::Digit0, Key::R, Key::Home].into_iter().any(|k| frame.key_pressed(k)) {
            self.reset_view();
            changed = true;
        }

        let pan = [
            (Key::ArrowLeft, Vec2::new(KEY_PAN_STEP, 0.0)),
            (Key::ArrowRight, Vec2::new(-KEY_PAN_STEP, 0.0)),
            (Key::ArrowUp, Vec2::new(0.0, KEY_PAN_STEP)),
            (Key::ArrowDown, Vec2::new(0.0, -KEY_PAN_STEP)),
        ]
        .into_iter()
        .filter(|(k, _)| frame.key_pressed(*k))
        .fold(Vec2::zero(), |acc, (_, d)| acc + d);
        if pan != Vec2::zero() {
            self.camera.pan(pan);
            changed = true;
        }

        changed
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.camera.is_dragging()
    }

    // ── camera ────────────────────────────────────────────────────────────

    /// One zoom step in around the viewport centre.
    pub fn zoom_in(&mut self) -> bool {
        let factor = self.config.camera.step_zoom_in;
        self.camera.zoom_at(factor, self.viewport.center())
    }

    pub fn zoom_out(&mut self) -> bool {
        let factor = self.config.camera.step_zoom_out;
        self.camera.zoom_at(factor, self.viewport.center())
    }

    /// Default zoom, room centred.
    pub fn reset_view(&mut self) {
        self.camera.end_drag();
        self.camera.set_zoom(self.config.camera.default_zoom);
        self.center_camera();
    }

    /// Keeps the scene where it was relative to the viewport centre.
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_valid() || viewport == self.viewport {
            return;
        }
        self.camera.pan(viewport.center() - self.viewport.center());
        log::debug!(
            "office viewport {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
    }

    fn center_camera(&mut self) {
        let centre = self.projection.project(self.config.room.bounds().center());
        self.camera.center_on(
            Vec2::new(centre.x as f32, centre.y as f32),
            self.viewport,
            self.config.camera.center_bias_y,
        );
    }

    // ── picking ───────────────────────────────────────────────────────────

    /// Room cell under a screen point, if any.
    pub fn tile_at(&self, screen: Vec2) -> Option<(u32, u32)> {
        let world = self.camera.screen_to_world(screen);
        let grid = self.projection.unproject(ScreenPoint::new(world.x as f64, world.y as f64));
        // Tile diamonds are centred on integer coordinates.
        let (gx, gy) = grid.offset(0.5, 0.5).cell();
        let cell = GridPos::new(gx as f64, gy as f64);
        self.config.room.bounds().contains(cell).then_some((gx as u32, gy as u32))
    }

    // ── dynamic nodes ─────────────────────────────────────────────────────

    /// Adds a node drawn in insertion order within its layer.
    pub fn spawn(&mut self, node: SceneNode) -> DrawHandle {
        self.nodes.spawn(node)
    }

    /// Adds a node whose depth follows its grid position.
    pub fn spawn_at(
        &mut self,
        node: SceneNode,
        pos: GridPos,
        layer_offset: u32,
    ) -> Result<DrawHandle, SceneError> {
        let h = self.nodes.spawn(node);
        if let Err(e) = self.sorter.add(h, pos.gx, pos.gy, layer_offset) {
            self.nodes.despawn(h);
            return Err(e.into());
        }
        Ok(h)
    }

    /// Removes a node and its sorter entry, if it had one.
    pub fn despawn(&mut self, handle: DrawHandle) -> Option<SceneNode> {
        match self.sorter.remove(handle) {
            Ok(()) | Err(DepthError::NotRegistered(_)) => {}
            Err(e) => log::warn!("despawn {handle}: {e}"),
        }
        self.nodes.despawn(handle)
    }

    /// Moves a sorted node to a new grid position; its depth updates on the
    /// next [`update`](Self::update).
    pub fn move_node(&mut self, handle: DrawHandle, pos: GridPos) -> Result<(), SceneError> {
        self.sorter.update_position(handle, pos.gx, pos.gy)?;
        Ok(())
    }

    // ── workers ───────────────────────────────────────────────────────────

    pub fn add_worker(&mut self, worker: &WorkerInfo) {
        log::info!(
            "add worker {} ({}) at ({}, {})",
            worker.id,
            worker.name,
            worker.position.gx,
            worker.position.gy
        );
    }

    pub fn remove_worker(&mut self, id: &str) {
        log::info!("remove worker {id}");
    }

    pub fn update_worker(&mut self, worker: &WorkerInfo) {
        log::info!(
            "update worker {} to ({}, {})",
            worker.id,
            worker.position.gx,
            worker.position.gy
        );
    }

    pub fn sync_workers(&mut self, workers: &[WorkerInfo]) {
        log::info!("sync {} workers", workers.len());
    }
}

/// Floor, carpet, walls and windows. None of it moves, so it is not sorted.
fn build_room(config: &OfficeConfig, proj: &IsoProjection, nodes: &mut NodeStore) {
    let room = &config.room;
    let palette = &config.palette;
    let layers = config.layers;

    let floor = room
        .bounds()
        .cells()
        .flat_map(|(gx, gy)| geometry::floor_tile(proj, gx, gy, palette))
        .collect();
    nodes.spawn(SceneNode::new(layers.floor, floor));

    let carpet = room
        .carpet
        .cells()
        .flat_map(|(gx, gy)| geometry::carpet_tile(proj, gx, gy, &room.carpet, palette))
        .collect();
    nodes.spawn(SceneNode::new(layers.carpet, carpet));

    let back_wall = (0..room.width)
        .flat_map(|i| geometry::back_wall_segment(proj, i, room.wall_height, palette))
        .collect();
    nodes.spawn(SceneNode::new(layers.wall, back_wall));

    let side_wall = (0..room.height)
        .flat_map(|j| geometry::side_wall_segment(proj, j, room.wall_height, palette))
        .collect();
    nodes.spawn(SceneNode::new(layers.wall, side_wall));

    let windows = room
        .back_windows
        .iter()
        .flat_map(|&gx| geometry::back_window(proj, gx, palette))
        .chain(room.side_windows.iter().flat_map(|&gy| geometry::side_window(proj, gy, palette)))
        .collect();
    nodes.spawn(SceneNode::new(layers.wall, windows).with_depth(WINDOW_DEPTH));
}

#[cfg(test)]
mod tests {
    use isoffice_engine::input::{Modifiers, MouseWheelDelta};

    use super::*;
    use crate::config::{ChairPlacement, Footprint};

    fn scene() -> OfficeScene {
        OfficeScene::create(OfficeConfig::default(), Viewport::new(800.0, 600.0))
            .expect("default office")
    }

    fn depth(scene: &OfficeScene, h: DrawHandle) -> f64 {
        scene.nodes().get(h).map(|n| n.depth).unwrap_or(f64::NAN)
    }

    fn wheel(lines: f32) -> InputEvent {
        InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: lines },
            modifiers: Modifiers::default(),
        }
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn apply(input: &mut InputState, events: Vec<InputEvent>) -> InputFrame {
        let mut frame = InputFrame::default();
        for ev in events {
            input.apply_event(&mut frame, ev);
        }
        frame
    }

    #[test]
    fn builds_room_and_furniture() {
        let s = scene();
        // floor, carpet, two walls, windows, table, 11 chairs
        assert_eq!(s.nodes().len(), 5 + 1 + 11);
        assert_eq!(s.sorter().len(), 12);
        assert!(!s.sorter().is_dirty());
    }

    #[test]
    fn furniture_depth_follows_the_grid() {
        let s = scene();
        assert_eq!(depth(&s, s.table()), 1110.0);
        // (5, 2) behind the table, (5, 7) in front of it.
        assert_eq!(depth(&s, s.chairs()[0]), 705.0);
        assert_eq!(depth(&s, s.chairs()[3]), 1205.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = OfficeConfig::default();
        config.room.table = Footprint::new(12, 8, 5, 3);
        let err = OfficeScene::create(config, Viewport::new(800.0, 600.0)).err();
        assert!(matches!(err, Some(SceneError::Config(ConfigError::OutsideRoom { .. }))));

        let mut config = OfficeConfig::default();
        config.chairs.push(ChairPlacement::new(14, 0, isoffice_grid::Facing::SE));
        assert!(OfficeScene::create(config, Viewport::new(800.0, 600.0)).is_err());
    }

    #[test]
    fn camera_starts_centred_on_the_room() {
        let s = scene();
        let centre = s.projection().project(s.config().room.bounds().center());
        let on_screen = s.camera().world_to_screen(Vec2::new(centre.x as f32, centre.y as f32));
        assert!((on_screen - Vec2::new(400.0, 270.0)).length() < 1e-3);
        assert_eq!(s.camera().zoom(), 1.2);
    }

    #[test]
    fn moving_a_chair_reorders_it_on_update() {
        let mut s = scene();
        let chair = s.chairs()[0];
        s.move_node(chair, GridPos::new(9.0, 8.0)).expect("registered");
        assert_eq!(depth(&s, chair), 705.0);

        s.update(0.016);
        assert_eq!(depth(&s, chair), 1705.0);
    }

    #[test]
    fn despawn_drops_sorter_entry() {
        let mut s = scene();
        let chair = s.chairs()[1];
        assert!(s.despawn(chair).is_some());
        assert_eq!(s.sorter().len(), 11);
        assert!(matches!(
            s.move_node(chair, GridPos::new(1.0, 1.0)),
            Err(SceneError::Depth(DepthError::NotRegistered(_)))
        ));
    }

    #[test]
    fn despawn_of_unsorted_node_leaves_sorter_alone() {
        let mut s = scene();
        let before = s.nodes().len();
        let h = s.spawn(SceneNode::new(400, vec![]));
        assert!(s.despawn(h).is_some());
        assert_eq!(s.nodes().len(), before);
        assert_eq!(s.sorter().len(), 12);
        assert!(s.despawn(h).is_none());
    }

    #[test]
    fn furniture_depth_matches_its_sort_key() {
        let s = scene();
        let table = s.config().room.table.center();
        assert_eq!(
            depth(&s, s.table()),
            isoffice_grid::depth_key(table.gx, table.gy, TABLE_SORT_LAYER)
        );
        for (h, p) in s.chairs().iter().zip(&s.config().chairs) {
            assert_eq!(
                depth(&s, *h),
                isoffice_grid::depth_key(p.gx as f64, p.gy as f64, CHAIR_SORT_LAYER)
            );
        }
    }

    #[test]
    fn spawn_at_rejects_oversized_layer() {
        let mut s = scene();
        let before = s.nodes().len();
        let res = s.spawn_at(SceneNode::new(300, vec![]), GridPos::new(1.0, 1.0), 100);
        assert!(matches!(res, Err(SceneError::Depth(DepthError::LayerOutOfRange { .. }))));
        assert_eq!(s.nodes().len(), before);
    }

    #[test]
    fn draw_list_is_recorded_once_per_change() {
        let mut s = scene();
        let first = s.draw_list().len();
        assert!(first > 0);
        assert!(!s.nodes().is_dirty());

        s.spawn(SceneNode::new(400, vec![geometry::Shape::line(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(1.0, 1.0),
            1.0,
            geometry::Fill::solid(0),
        )]));
        assert_eq!(s.draw_list().len(), first + 1);
    }

    #[test]
    fn wheel_zooms_around_the_pointer() {
        let mut s = scene();
        let mut input = InputState::default();
        let pointer = Vec2::new(200.0, 150.0);
        let under = s.camera().screen_to_world(pointer);

        let frame = apply(
            &mut input,
            vec![InputEvent::PointerMoved(PointerMoveEvent { x: 200.0, y: 150.0 }), wheel(1.0)],
        );
        assert!(s.handle_input(&input, &frame));
        assert!((s.camera().zoom() - 1.32).abs() < 1e-5);
        assert!((s.camera().world_to_screen(under) - pointer).length() < 1e-3);

        let frame = apply(&mut input, vec![wheel(-1.0)]);
        s.handle_input(&input, &frame);
        assert!((s.camera().zoom() - 1.188).abs() < 1e-5);
    }

    #[test]
    fn wheel_pivot_is_the_pointer_at_wheel_time() {
        let mut s = scene();
        let mut input = InputState::default();
        let pointer = Vec2::new(200.0, 150.0);
        let under = s.camera().screen_to_world(pointer);

        let frame = apply(
            &mut input,
            vec![
                InputEvent::PointerMoved(PointerMoveEvent { x: 200.0, y: 150.0 }),
                wheel(1.0),
                InputEvent::PointerMoved(PointerMoveEvent { x: 700.0, y: 500.0 }),
            ],
        );
        assert!(s.handle_input(&input, &frame));
        assert!((s.camera().world_to_screen(under) - pointer).length() < 1e-3);
    }

    #[test]
    fn wheel_pivot_carries_over_from_the_previous_frame() {
        let mut s = scene();
        let mut input = InputState::default();
        let frame = apply(
            &mut input,
            vec![InputEvent::PointerMoved(PointerMoveEvent { x: 300.0, y: 100.0 })],
        );
        s.handle_input(&input, &frame);

        let pointer = Vec2::new(300.0, 100.0);
        let under = s.camera().screen_to_world(pointer);
        let frame = apply(
            &mut input,
            vec![wheel(-1.0), InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 10.0 })],
        );
        assert!(s.handle_input(&input, &frame));
        assert!((s.camera().world_to_screen(under) - pointer).length() < 1e-3);
    }

    #[test]
    fn right_drag_pans_and_release_stops() {
        let mut s = scene();
        let mut input = InputState::default();
        let start = s.camera().offset();

        let frame = apply(
            &mut input,
            vec![
                button(MouseButton::Right, MouseButtonState::Pressed, 100.0, 100.0),
                InputEvent::PointerMoved(PointerMoveEvent { x: 130.0, y: 90.0 }),
            ],
        );
        s.handle_input(&input, &frame);
        assert!(s.is_dragging());
        assert!((s.camera().offset() - start - Vec2::new(30.0, -10.0)).length() < 1e-3);

        let frame = apply(
            &mut input,
            vec![
                button(MouseButton::Right, MouseButtonState::Released, 130.0, 90.0),
                InputEvent::PointerMoved(PointerMoveEvent { x: 200.0, y: 200.0 }),
            ],
        );
        s.handle_input(&input, &frame);
        assert!(!s.is_dragging());
        assert!((s.camera().offset() - start - Vec2::new(30.0, -10.0)).length() < 1e-3);
    }

    #[test]
    fn left_button_does_not_drag() {
        let mut s = scene();
        let mut input = InputState::default();
        let frame = apply(
            &mut input,
            vec![button(MouseButton::Left, MouseButtonState::Pressed, 10.0, 10.0)],
        );
        s.handle_input(&input, &frame);
        assert!(!s.is_dragging());
    }

    #[test]
    fn keys_pan_and_reset() {
        let mut s = scene();
        let mut input = InputState::default();
        let start = s.camera().offset();
        let key = |key: Key| InputEvent::Key {
            key,
            state: isoffice_engine::input::KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        };

        let frame = apply(&mut input, vec![key(Key::ArrowLeft), key(Key::ArrowUp)]);
        assert!(s.handle_input(&input, &frame));
        assert!((s.camera().offset() - start - Vec2::new(32.0, 32.0)).length() < 1e-3);

        let frame = apply(&mut input, vec![key(Key::R)]);
        assert!(s.handle_input(&input, &frame));
        assert!((s.camera().offset() - start).length() < 1e-3);
    }

    #[test]
    fn zoom_steps_and_reset() {
        let mut s = scene();
        assert!(s.zoom_in());
        assert!((s.camera().zoom() - 1.44).abs() < 1e-5);
        s.zoom_out();
        s.zoom_out();
        assert!(s.camera().zoom() < 1.2);

        let start = scene().camera().offset();
        s.reset_view();
        assert_eq!(s.camera().zoom(), 1.2);
        assert!((s.camera().offset() - start).length() < 1e-3);
    }

    #[test]
    fn resize_keeps_the_room_centred() {
        let mut s = scene();
        let centre = s.projection().project(s.config().room.bounds().center());
        let centre = Vec2::new(centre.x as f32, centre.y as f32);

        s.resize(Viewport::new(1000.0, 800.0));
        let on_screen = s.camera().world_to_screen(centre);
        assert!((on_screen - Vec2::new(500.0, 370.0)).length() < 1e-3);

        s.resize(Viewport::new(0.0, 0.0));
        assert_eq!(s.viewport(), Viewport::new(1000.0, 800.0));
    }

    #[test]
    fn tile_at_inverts_the_camera() {
        let s = scene();
        let world = s.projection().grid_to_screen(3.0, 4.0);
        let screen = s.camera().world_to_screen(Vec2::new(world.x as f32, world.y as f32));
        assert_eq!(s.tile_at(screen), Some((3, 4)));

        // Just inside the east corner of the same diamond.
        let near_edge = s
            .camera()
            .world_to_screen(Vec2::new(world.x as f32 + 30.0, world.y as f32));
        assert_eq!(s.tile_at(near_edge), Some((3, 4)));

        assert_eq!(s.tile_at(Vec2::new(-5_000.0, -5_000.0)), None);
    }
}
