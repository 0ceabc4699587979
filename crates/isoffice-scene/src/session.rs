//! Caller-owned office session.
//!
//! Holds the configuration until a viewport is known, then owns the
//! [`OfficeScene`]. Work queued with [`OfficeSession::on_ready`] runs once the
//! scene exists; everything else forwards to the scene and is a no-op before.

use isoffice_engine::coords::Viewport;
use isoffice_engine::input::{InputFrame, InputState};

use crate::config::OfficeConfig;
use crate::office::{OfficeScene, SceneError, WorkerInfo};

pub type ReadyCallback = Box<dyn FnOnce(&mut OfficeScene)>;

pub struct OfficeSession {
    config: OfficeConfig,
    scene: Option<OfficeScene>,
    pending: Vec<ReadyCallback>,
}

impl OfficeSession {
    pub fn new(config: OfficeConfig) -> Self {
        Self { config, scene: None, pending: Vec::new() }
    }

    #[inline]
    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Option<&OfficeScene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut OfficeScene> {
        self.scene.as_mut()
    }

    /// Runs `f` once the scene is ready: immediately if it already is,
    /// otherwise right after [`attach`](Self::attach), in registration order.
    pub fn on_ready<F>(&mut self, f: F)
    where
        F: FnOnce(&mut OfficeScene) + 'static,
    {
        match self.scene.as_mut() {
            Some(scene) => f(scene),
            None => self.pending.push(Box::new(f)),
        }
    }

    /// Builds the scene for `viewport` and flushes ready callbacks.
    ///
    /// Returns `Ok(false)` without touching anything when already attached.
    pub fn attach(&mut self, viewport: Viewport) -> Result<bool, SceneError> {
        if self.scene.is_some() {
            log::warn!("office session already attached; ignoring");
            return Ok(false);
        }

        let scene = self.scene.insert(OfficeScene::create(self.config.clone(), viewport)?);
        for f in self.pending.drain(..) {
            f(scene);
        }
        Ok(true)
    }

    /// Drops the scene and any callbacks still waiting for it. The session
    /// can be attached again afterwards.
    pub fn destroy(&mut self) {
        if self.scene.take().is_some() {
            log::info!("office session destroyed");
        }
        self.pending.clear();
    }

    // ── forwarding ────────────────────────────────────────────────────────

    pub fn update(&mut self, dt: f32) {
        if let Some(scene) = self.scene.as_mut() {
            scene.update(dt);
        }
    }

    pub fn handle_input(&mut self, input: &InputState, frame: &InputFrame) -> bool {
        self.scene.as_mut().is_some_and(|s| s.handle_input(input, frame))
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(scene) = self.scene.as_mut() {
            scene.resize(viewport);
        }
    }

    pub fn zoom_in(&mut self) -> bool {
        self.scene.as_mut().is_some_and(OfficeScene::zoom_in)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.scene.as_mut().is_some_and(OfficeScene::zoom_out)
    }

    pub fn reset_view(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.reset_view();
        }
    }

    pub fn add_worker(&mut self, worker: &WorkerInfo) {
        if let Some(scene) = self.scene.as_mut() {
            scene.add_worker(worker);
        }
    }

    pub fn remove_worker(&mut self, id: &str) {
        if let Some(scene) = self.scene.as_mut() {
            scene.remove_worker(id);
        }
    }

    pub fn update_worker(&mut self, worker: &WorkerInfo) {
        if let Some(scene) = self.scene.as_mut() {
            scene.update_worker(worker);
        }
    }

    pub fn sync_workers(&mut self, workers: &[WorkerInfo]) {
        if let Some(scene) = self.scene.as_mut() {
            scene.sync_workers(workers);
        }
    }
}

impl Default for OfficeSession {
    fn default() -> Self {
        Self::new(OfficeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn callbacks_wait_for_attach_and_run_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut session = OfficeSession::default();

        for i in 0..3 {
            let log = Rc::clone(&log);
            session.on_ready(move |_| log.borrow_mut().push(i));
        }
        assert!(log.borrow().is_empty());
        assert!(!session.is_ready());

        assert!(session.attach(viewport()).expect("attach"));
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn callback_after_attach_runs_immediately() {
        let mut session = OfficeSession::default();
        session.attach(viewport()).expect("attach");

        let hit = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&hit);
        session.on_ready(move |scene| {
            scene.zoom_in();
            *flag.borrow_mut() = true;
        });
        assert!(*hit.borrow());
        assert!(session.scene().is_some_and(|s| s.camera().zoom() > 1.2));
    }

    #[test]
    fn second_attach_is_ignored() {
        let mut session = OfficeSession::default();
        assert!(session.attach(viewport()).expect("attach"));
        session.zoom_in();
        assert!(!session.attach(Viewport::new(100.0, 100.0)).expect("attach"));
        // Still the first scene.
        assert_eq!(session.scene().map(|s| s.viewport()), Some(viewport()));
    }

    #[test]
    fn forwarding_is_a_no_op_before_attach() {
        let mut session = OfficeSession::default();
        assert!(!session.zoom_in());
        assert!(!session.zoom_out());
        session.reset_view();
        session.update(0.016);
        session.resize(viewport());
        assert!(session.scene_mut().is_none());
    }

    #[test]
    fn failed_attach_keeps_callbacks_queued() {
        let mut config = OfficeConfig::default();
        config.camera.min_zoom = 3.0;
        let mut session = OfficeSession::new(config);

        let ran = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&ran);
        session.on_ready(move |_| *counter.borrow_mut() += 1);

        assert!(session.attach(viewport()).is_err());
        assert!(!session.is_ready());
        assert_eq!(*ran.borrow(), 0);
    }

    #[test]
    fn destroy_drops_scene_and_pending_work() {
        let ran = Rc::new(RefCell::new(false));
        let mut session = OfficeSession::default();
        let flag = Rc::clone(&ran);
        session.on_ready(move |_| *flag.borrow_mut() = true);

        session.destroy();
        session.attach(viewport()).expect("attach");
        assert!(!*ran.borrow());

        session.destroy();
        assert!(!session.is_ready());
    }
}
