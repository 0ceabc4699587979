//! Painter's-order depth keys for isometric drawables.
//!
//! Drawables further south on the grid (larger `gx + gy`) must be painted
//! later. The sorter does not reorder anything itself: it computes a numeric
//! key per drawable and hands it to a [`DepthTarget`], whose draw list does
//! the actual ordering.

use thiserror::Error;

use crate::arena::DrawHandle;

/// Key distance between neighbouring `gx + gy` diagonals.
///
/// Layer offsets must stay below this so they never spill into the next
/// diagonal's bucket.
pub const DEFAULT_CELL_STRIDE: u32 = 100;

/// `(gx + gy) * DEFAULT_CELL_STRIDE + layer_offset`.
#[inline]
pub fn depth_key(gx: f64, gy: f64, layer_offset: u32) -> f64 {
    SorterConfig::default().depth_key(gx, gy, layer_offset)
}

/// Receiver of depth keys, usually the store that owns the drawables.
pub trait DepthTarget {
    /// Applies `depth` as the draw-order value of `handle`. Higher draws on top.
    fn set_depth(&mut self, handle: DrawHandle, depth: f64);
}

/// What `remove` / `update_position` do with a handle that was never added.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MissingEntryPolicy {
    /// Treat it as a no-op.
    Ignore,
    /// Return [`DepthError::NotRegistered`].
    #[default]
    Report,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SorterConfig {
    pub cell_stride: u32,
    pub missing: MissingEntryPolicy,
}

impl SorterConfig {
    #[inline]
    pub fn depth_key(&self, gx: f64, gy: f64, layer_offset: u32) -> f64 {
        (gx + gy) * self.cell_stride as f64 + layer_offset as f64
    }
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            cell_stride: DEFAULT_CELL_STRIDE,
            missing: MissingEntryPolicy::Report,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum DepthError {
    #[error("drawable {0} is not registered with the depth sorter")]
    NotRegistered(DrawHandle),

    #[error("layer offset {layer} must be below the cell stride {stride}")]
    LayerOutOfRange { layer: u32, stride: u32 },
}

/// A drawable's grid placement as seen by the sorter.
///
/// The sorter never owns the drawable; `handle` is resolved by the target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawableEntry {
    pub handle: DrawHandle,
    pub gx: f64,
    pub gy: f64,
    pub layer_offset: u32,
}

/// Registry of drawables plus a dirty flag.
///
/// `sort` is meant to run every frame: it is a flag check unless something was
/// added, removed or moved since the previous pass.
#[derive(Debug, Default)]
pub struct DepthSorter {
    entries: Vec<DrawableEntry>,
    dirty: bool,
    config: SorterConfig,
}

impl DepthSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SorterConfig) -> Self {
        Self { entries: Vec::new(), dirty: false, config }
    }

    #[inline]
    pub fn config(&self) -> SorterConfig {
        self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn entries(&self) -> &[DrawableEntry] {
        &self.entries
    }

    /// Registers `handle` at `(gx, gy)` with an intra-cell `layer_offset`.
    ///
    /// Adding the same handle twice creates two independent entries.
    pub fn add(
        &mut self,
        handle: DrawHandle,
        gx: f64,
        gy: f64,
        layer_offset: u32,
    ) -> Result<(), DepthError> {
        if layer_offset >= self.config.cell_stride {
            return Err(DepthError::LayerOutOfRange {
                layer: layer_offset,
                stride: self.config.cell_stride,
            });
        }

        self.entries.push(DrawableEntry { handle, gx, gy, layer_offset });
        self.dirty = true;
        Ok(())
    }

    /// Removes the first entry for `handle`.
    pub fn remove(&mut self, handle: DrawHandle) -> Result<(), DepthError> {
        match self.entries.iter().position(|e| e.handle == handle) {
            Some(i) => {
                self.entries.remove(i);
                self.dirty = true;
                Ok(())
            }
            None => self.missing(handle, "remove"),
        }
    }

    /// Moves the first entry for `handle` to `(gx, gy)`.
    pub fn update_position(
        &mut self,
        handle: DrawHandle,
        gx: f64,
        gy: f64,
    ) -> Result<(), DepthError> {
        match self.entries.iter_mut().find(|e| e.handle == handle) {
            Some(entry) => {
                entry.gx = gx;
                entry.gy = gy;
                self.dirty = true;
                Ok(())
            }
            None => self.missing(handle, "update_position"),
        }
    }

    /// Forces the next [`sort`](Self::sort) to recompute every key.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Pushes fresh depth keys into `target` if anything changed.
    ///
    /// Returns `true` when keys were applied, `false` when the pass was skipped.
    /// Entries with equal keys keep whatever relative order the target's draw
    /// list gives them.
    pub fn sort<T>(&mut self, target: &mut T) -> bool
    where
        T: DepthTarget + ?Sized,
    {
        if !self.dirty {
            return false;
        }

        for e in &self.entries {
            let key = self.config.depth_key(e.gx, e.gy, e.layer_offset);
            target.set_depth(e.handle, key);
        }

        log::trace!("depth sort applied {} keys", self.entries.len());
        self.dirty = false;
        true
    }

    /// Drops every entry. Sorting an empty registry is a no-op.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn missing(&self, handle: DrawHandle, op: &str) -> Result<(), DepthError> {
        match self.config.missing {
            MissingEntryPolicy::Ignore => {
                log::debug!("depth sorter: {op} on unregistered drawable {handle} ignored");
                Ok(())
            }
            MissingEntryPolicy::Report => Err(DepthError::NotRegistered(handle)),
        }
    }
}
