use core::cmp::Ordering;

/// Z-ordering key for draw items.
///
/// `layer` groups items the way scene containers do (floor, walls, furniture,
/// ...). Inside a layer, `depth` is the painter's key: higher values appear
/// on top. Depth compares with `f32::total_cmp`, so the order is total even
/// for NaN.
#[derive(Debug, Copy, Clone, Default)]
pub struct ZIndex {
    pub layer: i32,
    pub depth: f32,
}

impl ZIndex {
    #[inline]
    pub const fn new(layer: i32, depth: f32) -> Self {
        Self { layer, depth }
    }

    /// Layer-only index (depth 0).
    #[inline]
    pub const fn layer(layer: i32) -> Self {
        Self { layer, depth: 0.0 }
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.layer.cmp(&other.layer) {
            Ordering::Equal => self.depth.total_cmp(&other.depth),
            o => o,
        }
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ZIndex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ZIndex {}
