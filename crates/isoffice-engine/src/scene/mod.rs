//! Per-frame draw stream.
//!
//! Scene code records polygons, ellipses and lines with a [`ZIndex`]; the
//! [`DrawList`] hands them to the renderer back to front (layer, depth key,
//! then insertion order). Push helpers live next to each command under
//! `shapes`.

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey};
pub use shapes::Stroke;
pub use z_index::ZIndex;
