//! Draw-command stream types.
//!
//! Responsibilities:
//! - store backend-agnostic draw commands for one frame
//! - preserve insertion order, which is the paint order (rings are drawn
//!   innermost-first so later, outer rings sit on top when gaps are thin)
//! - keep shape-specific payloads and push helpers per shape file under
//!   `scene::shapes`
//!
//! Extending the scene:
//! - add a shape module under `scene::shapes::*`
//! - add a variant to [`DrawCmd`]
//! - implement the push helper inside that shape module

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
