//! Tick scheduling.
//!
//! The widget's redraw loop is an explicit polled schedule rather than a
//! hidden timer handle: the host drives [`Ticker::due_ticks`] from its own
//! event loop, and start/stop are plain idempotent state transitions. One
//! ticker per widget; everything runs single-threaded.

mod ticker;

pub use ticker::{DRAW_INTERVAL, Ticker};
