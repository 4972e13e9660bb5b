//! Text measurement.
//!
//! Labels are positioned by the widget but rendered by the host, so the only
//! text capability the engine needs is measurement: line height for vertical
//! centering and advance width for layout decisions.

mod metrics;

pub use metrics::{FontLoadError, TextMetrics};
