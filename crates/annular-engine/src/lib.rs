//! Annular engine crate.
//!
//! Rendering-agnostic primitives for the animated progress-circle widget:
//! geometry, paint, the draw-command stream, render-target traits, tick
//! scheduling, and text metrics. Nothing in here touches a concrete backend;
//! the chart layer drives these types through the `surface` traits so it can
//! run against the recording backend in tests just as well as against a real
//! renderer.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
pub mod text;
pub mod time;
