//! Annular chart — animated concentric progress rings on top of
//! `annular-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::time::Instant;
//! use annular_chart::prelude::*;
//!
//! let mut tree = HostTree::new();
//! let body = tree.insert(None, Vec2::zero(), Vec2::new(800.0, 600.0));
//! let el = tree.insert(Some(body), Vec2::new(100.0, 50.0), Vec2::new(300.0, 300.0));
//! tree.set_attr(el, ATTR_VALUE, "75");
//! tree.set_attr(el, ATTR_UNITS, "%");
//!
//! let mut surface = RecordingSurface::new(Vec2::new(300.0, 300.0));
//! let mut labels = RecordingLabelHost::new();
//! let mut chart = PieChart::mount(
//!     &mut tree, el,
//!     ChartOptions::default(), Env::default(),
//!     &Palette::default(), &mut labels, Instant::now(),
//! )?;
//!
//! // In your event loop:
//! chart.poll(Instant::now(), &mut surface, &mut labels);
//! ```
//!
//! The lower layers are usable on their own: [`circle::ProgressCircle`] owns
//! any number of [`ring::Ring`]s over a caller-supplied context, which is how
//! multi-ring monitors with info leader lines are built.

pub mod chart;
pub mod circle;
pub mod host;
pub mod ring;
pub mod waypoint;

/// Common entry points — import this in host-shell code.
pub mod prelude {
    pub use crate::chart::{
        ATTR_COLOR, ATTR_LABEL, ATTR_UNITS, ATTR_VALUE, ATTR_WIDTH, ChartOptions, Env,
        MountError, Phase, PieChart,
    };
    pub use crate::circle::{ProgressCircle, RingParams};
    pub use crate::host::{HostTree, NodeId};
    pub use crate::waypoint::{Viewport, Waypoint};

    // Re-export the engine primitives every host shell needs.
    pub use annular_engine::coords::Vec2;
    pub use annular_engine::paint::{Color, Palette};
    pub use annular_engine::surface::{
        LabelHost, RecordingLabelHost, RecordingSurface, Surface,
    };
}
