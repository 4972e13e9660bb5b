//! Shape payloads and their `DrawList` push helpers, one file per shape.

pub mod arc;
pub mod polyline;

pub use arc::ArcCmd;
pub use polyline::PolylineCmd;
