use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::polyline::PolylineCmd;

/// Backend-agnostic draw command.
///
/// The widget only ever needs two shapes: the annular progress wedge and the
/// stroked leader line connecting a ring to its label.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Arc(ArcCmd),
    Polyline(PolylineCmd),
}
