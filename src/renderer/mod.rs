//! Rendering module
//!
//! Turns a simulation [`Snapshot`](crate::sim::Snapshot) into a flat triangle
//! list in board pixel coordinates. Uploading and presenting the vertices is
//! left to the host.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawOptions, draw_list};
pub use vertex::{Vertex, as_bytes};
