//! Terminal visualization of the sampled surface.

pub mod ascii;
pub mod projection;

pub use ascii::render_ascii_surface;
pub use projection::Viewpoint;
