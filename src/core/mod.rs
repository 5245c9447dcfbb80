pub mod constants;
pub mod lifecycle;
pub mod particles;
pub mod surface;

pub use lifecycle::*;
pub use particles::*;
pub use surface::*;
