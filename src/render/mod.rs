mod camera;
mod material;

pub mod texture;

pub use camera::*;
pub use material::*;
