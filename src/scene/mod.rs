//! Fixed scene data shared by the demos: geometry and shader sources.

pub mod mesh;
mod shaders;

pub use shaders::ShaderSource;
