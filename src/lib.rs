//! OpenGL 3.3 tutorial programs and the small library they share.
//!
//! The library half is GL-free apart from the thin object wrappers in
//! [`opengl`]: a first-person camera integrator, input and timing resources,
//! specs systems animating transforms, static scene data and procedural
//! textures. The `demos` feature adds the windowed runner used by the
//! binaries under `src/bin`.

#[macro_use]
extern crate log;

pub mod camera;
pub mod error;
pub mod input;
pub mod logger;
pub mod opengl;
pub mod render;
pub mod scene;
pub mod settings;
pub mod time;
pub mod world;

#[cfg(feature = "demos")]
pub mod app;

pub use error::{Error, Result};
