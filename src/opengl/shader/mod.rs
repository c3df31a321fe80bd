mod shader_program;

pub use shader_program::*;
