#![warn(clippy::all)]

//! Scoped ownership of an OpenGL shader program.
//!
//! ```no_run
//! use sdl2_gl_shader::ShaderProgram;
//!
//! # fn main() -> Result<(), sdl2_gl_shader::ShaderError> {
//! // A GL context must be current and `gl` loaded before this.
//! let mut program = ShaderProgram::new("shaders/basic.vert", "shaders/basic.frag")?;
//! program.use_program();
//! // draw...
//! program.unuse();
//! # Ok(())
//! # }
//! ```

// Re-export dependencies.
pub use gl;
#[cfg(feature = "sdl2")]
pub use sdl2;

mod driver;
mod error;
#[doc(hidden)]
pub mod gl_error;
mod gl_utils;
mod program;
mod source;
mod stage;

pub use driver::{Driver, GlDriver};
pub use error::{Result, ShaderError};
pub use program::{ShaderProgram, ShaderProgramDescriptor, MAX_STAGES};
pub use source::read_source;
pub use stage::ShaderStage;

/// Load the `gl` function pointers from SDL.
///
/// Call this once a GL context has been created, before building any
/// [`ShaderProgram`] that uses [`GlDriver`].
#[cfg(feature = "sdl2")]
pub fn load_gl(video_subsystem: &sdl2::VideoSubsystem) {
    gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);
}
