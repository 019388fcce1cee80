#![allow(unsafe_code)]

use gl::types::GLuint;

use crate::{
    check_for_gl_error,
    gl_utils::{
        attach_shader, create_program, create_shader, get_program_info_log,
        get_program_link_status, get_program_validate_status, get_shader_compile_status,
        get_shader_info_log, shader_source,
    },
    stage::ShaderStage,
};

/// The calls a [`ShaderProgram`](crate::ShaderProgram) makes into the graphics driver.
///
/// Handles are plain GL names; `0` always means "none". Failing calls return
/// the driver's info log as the error.
pub trait Driver {
    /// Returns `0` when no program could be allocated.
    fn create_program(&self) -> GLuint;
    fn delete_program(&self, program: GLuint);
    fn is_program(&self, program: GLuint) -> bool;

    fn create_shader(&self, stage: ShaderStage) -> GLuint;
    fn compile_shader(&self, shader: GLuint, source: &str) -> Result<(), String>;
    fn delete_shader(&self, shader: GLuint);
    fn is_shader(&self, shader: GLuint) -> bool;

    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint) -> Result<(), String>;
    fn validate_program(&self, program: GLuint) -> Result<(), String>;

    /// Bind `program` as the active one, or unbind with `0`.
    fn use_program(&self, program: GLuint);
}

/// [`Driver`] backed by the `gl` crate's global function pointers.
///
/// The pointers must be loaded (see `load_gl` with the `sdl2` feature, or
/// `gl::load_with`) and a context must be current on this thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlDriver;

impl Driver for GlDriver {
    fn create_program(&self) -> GLuint {
        let program = unsafe { create_program() };
        check_for_gl_error!("create_program");
        program
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) };
        check_for_gl_error!("delete_program");
    }

    fn is_program(&self, program: GLuint) -> bool {
        unsafe { gl::IsProgram(program) == gl::TRUE }
    }

    fn create_shader(&self, stage: ShaderStage) -> GLuint {
        let shader = unsafe { create_shader(stage.gl_enum()) };
        check_for_gl_error!("create_shader");
        shader
    }

    fn compile_shader(&self, shader: GLuint, source: &str) -> Result<(), String> {
        unsafe {
            shader_source(shader, source);
            gl::CompileShader(shader);
            check_for_gl_error!("compile_shader");

            if get_shader_compile_status(shader) {
                Ok(())
            } else {
                Err(get_shader_info_log(shader))
            }
        }
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) };
        check_for_gl_error!("delete_shader");
    }

    fn is_shader(&self, shader: GLuint) -> bool {
        unsafe { gl::IsShader(shader) == gl::TRUE }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { attach_shader(program, shader) };
        check_for_gl_error!("attach_shader");
    }

    fn link_program(&self, program: GLuint) -> Result<(), String> {
        unsafe {
            gl::LinkProgram(program);
            check_for_gl_error!("link_program");

            if get_program_link_status(program) {
                Ok(())
            } else {
                Err(get_program_info_log(program))
            }
        }
    }

    fn validate_program(&self, program: GLuint) -> Result<(), String> {
        unsafe {
            gl::ValidateProgram(program);
            check_for_gl_error!("validate_program");

            if get_program_validate_status(program) {
                Ok(())
            } else {
                Err(get_program_info_log(program))
            }
        }
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) };
        check_for_gl_error!("use_program");
    }
}
