#![allow(unsafe_code)]

use gl::{
    types::{GLchar, GLenum, GLint, GLuint},
    INFO_LOG_LENGTH, LINK_STATUS, VALIDATE_STATUS,
};

pub unsafe fn create_shader(shader_type: GLenum) -> GLuint {
    gl::CreateShader(shader_type)
}

pub unsafe fn shader_source(shader: GLuint, source: &str) {
    gl::ShaderSource(
        shader,
        1,
        &(source.as_ptr() as *const GLchar),
        &(source.len() as GLint),
    );
}

pub unsafe fn get_shader_compile_status(shader: GLuint) -> bool {
    let mut status = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
    1 == status
}

pub unsafe fn get_shader_info_log(shader: GLuint) -> String {
    let mut length = 0;
    gl::GetShaderiv(shader, INFO_LOG_LENGTH, &mut length);
    if length > 0 {
        let mut log = vec![0u8; length as usize];
        gl::GetShaderInfoLog(
            shader,
            length,
            &mut length,
            log.as_mut_ptr() as *mut GLchar,
        );
        log.truncate(length as usize);
        String::from_utf8_lossy(&log).into_owned()
    } else {
        String::from("")
    }
}

pub unsafe fn create_program() -> GLuint {
    gl::CreateProgram()
}

pub unsafe fn attach_shader(program: GLuint, shader: GLuint) {
    gl::AttachShader(program, shader);
}

pub unsafe fn get_program_link_status(program: GLuint) -> bool {
    let mut status = 0;
    gl::GetProgramiv(program, LINK_STATUS, &mut status);
    1 == status
}

pub unsafe fn get_program_validate_status(program: GLuint) -> bool {
    let mut status = 0;
    gl::GetProgramiv(program, VALIDATE_STATUS, &mut status);
    1 == status
}

pub unsafe fn get_program_info_log(program: GLuint) -> String {
    let mut length = 0;
    gl::GetProgramiv(program, INFO_LOG_LENGTH, &mut length);
    if length > 0 {
        let mut log = vec![0u8; length as usize];
        gl::GetProgramInfoLog(
            program,
            length,
            &mut length,
            log.as_mut_ptr() as *mut GLchar,
        );
        log.truncate(length as usize);
        String::from_utf8_lossy(&log).into_owned()
    } else {
        String::from("")
    }
}
