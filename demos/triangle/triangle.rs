// Draws a simple triangle
// based on the example from:
// https://github.com/brendanzab/gl-rs/blob/master/gl/examples/triangle.rs

use sdl2_gl_shader::gl;
use sdl2_gl_shader::gl::types::*;
use sdl2_gl_shader::{ShaderError, ShaderProgram};
use std::ffi::CString;
use std::mem;
use std::ptr;

const VS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/triangle.vert");
const FS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/triangle.frag");

static VERTEX_DATA: [GLfloat; 6] = [0.0, 0.5, 0.5, -0.5, -0.5, -0.5];

pub struct Triangle {
    pub program: ShaderProgram,
    pub vao: GLuint,
    pub vbo: GLuint,
    time_location: GLint,
}

impl Triangle {
    pub fn new() -> Result<Self, ShaderError> {
        let program = ShaderProgram::new(VS_PATH, FS_PATH)?;
        if !program.compiled() {
            log::warn!("triangle program did not link, nothing will be drawn");
        }

        let mut vao = 0;
        let mut vbo = 0;
        let time_location;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (VERTEX_DATA.len() * mem::size_of::<GLfloat>()) as GLsizeiptr,
                VERTEX_DATA.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            // Specify the layout of the vertex data
            let c_position = CString::new("position").unwrap();
            let pos_attr = gl::GetAttribLocation(program.id(), c_position.as_ptr());
            if pos_attr >= 0 {
                gl::EnableVertexAttribArray(pos_attr as GLuint);
                gl::VertexAttribPointer(
                    pos_attr as GLuint,
                    2,
                    gl::FLOAT,
                    gl::FALSE as GLboolean,
                    0,
                    ptr::null(),
                );
            }
            gl::BindVertexArray(0);

            let c_time = CString::new("u_time").unwrap();
            time_location = gl::GetUniformLocation(program.id(), c_time.as_ptr());
        }

        Ok(Triangle {
            program,
            vao,
            vbo,
            time_location,
        })
    }

    pub fn draw(&mut self, time: f32) {
        self.program.use_program();
        if !self.program.is_used() {
            return;
        }
        unsafe {
            gl::Uniform1f(self.time_location, time);
            gl::BindVertexArray(self.vao);
            // Draw a triangle from the 3 vertices
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
            gl::BindVertexArray(0);
        }
        self.program.unuse();
    }
}

impl Drop for Triangle {
    fn drop(&mut self) {
        // The program releases itself.
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
