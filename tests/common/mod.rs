#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashSet,
    path::{Path, PathBuf},
    rc::Rc,
};

use sdl2_gl_shader::{gl::types::GLuint, Driver, ShaderStage};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[derive(Debug, Default)]
pub struct MockState {
    next_handle: GLuint,
    pub programs: HashSet<GLuint>,
    pub shaders: HashSet<GLuint>,
    pub created_shaders: Vec<GLuint>,
    pub unsupported_stages: Vec<ShaderStage>,
    pub attach_calls: Vec<(GLuint, GLuint)>,
    pub bound: GLuint,
    pub use_calls: Vec<GLuint>,
    pub fail_allocation: bool,
    pub fail_link: bool,
    pub fail_validate: bool,
}

/// Records driver calls instead of talking to GL.
///
/// Sources compile only if they contain `void main(`, which is enough to tell
/// the good fixtures from the broken one.
#[derive(Clone, Debug, Default)]
pub struct MockDriver {
    pub state: Rc<RefCell<MockState>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&self) -> GLuint {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        state.next_handle
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn shaders_created(&self) -> usize {
        self.state.borrow().created_shaders.len()
    }

    /// Every shader name handed out so far, in creation order.
    pub fn created_shaders(&self) -> Vec<GLuint> {
        self.state.borrow().created_shaders.clone()
    }

    pub fn bound(&self) -> GLuint {
        self.state.borrow().bound
    }
}

impl Driver for MockDriver {
    fn create_program(&self) -> GLuint {
        if self.state.borrow().fail_allocation {
            return 0;
        }
        let program = self.next_handle();
        self.state.borrow_mut().programs.insert(program);
        program
    }

    fn delete_program(&self, program: GLuint) {
        assert!(
            self.state.borrow_mut().programs.remove(&program),
            "program {} deleted twice",
            program
        );
    }

    fn is_program(&self, program: GLuint) -> bool {
        self.state.borrow().programs.contains(&program)
    }

    fn create_shader(&self, stage: ShaderStage) -> GLuint {
        if self.state.borrow().unsupported_stages.contains(&stage) {
            return 0;
        }
        let shader = self.next_handle();
        let mut state = self.state.borrow_mut();
        state.shaders.insert(shader);
        state.created_shaders.push(shader);
        shader
    }

    fn compile_shader(&self, _shader: GLuint, source: &str) -> Result<(), String> {
        if source.contains("void main(") {
            Ok(())
        } else {
            Err("0:4(6): error: syntax error, unexpected '('".to_owned())
        }
    }

    fn delete_shader(&self, shader: GLuint) {
        assert!(
            self.state.borrow_mut().shaders.remove(&shader),
            "shader {} deleted twice",
            shader
        );
    }

    fn is_shader(&self, shader: GLuint) -> bool {
        self.state.borrow().shaders.contains(&shader)
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        let mut state = self.state.borrow_mut();
        assert!(state.programs.contains(&program));
        assert!(state.shaders.contains(&shader));
        state.attach_calls.push((program, shader));
    }

    fn link_program(&self, _program: GLuint) -> Result<(), String> {
        if self.state.borrow().fail_link {
            Err("error: vertex shader output `v_tc' not read by fragment shader".to_owned())
        } else {
            Ok(())
        }
    }

    fn validate_program(&self, _program: GLuint) -> Result<(), String> {
        if self.state.borrow().fail_validate {
            Err("validation failed: sampler types mismatch".to_owned())
        } else {
            Ok(())
        }
    }

    fn use_program(&self, program: GLuint) {
        let mut state = self.state.borrow_mut();
        state.bound = program;
        state.use_calls.push(program);
    }
}
