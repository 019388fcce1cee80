use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
};

use gl::types::GLuint;
use log::{debug, error, warn};
use smallvec::SmallVec;

use crate::{
    driver::{Driver, GlDriver},
    error::{Result, ShaderError},
    source::read_source,
    stage::ShaderStage,
};

/// Most stages a program can collect before it is linked.
pub const MAX_STAGES: usize = 4;

/// How to build a [`ShaderProgram`].
#[derive(Clone, Debug)]
pub struct ShaderProgramDescriptor {
    /// Required; construction fails without it.
    pub vertex: Option<PathBuf>,
    pub fragment: Option<PathBuf>,
    /// Link right after the stages above are added.
    pub auto_compile: bool,
}

impl Default for ShaderProgramDescriptor {
    fn default() -> Self {
        Self {
            vertex: None,
            fragment: None,
            auto_compile: true,
        }
    }
}

impl ShaderProgramDescriptor {
    pub fn new(vertex: impl Into<PathBuf>) -> Self {
        Self {
            vertex: Some(vertex.into()),
            ..Default::default()
        }
    }

    pub fn fragment(mut self, fragment: impl Into<PathBuf>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn auto_compile(mut self, auto_compile: bool) -> Self {
        self.auto_compile = auto_compile;
        self
    }
}

#[derive(Debug)]
struct PendingStage {
    shader: GLuint,
    stage: ShaderStage,
    attached: bool,
}

#[derive(Debug)]
enum ProgramState {
    Building(SmallVec<[PendingStage; MAX_STAGES]>),
    Linked,
}

/// Owns a GL program and the shader stages waiting to be linked into it.
///
/// Operations that would leave the program in a bad state (adding stages
/// after linking, linking twice, using it before it is linked...) are logged
/// and skipped. Check [`compiled`](Self::compiled) and
/// [`is_used`](Self::is_used) when it matters whether they happened.
#[derive(Debug)]
pub struct ShaderProgram<D: Driver = GlDriver> {
    driver: D,
    id: GLuint,
    active: bool,
    state: ProgramState,
    // GL contexts are bound to one thread.
    _not_send: PhantomData<*const ()>,
}

impl ShaderProgram<GlDriver> {
    /// Build and link a program from a vertex and a fragment shader file.
    pub fn new(vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Result<Self> {
        Self::from_descriptor(&ShaderProgramDescriptor::new(vertex).fragment(fragment))
    }

    /// Start a program with only a vertex stage. It is not linked, so more
    /// stages can be added before calling [`compile`](Self::compile).
    pub fn from_vertex(vertex: impl Into<PathBuf>) -> Result<Self> {
        Self::from_descriptor(&ShaderProgramDescriptor::new(vertex).auto_compile(false))
    }

    pub fn from_descriptor(descriptor: &ShaderProgramDescriptor) -> Result<Self> {
        Self::with_driver(GlDriver, descriptor)
    }
}

impl<D: Driver> ShaderProgram<D> {
    pub fn with_driver(driver: D, descriptor: &ShaderProgramDescriptor) -> Result<Self> {
        let vertex = descriptor
            .vertex
            .as_deref()
            .ok_or(ShaderError::MissingVertexStage)?;

        let id = driver.create_program();
        if id == 0 {
            return Err(ShaderError::ProgramAllocation);
        }
        debug!("created shader program {}", id);

        // From here on, Drop releases the program if a stage fails to load.
        let mut program = ShaderProgram {
            driver,
            id,
            active: false,
            state: ProgramState::Building(SmallVec::new()),
            _not_send: PhantomData,
        };

        program.add_shader(vertex, ShaderStage::Vertex)?;
        if let Some(fragment) = descriptor.fragment.as_deref() {
            program.add_shader(fragment, ShaderStage::Fragment)?;
        }
        if descriptor.auto_compile {
            program.compile();
        }
        Ok(program)
    }

    /// Load, compile and queue one stage for linking.
    ///
    /// Only an unreadable or empty file is an error. A stage that fails to
    /// compile is logged and dropped.
    pub fn add_shader(&mut self, path: impl AsRef<Path>, stage: ShaderStage) -> Result<()> {
        let path = path.as_ref();
        match &self.state {
            ProgramState::Linked => {
                error!(
                    "program {} is already linked, can't add {} shader {:?}",
                    self.id, stage, path
                );
                return Ok(());
            }
            ProgramState::Building(pending) if pending.len() >= MAX_STAGES => {
                error!(
                    "program {} already has {} stages, can't add {:?}",
                    self.id, MAX_STAGES, path
                );
                return Ok(());
            }
            ProgramState::Building(_) => {}
        }

        let source = read_source(path)?;

        let shader = self.driver.create_shader(stage);
        if shader == 0 {
            error!(
                "driver could not create a {} shader for {:?}, is the stage supported by this context?",
                stage, path
            );
            return Ok(());
        }
        if let Err(info_log) = self.driver.compile_shader(shader, &source) {
            error!(
                "compiling {} shader {:?} failed:\n{}",
                stage, path, info_log
            );
            self.driver.delete_shader(shader);
            return Ok(());
        }

        if let ProgramState::Building(pending) = &mut self.state {
            pending.push(PendingStage {
                shader,
                stage,
                attached: false,
            });
        }
        debug!("program {}: added {} shader {:?}", self.id, stage, path);
        Ok(())
    }

    /// Like [`add_shader`](Self::add_shader), with the stage taken from the
    /// file extension.
    pub fn add_shader_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let stage = ShaderStage::from_path(path).ok_or_else(|| ShaderError::UnknownStage {
            path: path.to_path_buf(),
        })?;
        self.add_shader(path, stage)
    }

    /// Attach the pending stages, link and validate.
    ///
    /// On success the stage objects are released and the program counts as
    /// compiled. On a link or validate failure the stages stay pending.
    pub fn compile(&mut self) {
        let pending = match &mut self.state {
            ProgramState::Linked => {
                error!("program {} is already linked", self.id);
                return;
            }
            ProgramState::Building(pending) if pending.is_empty() => {
                error!("program {} has no shaders to link", self.id);
                return;
            }
            ProgramState::Building(pending) => pending,
        };

        for stage in pending.iter_mut().filter(|stage| !stage.attached) {
            self.driver.attach_shader(self.id, stage.shader);
            stage.attached = true;
        }

        if let Err(info_log) = self.driver.link_program(self.id) {
            error!("linking program {} failed:\n{}", self.id, info_log);
            return;
        }
        if let Err(info_log) = self.driver.validate_program(self.id) {
            error!("validating program {} failed:\n{}", self.id, info_log);
            return;
        }

        if let ProgramState::Building(pending) =
            std::mem::replace(&mut self.state, ProgramState::Linked)
        {
            for stage in pending {
                self.driver.delete_shader(stage.shader);
            }
        }
        debug!("linked shader program {}", self.id);
    }

    /// Make this the active program.
    pub fn use_program(&mut self) {
        if !self.compiled() {
            error!("program {} can't be used before it is linked", self.id);
            return;
        }
        if self.active {
            warn!("program {} is already in use", self.id);
            return;
        }
        self.driver.use_program(self.id);
        self.active = true;
    }

    pub fn unuse(&mut self) {
        if !self.active {
            warn!("program {} is not in use", self.id);
            return;
        }
        self.driver.use_program(0);
        self.active = false;
    }

    pub fn compiled(&self) -> bool {
        matches!(self.state, ProgramState::Linked)
    }

    pub fn is_used(&self) -> bool {
        self.active
    }

    /// The GL program name, for calls this wrapper doesn't cover.
    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn pending_stages(&self) -> usize {
        self.pending().len()
    }

    /// Kinds of the stages waiting to be linked, in the order they were added.
    pub fn stages(&self) -> impl Iterator<Item = ShaderStage> + '_ {
        self.pending().iter().map(|pending| pending.stage)
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    fn pending(&self) -> &[PendingStage] {
        match &self.state {
            ProgramState::Building(pending) => pending.as_slice(),
            ProgramState::Linked => &[],
        }
    }
}

impl<D: Driver> Drop for ShaderProgram<D> {
    fn drop(&mut self) {
        if let ProgramState::Building(pending) = &mut self.state {
            for stage in pending.drain(..) {
                self.driver.delete_shader(stage.shader);
            }
        }
        if self.active {
            self.driver.use_program(0);
        }
        self.driver.delete_program(self.id);
        debug!("deleted shader program {}", self.id);
    }
}
