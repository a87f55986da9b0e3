//! The builder side of the pattern: a capability trait any director can
//! drive, and the concrete builder that stages one program at a time.

use tracing::debug;

use crate::error::ValidationError;
use crate::program::{EducationalProgram, ProgramSummary};

/// Everything a director (or any other caller) needs to assemble a program
/// without knowing which builder it is talking to.
pub trait ProgramBuilder {
    fn set_duration(&mut self, weeks: i32) -> Result<(), ValidationError>;

    fn set_difficulty_level(&mut self, label: &str) -> Result<(), ValidationError>;

    fn add_subject(&mut self, name: &str) -> Result<(), ValidationError>;

    /// Hands over the finished program. The builder must be ready for a new,
    /// independent construction afterwards.
    fn build(&mut self) -> EducationalProgram;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Populating,
}

#[must_use = "a builder does nothing unless you call `.build()`"]
#[derive(Debug, Default)]
pub struct EducationalProgramBuilder {
    program: EducationalProgram,
}

impl EducationalProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops whatever is in progress and starts over with an empty program.
    pub fn reset(&mut self) {
        self.program = EducationalProgram::new();
    }

    pub fn state(&self) -> BuilderState {
        if self.program.is_empty() {
            BuilderState::Empty
        } else {
            BuilderState::Populating
        }
    }

    /// Snapshot of the program being assembled, without finishing it.
    pub fn current(&self) -> ProgramSummary {
        self.program.describe()
    }
}

impl ProgramBuilder for EducationalProgramBuilder {
    fn set_duration(&mut self, weeks: i32) -> Result<(), ValidationError> {
        self.program.set_duration(weeks)
    }

    fn set_difficulty_level(&mut self, label: &str) -> Result<(), ValidationError> {
        self.program.set_difficulty_level(label)
    }

    fn add_subject(&mut self, name: &str) -> Result<(), ValidationError> {
        self.program.add_subject(name)
    }

    fn build(&mut self) -> EducationalProgram {
        let program = std::mem::take(&mut self.program);
        debug!(
            weeks = program.duration_in_weeks(),
            difficulty = program.difficulty_level(),
            subjects = program.subjects().len(),
            "program built, builder reset"
        );
        program
    }
}
