//! Builder & Director pattern: assembling educational programs.
//!
//! A [`EducationalProgramBuilder`] stages one [`EducationalProgram`] at a
//! time and hands it over on `build()`, resetting itself for the next one.
//! An [`EducationalProgramDirector`] replays named recipes against any
//! [`ProgramBuilder`].
//!
//! ```
//! use program_builder::{EducationalProgramBuilder, EducationalProgramDirector, ProgramBuilder};
//!
//! let mut builder = EducationalProgramBuilder::new();
//! EducationalProgramDirector::new(&mut builder).construct_basic_program()?;
//! let program = builder.build();
//! assert_eq!(program.duration_in_weeks(), 4);
//! # Ok::<(), program_builder::ValidationError>(())
//! ```

pub mod builder;
pub mod config;
pub mod director;
pub mod display;
pub mod error;
pub mod input;
pub mod program;

pub use builder::{BuilderState, EducationalProgramBuilder, ProgramBuilder};
pub use config::{DemoConfig, OutputConfig};
pub use director::{EducationalProgramDirector, Recipe, RecipeBook};
pub use display::ProgramFormatter;
pub use error::{AppError, ValidationError};
pub use input::collect_custom_program;
pub use program::{EducationalProgram, ProgramSummary};
