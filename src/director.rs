use serde::Deserialize;
use tracing::{debug, info};

use crate::builder::ProgramBuilder;
use crate::error::ValidationError;

pub const BASIC_DURATION_WEEKS: i32 = 4;
pub const BASIC_DIFFICULTY: &str = "Basic";
pub const BASIC_SUBJECTS: &[&str] = &["Mathematics", "Computer Science"];

pub const ADVANCED_DURATION_WEEKS: i32 = 12;
pub const ADVANCED_DIFFICULTY: &str = "Advanced";
pub const ADVANCED_SUBJECTS: &[&str] = &[
    "Algorithms and Data Structures",
    "Artificial Intelligence",
    "Machine Learning",
];

// =============================================================================
// Recipes
// =============================================================================

/// A preset the director replays: duration, then difficulty, then subjects.
///
/// Values are not checked here; the builder validates them as they are
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub duration_weeks: i32,
    pub difficulty: String,
    pub subjects: Vec<String>,
}

impl Recipe {
    pub fn new(duration_weeks: i32, difficulty: impl Into<String>, subjects: &[&str]) -> Self {
        Self {
            duration_weeks,
            difficulty: difficulty.into(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn basic() -> Self {
        Self::new(BASIC_DURATION_WEEKS, BASIC_DIFFICULTY, BASIC_SUBJECTS)
    }

    pub fn advanced() -> Self {
        Self::new(ADVANCED_DURATION_WEEKS, ADVANCED_DIFFICULTY, ADVANCED_SUBJECTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecipeBook {
    pub basic: Recipe,
    pub advanced: Recipe,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self {
            basic: Recipe::basic(),
            advanced: Recipe::advanced(),
        }
    }
}

// =============================================================================
// Director
// =============================================================================

/// Scripts named construction sequences against one bound builder.
///
/// The director never finishes a program: call `build()` on the builder
/// (directly, or through [`EducationalProgramDirector::builder`]) to get it.
pub struct EducationalProgramDirector<'a, B: ProgramBuilder + ?Sized> {
    builder: &'a mut B,
    recipes: RecipeBook,
}

impl<'a, B: ProgramBuilder + ?Sized> EducationalProgramDirector<'a, B> {
    pub fn new(builder: &'a mut B) -> Self {
        Self::with_recipes(builder, RecipeBook::default())
    }

    pub fn with_recipes(builder: &'a mut B, recipes: RecipeBook) -> Self {
        Self { builder, recipes }
    }

    /// Reborrows the bound builder, e.g. to call `build()` after a recipe.
    pub fn builder(&mut self) -> &mut B {
        &mut *self.builder
    }

    pub fn construct_basic_program(&mut self) -> Result<(), ValidationError> {
        info!("constructing basic program");
        let recipe = self.recipes.basic.clone();
        self.construct(&recipe)
    }

    pub fn construct_advanced_program(&mut self) -> Result<(), ValidationError> {
        info!("constructing advanced program");
        let recipe = self.recipes.advanced.clone();
        self.construct(&recipe)
    }

    /// Applies `recipe` step by step, stopping at the first rejected value.
    pub fn construct(&mut self, recipe: &Recipe) -> Result<(), ValidationError> {
        self.builder.set_duration(recipe.duration_weeks)?;
        self.builder.set_difficulty_level(&recipe.difficulty)?;
        for subject in &recipe.subjects {
            self.builder.add_subject(subject)?;
        }
        debug!(subjects = recipe.subjects.len(), "recipe applied");
        Ok(())
    }
}
