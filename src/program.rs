use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An educational program: how long it runs, how hard it is, and what it
/// teaches.
///
/// Fields start unset (`0` weeks, empty difficulty, no subjects) and are
/// only ever replaced by values that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationalProgram {
    subjects: Vec<String>,
    duration_in_weeks: u32,
    difficulty_level: String,
}

/// Read-only view of a program, produced by [`EducationalProgram::describe`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub duration_in_weeks: u32,
    pub difficulty_level: String,
    pub subjects: Vec<String>,
}

impl EducationalProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_duration(&mut self, weeks: i32) -> Result<(), ValidationError> {
        let weeks = u32::try_from(weeks)
            .ok()
            .filter(|&w| w > 0)
            .ok_or(ValidationError::NonPositiveDuration { weeks })?;
        self.duration_in_weeks = weeks;
        Ok(())
    }

    pub fn set_difficulty_level(&mut self, label: impl Into<String>) -> Result<(), ValidationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::EmptyDifficulty);
        }
        self.difficulty_level = label;
        Ok(())
    }

    /// Appends a subject. Order is kept and duplicates are allowed.
    pub fn add_subject(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptySubject);
        }
        self.subjects.push(name);
        Ok(())
    }

    pub fn describe(&self) -> ProgramSummary {
        ProgramSummary {
            duration_in_weeks: self.duration_in_weeks,
            difficulty_level: self.difficulty_level.clone(),
            subjects: self.subjects.clone(),
        }
    }

    pub fn duration_in_weeks(&self) -> u32 {
        self.duration_in_weeks
    }

    pub fn difficulty_level(&self) -> &str {
        &self.difficulty_level
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// True when no setter has succeeded since construction.
    pub fn is_empty(&self) -> bool {
        self.duration_in_weeks == 0 && self.difficulty_level.is_empty() && self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_program_is_empty() {
        let program = EducationalProgram::new();
        assert!(program.is_empty());
        assert_eq!(program.describe(), ProgramSummary::default());
    }

    #[test]
    fn test_set_duration_replaces_previous_value() {
        let mut program = EducationalProgram::new();
        program.set_duration(4).unwrap();
        program.set_duration(10).unwrap();
        assert_eq!(program.duration_in_weeks(), 10);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut program = EducationalProgram::new();
        assert_eq!(
            program.set_duration(0),
            Err(ValidationError::NonPositiveDuration { weeks: 0 })
        );
        assert!(program.is_empty());
    }

    #[test]
    fn test_empty_difficulty_rejected_and_prior_value_kept() {
        let mut program = EducationalProgram::new();
        program.set_difficulty_level("Advanced").unwrap();
        assert_eq!(program.set_difficulty_level(""), Err(ValidationError::EmptyDifficulty));
        assert_eq!(program.difficulty_level(), "Advanced");
    }

    #[test]
    fn test_empty_subject_rejected() {
        let mut program = EducationalProgram::new();
        program.add_subject("Physics").unwrap();
        assert_eq!(program.add_subject(String::new()), Err(ValidationError::EmptySubject));
        assert_eq!(program.subjects(), ["Physics".to_string()]);
    }

    #[test]
    fn test_subjects_keep_order_and_duplicates() {
        let mut program = EducationalProgram::new();
        for name in ["A", "B", "C", "A"] {
            program.add_subject(name).unwrap();
        }
        assert_eq!(program.describe().subjects, vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn test_describe_partial_program() {
        let mut program = EducationalProgram::new();
        program.add_subject("History").unwrap();

        let summary = program.describe();
        assert_eq!(summary.duration_in_weeks, 0);
        assert_eq!(summary.difficulty_level, "");
        assert_eq!(summary.subjects, vec!["History"]);
        // Describing twice does not change anything.
        assert_eq!(program.describe(), summary);
    }

    proptest! {
        #[test]
        fn prop_non_positive_duration_leaves_value_unchanged(prior in 1i32..=520, weeks in i32::MIN..=0) {
            let mut program = EducationalProgram::new();
            program.set_duration(prior).unwrap();
            prop_assert!(program.set_duration(weeks).is_err());
            prop_assert_eq!(program.duration_in_weeks(), prior as u32);
        }

        #[test]
        fn prop_positive_duration_accepted(weeks in 1i32..=i32::MAX) {
            let mut program = EducationalProgram::new();
            prop_assert!(program.set_duration(weeks).is_ok());
            prop_assert_eq!(program.describe().duration_in_weeks, weeks as u32);
        }

        #[test]
        fn prop_non_empty_difficulty_is_described(label in ".+") {
            let mut program = EducationalProgram::new();
            prop_assert!(program.set_difficulty_level(label.clone()).is_ok());
            prop_assert_eq!(program.describe().difficulty_level, label);
        }

        #[test]
        fn prop_subjects_preserve_insertion_order(names in prop::collection::vec(".+", 0..20)) {
            let mut program = EducationalProgram::new();
            for name in &names {
                program.add_subject(name.as_str()).unwrap();
            }
            prop_assert_eq!(program.describe().subjects, names);
        }
    }
}
