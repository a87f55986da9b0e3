//! Interactive construction of a custom program from line-based input.
//!
//! The collector only talks to a [`ProgramBuilder`], so any builder can be
//! driven from a terminal, a file, or a test buffer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::builder::ProgramBuilder;
use crate::error::AppError;
use crate::program::EducationalProgram;

/// Line that ends subject collection (compared case-insensitively).
pub const SENTINEL: &str = "done";

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>, AppError> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks for duration, difficulty and then subjects until [`SENTINEL`] or end
/// of input, and returns the built program.
///
/// Rejected values are reported and asked again. If input ends early, the
/// program is built from whatever was accepted so far.
pub fn collect_custom_program<B, R, W>(builder: &mut B, input: &mut R, output: &mut W) -> Result<EducationalProgram, AppError>
where
    B: ProgramBuilder + ?Sized,
    R: BufRead,
    W: Write,
{
    if collect_duration(builder, input, output)? && collect_difficulty(builder, input, output)? {
        collect_subjects(builder, input, output)?;
    }
    Ok(builder.build())
}

// Each step returns false once input is exhausted.
fn collect_duration<B, R, W>(builder: &mut B, input: &mut R, output: &mut W) -> Result<bool, AppError>
where
    B: ProgramBuilder + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt(input, output, "Duration in weeks: ")? else {
            return Ok(false);
        };
        let Ok(weeks) = line.parse::<i32>() else {
            writeln!(output, "please enter a whole number")?;
            continue;
        };
        match builder.set_duration(weeks) {
            Ok(()) => return Ok(true),
            Err(err) => {
                debug!(%err, "duration rejected");
                writeln!(output, "{}", err.reason())?;
            }
        }
    }
}

fn collect_difficulty<B, R, W>(builder: &mut B, input: &mut R, output: &mut W) -> Result<bool, AppError>
where
    B: ProgramBuilder + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt(input, output, "Difficulty level: ")? else {
            return Ok(false);
        };
        match builder.set_difficulty_level(&line) {
            Ok(()) => return Ok(true),
            Err(err) => {
                debug!(%err, "difficulty rejected");
                writeln!(output, "{}", err.reason())?;
            }
        }
    }
}

fn collect_subjects<B, R, W>(builder: &mut B, input: &mut R, output: &mut W) -> Result<(), AppError>
where
    B: ProgramBuilder + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut added = 0usize;
    while let Some(line) = prompt(input, output, &format!("Subject ('{SENTINEL}' to finish): "))? {
        if line.eq_ignore_ascii_case(SENTINEL) {
            break;
        }
        match builder.add_subject(&line) {
            Ok(()) => added += 1,
            Err(err) => {
                debug!(%err, "subject rejected");
                writeln!(output, "{}", err.reason())?;
            }
        }
    }
    debug!(added, "subject collection finished");
    Ok(())
}
