//! Command-line demo of the builder and director.
//!
//! Builds the preset programs through the director, or collects a custom
//! one interactively, and prints the result as text or JSON.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use program_builder::{
    collect_custom_program, AppError, DemoConfig, EducationalProgram, EducationalProgramBuilder,
    EducationalProgramDirector, ProgramBuilder, ProgramFormatter,
};

/// Assemble educational programs with a builder and a director.
#[derive(Parser)]
#[command(name = "program_builder", version, about, long_about = None)]
struct Cli {
    /// TOML file with output settings and recipe overrides.
    #[arg(long, global = true, env = "PROGRAM_BUILDER_CONFIG")]
    config: Option<PathBuf>,

    /// Print programs as JSON instead of styled text.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Build and print both preset programs.
    Demo,
    /// Build and print the basic program.
    Basic,
    /// Build and print the advanced program.
    Advanced,
    /// Enter a program interactively.
    Custom,
}

struct Printer {
    formatter: ProgramFormatter,
    json: bool,
}

impl Printer {
    fn print(&self, title: &str, program: &EducationalProgram) -> Result<(), AppError> {
        let summary = program.describe();
        if self.json {
            println!("{}", ProgramFormatter::format_json(&summary)?);
        } else {
            print!("{}", self.formatter.format_text(title, &summary));
        }
        Ok(())
    }

    fn separator(&self) {
        if !self.json {
            println!();
        }
    }
}

fn run(command: Command, config: DemoConfig, printer: &Printer) -> Result<(), AppError> {
    let mut builder = EducationalProgramBuilder::new();

    match command {
        Command::Demo => {
            let mut director = EducationalProgramDirector::with_recipes(&mut builder, config.recipes);
            director.construct_basic_program()?;
            let basic = director.builder().build();
            printer.print("basic", &basic)?;
            printer.separator();

            director.construct_advanced_program()?;
            let advanced = director.builder().build();
            printer.print("advanced", &advanced)?;
        }
        Command::Basic => {
            EducationalProgramDirector::with_recipes(&mut builder, config.recipes).construct_basic_program()?;
            printer.print("basic", &builder.build())?;
        }
        Command::Advanced => {
            EducationalProgramDirector::with_recipes(&mut builder, config.recipes).construct_advanced_program()?;
            printer.print("advanced", &builder.build())?;
        }
        Command::Custom => {
            // Prompts go to stderr so stdout carries only the program.
            let stdin = io::stdin();
            let program = collect_custom_program(&mut builder, &mut stdin.lock(), &mut io::stderr())?;
            eprintln!();
            printer.print("custom", &program)?;
        }
    }

    info!("done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let use_color = ProgramFormatter::resolve_color(cli.no_color, true, ProgramFormatter::no_color_env());
    let config = match DemoConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", ProgramFormatter::new(use_color).format_error(&err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer {
        formatter: ProgramFormatter::new(ProgramFormatter::resolve_color(
            cli.no_color,
            config.output.color,
            ProgramFormatter::no_color_env(),
        )),
        json: cli.json || config.output.json,
    };

    match run(cli.command.unwrap_or(Command::Demo), config, &printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", printer.formatter.format_error(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
