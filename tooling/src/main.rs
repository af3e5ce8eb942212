//! `cyberwatch-migrate` entrypoint.
//!
//! Rewrites hardcoded dashboard strings into translation calls, audits the
//! translation catalogue, and fixes French text left in its English section.
//! Reports go to stdout; setup errors go to stderr with exit code 1.

use std::io::Write;

use clap::Parser;
use cyberwatch_tooling::cli::{Cli, Command};
use cyberwatch_tooling::error::Result;
use cyberwatch_tooling::flow::{ProjectContext, run_apply, run_audit, run_fix_english};

/// Whether the command completed its work cleanly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Clean,
    MissingKeys,
}

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<Outcome> {
    match &cli.command {
        Some(Command::Audit(args)) => {
            let context = ProjectContext::load(&args.project)?;
            let report = run_audit(&context, args, stdout)?;
            Ok(if report.is_clean() {
                Outcome::Clean
            } else {
                Outcome::MissingKeys
            })
        }
        Some(Command::FixEnglish(args)) => {
            let context = ProjectContext::load(&args.project)?;
            run_fix_english(&context, args, stdout)?;
            Ok(Outcome::Clean)
        }
        Some(Command::Apply(_)) | None => {
            let args = cli.apply_args();
            let context = ProjectContext::load(&args.project)?;
            // Per-file failures are reported, not fatal.
            run_apply(&context, args, stdout)?;
            Ok(Outcome::Clean)
        }
    }
}

fn exit_code_for_run_result(result: Result<Outcome>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(Outcome::Clean) => 0,
        Ok(Outcome::MissingKeys) => 1,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
