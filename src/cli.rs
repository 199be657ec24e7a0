use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::WordCountConfig;
use crate::error::WordCountError;
use crate::input::read_input;

pub const USAGE: &str = "\nUsage:\n\
partial_word_count <input file path>\n\
----------------------------------------\n\
\n\
where \n\
input file path is the path to the input file";

/// Word count that ignores words contained in other, longer words
#[derive(Parser, Debug)]
#[command(name = "partial_word_count", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Path to the input file
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Processed,
    NotProcessed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Processed => ExitCode::SUCCESS,
            Outcome::NotProcessed => ExitCode::FAILURE,
        }
    }
}

pub fn console_error_message(log_file: &str) -> String {
    format!("There were some errors - please see {log_file} for more information")
}

/// Reads the input file and produces the report text.
pub fn run(args: &Args, cfg: &WordCountConfig) -> Result<String, WordCountError> {
    let words = read_input(&args.input, cfg.keep_empty_tokens)?;
    Ok(crate::produce_report(&words, cfg))
}

/// Handles one invocation: argument checking, the word count itself, and
/// every user-facing message. Only the report, the usage text and the console
/// error message are written to `out`.
pub fn process<I, T, W>(args: I, cfg: &WordCountConfig, out: &mut W) -> io::Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    log::info!("Starting processing");

    // exactly one argument besides the program name, whatever it looks like
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let parsed = match args.len() {
        2 => Args::try_parse_from(&args).map_err(|e| format!("{:?}", e.kind())),
        n => Err(format!("expected 1 argument, got {}", n.saturating_sub(1))),
    };

    let args = match parsed {
        Ok(args) => args,
        Err(reason) => {
            log::error!("{}", WordCountError::InvalidArguments(reason));
            writeln!(out, "{}", console_error_message(&cfg.log_file))?;
            writeln!(out, "{USAGE}")?;
            out.flush()?;
            return Ok(Outcome::NotProcessed);
        }
    };

    match run(&args, cfg) {
        Ok(report) => {
            log::info!("{report}");
            write!(out, "{report}")?;
            out.flush()?;
            log::info!("Finished processing word counts");
            Ok(Outcome::Processed)
        }
        Err(e) => {
            writeln!(out, "{}", console_error_message(&cfg.log_file))?;
            out.flush()?;
            match &e {
                WordCountError::FileNotFound(_) => {
                    log::error!("{e}\nplease check the path to the above file")
                }
                WordCountError::Io { .. } => log::error!("Unexpected IO error occurred\n{e}"),
                _ => log::error!("Unknown error occurred\n{e}"),
            }
            Ok(Outcome::NotProcessed)
        }
    }
}

/// Runs `process` and flushes `out`. A write or flush failure is reported on
/// stderr and counts as not processed.
pub fn execute<I, T, W>(args: I, cfg: &WordCountConfig, out: &mut W) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    process(args, cfg, &mut *out)
        .and_then(|outcome| out.flush().map(|()| outcome))
        .unwrap_or_else(|e| {
            log::error!("Failed to write output: {e}");
            eprintln!("Failed to write output: {e}");
            Outcome::NotProcessed
        })
}
