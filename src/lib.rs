//! Word count that discards partial matches.
//!
//! Unlike a traditional word count, a word is dropped from the result when it
//! is contained, ignoring case, in another word of the input. For
//! `A mate material may maybe right maybe` the words `A`, `mate` and `may`
//! are discarded and the report lists the remaining words, longest first:
//!
//! ```text
//! material: 1
//! maybe: 2
//! right: 1
//! ```
mod utils;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod formatter;
pub mod input;
pub mod logger;
pub mod processors;

pub use counter::{count_words, WordCounts};
pub use error::WordCountError;
pub use formatter::produce_results;
pub use input::{read_input, tokenize};
pub use processors::{remove_partial_matches, Processor};

use crate::config::WordCountConfig;
use crate::processors::{build_pipeline, run_pipeline};

/// Counts `words`, runs the configured processors over the counts and renders the report.
pub fn produce_report(words: &[String], cfg: &WordCountConfig) -> String {
    let word_counts = count_words(words);

    let processors = build_pipeline(&cfg.pipeline);
    let word_counts = run_pipeline(&processors, words, word_counts);

    let report = produce_results(&word_counts);
    crate::log_stats!("produce_results", "Reported {} words.", word_counts.len());
    report
}
