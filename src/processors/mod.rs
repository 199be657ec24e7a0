mod remove_partial_matches;

pub use remove_partial_matches::{remove_partial_matches, RemovePartialMatches};

use crate::config::ProcessorConfig;
use crate::counter::WordCounts;

/// A stage that takes ownership of the word counts and hands back the entries it keeps.
/// `words` is the full parsed word list, duplicates included, in input order.
pub trait Processor: Send + Sync {
    fn process(&self, words: &[String], counts: WordCounts) -> WordCounts;
    fn name(&self) -> &'static str;
}

pub fn build_pipeline(configs: &[ProcessorConfig]) -> Vec<Box<dyn Processor>> {
    configs.iter().map(|c| -> Box<dyn Processor> {
        match c {
            ProcessorConfig::RemovePartialMatches => Box::new(RemovePartialMatches),
        }
    }).collect()
}

pub fn run_pipeline(pipeline: &[Box<dyn Processor>], words: &[String], counts: WordCounts) -> WordCounts {
    pipeline.iter().fold(counts, |counts, processor| processor.process(words, counts))
}
