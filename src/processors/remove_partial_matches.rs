use crate::counter::WordCounts;
use super::Processor;

pub struct RemovePartialMatches;

impl Processor for RemovePartialMatches {
    fn process(&self, words: &[String], counts: WordCounts) -> WordCounts {
        let original_count = counts.len();
        let result = remove_partial_matches(words, counts);

        crate::log_stats!(self.name(), "Removed {} words contained in other words.", original_count - result.len());
        result
    }

    fn name(&self) -> &'static str { "remove_partial_matches" }
}

/// Drops every word that is a case-insensitive substring of a different word in `words`.
///
/// Every position is compared against every position. Pairs whose lower-cased
/// forms are equal are skipped, so a word never removes itself or a differently
/// cased spelling of itself. Removal uses the word as written, which means each
/// cased variant in `counts` is looked up on its own.
pub fn remove_partial_matches(words: &[String], mut counts: WordCounts) -> WordCounts {
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    for outer in &lowered {
        for (j, inner) in lowered.iter().enumerate() {
            if outer == inner {
                continue;
            }

            if outer.contains(inner.as_str()) && counts.remove(&words[j]).is_some() {
                log::debug!("Removing word {} from map because this word has partial match", words[j]);
            }
        }
    }

    counts
}
