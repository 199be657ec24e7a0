use std::cmp::Ordering;

use crate::counter::WordCounts;

/// Longest words first; words of equal length in code-point order.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    b.chars().count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

pub fn sorted_entries(word_counts: &WordCounts) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = word_counts
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .collect();
    log::trace!("Sorting results in order of longest word descending");
    entries.sort_by(|a, b| compare_words(a.0, b.0));
    entries
}

pub fn report_lines(word_counts: &WordCounts) -> Vec<String> {
    sorted_entries(word_counts)
        .into_iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect()
}

/// Renders one `word: count` line per entry, each terminated by a newline.
pub fn produce_results(word_counts: &WordCounts) -> String {
    report_lines(word_counts)
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}
