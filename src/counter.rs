use std::collections::HashMap;

/// Occurrences of each distinct word, keyed by the word exactly as written.
pub type WordCounts = HashMap<String, usize>;

/// Counts how many times each word appears. Words differing only in case are
/// counted separately.
pub fn count_words(words: &[String]) -> WordCounts {
    let mut word_counts = WordCounts::new();

    for word in words {
        match word_counts.get_mut(word) {
            Some(count) => {
                *count += 1;
                log::debug!("Have seen this word: {word} before - updating count to {count}");
            }
            None => {
                word_counts.insert(word.clone(), 1);
                log::debug!("Put new encountered word: {word} into internal mapping of [word,count]");
            }
        }
    }

    crate::log_stats!("count_words", "Counted {} distinct words out of {}.", word_counts.len(), words.len());
    word_counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_count_words() {
        let counts = count_words(&words(&["A", "mate", "material", "may", "maybe", "right", "maybe"]));

        let expected: WordCounts = [("A", 1), ("mate", 1), ("material", 1), ("may", 1), ("maybe", 2), ("right", 1)]
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_counts_sum_to_word_total() {
        let input = words(&["x", "y", "x", "", "x", "y", ""]);
        let counts = count_words(&input);
        assert_eq!(counts.values().sum::<usize>(), input.len());
        assert_eq!(counts["x"], 3);
        assert_eq!(counts["y"], 2);
        assert_eq!(counts[""], 2);
    }

    #[test]
    fn test_case_variants_are_distinct() {
        let counts = count_words(&words(&["May", "may", "MAY", "may"]));
        assert_eq!(counts.len(), 3);
        assert_eq!(counts["may"], 2);
        assert_eq!(counts["May"], 1);
        assert_eq!(counts["MAY"], 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(count_words(&[]).is_empty());
    }
}
