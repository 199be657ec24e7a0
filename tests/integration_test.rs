use partial_word_count::config::WordCountConfig;
use partial_word_count::formatter::report_lines;
use partial_word_count::processors::{build_pipeline, run_pipeline};
use partial_word_count::{count_words, produce_report, read_input, remove_partial_matches};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/input.txt");

#[test]
fn end_to_end_word_count() {
    let words = read_input(INPUT, true).expect("Should read the fixture");
    assert_eq!(words, vec!["A", "mate", "material", "may", "maybe", "right", "maybe"]);

    let counts = count_words(&words);
    assert_eq!(counts.len(), 6);
    assert_eq!(counts["maybe"], 2);
    assert_eq!(counts.values().sum::<usize>(), words.len());

    let counts = remove_partial_matches(&words, counts);
    let mut kept: Vec<_> = counts.keys().cloned().collect();
    kept.sort();
    assert_eq!(kept, vec!["material", "maybe", "right"]);

    assert_eq!(report_lines(&counts), vec!["material: 1", "maybe: 2", "right: 1"]);
}

#[test]
fn configured_pipeline_matches_direct_calls() {
    let cfg = WordCountConfig::default();
    let words = read_input(INPUT, cfg.keep_empty_tokens).unwrap();

    let pipeline = build_pipeline(&cfg.pipeline);
    let counts = run_pipeline(&pipeline, &words, count_words(&words));

    assert_eq!(counts, remove_partial_matches(&words, count_words(&words)));
    assert_eq!(produce_report(&words, &cfg), "material: 1\nmaybe: 2\nright: 1\n");
}

#[test]
fn empty_words_from_extra_spaces() {
    let words: Vec<String> = ["", "cat", "", "dog", ""].iter().map(|w| w.to_string()).collect();
    let cfg = WordCountConfig::default();
    assert_eq!(produce_report(&words, &cfg), "cat: 1\ndog: 1\n");

    let counts = count_words(&words);
    assert_eq!(counts[""], 3);
}
