use madison_words::commands::{
    FindConfig, MadisonStatistics, VocabularySource, convert_corpus, find_madison_words,
};
use madison_words::corpus::{load_listing, load_text};
use std::fs;

const PASSAGE: &str = "\
Alice was beginning to get very tired of sitting by her sister on the bank,
and of having nothing to do: once or twice she had peeped into the book her
sister was reading, but it had no pictures or conversations in it, 'and what
is the use of a book,' thought Alice 'without pictures or conversations?'
";

#[test]
fn text_to_listing_to_madison_words() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("alice.txt");
    let listing = dir.path().join("alice_corpus.txt");
    fs::write(&text, PASSAGE).unwrap();

    let converted = convert_corpus(&text, &listing).unwrap();
    let from_text = load_text(&text).unwrap();
    let from_listing = load_listing(&listing).unwrap();
    assert_eq!(converted.unique_words, from_text.len());
    assert_eq!(from_listing.sorted_words(), from_text.sorted_words());

    let config = FindConfig {
        source: VocabularySource::Listing,
        ..FindConfig::new(&listing)
    };
    let result = find_madison_words(&config).unwrap();

    // "without" stays out: neither "with" nor "out" appears on its own
    assert!(result.madison.contains("into"));
    assert_eq!(result.madison.get("into").unwrap().witness(), ["in", "to"]);
    assert!(!result.madison.contains("without"));
    assert!(!result.madison.contains("a"));
    assert!(!result.madison.contains("i"));

    for (word, decomposition) in result.madison.iter() {
        assert_eq!(decomposition.witness().concat(), word);
    }
}

#[test]
fn statistics_match_between_text_and_listing() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("alice.txt");
    let listing = dir.path().join("alice_corpus.txt");
    fs::write(&text, PASSAGE).unwrap();
    convert_corpus(&text, &listing).unwrap();

    let from_text = find_madison_words(&FindConfig::new(&text)).unwrap();
    let from_listing = find_madison_words(&FindConfig {
        source: VocabularySource::Listing,
        ..FindConfig::new(&listing)
    })
    .unwrap();

    assert_eq!(from_text.madison, from_listing.madison);

    let stats: &MadisonStatistics = &from_listing.statistics;
    assert_eq!(stats.madison_words, from_listing.madison.len());
    assert!(stats.ratio > 0.0 && stats.ratio <= 1.0);
    let shortest = stats.shortest.as_ref().unwrap();
    let longest = stats.longest.as_ref().unwrap();
    assert!(shortest.word.chars().count() <= longest.word.chars().count());
}
