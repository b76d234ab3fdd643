use passforge::config::DictionaryFilter;
use passforge::dictionary::{is_ascii_alpha, Dictionary};
use passforge::error::PassForgeError;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn filter(min_word_len: usize, max_word_len: usize) -> DictionaryFilter {
    DictionaryFilter {
        min_word_len,
        max_word_len,
    }
}

#[test]
fn test_loader_keeps_alpha_words_in_order() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "apple").unwrap();
    writeln!(file, "Banana").unwrap();
    writeln!(file, "  cherry  ").unwrap();
    writeln!(file, "don't").unwrap();
    writeln!(file, "e2e").unwrap();
    writeln!(file, "fig").unwrap();

    let dict = Dictionary::load_from_file(file.path(), &filter(1, 24)).unwrap();
    assert_eq!(dict.words(), &["apple", "banana", "cherry", "fig"]);
}

#[test]
fn test_loader_applies_length_window() {
    let data = "a\nab\nabc\nabcd\nabcde\n";
    let dict = Dictionary::from_reader(Cursor::new(data), &filter(2, 4)).unwrap();
    assert_eq!(dict.words(), &["ab", "abc", "abcd"]);
}

#[test]
fn test_loader_keeps_duplicates_as_distinct_entries() {
    let data = "word\nWORD\nword\n";
    let dict = Dictionary::from_reader(Cursor::new(data), &filter(1, 24)).unwrap();
    assert_eq!(dict.len(), 3);
    assert_eq!(dict.words()[1], "word");
}

#[test]
fn test_loader_reads_first_column_of_frequency_lists() {
    let data = "the\t23135851162\nof\t13151942776\nrock'n'roll\t1\n";
    let dict = Dictionary::from_reader(Cursor::new(data), &filter(1, 24)).unwrap();
    assert_eq!(dict.words(), &["the", "of"]);
}

#[test]
fn test_loader_ignores_quotes_and_blank_lines() {
    let data = "\"quoted\"\n\n   \nplain\n";
    let dict = Dictionary::from_reader(Cursor::new(data), &filter(1, 24)).unwrap();
    assert_eq!(dict.words(), &["plain"]);
}

#[test]
fn test_loader_skips_non_utf8_lines() {
    let data: &[u8] = b"caf\xe9\nok\n";
    let dict = Dictionary::from_reader(data, &filter(1, 24)).unwrap();
    assert_eq!(dict.words(), &["ok"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Dictionary::load_from_file("/definitely/not/here/words", &filter(1, 24)).unwrap_err();
    assert!(matches!(err, PassForgeError::Io(_)));
}

#[test]
fn test_from_words_filters_like_loader() {
    let dict = Dictionary::from_words(["Hi", "there", "x-ray", ""], &filter(1, 4));
    assert_eq!(dict.words(), &["hi"]);
    assert!(!dict.is_empty());
}

#[test]
fn test_is_ascii_alpha() {
    assert!(is_ascii_alpha(b"Hello"));
    assert!(is_ascii_alpha(b""));
    assert!(!is_ascii_alpha(b"hi!"));
    assert!(!is_ascii_alpha("naïve".as_bytes()));
}
