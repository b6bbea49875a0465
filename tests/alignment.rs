//! Reconstructing "this is a test" from its phones, with and without edits.
use phonecodes::phonecodes::align::AlignmentIndex;
use phonecodes::phonecodes::alphabet::{Alphabet, Language};
use phonecodes::phonecodes::lexicon::Lexicon;

// Word sequences at one and two edits from "ð ɪ s ɪ z ə t ɛ s t", sorted. Repeats are
// distinct alignments that spell the same words.
const DISTANCE_1: &[&str] = &[
    "a this is a test",
    "this a is a test",
    "this is a a test",
    "this is a a test",
    "this is a test a",
    "this is test",
];

const DISTANCE_2: &[&str] = &[
    "a a this is a test",
    "a this a is a test",
    "a this is a a test",
    "a this is a a test",
    "a this is a test a",
    "a this is test",
    "is is a test",
    "is this is a test",
    "this a a is a test",
    "this a is a a test",
    "this a is a a test",
    "this a is a test",
    "this a is a test a",
    "this a is test",
    "this is a a a test",
    "this is a a a test",
    "this is a a a test",
    "this is a a test",
    "this is a a test a",
    "this is a a test a",
    "this is a is test",
    "this is a test",
    "this is a test",
    "this is a test",
    "this is a test",
    "this is a test",
    "this is a test",
    "this is a test",
    "this is a test",
    "this is a test",
    "this is a test a a",
    "this is a test is",
    "this is is a test",
    "this is is a test",
    "this is is a test",
    "this is is test",
    "this is test a",
    "this this a test",
];

fn toy_lexicon() -> Lexicon {
    let mut lex = Lexicon::new(Language::new("eng").unwrap(), Alphabet::Ipa);
    lex.add_tokens("this", &["ð", "ɪ", "s"]).unwrap();
    lex.add_tokens("is", &["ɪ", "z"]).unwrap();
    lex.add_tokens("a", &["ə"]).unwrap();
    lex.add_tokens("test", &["t", "ɛ", "s", "t"]).unwrap();
    return lex;
}

fn split(sentences: &[&str]) -> Vec<Vec<String>> {
    sentences
        .iter()
        .map(|s| s.split_whitespace().map(String::from).collect())
        .collect()
}

fn sentence_phones(index: &AlignmentIndex) -> Vec<String> {
    index.words2phones(&["this", "is", "a", "test"]).unwrap()
}

#[test]
fn test_words2phones() {
    let index = AlignmentIndex::new(&toy_lexicon());
    assert_eq!(
        sentence_phones(&index),
        vec!["ð", "ɪ", "s", "ɪ", "z", "ə", "t", "ɛ", "s", "t"]
    );
}

#[test]
fn test_exact_reconstruction() {
    let index = AlignmentIndex::new(&toy_lexicon());
    let result = index.phones2words(&sentence_phones(&index), 0).unwrap();
    assert_eq!(result.buckets, vec![split(&["this is a test"])]);
}

#[test]
fn test_reconstruction_within_two_edits() {
    let index = AlignmentIndex::new(&toy_lexicon());
    let result = index.phones2words(&sentence_phones(&index), 2).unwrap();
    assert_eq!(result.buckets.len(), 3);
    assert_eq!(result[0], split(&["this is a test"]));
    assert_eq!(result[1].len(), 6);
    assert_eq!(result[1], split(DISTANCE_1));
    assert_eq!(result[2].len(), 38);
    assert_eq!(result[2], split(DISTANCE_2));
}

#[test]
fn test_larger_budget_keeps_smaller_buckets() {
    let index = AlignmentIndex::new(&toy_lexicon());
    let phones = sentence_phones(&index);
    let two = index.phones2words(&phones, 2).unwrap();
    let three = index.phones2words(&phones, 3).unwrap();
    assert_eq!(&three.buckets[..3], &two.buckets[..]);
    assert_eq!(three[3].len(), 172);
}

#[test]
fn test_reconstruction_in_arpabet() {
    let lex = toy_lexicon().recode(Alphabet::Arpabet).unwrap();
    let index = AlignmentIndex::new(&lex);
    let phones = index
        .words2phones_with_boundaries(&["this", "is", "a", "test"])
        .unwrap();
    assert_eq!(
        phones.join(" "),
        "DH IH S # IH Z # AX # T EH S T"
    );
    let result = index.phones2words(&phones, 1).unwrap();
    assert_eq!(result[0], split(&["this is a test"]));
    assert_eq!(result[1], split(DISTANCE_1));
}
