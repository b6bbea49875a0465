//! A pronunciation lexicon.
//!
//! A lexicon maps written words to one or more pronunciations, each a sequence of phone
//! tokens in a single alphabet. Entries keep their insertion order and variants keep theirs;
//! the first variant of a word is its primary pronunciation.
//!
//! Lexicons are never converted in place. `recode` returns a new lexicon in another alphabet:
//!
//! ```
//! use phonecodes::phonecodes::alphabet::{Alphabet, Language};
//! use phonecodes::phonecodes::lexicon::Lexicon;
//!
//! let mut lex = Lexicon::new(Language::new("eng").unwrap(), Alphabet::Ipa);
//! lex.add_tokens("this", &["ð", "ˈɪ", "s"]).unwrap();
//! let arpabet = lex.recode(Alphabet::Arpabet).unwrap();
//! assert_eq!(arpabet.to_text(), "this\tDH IH1 S\n");
//! ```
//!
//! The text form written by `save` has one line per pronunciation variant:
//!
//! ```text
//! read	ɹ i d
//! read	ɹ ɛ d
//! the	ð ə
//! ```
//!
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use regex::Regex;

use crate::phonecodes::alphabet::{Alphabet, Language};
use crate::phonecodes::codec::{PhoneCodec, DEFAULT_CODEC};
use crate::phonecodes::error::{PhoneError, Result};

/// An ordered sequence of phone tokens, e.g. `["ð", "ɪ", "s"]`.
pub type Pronunciation = Vec<String>;

/// A word and its pronunciation variants.
#[derive(Clone, Debug, PartialEq)]
pub struct LexiconEntry {
    /// The word as written, e.g. "aluminium", "let's", "a.m.".
    pub word: String,

    /// Never empty, and no two variants are equal.
    pub variants: Vec<Pronunciation>,
}

impl LexiconEntry {
    /// The first listed variant.
    pub fn primary(&self) -> &Pronunciation {
        &self.variants[0]
    }
}

/// A container for a collection of entries, all in one alphabet and language.
#[derive(Clone, Debug)]
pub struct Lexicon {
    language: Language,
    alphabet: Alphabet,
    entries: Vec<LexiconEntry>,

    // Word -> position in `entries`.
    positions: HashMap<String, usize>,
}

impl PartialEq for Lexicon {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.alphabet == other.alphabet
            && self.entries == other.entries
    }
}

impl Lexicon {
    /// Creates a new empty Lexicon.
    pub fn new(language: Language, alphabet: Alphabet) -> Lexicon {
        Lexicon {
            language,
            alphabet,
            entries: vec![],
            positions: HashMap::new(),
        }
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Adds a pronunciation for `word`.
    ///
    /// A new word is appended as a new entry. A known word gets another variant, unless the
    /// same variant is already listed, in which case nothing changes.
    pub fn add(&mut self, word: &str, pronunciation: Pronunciation) -> Result<()> {
        if word.is_empty() || word.contains(|c: char| c == '\t' || c == '\n' || c == '\r') {
            return Err(PhoneError::malformed(word, "word is empty or contains a tab or newline"));
        }
        if pronunciation.is_empty() {
            return Err(PhoneError::malformed(word, "pronunciation is empty"));
        }
        if pronunciation
            .iter()
            .any(|t| t.is_empty() || t.contains(char::is_whitespace))
        {
            return Err(PhoneError::malformed(word, "phone token is empty or contains whitespace"));
        }

        match self.positions.get(word) {
            Some(&pos) => {
                let variants = &mut self.entries[pos].variants;
                if !variants.contains(&pronunciation) {
                    variants.push(pronunciation);
                }
            }
            None => {
                self.positions.insert(word.to_string(), self.entries.len());
                self.entries.push(LexiconEntry {
                    word: word.to_string(),
                    variants: vec![pronunciation],
                });
            }
        }
        Ok(())
    }

    /// Convenience for `add` with borrowed tokens.
    pub fn add_tokens(&mut self, word: &str, tokens: &[&str]) -> Result<()> {
        self.add(word, tokens.iter().map(|t| t.to_string()).collect())
    }

    /// Returns the entry for the given word, or None.
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        return self.positions.get(word).map(|&pos| &self.entries[pos]);
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Returns the number of words in the lexicon.
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an equivalent lexicon in `target`, using the default codec.
    pub fn recode(&self, target: Alphabet) -> Result<Lexicon> {
        self.recode_with(&DEFAULT_CODEC, target)
    }

    /// Returns an equivalent lexicon in `target`.
    ///
    /// Tokens are converted one by one, see `PhoneCodec::transcode_pronunciation`. Variants
    /// that become identical after conversion are merged.
    pub fn recode_with(&self, codec: &PhoneCodec, target: Alphabet) -> Result<Lexicon> {
        if target == self.alphabet {
            return Ok(self.clone());
        }
        let mut result = Lexicon::new(self.language.clone(), target);
        for entry in &self.entries {
            for variant in &entry.variants {
                let recoded = codec.transcode_pronunciation(variant, self.alphabet, target, &self.language)?;
                result.add(&entry.word, recoded)?;
            }
        }
        log::debug!(
            "recoded {} entries from {} to {}",
            result.len(),
            self.alphabet,
            target
        );
        return Ok(result);
    }

    /// Writes one `word<TAB>tokens` line per variant, in entry order.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        for entry in &self.entries {
            for variant in &entry.variants {
                writeln!(out, "{}\t{}", entry.word, variant.join(" "))?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// The text that `save` writes.
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for entry in &self.entries {
            for variant in &entry.variants {
                result.push_str(&entry.word);
                result.push('\t');
                result.push_str(&variant.join(" "));
                result.push('\n');
            }
        }
        return result;
    }

    /// Saves the lexicon to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))?;
        log::info!("saved {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Parses the text written by `save`.
    pub fn parse(text: &str, language: Language, alphabet: Alphabet) -> Result<Lexicon> {
        let mut lex = Lexicon::new(language, alphabet);
        for line in parse_lines(text) {
            let (_, word, tokens) = line?;
            lex.add(word, tokens)?;
        }
        return Ok(lex);
    }
}

/// Splits the text written by `save` into `(line number, word, tokens)`, skipping blank lines.
pub(crate) fn parse_lines(text: &str) -> impl Iterator<Item = Result<(usize, &str, Pronunciation)>> + '_ {
    lazy_static! {
        // The word runs to the first tab; the rest is the space separated tokens.
        static ref LINE_RE: Regex = Regex::new(r"^([^\t]+)\t(.*)$").unwrap();
    }
    text.lines().enumerate().filter_map(|(n, line)| {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return None;
        }
        let parsed = match LINE_RE.captures(line) {
            Some(cap) => match (cap.get(1), cap.get(2)) {
                (Some(word), Some(tokens)) => Ok((
                    n + 1,
                    word.as_str(),
                    tokens.as_str().split_whitespace().map(String::from).collect(),
                )),
                _ => Err(PhoneError::invalid_format(n + 1, "expected word<TAB>phones")),
            },
            None => Err(PhoneError::invalid_format(n + 1, "expected word<TAB>phones")),
        };
        Some(parsed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eng() -> Language {
        Language::new("eng").unwrap()
    }

    fn sample() -> Lexicon {
        let mut lex = Lexicon::new(eng(), Alphabet::Ipa);
        lex.add_tokens("read", &["ɹ", "ˈi", "d"]).unwrap();
        lex.add_tokens("read", &["ɹ", "ˈɛ", "d"]).unwrap();
        lex.add_tokens("the", &["ð", "ə"]).unwrap();
        lex.add_tokens("church", &["tʃ", "ˈɝ", "tʃ"]).unwrap();
        return lex;
    }

    #[test]
    fn test_lexicon_add_and_lookup() {
        let lex = sample();
        assert_eq!(lex.len(), 3);
        let entry = lex.lookup("read").unwrap(); // Or fail.
        assert_eq!(entry.variants.len(), 2);
        assert_eq!(entry.primary(), &vec!["ɹ", "ˈi", "d"]);
        assert_eq!(None, lex.lookup("unknown"));
    }

    #[test]
    fn test_lexicon_keeps_insertion_order() {
        let lex = sample();
        let words: Vec<&str> = lex.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["read", "the", "church"]);
    }

    #[test]
    fn test_lexicon_ignores_repeated_variant() {
        let mut lex = sample();
        lex.add_tokens("the", &["ð", "ə"]).unwrap();
        assert_eq!(lex.lookup("the").unwrap().variants.len(), 1);
    }

    #[test]
    fn test_lexicon_rejects_malformed_pronunciations() {
        let mut lex = sample();
        assert!(matches!(
            lex.add("empty", vec![]),
            Err(PhoneError::MalformedPronunciation { .. })
        ));
        assert!(matches!(
            lex.add_tokens("blank", &["a", ""]),
            Err(PhoneError::MalformedPronunciation { .. })
        ));
        assert!(matches!(
            lex.add_tokens("spaced", &["a b"]),
            Err(PhoneError::MalformedPronunciation { .. })
        ));
        assert!(matches!(
            lex.add_tokens("", &["a"]),
            Err(PhoneError::MalformedPronunciation { .. })
        ));
        assert_eq!(lex.len(), 3);
    }

    #[test]
    fn test_recode_to_arpabet() {
        let arpabet = sample().recode(Alphabet::Arpabet).unwrap();
        assert_eq!(arpabet.alphabet(), Alphabet::Arpabet);
        assert_eq!(
            arpabet.to_text(),
            "read\tR IY1 D\nread\tR EH1 D\nthe\tDH AX\nchurch\tCH ER1 CH\n"
        );
    }

    #[test]
    fn test_recode_keeps_tokens_together() {
        let xsampa = sample().recode(Alphabet::Xsampa).unwrap();
        assert_eq!(xsampa.lookup("read").unwrap().primary(), &vec!["r\\", "\"i", "d"]);
        assert_eq!(xsampa.lookup("church").unwrap().primary(), &vec!["tS", "\"3`", "tS"]);
    }

    #[test]
    fn test_recode_same_alphabet_is_a_copy() {
        let lex = sample();
        assert_eq!(lex.recode(Alphabet::Ipa).unwrap(), lex);
    }

    #[test]
    fn test_recode_unknown_symbol_fails() {
        let mut lex = Lexicon::new(eng(), Alphabet::Ipa);
        lex.add_tokens("rot", &["ʁ", "ɔ", "t"]).unwrap();
        assert!(matches!(
            lex.recode(Alphabet::Arpabet),
            Err(PhoneError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn test_text_round_trip() {
        let lex = sample();
        let text = lex.to_text();
        let parsed = Lexicon::parse(&text, eng(), Alphabet::Ipa).unwrap();
        assert_eq!(parsed, lex);
        assert_eq!(parsed.to_text(), text);
    }

    #[test]
    fn test_write_to_matches_to_text() {
        let lex = sample();
        let mut buf: Vec<u8> = vec![];
        lex.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), lex.to_text());
    }

    #[test]
    fn test_parse_rejects_line_without_tab() {
        match Lexicon::parse("the\tð ə\nthis ð ɪ s\n", eng(), Alphabet::Ipa) {
            Err(PhoneError::InvalidFormat { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            Lexicon::parse("the\t\n", eng(), Alphabet::Ipa),
            Err(PhoneError::MalformedPronunciation { .. })
        ));
    }
}
