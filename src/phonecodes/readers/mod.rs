//! Readers for published pronunciation dictionaries.
//!
//! Each reader turns one file format into a `Lexicon` in the format's own alphabet. Recode
//! the result to work in another alphabet.
//!
//! ```
//! use phonecodes::phonecodes::alphabet::{Alphabet, Language};
//! use phonecodes::phonecodes::params::{DictParams, DictType};
//! use phonecodes::phonecodes::readers::read_str;
//!
//! let text = "abandon(abandon,VB,VBP) # ə . b ˈæ n . d ə n #\n";
//! let params = DictParams::new().with_discard_phones("#.");
//! let eng = Language::new("eng").unwrap();
//! let lex = read_str(text, &eng, DictType::Isle, &params).unwrap();
//! assert_eq!(lex.recode(Alphabet::Arpabet).unwrap().to_text(), "abandon\tAX B AE1 N D AX N\n");
//! ```
//!
pub mod babel;
pub mod callhome;
pub mod celex;
pub mod isle;

use std::path::Path;

use crate::phonecodes::alphabet::Language;
use crate::phonecodes::error::Result;
use crate::phonecodes::lexicon::{self, Lexicon};
use crate::phonecodes::params::{DictParams, DictType};

/// Reads a dictionary file.
pub fn read<P: AsRef<Path>>(
    path: P,
    language: &Language,
    dict_type: DictType,
    params: &DictParams,
) -> Result<Lexicon> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let lex = read_str(&text, language, dict_type, params)?;
    log::info!(
        "read {} entries for {} from {} ({})",
        lex.len(),
        language,
        path.display(),
        dict_type
    );
    return Ok(lex);
}

/// Reads a dictionary from text already in memory.
pub fn read_str(text: &str, language: &Language, dict_type: DictType, params: &DictParams) -> Result<Lexicon> {
    let mut builder = LexiconBuilder::new(language, dict_type, params);
    parse_into(text, dict_type, &mut builder)?;
    return Ok(builder.finish());
}

fn parse_into(text: &str, dict_type: DictType, builder: &mut LexiconBuilder) -> Result<()> {
    match dict_type {
        DictType::Isle => isle::parse(text, builder),
        DictType::Babel => babel::parse(text, builder),
        DictType::Celex => celex::parse(text, builder),
        DictType::Callhome => callhome::parse(text, builder),
        DictType::Lexicon(_) => {
            for line in lexicon::parse_lines(text) {
                let (line, word, tokens) = line?;
                builder.add(line, word, tokens)?;
            }
            Ok(())
        }
    }
}

/// Collects the entries a reader finds, applying the dictionary params.
pub struct LexiconBuilder<'p> {
    lex: Lexicon,
    params: &'p DictParams,
    // line numbers of skipped pronunciations
    skipped: Vec<usize>,
}

impl<'p> LexiconBuilder<'p> {
    fn new(language: &Language, dict_type: DictType, params: &'p DictParams) -> LexiconBuilder<'p> {
        LexiconBuilder {
            lex: Lexicon::new(language.clone(), dict_type.alphabet()),
            params,
            skipped: Vec::new(),
        }
    }

    pub fn language(&self) -> &Language {
        self.lex.language()
    }

    /// Adds a variant found on line `line`, after dropping discarded tokens.
    ///
    /// A pronunciation left with no tokens is skipped with a warning.
    pub fn add(&mut self, line: usize, word: &str, tokens: Vec<String>) -> Result<()> {
        let kept: Vec<String> = tokens.into_iter().filter(|t| self.params.keeps(t)).collect();
        if kept.is_empty() {
            log::warn!("line {}: no pronunciation for {:?}, skipping", line, word);
            self.skipped.push(line);
            return Ok(());
        }
        self.lex.add(word, kept)
    }

    fn finish(self) -> Lexicon {
        if !self.skipped.is_empty() {
            log::debug!("skipped {} empty pronunciations", self.skipped.len());
        }
        self.lex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonecodes::alphabet::Alphabet;

    #[test]
    fn test_read_str_canonical_format() {
        let eng = Language::new("eng").unwrap();
        let text = "the\tDH AX\nthe\tDH IY0\na\tAX\n";
        let lex = read_str(text, &eng, "lex:arpabet".parse().unwrap(), &DictParams::new()).unwrap();
        assert_eq!(lex.alphabet(), Alphabet::Arpabet);
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.to_text(), text);
    }

    #[test]
    fn test_discarded_tokens_are_removed() {
        let eng = Language::new("eng").unwrap();
        let params = DictParams::new().with_discard_phones("_");
        let lex = read_str("the\tð _ ə\n", &eng, DictType::Lexicon(Alphabet::Ipa), &params).unwrap();
        assert_eq!(lex.to_text(), "the\tð ə\n");
    }

    #[test]
    fn test_empty_after_discard_is_skipped() {
        let eng = Language::new("eng").unwrap();
        let params = DictParams::new().with_discard_phones("#");
        let lex = read_str("hash\t#\nthe\tð ə\n", &eng, DictType::Lexicon(Alphabet::Ipa), &params).unwrap();
        assert_eq!(lex.len(), 1);
        assert!(lex.lookup("hash").is_none());
    }

    #[test]
    fn test_skipped_lines_are_numbered() {
        let eng = Language::new("eng").unwrap();
        let params = DictParams::new().with_discard_phones("#");
        let mut builder = LexiconBuilder::new(&eng, DictType::Lexicon(Alphabet::Ipa), &params);
        parse_into("the	ð ə

hash	#
", DictType::Lexicon(Alphabet::Ipa), &mut builder).unwrap();
        assert_eq!(builder.skipped, vec![3]);
        assert_eq!(builder.finish().len(), 1);
    }
}
