//! Table driven conversion between phonetic alphabets.
//!
//! A `CodecTable` maps symbols of one alphabet to symbols of another, for one language. It
//! tokenizes its input longest-match-first, so a two-character symbol like `tʃ` or `AXR` is
//! never split into two shorter symbols that also happen to be valid. When the longest
//! match would leave an untokenizable remainder, shorter matches are tried before giving up.
//!
//! `PhoneCodec` holds the tables for every supported alphabet and language, in both
//! directions. IPA is the pivot: converting between two other alphabets goes through IPA.
//!
//! ```
//! use phonecodes::phonecodes::codec::{ipa2arpabet, arpabet2ipa};
//!
//! assert_eq!(ipa2arpabet("ðɪs ɪz", "eng").unwrap(), "DH IH S # IH Z");
//! assert_eq!(arpabet2ipa("DH IH S # IH Z", "eng").unwrap(), "ðɪs ɪz");
//! ```
//!
use std::collections::HashMap;

use crate::phonecodes::alphabet::{Alphabet, Language};
use crate::phonecodes::error::{PhoneError, Result};
use crate::phonecodes::tables::{self, SymbolPairs};

/// A one-directional symbol mapping with a longest-match tokenizer.
#[derive(Debug, Clone)]
pub struct CodecTable {
    map: HashMap<String, String>,

    // Length of the longest key, in chars.
    longest: usize,
}

impl CodecTable {
    /// Builds a table from `(ipa, code)` pairs, mapping IPA to code, or code to IPA if
    /// `decode` is set. The first pair listed for a symbol wins.
    pub fn from_pairs(pairs: SymbolPairs, decode: bool) -> CodecTable {
        let mut map = HashMap::with_capacity(pairs.len());
        let mut longest = 0;
        for (ipa, code) in pairs.iter() {
            let (key, value) = if decode { (code, ipa) } else { (ipa, code) };
            longest = longest.max(key.chars().count());
            map.entry(key.to_string()).or_insert_with(|| value.to_string());
        }
        CodecTable { map, longest }
    }

    /// Returns the target symbol for exactly `symbol`, or None.
    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.map.get(symbol).map(|s| s.as_str())
    }

    /// Returns the number of source symbols.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All source symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|s| s.as_str())
    }

    /// Splits `text` into source symbols.
    ///
    /// Returns the character offset at which tokenization got stuck if `text` can't be covered.
    pub fn tokenize<'t>(&self, text: &'t str) -> std::result::Result<Vec<&'t str>, usize> {
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let n = bounds.len() - 1;
        let key_at = |i: usize, len: usize| -> &'t str { &text[bounds[i]..bounds[i + len]] };

        // completes[i] is true if text[i..] can be split into symbols.
        let mut completes = vec![false; n + 1];
        completes[n] = true;
        for i in (0..n).rev() {
            for len in 1..=self.longest.min(n - i) {
                if completes[i + len] && self.map.contains_key(key_at(i, len)) {
                    completes[i] = true;
                    break;
                }
            }
        }
        if !completes[0] {
            return Err(self.furthest_reach(text, &bounds));
        }

        let mut result = vec![];
        let mut i = 0;
        while i < n {
            let len = (1..=self.longest.min(n - i))
                .rev()
                .find(|&len| completes[i + len] && self.map.contains_key(key_at(i, len)))
                .unwrap_or(1); // Unreachable, completes[i] holds.
            result.push(key_at(i, len));
            i += len;
        }
        return Ok(result);
    }

    // The furthest char offset reachable from the start by whole symbols.
    fn furthest_reach(&self, text: &str, bounds: &[usize]) -> usize {
        let n = bounds.len() - 1;
        let mut reached = vec![false; n + 1];
        reached[0] = true;
        let mut furthest = 0;
        for i in 0..n {
            if !reached[i] {
                continue;
            }
            furthest = i;
            for len in 1..=self.longest.min(n - i) {
                if self.map.contains_key(&text[bounds[i]..bounds[i + len]]) {
                    reached[i + len] = true;
                }
            }
        }
        return furthest;
    }
}

/// Both directions of one alphabet's table for one language.
#[derive(Debug)]
struct TablePair {
    encode: CodecTable,
    decode: CodecTable,
}

impl TablePair {
    fn new(pairs: SymbolPairs) -> TablePair {
        TablePair {
            encode: CodecTable::from_pairs(pairs, false),
            decode: CodecTable::from_pairs(pairs, true),
        }
    }
}

/// A piece of an input string: a run of phones or a word boundary.
enum Segment<'a> {
    Phones { text: &'a str, offset: usize },
    Boundary,
}

/// Converts phone strings between alphabets.
///
/// Immutable once built; share it by reference.
#[derive(Debug)]
pub struct PhoneCodec {
    by_language: HashMap<Alphabet, HashMap<Language, TablePair>>,
    universal: HashMap<Alphabet, TablePair>,
}

impl PhoneCodec {
    /// Builds every table.
    pub fn new() -> PhoneCodec {
        let mut by_language: HashMap<Alphabet, HashMap<Language, TablePair>> = HashMap::new();
        for (alphabet, tag, pairs) in tables::LANGUAGE_TABLES.iter() {
            // The tags are literals in tables/mod.rs and always valid.
            if let Ok(language) = Language::new(tag) {
                by_language
                    .entry(*alphabet)
                    .or_default()
                    .insert(language, TablePair::new(*pairs));
            }
        }
        let universal: HashMap<Alphabet, TablePair> = tables::UNIVERSAL_TABLES
            .iter()
            .map(|(alphabet, pairs)| (*alphabet, TablePair::new(*pairs)))
            .collect();
        log::debug!(
            "built phone codec with {} language tables and {} universal tables",
            tables::LANGUAGE_TABLES.len(),
            universal.len()
        );
        PhoneCodec {
            by_language,
            universal,
        }
    }

    fn tables(&self, alphabet: Alphabet, language: &Language) -> Result<&TablePair> {
        self.by_language
            .get(&alphabet)
            .and_then(|langs| langs.get(language))
            .or_else(|| self.universal.get(&alphabet))
            .ok_or_else(|| PhoneError::UnsupportedLanguage {
                alphabet,
                language: language.clone(),
            })
    }

    /// True if `alphabet` can be converted to and from IPA for `language`.
    pub fn supports(&self, alphabet: Alphabet, language: &Language) -> bool {
        alphabet == Alphabet::Ipa || self.tables(alphabet, language).is_ok()
    }

    /// Returns the table converting `from` to `to`. Exactly one side must be IPA.
    pub fn table(&self, from: Alphabet, to: Alphabet, language: &Language) -> Result<&CodecTable> {
        match (from, to) {
            (Alphabet::Ipa, Alphabet::Ipa) => Err(PhoneError::UnsupportedLanguage {
                alphabet: Alphabet::Ipa,
                language: language.clone(),
            }),
            (Alphabet::Ipa, code) => Ok(&self.tables(code, language)?.encode),
            (code, Alphabet::Ipa) => Ok(&self.tables(code, language)?.decode),
            (_, code) => Err(PhoneError::UnsupportedLanguage {
                alphabet: code,
                language: language.clone(),
            }),
        }
    }

    /// IPA symbols of the `alphabet` table that come back unchanged after a round trip.
    ///
    /// Aliases like ASCII `g` for `ɡ` are left out. The result is sorted.
    pub fn canonical_ipa_symbols(&self, alphabet: Alphabet, language: &Language) -> Result<Vec<&str>> {
        let pair = self.tables(alphabet, language)?;
        let mut result: Vec<&str> = pair
            .encode
            .symbols()
            .filter(|ipa| {
                pair.encode
                    .get(ipa)
                    .and_then(|code| pair.decode.get(code))
                    .map_or(false, |back| back == *ipa)
            })
            .collect();
        result.sort();
        return Ok(result);
    }

    /// Converts a phone string from one alphabet to another.
    ///
    /// Whitespace and the `#` boundary of ARPABET are word boundaries and carry over to the
    /// target alphabet's boundary. Fails with `UnknownSymbol` on any substring the source
    /// table doesn't cover.
    pub fn convert(&self, text: &str, from: Alphabet, to: Alphabet, language: &Language) -> Result<String> {
        if from == to {
            return Ok(text.to_string());
        }
        if from != Alphabet::Ipa && to != Alphabet::Ipa {
            let ipa = self.convert(text, from, Alphabet::Ipa, language)?;
            return self.convert(&ipa, Alphabet::Ipa, to, language);
        }

        let table = self.table(from, to, language)?;
        let mut pieces: Vec<&str> = vec![];
        for segment in segments(text, from) {
            match segment {
                Segment::Boundary => pieces.push(to.word_boundary()),
                Segment::Phones { text: run, offset } => {
                    let symbols = table
                        .tokenize(run)
                        .map_err(|pos| unknown_symbol(run, offset, pos, from, language))?;
                    for symbol in symbols {
                        // Every tokenized symbol is a key.
                        if let Some(target) = table.get(symbol) {
                            pieces.push(target);
                        }
                    }
                }
            }
        }

        if to.is_space_separated() {
            return Ok(pieces.join(" "));
        }
        return Ok(pieces.concat());
    }

    /// Converts a single pronunciation token, keeping it a single token.
    ///
    /// The token may hold several symbols, e.g. a stress mark and a vowel. Their targets are
    /// concatenated.
    pub fn transcode_token(&self, token: &str, from: Alphabet, to: Alphabet, language: &Language) -> Result<String> {
        if from == to {
            return Ok(token.to_string());
        }
        if from != Alphabet::Ipa && to != Alphabet::Ipa {
            let ipa = self.transcode_token(token, from, Alphabet::Ipa, language)?;
            return self.transcode_token(&ipa, Alphabet::Ipa, to, language);
        }
        let table = self.table(from, to, language)?;
        return Ok(targets(table, token, from, language)?.concat());
    }

    /// Converts a pronunciation token by token.
    ///
    /// A token stays one token, so `ˈæ` becomes the X-SAMPA token `"{`. In a space separated
    /// alphabet each symbol is a token of its own, so `ɪə` becomes `IH AX`.
    ///
    /// Stress marks and syllable marks written as tokens of their own are kept when the
    /// target has symbols for them. When it doesn't, a stress mark moves onto the next token
    /// that can carry it, i.e. the syllable's vowel, or is dropped if none follows. A syllable
    /// mark is dropped.
    pub fn transcode_pronunciation<S: AsRef<str>>(
        &self,
        tokens: &[S],
        from: Alphabet,
        to: Alphabet,
        language: &Language,
    ) -> Result<Vec<String>> {
        if from == to {
            return Ok(tokens.iter().map(|t| t.as_ref().to_string()).collect());
        }
        if from != Alphabet::Ipa && to != Alphabet::Ipa {
            let ipa = self.transcode_pronunciation(tokens, from, Alphabet::Ipa, language)?;
            return self.transcode_pronunciation(&ipa, Alphabet::Ipa, to, language);
        }

        let table = self.table(from, to, language)?;
        let mut result = Vec::with_capacity(tokens.len());
        let mut stress: Option<&str> = None;
        for token in tokens {
            let token = token.as_ref();
            if from == Alphabet::Ipa && table.tokenize(token).is_err() {
                if STRESS_MARKS.contains(&token) {
                    stress = Some(token);
                    continue;
                }
                if token == SYLLABLE_MARK {
                    // Stress doesn't carry past its syllable.
                    stress = None;
                    continue;
                }
            }

            let mut source = token.to_string();
            if let Some(mark) = stress {
                let stressed = format!("{}{}", mark, token);
                if table.tokenize(&stressed).is_ok() {
                    source = stressed;
                    stress = None;
                }
            }
            let symbols = targets(table, &source, from, language)?;
            if to.is_space_separated() {
                result.extend(symbols.into_iter().map(String::from));
            } else {
                result.push(symbols.concat());
            }
        }
        return Ok(result);
    }
}

impl Default for PhoneCodec {
    fn default() -> Self {
        PhoneCodec::new()
    }
}

/// Splits `text` into phone runs and word boundaries, per the conventions of `alphabet`.
fn segments(text: &str, alphabet: Alphabet) -> Vec<Segment<'_>> {
    let mut result = vec![];
    let mut run: Option<(usize, usize)> = None; // (byte, char) offsets of the current run
    let mut in_space = false;
    for (char_pos, (byte, c)) in text.char_indices().enumerate() {
        if c.is_whitespace() {
            if let Some((start, offset)) = run.take() {
                result.push(phone_run(&text[start..byte], offset, alphabet));
            }
            // Whitespace is a boundary unless the alphabet uses it to separate phones.
            if !in_space && !alphabet.is_space_separated() {
                result.push(Segment::Boundary);
            }
            in_space = true;
        } else {
            if run.is_none() {
                run = Some((byte, char_pos));
            }
            in_space = false;
        }
    }
    if let Some((start, offset)) = run {
        result.push(phone_run(&text[start..], offset, alphabet));
    }
    return result;
}

fn phone_run(run: &str, offset: usize, alphabet: Alphabet) -> Segment<'_> {
    if alphabet.is_space_separated() && run == alphabet.word_boundary() {
        return Segment::Boundary;
    }
    Segment::Phones { text: run, offset }
}

fn unknown_symbol(run: &str, offset: usize, pos: usize, alphabet: Alphabet, language: &Language) -> PhoneError {
    let symbol: String = run.chars().skip(pos).take(1).collect();
    PhoneError::UnknownSymbol {
        symbol,
        position: offset + pos,
        alphabet,
        language: language.clone(),
    }
}

// IPA marks that may stand as tokens of their own, e.g. in CELEX pronunciations.
const STRESS_MARKS: [&str; 2] = ["ˈ", "ˌ"];
const SYLLABLE_MARK: &str = ".";

/// The target symbols of `token`, which must tokenize in `table`.
fn targets<'t>(table: &'t CodecTable, token: &str, from: Alphabet, language: &Language) -> Result<Vec<&'t str>> {
    let symbols = table
        .tokenize(token)
        .map_err(|pos| unknown_symbol(token, 0, pos, from, language))?;
    // Every tokenized symbol is a key.
    return Ok(symbols.into_iter().filter_map(|symbol| table.get(symbol)).collect());
}

lazy_static! {
    /// The codec built from the tables compiled into the crate.
    pub static ref DEFAULT_CODEC: PhoneCodec = PhoneCodec::new();
}

fn convert_with_default(text: &str, from: Alphabet, to: Alphabet, language: &str) -> Result<String> {
    let language = Language::new(language)?;
    DEFAULT_CODEC.convert(text, from, to, &language)
}

pub fn arpabet2ipa(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Arpabet, Alphabet::Ipa, language)
}

pub fn ipa2arpabet(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Ipa, Alphabet::Arpabet, language)
}

pub fn ipa2callhome(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Ipa, Alphabet::Callhome, language)
}

pub fn callhome2ipa(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Callhome, Alphabet::Ipa, language)
}

pub fn ipa2disc(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Ipa, Alphabet::Disc, language)
}

pub fn disc2ipa(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Disc, Alphabet::Ipa, language)
}

pub fn ipa2xsampa(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Ipa, Alphabet::Xsampa, language)
}

pub fn xsampa2ipa(phones: &str, language: &str) -> Result<String> {
    convert_with_default(phones, Alphabet::Xsampa, Alphabet::Ipa, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(tag: &str) -> Language {
        Language::new(tag).unwrap()
    }

    #[test]
    fn test_tokenize_prefers_longest_match() {
        let table = CodecTable::from_pairs(&[("t", "T"), ("ʃ", "SH"), ("tʃ", "CH")], false);
        assert_eq!(table.tokenize("tʃ").unwrap(), vec!["tʃ"]);
        assert_eq!(table.tokenize("ʃt").unwrap(), vec!["ʃ", "t"]);
    }

    #[test]
    fn test_tokenize_falls_back_to_shorter_match() {
        // "ɛi" is a symbol, but taking it would strand the "ː".
        let table = CodecTable::from_pairs(&[("ɛ", "E"), ("ɛi", "K"), ("iː", "!")], false);
        assert_eq!(table.tokenize("ɛiː").unwrap(), vec!["ɛ", "iː"]);
        assert_eq!(table.tokenize("ɛi").unwrap(), vec!["ɛi"]);
    }

    #[test]
    fn test_tokenize_reports_stuck_position() {
        let table = CodecTable::from_pairs(&[("a", "A"), ("b", "B")], false);
        assert_eq!(table.tokenize("abxb"), Err(2));
        assert_eq!(table.tokenize("x"), Err(0));
        assert_eq!(table.tokenize("").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_first_listed_pair_wins() {
        let pairs: SymbolPairs = &[("ɡ", "G"), ("g", "G"), ("ʌ", "AH"), ("ʌ", "AH0")];
        let encode = CodecTable::from_pairs(pairs, false);
        let decode = CodecTable::from_pairs(pairs, true);
        assert_eq!(encode.get("g"), Some("G"));
        assert_eq!(encode.get("ʌ"), Some("AH"));
        assert_eq!(decode.get("G"), Some("ɡ"));
        assert_eq!(decode.get("AH0"), Some("ʌ"));
        assert_eq!(encode.len(), 3);
    }

    #[test]
    fn test_arpabet_conversions() {
        assert_eq!(ipa2arpabet("ðɪs", "eng").unwrap(), "DH IH S");
        assert_eq!(ipa2arpabet("tʃɝtʃ", "eng").unwrap(), "CH ER CH");
        assert_eq!(ipa2arpabet("ˈæpl̩", "eng").unwrap(), "AE1 P EL");
        assert_eq!(arpabet2ipa("AH0 B AW1 T", "eng").unwrap(), "ʌbˈaʊt");
        assert_eq!(arpabet2ipa("  DH   IH S ", "eng").unwrap(), "ðɪs");
    }

    #[test]
    fn test_word_boundaries_carry_over() {
        assert_eq!(ipa2arpabet("ðɪs ɪz", "eng").unwrap(), "DH IH S # IH Z");
        assert_eq!(arpabet2ipa("DH IH S # IH Z", "eng").unwrap(), "ðɪs ɪz");
        assert_eq!(ipa2xsampa("ðɪs  ɪz", "ben").unwrap(), "DIs Iz");
        assert_eq!(xsampa2ipa("DIs Iz", "ben").unwrap(), "ðɪs ɪz");
    }

    #[test]
    fn test_xsampa_conversions() {
        assert_eq!(ipa2xsampa("tʰaka", "ben").unwrap(), "t_haka");
        assert_eq!(xsampa2ipa("b_h\\ai", "ben").unwrap(), "bʱai");
        assert!(matches!(
            xsampa2ipa("t_>ɨ", "amh"),
            Err(PhoneError::UnknownSymbol { .. })
        ));
        assert_eq!(ipa2xsampa("tʼɨ", "amh").unwrap(), "t_>1");
        assert_eq!(xsampa2ipa("\"hElo", "eng").unwrap(), "ˈhɛlo");
        assert_eq!(ipa2xsampa("a\u{0303}", "ben").unwrap(), "a~");
    }

    #[test]
    fn test_disc_conversions() {
        assert_eq!(ipa2disc("ˈaɪ.ə", "eng").unwrap(), "'2-@");
        assert_eq!(disc2ipa("'2-@", "eng").unwrap(), "ˈaɪ.ə");
        assert_eq!(ipa2disc("pfɛrt", "deu").unwrap(), "+Ert");
        assert_eq!(disc2ipa("KL", "nld").unwrap(), "ɛiœy");
        // The same character means different things per language.
        assert_eq!(disc2ipa("J", "eng").unwrap(), "tʃ");
        assert_eq!(disc2ipa("J", "nld").unwrap(), "ɲ");
    }

    #[test]
    fn test_callhome_conversions() {
        assert_eq!(ipa2callhome("kitaːb", "arz").unwrap(), "kitAb");
        assert_eq!(callhome2ipa("Tayyib", "arz").unwrap(), "tˤajjib");
        assert_eq!(ipa2callhome("ʂʐ˥˩", "cmn").unwrap(), "Sr4");
        assert_eq!(callhome2ipa("ma3", "cmn").unwrap(), "ma˨˩˦");
        assert_eq!(ipa2callhome("tʃiko", "spa").unwrap(), "Ciko");
        assert_eq!(callhome2ipa("kaRo", "spa").unwrap(), "karo");
    }

    #[test]
    fn test_unknown_symbol_is_reported() {
        match ipa2arpabet("ðɪxs", "eng") {
            Err(PhoneError::UnknownSymbol {
                symbol,
                position,
                alphabet,
                language,
            }) => {
                assert_eq!(symbol, "x");
                assert_eq!(position, 2);
                assert_eq!(alphabet, Alphabet::Ipa);
                assert_eq!(language.as_str(), "eng");
            }
            other => panic!("unexpected {:?}", other),
        }
        // Offsets count from the start of the whole string, across boundaries.
        match xsampa2ipa("aI aX\\ a$", "amh") {
            Err(PhoneError::UnknownSymbol { position, .. }) => assert_eq!(position, 8),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_language() {
        assert!(matches!(
            ipa2arpabet("ðɪs", "deu"),
            Err(PhoneError::UnsupportedLanguage { .. })
        ));
        assert!(matches!(
            ipa2disc("a", "spa"),
            Err(PhoneError::UnsupportedLanguage { .. })
        ));
        assert!(matches!(ipa2disc("a", "english"), Err(PhoneError::InvalidLanguage(_))));
    }

    #[test]
    fn test_convert_between_non_ipa_alphabets_pivots() {
        let codec = PhoneCodec::new();
        let eng = lang("eng");
        let disc = codec
            .convert("DH IH S", Alphabet::Arpabet, Alphabet::Disc, &eng)
            .unwrap();
        assert_eq!(disc, "DIs");
        let back = codec
            .convert(&disc, Alphabet::Disc, Alphabet::Arpabet, &eng)
            .unwrap();
        assert_eq!(back, "DH IH S");
    }

    #[test]
    fn test_transcode_token_keeps_one_token() {
        let codec = PhoneCodec::new();
        let eng = lang("eng");
        assert_eq!(
            codec.transcode_token("ˈɪ", Alphabet::Ipa, Alphabet::Xsampa, &eng).unwrap(),
            "\"I"
        );
        assert_eq!(
            codec.transcode_token("\"I", Alphabet::Xsampa, Alphabet::Ipa, &eng).unwrap(),
            "ˈɪ"
        );
        assert_eq!(
            codec.transcode_token("ˈɪ", Alphabet::Ipa, Alphabet::Arpabet, &eng).unwrap(),
            "IH1"
        );
        assert_eq!(
            codec.transcode_token("IH1", Alphabet::Arpabet, Alphabet::Disc, &eng).unwrap(),
            "'I"
        );
    }

    #[test]
    fn test_transcode_pronunciation_moves_stress_onto_vowel() {
        let codec = PhoneCodec::new();
        let eng = lang("eng");
        // CELEX writes stress and syllable marks as tokens of their own.
        let abacus = ["ˈ", "æ", ".", "b", "ə", ".", "k", "ə", "s"];
        assert_eq!(
            codec.transcode_pronunciation(&abacus, Alphabet::Ipa, Alphabet::Arpabet, &eng).unwrap(),
            vec!["AE1", "B", "AX", "K", "AX", "S"]
        );
        let abandon = ["ə", ".", "ˈ", "b", "æ", "n", ".", "d", "ə", "n"];
        assert_eq!(
            codec.transcode_pronunciation(&abandon, Alphabet::Ipa, Alphabet::Arpabet, &eng).unwrap(),
            vec!["AX", "B", "AE1", "N", "D", "AX", "N"]
        );
        let disc = ["'", "{", "-", "b", "@"];
        assert_eq!(
            codec.transcode_pronunciation(&disc, Alphabet::Disc, Alphabet::Arpabet, &eng).unwrap(),
            vec!["AE1", "B", "AX"]
        );
        // DISC has the marks, so they stay.
        assert_eq!(
            codec.transcode_pronunciation(&abacus[..4], Alphabet::Ipa, Alphabet::Disc, &eng).unwrap(),
            vec!["'", "{", "-", "b"]
        );
    }

    #[test]
    fn test_transcode_pronunciation_stress_stops_at_syllable() {
        let codec = PhoneCodec::new();
        let eng = lang("eng");
        let tokens = ["ˌ", "t", ".", "ə"];
        assert_eq!(
            codec.transcode_pronunciation(&tokens, Alphabet::Ipa, Alphabet::Arpabet, &eng).unwrap(),
            vec!["T", "AX"]
        );
    }

    #[test]
    fn test_transcode_pronunciation_splits_for_arpabet() {
        let codec = PhoneCodec::new();
        let eng = lang("eng");
        assert_eq!(
            codec.transcode_pronunciation(&["ˈɪə", "d"], Alphabet::Ipa, Alphabet::Arpabet, &eng).unwrap(),
            vec!["IH1", "AX", "D"]
        );
        assert_eq!(
            codec.transcode_pronunciation(&["ˈɪə", "d"], Alphabet::Ipa, Alphabet::Xsampa, &eng).unwrap(),
            vec!["\"I@", "d"]
        );
    }

    #[test]
    fn test_british_vowels_in_arpabet() {
        assert_eq!(ipa2arpabet("kɑːt", "eng").unwrap(), "K AA T");
        assert_eq!(ipa2arpabet("ˈiːvn", "eng").unwrap(), "IY1 V N");
        assert_eq!(ipa2arpabet("ˈɒn", "eng").unwrap(), "AA1 N");
        assert_eq!(ipa2arpabet("bˌɜːd", "eng").unwrap(), "B ER2 D");
        // Decoding gives the American symbols back.
        assert_eq!(arpabet2ipa("K AA T", "eng").unwrap(), "kɑt");
    }

    #[test]
    fn test_american_vowels_in_disc() {
        assert_eq!(ipa2disc("ɹˈid", "eng").unwrap(), "r'id");
        assert_eq!(ipa2disc("ɡoʊ", "eng").unwrap(), "g5");
        assert_eq!(ipa2disc("bɝd", "eng").unwrap(), "b3d");
        assert_eq!(ipa2disc("bʌɾɚ", "eng").unwrap(), "bVt@");
        assert_eq!(disc2ipa("r'id", "eng").unwrap(), "ɹˈiːd");
    }

    #[test]
    fn test_tone_letters_in_xsampa() {
        assert_eq!(ipa2xsampa("ma˥", "cmn").unwrap(), "ma_T");
        assert_eq!(ipa2xsampa("ma˨˩˦", "cmn").unwrap(), "ma_L_B_H");
        assert_eq!(xsampa2ipa("ma_M_M", "cmn").unwrap(), "ma˧˧");
        assert_eq!(xsampa2ipa("ma_L_B_H", "cmn").unwrap(), "ma˨˩˦");
    }

    #[test]
    fn test_canonical_symbols_exclude_aliases() {
        let codec = PhoneCodec::new();
        let eng = lang("eng");
        let symbols = codec.canonical_ipa_symbols(Alphabet::Arpabet, &eng).unwrap();
        assert!(symbols.contains(&"\u{0261}"));
        assert!(!symbols.contains(&"g"));
        assert!(symbols.contains(&"ˈaɪ"));
        assert!(codec.supports(Alphabet::Xsampa, &lang("zul")));
        assert!(!codec.supports(Alphabet::Callhome, &lang("zul")));
    }
}
