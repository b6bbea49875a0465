//! Dictionary formats and the options that control reading them.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::phonecodes::alphabet::Alphabet;
use crate::phonecodes::error::{PhoneError, Result};

/// The supported dictionary file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictType {
    /// The ISLE English dictionary, in IPA.
    Isle,
    /// IARPA Babel lexicons, in X-SAMPA.
    Babel,
    /// CELEX phonology files, in DISC.
    Celex,
    /// LDC CALLHOME lexicons, in the CALLHOME code of their language.
    Callhome,
    /// The `word<TAB>phones` format written by `Lexicon::save`, in the given alphabet.
    Lexicon(Alphabet),
}

impl DictType {
    /// The alphabet the format's pronunciations are written in.
    pub fn alphabet(self) -> Alphabet {
        match self {
            DictType::Isle => Alphabet::Ipa,
            DictType::Babel => Alphabet::Xsampa,
            DictType::Celex => Alphabet::Disc,
            DictType::Callhome => Alphabet::Callhome,
            DictType::Lexicon(alphabet) => alphabet,
        }
    }
}

impl fmt::Display for DictType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DictType::Isle => f.write_str("isle"),
            DictType::Babel => f.write_str("babel"),
            DictType::Celex => f.write_str("celex"),
            DictType::Callhome => f.write_str("callhome"),
            DictType::Lexicon(alphabet) => write!(f, "lex:{}", alphabet),
        }
    }
}

impl FromStr for DictType {
    type Err = PhoneError;

    /// Parses "isle", "babel", "celex", "callhome", or "lex" with an optional alphabet
    /// suffix, e.g. "lex:arpabet". Plain "lex" is IPA.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "isle" => Ok(DictType::Isle),
            "babel" => Ok(DictType::Babel),
            "celex" => Ok(DictType::Celex),
            "callhome" => Ok(DictType::Callhome),
            "lex" => Ok(DictType::Lexicon(Alphabet::Ipa)),
            other => match other.strip_prefix("lex:") {
                Some(alphabet) => Ok(DictType::Lexicon(alphabet.parse()?)),
                None => Err(PhoneError::UnknownDictType(s.to_string())),
            },
        }
    }
}

/// Options for reading a dictionary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DictParams {
    /// Tokens removed from every pronunciation, e.g. word and syllable boundaries.
    pub discard_phones: BTreeSet<String>,
}

impl DictParams {
    /// The recognized option names.
    pub const KEYS: &'static [&'static str] = &["discard_phones"];

    pub fn new() -> DictParams {
        DictParams::default()
    }

    /// Sets `discard_phones` from its string form.
    ///
    /// A value with whitespace is a list of tokens, otherwise each character is a token, so
    /// `"#."` discards `#` and `.`.
    pub fn with_discard_phones(mut self, value: &str) -> DictParams {
        self.discard_phones = if value.contains(char::is_whitespace) {
            value.split_whitespace().map(String::from).collect()
        } else {
            value.chars().map(String::from).collect()
        };
        return self;
    }

    /// Builds params from key/value pairs, rejecting unknown keys.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<DictParams>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut result = DictParams::new();
        for (key, value) in pairs {
            match key {
                "discard_phones" => result = result.with_discard_phones(value),
                _ => {
                    return Err(PhoneError::InvalidParam {
                        key: key.to_string(),
                        msg: format!("expected one of {:?}", DictParams::KEYS),
                    })
                }
            }
        }
        return Ok(result);
    }

    /// True if `token` should stay in a pronunciation.
    pub fn keeps(&self, token: &str) -> bool {
        !self.discard_phones.contains(token)
    }
}
