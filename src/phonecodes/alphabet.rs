//! Phonetic alphabets and language tags.
//!
//! Every conversion, lexicon and query is tagged with an explicit `Alphabet` and `Language`.
//! The set of alphabets is closed:
//!
//! * IPA, the canonical internal representation. See <https://www.internationalphoneticassociation.org/>
//! * ARPABET, the space separated code used by cmudict. See <https://en.wikipedia.org/wiki/ARPABET>
//! * X-SAMPA, an ASCII rendering of IPA. See <https://en.wikipedia.org/wiki/X-SAMPA>
//! * DISC, the one-character-per-phoneme code of the CELEX databases.
//! * CALLHOME, the romanized codes of the LDC CALLHOME lexicons.
//!
use std::fmt;
use std::str::FromStr;

use crate::phonecodes::error::PhoneError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Alphabet {
    Ipa,
    Arpabet,
    Xsampa,
    Disc,
    Callhome,
}

impl Alphabet {
    pub const ALL: [Alphabet; 5] = [
        Alphabet::Ipa,
        Alphabet::Arpabet,
        Alphabet::Xsampa,
        Alphabet::Disc,
        Alphabet::Callhome,
    ];

    /// The lowercase name used on the command line and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Ipa => "ipa",
            Alphabet::Arpabet => "arpabet",
            Alphabet::Xsampa => "xsampa",
            Alphabet::Disc => "disc",
            Alphabet::Callhome => "callhome",
        }
    }

    /// The token written between words.
    ///
    /// ARPABET uses whitespace to separate phones, so it marks words with `#`. The others
    /// write phones back to back and use a space.
    pub fn word_boundary(self) -> &'static str {
        match self {
            Alphabet::Arpabet => "#",
            _ => " ",
        }
    }

    /// True if phones in a string of this alphabet are separated by whitespace.
    pub fn is_space_separated(self) -> bool {
        self == Alphabet::Arpabet
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        for alphabet in Alphabet::ALL.iter() {
            if alphabet.name() == lowered {
                return Ok(*alphabet);
            }
        }
        // Accept the hyphenated spelling too.
        if lowered == "x-sampa" {
            return Ok(Alphabet::Xsampa);
        }
        Err(PhoneError::UnknownAlphabet(s.to_string()))
    }
}

/// A three letter language tag, e.g. "eng", "cmn", "arz".
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(String);

impl Language {
    pub fn new(tag: &str) -> Result<Language, PhoneError> {
        if tag.len() == 3 && tag.bytes().all(|b| b.is_ascii_lowercase()) {
            return Ok(Language(tag.to_string()));
        }
        Err(PhoneError::InvalidLanguage(tag.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::new(s)
    }
}
