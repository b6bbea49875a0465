//! Static symbol tables, one per alphabet and language.
//!
//! Each table is an ordered list of `(ipa, code)` pairs. A symbol may appear more than once
//! on either side to express an alias; the first pair listed for a symbol decides how it is
//! written in the other alphabet.
pub mod arpabet;
pub mod callhome;
pub mod disc;
pub mod xsampa;

use crate::phonecodes::alphabet::Alphabet;

pub type SymbolPairs = &'static [(&'static str, &'static str)];

/// Languages with a dedicated table, per alphabet.
///
/// X-SAMPA has a single table covering every language and is not listed. IPA has no table
/// because it is the pivot.
pub const LANGUAGE_TABLES: &[(Alphabet, &str, SymbolPairs)] = &[
    (Alphabet::Arpabet, "eng", arpabet::ENG),
    (Alphabet::Disc, "deu", disc::DEU),
    (Alphabet::Disc, "eng", disc::ENG),
    (Alphabet::Disc, "nld", disc::NLD),
    (Alphabet::Callhome, "arz", callhome::ARZ),
    (Alphabet::Callhome, "cmn", callhome::CMN),
    (Alphabet::Callhome, "spa", callhome::SPA),
];

/// Tables that apply to every language.
pub const UNIVERSAL_TABLES: &[(Alphabet, SymbolPairs)] = &[(Alphabet::Xsampa, xsampa::ALL)];
