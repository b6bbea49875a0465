//! DISC, the phonetic code of the CELEX lexical databases.
//!
//! Each phoneme is exactly one character, including long vowels, diphthongs and affricates.
//! The symbol inventory differs between the English, German and Dutch databases, so the
//! same character can mean different sounds depending on the language. `'` and `"` mark
//! primary and secondary stress and `-` separates syllables.
//!
//! CELEX English is British. American IPA has no DISC symbol of its own, so the English table
//! writes it with the nearest British phoneme.

/// (IPA, DISC) pairs for English.
pub static ENG: &[(&str, &str)] = &[
    // consonants
    ("p", "p"), ("b", "b"), ("t", "t"), ("d", "d"),
    ("k", "k"), ("ɡ", "g"), ("g", "g"), ("ŋ", "N"),
    ("m", "m"), ("n", "n"), ("l", "l"), ("ɹ", "r"),
    ("r", "r"), ("f", "f"), ("v", "v"), ("θ", "T"),
    ("ð", "D"), ("s", "s"), ("z", "z"), ("ʃ", "S"),
    ("ʒ", "Z"), ("j", "j"), ("x", "x"), ("h", "h"),
    ("w", "w"), ("tʃ", "J"), ("dʒ", "_"), ("n\u{0329}", "C"),
    ("m\u{0329}", "F"), ("ŋ\u{0329}", "H"), ("l\u{0329}", "P"), ("ɹ\u{0329}", "R"),
    // vowels
    ("ɪ", "I"), ("ɛ", "E"), ("æ", "{"), ("ʌ", "V"),
    ("ɒ", "Q"), ("ʊ", "U"), ("ə", "@"), ("iː", "i"),
    ("ɑː", "#"), ("ɔː", "$"), ("uː", "u"), ("ɜː", "3"),
    ("eɪ", "1"), ("aɪ", "2"), ("ɔɪ", "4"), ("əʊ", "5"),
    ("aʊ", "6"), ("ɪə", "7"), ("ɛə", "8"), ("ʊə", "9"),
    ("æ\u{0303}", "c"), ("ɑ\u{0303}ː", "q"), ("æ\u{0303}ː", "0"), ("ɒ\u{0303}ː", "~"),
    // American symbols, as written by ISLE. Encode only: each decodes to the British symbol above.
    ("i", "i"), ("u", "u"), ("oʊ", "5"), ("ɑ", "#"),
    ("ɔ", "$"), ("ɝ", "3"), ("ɚ", "@"), ("ɨ", "I"),
    ("ʉ", "u"), ("ɾ", "t"), ("ɾ\u{0303}", "n"), ("ʍ", "w"),
    ("ʔ", "t"),
    // stress and syllable marks
    ("ˈ", "'"), ("ˌ", "\""), (".", "-"),
];

/// (IPA, DISC) pairs for German.
pub static DEU: &[(&str, &str)] = &[
    // consonants
    ("p", "p"), ("b", "b"), ("t", "t"), ("d", "d"),
    ("k", "k"), ("ɡ", "g"), ("g", "g"), ("ŋ", "N"),
    ("m", "m"), ("n", "n"), ("l", "l"), ("r", "r"),
    ("ʁ", "r"), ("f", "f"), ("v", "v"), ("s", "s"),
    ("z", "z"), ("ʃ", "S"), ("ʒ", "Z"), ("j", "j"),
    ("x", "x"), ("ç", "C"), ("h", "h"), ("pf", "+"),
    ("ts", "="), ("tʃ", "J"), ("dʒ", "_"), ("m\u{0329}", "F"),
    ("n\u{0329}", "H"), ("l\u{0329}", "P"),
    // vowels
    ("iː", "i"), ("yː", "y"), ("eː", "e"), ("øː", "|"),
    ("ɛː", ")"), ("aː", "a"), ("oː", "o"), ("uː", "u"),
    ("ɪ", "I"), ("ʏ", "Y"), ("ɛ", "E"), ("œ", "/"),
    ("a", "&"), ("ɔ", "O"), ("ʊ", "U"), ("ə", "@"),
    ("aɪ", "W"), ("aʊ", "B"), ("ɔʏ", "X"), ("ɛ\u{0303}ː", "^"),
    ("ɑ\u{0303}ː", "q"), ("œ\u{0303}ː", "c"), ("ɔ\u{0303}ː", "~"),
    // stress and syllable marks
    ("ˈ", "'"), ("ˌ", "\""), (".", "-"),
];

/// (IPA, DISC) pairs for Dutch.
pub static NLD: &[(&str, &str)] = &[
    // consonants
    ("p", "p"), ("b", "b"), ("t", "t"), ("d", "d"),
    ("k", "k"), ("ɡ", "g"), ("g", "g"), ("ŋ", "N"),
    ("m", "m"), ("n", "n"), ("l", "l"), ("r", "r"),
    ("f", "f"), ("v", "v"), ("s", "s"), ("z", "z"),
    ("ʃ", "S"), ("ʒ", "Z"), ("j", "j"), ("x", "x"),
    ("ɣ", "G"), ("ɦ", "h"), ("h", "h"), ("ʋ", "w"),
    ("w", "w"), ("ɲ", "J"), ("tʃ", "T"), ("dʒ", "_"),
    // vowels
    ("i", "i"), ("y", "y"), ("eː", "e"), ("øː", "|"),
    ("aː", "a"), ("oː", "o"), ("u", "u"), ("ɪ", "I"),
    ("ʏ", "}"), ("ɛ", "E"), ("ɑ", "A"), ("ɔ", "O"),
    ("ə", "@"), ("ɛi", "K"), ("œy", "L"), ("ʌu", "M"),
    ("ɛː", ")"), ("iː", "!"), ("yː", "("), ("œː", "*"),
    ("ɔː", "<"), ("ɛ\u{0303}ː", "^"), ("ɑ\u{0303}ː", "q"), ("ɔ\u{0303}ː", "~"),
    ("œ\u{0303}ː", "c"),
    // stress and syllable marks
    ("ˈ", "'"), ("ˌ", "\""), (".", "-"),
];
