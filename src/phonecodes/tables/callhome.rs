//! CALLHOME romanizations for Egyptian Arabic, Mandarin and Spanish.
//!
//! These follow the LDC CALLHOME lexicons, with a few symbols reassigned so that every
//! code decodes unambiguously: Arabic emphatics and long vowels are uppercase, Mandarin
//! retroflexes are uppercase instead of `zh`/`ch`/`sh` and tones are the digits 1 to 5.

/// (IPA, CALLHOME) pairs for Egyptian Arabic.
pub static ARZ: &[(&str, &str)] = &[
    // consonants
    ("b", "b"), ("t", "t"), ("d", "d"), ("k", "k"),
    ("ɡ", "g"), ("g", "g"), ("q", "q"), ("ʔ", "'"),
    ("f", "f"), ("v", "v"), ("θ", "c"), ("ð", "X"),
    ("s", "s"), ("z", "z"), ("ʃ", "$"), ("ʒ", "j"),
    ("x", "x"), ("ɣ", "G"), ("ħ", "H"), ("ʕ", "C"),
    ("h", "h"), ("m", "m"), ("n", "n"), ("l", "l"),
    ("r", "r"), ("w", "w"), ("j", "y"), ("tˤ", "T"),
    ("dˤ", "D"), ("sˤ", "S"), ("zˤ", "Z"),
    // vowels
    ("a", "a"), ("i", "i"), ("u", "u"), ("e", "e"),
    ("o", "o"), ("aː", "A"), ("iː", "I"), ("uː", "U"),
    ("eː", "E"), ("oː", "O"),
];

/// (IPA, CALLHOME) pairs for Mandarin.
pub static CMN: &[(&str, &str)] = &[
    // consonants
    ("p", "b"), ("pʰ", "p"), ("m", "m"), ("f", "f"),
    ("t", "d"), ("tʰ", "t"), ("n", "n"), ("l", "l"),
    ("k", "g"), ("kʰ", "k"), ("x", "h"), ("tɕ", "j"),
    ("tɕʰ", "q"), ("ɕ", "x"), ("ʈʂ", "Z"), ("ʈʂʰ", "C"),
    ("ʂ", "S"), ("ʐ", "r"), ("ts", "z"), ("tsʰ", "c"),
    ("s", "s"), ("w", "w"), ("j", "y"), ("ɥ", "W"),
    ("ŋ", "N"),
    // vowels
    ("a", "a"), ("o", "o"), ("ɤ", "e"), ("ɛ", "E"),
    ("i", "i"), ("u", "u"), ("y", "v"), ("ɚ", "R"),
    ("ɨ", "I"),
    // tones
    ("˥", "1"), ("˧˥", "2"), ("˨˩˦", "3"), ("˥˩", "4"),
    ("˧", "5"),
];

/// (IPA, CALLHOME) pairs for Spanish.
pub static SPA: &[(&str, &str)] = &[
    // consonants
    ("p", "p"), ("b", "b"), ("β", "B"), ("t", "t"),
    ("d", "d"), ("ð", "D"), ("k", "k"), ("ɡ", "g"),
    ("g", "g"), ("ɣ", "G"), ("f", "f"), ("θ", "T"),
    ("s", "s"), ("z", "z"), ("x", "x"), ("h", "h"),
    ("tʃ", "C"), ("ʝ", "y"), ("m", "m"), ("n", "n"),
    ("ɲ", "N"), ("ŋ", "n"), ("l", "l"), ("ʎ", "L"),
    ("ɾ", "r"), ("r", "R"), ("w", "w"), ("j", "j"),
    // vowels
    ("a", "a"), ("e", "e"), ("i", "i"), ("o", "o"),
    ("u", "u"),
];
