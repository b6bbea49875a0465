//! X-SAMPA, an ASCII transcription of IPA.
//!
//! The mapping is language independent. Diacritics are separate symbols, so `t_h` is the pair
//! `t` + `_h` and decodes to `tʰ`. Affricates are written as two symbols in both alphabets, and so are tone contours.
//!
//! Reference: <https://en.wikipedia.org/wiki/X-SAMPA>

/// (IPA, X-SAMPA) pairs shared by every language.
pub static ALL: &[(&str, &str)] = &[
    // plosives
    ("p", "p"), ("b", "b"), ("t", "t"), ("d", "d"),
    ("ʈ", "t`"), ("ɖ", "d`"), ("c", "c"), ("ɟ", "J\\"),
    ("k", "k"), ("ɡ", "g"), ("g", "g"), ("q", "q"),
    ("ɢ", "G\\"), ("ʔ", "?"),
    // nasals
    ("m", "m"), ("ɱ", "F"), ("n", "n"), ("ɳ", "n`"),
    ("ɲ", "J"), ("ŋ", "N"), ("ɴ", "N\\"),
    // trills and taps
    ("ʙ", "B\\"), ("r", "r"), ("ʀ", "R\\"), ("ɾ", "4"),
    ("ɽ", "r`"), ("ɺ", "l\\"),
    // fricatives
    ("ɸ", "p\\"), ("β", "B"), ("f", "f"), ("v", "v"),
    ("θ", "T"), ("ð", "D"), ("s", "s"), ("z", "z"),
    ("ʃ", "S"), ("ʒ", "Z"), ("ʂ", "s`"), ("ʐ", "z`"),
    ("ç", "C"), ("ʝ", "j\\"), ("x", "x"), ("ɣ", "G"),
    ("χ", "X"), ("ʁ", "R"), ("ħ", "X\\"), ("ʕ", "?\\"),
    ("h", "h"), ("ɦ", "h\\"), ("ɕ", "s\\"), ("ʑ", "z\\"),
    ("ɧ", "x\\"), ("ʜ", "H\\"), ("ʢ", "<\\"), ("ʡ", ">\\"),
    ("ɬ", "K"), ("ɮ", "K\\"),
    // approximants
    ("ʋ", "P"), ("ɹ", "r\\"), ("ɻ", "r\\`"), ("j", "j"),
    ("ɰ", "M\\"), ("l", "l"), ("ɭ", "l`"), ("ʎ", "L"),
    ("ʟ", "L\\"), ("ʍ", "W"), ("w", "w"), ("ɥ", "H"),
    // implosives
    ("ɓ", "b_<"), ("ɗ", "d_<"), ("ʄ", "J\\_<"), ("ɠ", "g_<"),
    ("ʛ", "G\\_<"),
    // vowels
    ("i", "i"), ("y", "y"), ("ɨ", "1"), ("ʉ", "}"),
    ("ɯ", "M"), ("u", "u"), ("ɪ", "I"), ("ʏ", "Y"),
    ("ʊ", "U"), ("e", "e"), ("ø", "2"), ("ɘ", "@\\"),
    ("ɵ", "8"), ("ɤ", "7"), ("o", "o"), ("ə", "@"),
    ("ɛ", "E"), ("œ", "9"), ("ɜ", "3"), ("ɞ", "3\\"),
    ("ʌ", "V"), ("ɔ", "O"), ("æ", "{"), ("ɐ", "6"),
    ("a", "a"), ("ɶ", "&"), ("ɑ", "A"), ("ɒ", "Q"),
    ("ɚ", "@`"), ("ɝ", "3`"),
    // suprasegmentals
    ("ˈ", "\""), ("ˌ", "%"), ("ː", ":"), ("ˑ", ":\\"),
    (".", "."),
    // diacritics
    ("ʰ", "_h"), ("ʱ", "_h\\"), ("ʼ", "_>"), ("ʷ", "_w"),
    ("ʲ", "_j"), ("ˠ", "_G"), ("ˤ", "_?\\"), ("\u{0303}", "~"),
    ("\u{0329}", "="), ("\u{032a}", "_d"), ("\u{0325}", "_0"), ("\u{0324}", "_t"),
    ("\u{031a}", "_}"), ("\u{032f}", "_^"),
    // tone letters; contours are written letter by letter, so ˨˩˦ is _L_B_H
    ("˥", "_T"), ("˦", "_H"), ("˧", "_M"), ("˨", "_L"),
    ("˩", "_B"),
];
