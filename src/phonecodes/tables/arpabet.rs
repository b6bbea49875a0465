//! ARPABET, as used by cmudict. English only.
//!
//! Vowels take a stress digit: 0 unstressed, 1 primary, 2 secondary. IPA marks stress
//! before the vowel, so `ˈʌ` pairs with `AH1`. The bare vowel and the `0` form both decode
//! to the unmarked IPA vowel.
//!
//! ARPABET has no standalone stress or syllable symbol. When a pronunciation carries `ˈ` or
//! `ˌ` as its own token, the codec moves it onto the next vowel, and drops `.`.

/// (IPA, ARPABET) pairs for English.
pub static ENG: &[(&str, &str)] = &[
    // vowels, bare and with stress digits
    ("ɑ", "AA"), ("ɑ", "AA0"), ("ˈɑ", "AA1"), ("ˌɑ", "AA2"),
    ("æ", "AE"), ("æ", "AE0"), ("ˈæ", "AE1"), ("ˌæ", "AE2"),
    ("ʌ", "AH"), ("ʌ", "AH0"), ("ˈʌ", "AH1"), ("ˌʌ", "AH2"),
    ("ɔ", "AO"), ("ɔ", "AO0"), ("ˈɔ", "AO1"), ("ˌɔ", "AO2"),
    ("aʊ", "AW"), ("aʊ", "AW0"), ("ˈaʊ", "AW1"), ("ˌaʊ", "AW2"),
    ("ə", "AX"), ("ə", "AX0"), ("ˈə", "AX1"), ("ˌə", "AX2"),
    ("ɚ", "AXR"), ("ɚ", "AXR0"), ("ˈɚ", "AXR1"), ("ˌɚ", "AXR2"),
    ("aɪ", "AY"), ("aɪ", "AY0"), ("ˈaɪ", "AY1"), ("ˌaɪ", "AY2"),
    ("ɛ", "EH"), ("ɛ", "EH0"), ("ˈɛ", "EH1"), ("ˌɛ", "EH2"),
    ("ɝ", "ER"), ("ɝ", "ER0"), ("ˈɝ", "ER1"), ("ˌɝ", "ER2"),
    ("eɪ", "EY"), ("eɪ", "EY0"), ("ˈeɪ", "EY1"), ("ˌeɪ", "EY2"),
    ("ɪ", "IH"), ("ɪ", "IH0"), ("ˈɪ", "IH1"), ("ˌɪ", "IH2"),
    ("ɨ", "IX"), ("ɨ", "IX0"), ("ˈɨ", "IX1"), ("ˌɨ", "IX2"),
    ("i", "IY"), ("i", "IY0"), ("ˈi", "IY1"), ("ˌi", "IY2"),
    ("oʊ", "OW"), ("oʊ", "OW0"), ("ˈoʊ", "OW1"), ("ˌoʊ", "OW2"),
    ("ɔɪ", "OY"), ("ɔɪ", "OY0"), ("ˈɔɪ", "OY1"), ("ˌɔɪ", "OY2"),
    ("ʊ", "UH"), ("ʊ", "UH0"), ("ˈʊ", "UH1"), ("ˌʊ", "UH2"),
    ("u", "UW"), ("u", "UW0"), ("ˈu", "UW1"), ("ˌu", "UW2"),
    ("ʉ", "UX"), ("ʉ", "UX0"), ("ˈʉ", "UX1"), ("ˌʉ", "UX2"),
    // consonants
    ("b", "B"), ("tʃ", "CH"), ("d", "D"), ("ð", "DH"),
    ("ɾ", "DX"), ("l\u{0329}", "EL"), ("m\u{0329}", "EM"), ("n\u{0329}", "EN"),
    ("f", "F"), ("ɡ", "G"), ("g", "G"), ("h", "HH"),
    ("dʒ", "JH"), ("k", "K"), ("l", "L"), ("m", "M"),
    ("n", "N"), ("ŋ", "NG"), ("ɾ\u{0303}", "NX"), ("p", "P"),
    ("ʔ", "Q"), ("ɹ", "R"), ("r", "R"), ("s", "S"),
    ("ʃ", "SH"), ("t", "T"), ("θ", "TH"), ("v", "V"),
    ("w", "W"), ("ʍ", "WH"), ("j", "Y"), ("z", "Z"),
    ("ʒ", "ZH"),
    // British symbols, as written by CELEX. Encode only: the nearest American phoneme.
    ("iː", "IY"), ("ˈiː", "IY1"), ("ˌiː", "IY2"),
    ("uː", "UW"), ("ˈuː", "UW1"), ("ˌuː", "UW2"),
    ("ɑː", "AA"), ("ˈɑː", "AA1"), ("ˌɑː", "AA2"),
    ("ɔː", "AO"), ("ˈɔː", "AO1"), ("ˌɔː", "AO2"),
    ("ɜː", "ER"), ("ˈɜː", "ER1"), ("ˌɜː", "ER2"),
    ("ɒ", "AA"), ("ˈɒ", "AA1"), ("ˌɒ", "AA2"),
    ("æ\u{0303}", "AE"), ("ˈæ\u{0303}", "AE1"), ("ˌæ\u{0303}", "AE2"),
    ("æ\u{0303}ː", "AE"), ("ˈæ\u{0303}ː", "AE1"), ("ˌæ\u{0303}ː", "AE2"),
    ("ɑ\u{0303}ː", "AA"), ("ˈɑ\u{0303}ː", "AA1"), ("ˌɑ\u{0303}ː", "AA2"),
    ("ɒ\u{0303}ː", "AO"), ("ˈɒ\u{0303}ː", "AO1"), ("ˌɒ\u{0303}ː", "AO2"),
    ("ɹ\u{0329}", "ER"), ("ˈɹ\u{0329}", "ER1"), ("ˌɹ\u{0329}", "ER2"),
    ("ŋ\u{0329}", "NG"), ("x", "K"),
];
