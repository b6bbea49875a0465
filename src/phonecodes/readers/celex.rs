//! CELEX phonology files (`epl.cd`, `dpl.cd`, `gpl.cd`).
//!
//! Fields are separated by backslashes. The first four are the id, the word, its corpus
//! frequency and the number of pronunciations. Then each pronunciation takes four fields:
//! its status, the DISC transcription, the CV pattern and the CELEX syllabification.
//!
//! ```text
//! 5\abacus\7\1\P\'{-b@-k@s\[VC][CV][CVC]\[&][b@][k@s]
//! ```
//!
//! DISC uses one character per phone, so every character is a token, including the stress
//! marks `'` and `"` and the syllable separator `-`.
use crate::phonecodes::error::{PhoneError, Result};
use crate::phonecodes::readers::LexiconBuilder;

const HEADER_FIELDS: usize = 4;
const FIELDS_PER_PRONUNCIATION: usize = 4;
const DISC_FIELD: usize = 1;

pub fn parse(text: &str, builder: &mut LexiconBuilder) -> Result<()> {
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\\').collect();
        if fields.len() < HEADER_FIELDS {
            return Err(PhoneError::invalid_format(n + 1, "expected IdNum\\Head\\Cob\\PronCnt"));
        }
        let word = fields[1];
        let count: usize = fields[3]
            .parse()
            .map_err(|_| PhoneError::invalid_format(n + 1, format!("bad pronunciation count {:?}", fields[3])))?;

        for k in 0..count {
            let disc = fields
                .get(HEADER_FIELDS + k * FIELDS_PER_PRONUNCIATION + DISC_FIELD)
                .ok_or_else(|| PhoneError::invalid_format(n + 1, format!("missing pronunciation {}", k + 1)))?;
            let tokens = disc.chars().map(String::from).collect();
            builder.add(n + 1, word, tokens)?;
        }
    }
    Ok(())
}
