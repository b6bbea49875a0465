//! The ISLE English pronunciation dictionary.
//!
//! Each line holds a word, a parenthesized list of tags, and IPA phones separated by spaces,
//! with `#` at word boundaries and `.` between syllables:
//!
//! ```text
//! abandon(abandon,VB,VBP) # ə . b ˈæ n . d ə n #
//! ```
//!
//! The same word may appear on several lines, once per part of speech. Identical
//! pronunciations are merged. Discard `#` and `.` to keep only the phones.
use regex::Regex;

use crate::phonecodes::error::{PhoneError, Result};
use crate::phonecodes::readers::LexiconBuilder;

pub fn parse(text: &str, builder: &mut LexiconBuilder) -> Result<()> {
    lazy_static! {
        // Capture 1 is the word, 2 the optional tags and 3 the phones.
        static ref LINE_RE: Regex = Regex::new(r"^([^\s(]+)(?:\(([^)]*)\))?(?:\s+(.*))?$").unwrap();
    }
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cap = LINE_RE
            .captures(line)
            .ok_or_else(|| PhoneError::invalid_format(n + 1, "expected word(tags) phones"))?;
        let tokens = cap
            .get(3)
            .map(|m| m.as_str().split_whitespace().map(String::from).collect())
            .unwrap_or_default();
        builder.add(n + 1, &cap[1], tokens)?;
    }
    Ok(())
}
