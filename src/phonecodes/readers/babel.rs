//! IARPA Babel lexicons.
//!
//! One word per line, followed by one or more tab separated pronunciations. Phones are
//! X-SAMPA separated by spaces, with `.` between syllables and tone marks like `_1` as
//! separate tokens:
//!
//! ```text
//! ሰላም	s @ . l a m
//! ```
use crate::phonecodes::error::Result;
use crate::phonecodes::readers::LexiconBuilder;

pub fn parse(text: &str, builder: &mut LexiconBuilder) -> Result<()> {
    for (n, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let word = fields.next().unwrap_or_default().trim();
        let mut found = false;
        for field in fields {
            let tokens: Vec<String> = field.split_whitespace().map(String::from).collect();
            if tokens.is_empty() {
                continue;
            }
            found = true;
            builder.add(n + 1, word, tokens)?;
        }
        if !found {
            // Report the empty entry the same way every reader does.
            builder.add(n + 1, word, vec![])?;
        }
    }
    Ok(())
}
