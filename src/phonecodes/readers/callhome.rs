//! LDC CALLHOME lexicons for Egyptian Arabic, Mandarin and Spanish.
//!
//! A word, then one or more tab separated pronunciations in the CALLHOME code of the
//! language. Phones may be separated by spaces; a pronunciation written without spaces is
//! split with the language's symbol table.
//!
//! ```text
//! kitAb	kitAb
//! ma1	m a 1
//! ```
use crate::phonecodes::alphabet::Alphabet;
use crate::phonecodes::codec::DEFAULT_CODEC;
use crate::phonecodes::error::{PhoneError, Result};
use crate::phonecodes::readers::LexiconBuilder;

pub fn parse(text: &str, builder: &mut LexiconBuilder) -> Result<()> {
    let table = DEFAULT_CODEC.table(Alphabet::Callhome, Alphabet::Ipa, builder.language())?;
    for (n, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let word = fields.next().unwrap_or_default().trim();
        let mut found = false;
        for field in fields.map(str::trim).filter(|f| !f.is_empty()) {
            let tokens: Vec<String> = if field.contains(char::is_whitespace) {
                field.split_whitespace().map(String::from).collect()
            } else {
                table
                    .tokenize(field)
                    .map_err(|pos| {
                        PhoneError::invalid_format(n + 1, format!("unknown symbol in {:?} at {}", field, pos))
                    })?
                    .into_iter()
                    .map(String::from)
                    .collect()
            };
            found = true;
            builder.add(n + 1, word, tokens)?;
        }
        if !found {
            builder.add(n + 1, word, vec![])?;
        }
    }
    Ok(())
}
