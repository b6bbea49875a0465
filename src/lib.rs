//! Conversion between phonetic alphabets, and pronunciation lexicons.
//!
//! See `phonecodes::codec` for string conversion, `phonecodes::lexicon` and
//! `phonecodes::readers` for dictionaries, and `phonecodes::align` for sentence queries.
#[macro_use]
extern crate lazy_static;

pub mod phonecodes;

pub use crate::phonecodes::align::{AlignmentIndex, Candidates};
pub use crate::phonecodes::alphabet::{Alphabet, Language};
pub use crate::phonecodes::codec::{
    arpabet2ipa, callhome2ipa, disc2ipa, ipa2arpabet, ipa2callhome, ipa2disc, ipa2xsampa, xsampa2ipa,
    PhoneCodec,
};
pub use crate::phonecodes::error::{PhoneError, Result};
pub use crate::phonecodes::lexicon::{Lexicon, LexiconEntry, Pronunciation};
pub use crate::phonecodes::params::{DictParams, DictType};
pub use crate::phonecodes::readers::read;
