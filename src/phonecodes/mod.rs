pub mod align;
pub mod alphabet;
pub mod codec;
pub mod error;
pub mod lexicon;
pub mod params;
pub mod readers;
pub mod tables;
