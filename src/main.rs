use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use phonecodes::phonecodes::align::AlignmentIndex;
use phonecodes::phonecodes::alphabet::{Alphabet, Language};
use phonecodes::phonecodes::codec::DEFAULT_CODEC;
use phonecodes::phonecodes::error::{PhoneError, Result};
use phonecodes::phonecodes::params::{DictParams, DictType};
use phonecodes::phonecodes::readers;

fn lang_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("lang")
        .long("lang")
        .takes_value(true)
        .required(true)
        .help("Three letter language tag, e.g. eng")
}

fn lexicon_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name("lexicon")
            .long("lexicon")
            .takes_value(true)
            .required(true)
            .help("Lexicon in the format written by `recode`"),
    )
    .arg(
        Arg::with_name("alphabet")
            .long("alphabet")
            .takes_value(true)
            .default_value("ipa")
            .help("Alphabet of the lexicon"),
    )
    .arg(lang_arg())
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    // Required and defaulted arguments are always present.
    matches.value_of(name).unwrap_or_default()
}

fn values<'a>(matches: &'a ArgMatches, name: &str) -> Vec<&'a str> {
    matches.values_of(name).map(|v| v.collect()).unwrap_or_default()
}

fn load_index(matches: &ArgMatches) -> Result<AlignmentIndex> {
    let language: Language = value(matches, "lang").parse()?;
    let alphabet: Alphabet = value(matches, "alphabet").parse()?;
    let lex = readers::read(
        value(matches, "lexicon"),
        &language,
        DictType::Lexicon(alphabet),
        &DictParams::new(),
    )?;
    return Ok(AlignmentIndex::new(&lex));
}

fn convert(matches: &ArgMatches) -> Result<()> {
    let from: Alphabet = value(matches, "from").parse()?;
    let to: Alphabet = value(matches, "to").parse()?;
    let language: Language = value(matches, "lang").parse()?;
    let phones = values(matches, "phones").join(" ");
    println!("{}", DEFAULT_CODEC.convert(&phones, from, to, &language)?);
    Ok(())
}

fn recode(matches: &ArgMatches) -> Result<()> {
    let dict_type: DictType = value(matches, "dict-type").parse()?;
    let language: Language = value(matches, "lang").parse()?;
    let to: Alphabet = value(matches, "to").parse()?;
    let mut params = DictParams::new();
    if let Some(discard) = matches.value_of("discard-phones") {
        params = params.with_discard_phones(discard);
    }
    let lex = readers::read(value(matches, "input"), &language, dict_type, &params)?;
    lex.recode(to)?.save(value(matches, "output"))
}

fn words2phones(matches: &ArgMatches) -> Result<()> {
    let index = load_index(matches)?;
    let phones = index.words2phones(&values(matches, "words"))?;
    println!("{}", phones.join(" "));
    Ok(())
}

fn phones2words(matches: &ArgMatches) -> Result<()> {
    let index = load_index(matches)?;
    let max_distance: usize = value(matches, "max-distance")
        .parse()
        .map_err(|_| PhoneError::InvalidParam {
            key: "max-distance".to_string(),
            msg: "expected a non-negative integer".to_string(),
        })?;
    let candidates = index.phones2words(&values(matches, "phones"), max_distance)?;
    for (distance, words) in candidates.iter() {
        println!("{}\t{}", distance, words.join(" "));
    }
    Ok(())
}

fn main() {
    let matches = App::new("phonecodes")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts phonetic transcriptions and queries pronunciation lexicons")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("convert")
                .about("Converts a phone string between alphabets")
                .arg(Arg::with_name("from").long("from").takes_value(true).required(true))
                .arg(Arg::with_name("to").long("to").takes_value(true).required(true))
                .arg(lang_arg())
                .arg(Arg::with_name("phones").multiple(true).required(true)),
        )
        .subcommand(
            SubCommand::with_name("recode")
                .about("Reads a dictionary and saves it in another alphabet")
                .arg(
                    Arg::with_name("dict-type")
                        .long("dict-type")
                        .takes_value(true)
                        .required(true)
                        .help("isle, babel, celex, callhome or lex[:alphabet]"),
                )
                .arg(lang_arg())
                .arg(Arg::with_name("to").long("to").takes_value(true).default_value("ipa"))
                .arg(
                    Arg::with_name("discard-phones")
                        .long("discard-phones")
                        .takes_value(true)
                        .help("Tokens to drop, e.g. \"#.\""),
                )
                .arg(Arg::with_name("input").required(true))
                .arg(Arg::with_name("output").required(true)),
        )
        .subcommand(lexicon_args(
            SubCommand::with_name("words2phones")
                .about("Prints the primary pronunciation of a sentence")
                .arg(Arg::with_name("words").multiple(true).required(true)),
        ))
        .subcommand(lexicon_args(
            SubCommand::with_name("phones2words")
                .about("Prints word sequences within an edit distance of the phones")
                .arg(
                    Arg::with_name("max-distance")
                        .long("max-distance")
                        .takes_value(true)
                        .default_value("0"),
                )
                .arg(Arg::with_name("phones").multiple(true).required(true)),
        ))
        .get_matches();

    let result = match matches.subcommand() {
        ("convert", Some(m)) => convert(m),
        ("recode", Some(m)) => recode(m),
        ("words2phones", Some(m)) => words2phones(m),
        ("phones2words", Some(m)) => phones2words(m),
        _ => Ok(()),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
