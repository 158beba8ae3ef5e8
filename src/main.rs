//! Passphrase CLI
//!
//! Generates a cryptographically secure passphrase or password and
//! prints it to standard output. Secrets go to stdout only; all
//! diagnostics go to stderr.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use tracing::{info, warn};

use passphrase::wordlist::load_words;
use passphrase::{
    entropy, source, CaseStyle, CharClasses, Error, FileConfig, Generator, GeneratorConfig,
    Phrase, Result, WordList,
};

/// Minimum system entropy considered safe for generation.
const MIN_SYSTEM_ENTROPY_BITS: u64 = 128;

#[derive(Parser, Debug)]
#[command(name = "passphrase", version)]
#[command(about = "Cryptographically secure passphrase and password generator")]
#[command(long_about = "Generates a cryptographically secure passphrase, based on a word \
list, or a password, and prints it to standard output.\n\
By default an embedded 7776-word list is used and the amount of words is \
derived from the entropy target. A custom word list can be given with \
-i | --input, in single-column or diceware format.")]
#[command(group(ArgGroup::new("mode").args(["password", "uuid4", "coin"])))]
#[command(group(ArgGroup::new("casing").args(["uppercase", "lowercase"])))]
struct Args {
    /// Generate a password of the given length; without a length, the
    /// minimum for the entropy target is used
    #[arg(short, long, value_name = "LENGTH")]
    password: Option<Option<usize>>,

    /// Generate a version-4 UUID
    #[arg(long)]
    uuid4: bool,

    /// Flip a coin
    #[arg(long)]
    coin: bool,

    /// Amount of words; defaults to the minimum for the entropy target
    #[arg(short, long, value_name = "AMOUNT")]
    words: Option<usize>,

    /// Amount of numbers (0 or more)
    #[arg(short, long, value_name = "AMOUNT")]
    numbers: Option<usize>,

    /// Separator between passphrase tokens (space by default)
    #[arg(short, long, value_name = "STRING")]
    separator: Option<String>,

    /// Entropy target in bits
    #[arg(short, long, value_name = "BITS")]
    entropybits: Option<f64>,

    /// Build passwords from uppercase letters
    #[arg(long)]
    use_uppercase: bool,

    /// Build passwords from lowercase letters
    #[arg(long)]
    use_lowercase: bool,

    /// Build passwords from digits
    #[arg(long)]
    use_digits: bool,

    /// Build passwords from punctuation
    #[arg(long)]
    use_punctuation: bool,

    /// Build passwords from letters and digits
    #[arg(long)]
    use_alphanumeric: bool,

    /// Uppercase the whole passphrase, or exactly N characters
    #[arg(short = 'U', long, value_name = "N")]
    uppercase: Option<Option<usize>>,

    /// Lowercase the whole passphrase, or all but N characters
    #[arg(short = 'L', long, value_name = "N")]
    lowercase: Option<Option<usize>>,

    /// Read the word list from a file (single column, one word per line)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Treat the input file as a diceware list (two columns)
    #[arg(short, long)]
    diceware: bool,

    /// Write the result to a file (existing file is overwritten)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Read default settings from a TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report what is being generated and its entropy on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print nothing to stdout (file output still happens)
    #[arg(short, long)]
    mute: bool,

    /// Proceed even when the system entropy pool is low
    #[arg(long)]
    insecure: bool,

    /// Do not print the trailing newline
    #[arg(long)]
    no_newline: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    info!("passphrase v{}", passphrase::VERSION);

    check_system_entropy(args.insecure)?;

    let mut config = match &args.config {
        Some(path) => FileConfig::from_file(path)?.generator,
        None => GeneratorConfig::default(),
    };
    apply_overrides(&mut config, &args);
    config.validate()?;

    info!("entropy target: {} bits", config.entropy_bits);

    let phrase = if let Some(length) = args.password {
        generate_password(config, length)?
    } else if args.uuid4 {
        info!("generating a version-4 UUID");
        Generator::new(config)?.generate_uuid4()?
    } else if args.coin {
        info!("flipping a coin");
        Generator::new(config)?.generate_coin()?
    } else {
        generate_passphrase(config, &args)?
    };

    info!("computed entropy: {:.2} bits", phrase.entropy_bits());

    emit(&phrase, &args)
}

/// Aborts when the system entropy pool is low, unless downgraded.
fn check_system_entropy(insecure: bool) -> Result<()> {
    if let Some(available) = source::available_entropy() {
        if available < MIN_SYSTEM_ENTROPY_BITS {
            if !insecure {
                return Err(Error::InsecureEnvironment(
                    available,
                    MIN_SYSTEM_ENTROPY_BITS,
                ));
            }
            warn!(
                "system entropy is low: {} bits available, {} recommended",
                available, MIN_SYSTEM_ENTROPY_BITS
            );
        }
    }
    Ok(())
}

/// Applies command-line settings over the file or default config.
fn apply_overrides(config: &mut GeneratorConfig, args: &Args) {
    if let Some(bits) = args.entropybits {
        config.entropy_bits = bits;
    }
    if let Some(numbers) = args.numbers {
        config.numbers = numbers;
    }
    if let Some(separator) = &args.separator {
        config.separator = separator.clone();
    }
    if let Some(classes) = class_overrides(args) {
        config.classes = classes;
    }
    if let Some(case) = case_override(args) {
        config.case = case;
    }
}

/// Character classes from the `--use-*` flags.
///
/// Any flag present restricts the set to exactly the named classes;
/// none present keeps the configured set.
fn class_overrides(args: &Args) -> Option<CharClasses> {
    let any = args.use_uppercase
        || args.use_lowercase
        || args.use_digits
        || args.use_punctuation
        || args.use_alphanumeric;
    if !any {
        return None;
    }

    let mut classes = if args.use_alphanumeric {
        CharClasses::alphanumeric()
    } else {
        CharClasses::none()
    };
    if args.use_uppercase {
        classes.use_uppercase = true;
    }
    if args.use_lowercase {
        classes.use_lowercase = true;
    }
    if args.use_digits {
        classes.use_digits = true;
    }
    if args.use_punctuation {
        classes.use_punctuation = true;
    }
    Some(classes)
}

fn case_override(args: &Args) -> Option<CaseStyle> {
    match (args.uppercase, args.lowercase) {
        (Some(None), _) => Some(CaseStyle::AllUpper),
        (Some(Some(n)), _) => Some(CaseStyle::UpperChars(n)),
        (_, Some(None)) => Some(CaseStyle::AllLower),
        (_, Some(Some(n))) => Some(CaseStyle::LowerChars(n)),
        (None, None) => None,
    }
}

fn generate_password(mut config: GeneratorConfig, length: Option<usize>) -> Result<Phrase> {
    let needed = entropy::password_length_needed(config.entropy_bits, &config.classes.chars())?;
    let length = length.unwrap_or(needed);
    if length < needed {
        warn!(
            "insecure password length chosen, should be at least {}",
            needed
        );
    }
    config.password_length = length;

    info!("generating a password of {} characters", length);
    Generator::new(config)?.generate_password()
}

fn generate_passphrase(mut config: GeneratorConfig, args: &Args) -> Result<Phrase> {
    let wordlist = match &args.input {
        Some(path) => load_words(path, args.diceware)?,
        None => WordList::builtin(),
    };

    let needed = entropy::words_needed(
        config.entropy_bits,
        wordlist.bits_per_word(),
        entropy::range_bits(config.min_number, config.max_number),
        config.numbers,
    )?;
    let words = args.words.unwrap_or(needed);
    if words < needed {
        warn!(
            "insecure amount of words chosen, should be at least {}",
            needed
        );
    }
    config.words = words;

    info!(
        "generating a passphrase of {} words and {} numbers",
        config.words, config.numbers
    );
    Generator::with_wordlist(config, wordlist)?.generate()
}

/// Prints the result and writes the output file.
fn emit(phrase: &Phrase, args: &Args) -> Result<()> {
    let rendered = phrase.to_string();
    let newline = !args.no_newline;

    if !args.mute {
        let mut stdout = std::io::stdout().lock();
        let written = if newline {
            writeln!(stdout, "{}", rendered)
        } else {
            write!(stdout, "{}", rendered).and_then(|_| stdout.flush())
        };
        written.map_err(|e| Error::Resource(format!("cannot write to stdout: {}", e)))?;
    }

    if let Some(path) = &args.output {
        let mut contents = rendered;
        if newline {
            contents.push('\n');
        }
        fs::write(path, contents)
            .map_err(|e| Error::Resource(format!("cannot write {}: {}", path.display(), e)))?;
    }
    Ok(())
}
