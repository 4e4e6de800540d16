use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;
mod terminal;

/// Generate a random password from the types of character you choose.
///
/// Anything not given as a flag is asked for interactively.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The shortest password length that will be accepted.
    #[arg(long, default_value_t = 8)]
    min_length: usize,
    /// The longest password length that will be accepted.
    #[arg(long, default_value_t = 128)]
    max_length: usize,
    /// Answer the length question up front.
    #[arg(long)]
    length: Option<usize>,
    /// Include this type of character without asking. May be repeated.
    #[arg(long, value_enum)]
    include: Vec<terminal::ClassArg>,
    /// Exclude this type of character without asking. May be repeated.
    #[arg(long, value_enum)]
    exclude: Vec<terminal::ClassArg>,
    /// Copy the password to the clipboard instead of printing it.
    #[arg(long)]
    copy: bool,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    let range = pwgen::LengthRange::new(args.min_length, args.max_length)?;
    let mut input = terminal::PresetInput::new(args.length, &args.include, &args.exclude)?;
    let mut rng = rand::thread_rng();

    let outcome = pwgen::flow::run(&mut input, &mut rng, range)?;
    if let pwgen::Outcome::Generated { attempts, .. } = &outcome {
        tracing::debug!(attempts, "password accepted");
    }
    let sink = if args.copy {
        output::Sink::Clipboard
    } else {
        output::Sink::Stdout
    };
    sink.write(&outcome.into_output())?;
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pwgen=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run() {
        tracing::debug!(error = ?err, "run failed");
        eprintln!("{err}");
        process::exit(1);
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("The same type of character was both included and excluded: {0}")]
    ConflictingClass(terminal::ClassArg),
    #[error("{0}")]
    Generator(pwgen::Error),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<pwgen::Error> for ProgError {
    fn from(err: pwgen::Error) -> ProgError {
        ProgError::Generator(err)
    }
}
