mod ui;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use keysmith::{GenerationConfig, KeystreamSource, RandomSource, RngSource, Session, evaluate};

#[derive(Parser)]
#[command(
    name = "keysmith",
    version,
    about = "Random password generator with a character-diversity strength meter"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "generate", env = "KEYSMITH_MODE")]
    mode: Mode,

    /// Password length, clamped to 6..=100
    #[arg(short, long, default_value_t = GenerationConfig::DEFAULT_LENGTH, env = "KEYSMITH_LENGTH")]
    length: usize,

    /// Include digits 0-9
    #[arg(short, long, env = "KEYSMITH_NUMBERS")]
    numbers: bool,

    /// Include punctuation symbols
    #[arg(short, long, env = "KEYSMITH_SYMBOLS")]
    symbols: bool,

    /// How many passwords to generate
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=1000),
        env = "KEYSMITH_COUNT"
    )]
    count: u32,

    /// Copy the last password to the clipboard
    #[arg(long, env = "KEYSMITH_COPY")]
    copy: bool,

    /// Prompt for a seed phrase and derive passwords from it reproducibly
    #[arg(long)]
    seed: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Mode {
    Generate,
    Check,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    match cli.mode {
        Mode::Generate => run_generate(&cli, &options),
        Mode::Check => run_check(&options),
    }
}

fn run_generate(cli: &Cli, options: &ui::DisplayOptions) -> Result<()> {
    let config = GenerationConfig::default()
        .with_length(cli.length)
        .with_numbers(cli.numbers)
        .with_symbols(cli.symbols);

    if config.length != cli.length {
        log::warn!(
            "Length {} is outside {}..={}, using {}",
            cli.length,
            GenerationConfig::MIN_LENGTH,
            GenerationConfig::MAX_LENGTH,
            config.length
        );
    }

    if cli.seed {
        let key = ui::prompt_seed()?;
        let session = Session::new(config, KeystreamSource::new(&key))
            .context("Failed to generate password")?;
        emit(session, cli, options)
    } else {
        let session =
            Session::new(config, RngSource::thread()).context("Failed to generate password")?;
        emit(session, cli, options)
    }
}

fn emit<R: RandomSource>(
    mut session: Session<R>,
    cli: &Cli,
    options: &ui::DisplayOptions,
) -> Result<()> {
    let pool_size = session.config().pool().len();

    for index in 0..cli.count as usize {
        if index > 0 {
            session.regenerate().context("Failed to regenerate password")?;
        }

        ui::display_password(
            index,
            session.password(),
            session.evaluation(),
            pool_size,
            options,
        );
    }

    if cli.copy {
        ui::copy_to_clipboard(session.password());
    }

    Ok(())
}

fn run_check(options: &ui::DisplayOptions) -> Result<()> {
    let password = ui::prompt_password()?;
    let evaluation = evaluate(&password);
    ui::display_evaluation(&evaluation, options);
    Ok(())
}
