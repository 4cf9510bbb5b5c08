use std::path::PathBuf;
use std::process;
use std::sync::Once;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use ufloat8::format::{self, ulp};
use ufloat8::{compress, rate, uncompress, TickConfig, Ufloat8Error};

#[derive(Parser, Debug)]
#[command(name = "ufloat8", version, about = "Inspect the 8-bit micro-float rate encoding")]
struct Cli {
    /// JSON file with the timer configuration, e.g. {"tick_hz": 32000}
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a 16-bit magnitude into a code
    Compress {
        #[arg(value_parser = parse_u16)]
        value: u16,
    },
    /// Expand a code into its 16-bit magnitude
    Uncompress {
        #[arg(value_parser = parse_u8)]
        code: u8,
    },
    /// Print every code with its magnitude
    Table,
    /// Encode a period in milliseconds through the configured timer
    Rate { millis: u64 },
}

static INIT_LOGGER: Once = Once::new();

fn init_logging(verbose: bool) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
        builder.parse_default_env();

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        let _ = builder.try_init();
    });
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Ufloat8Error> {
    let config = match &cli.config {
        Some(path) => TickConfig::from_path(path)?,
        None => TickConfig::default(),
    };
    log::debug!("Using {:?}", config);

    match cli.command {
        Command::Compress { value } => handle_compress(value),
        Command::Uncompress { code } => handle_uncompress(code),
        Command::Table => handle_table(),
        Command::Rate { millis } => handle_rate(millis, &config)?,
    }
    Ok(())
}

fn handle_compress(value: u16) {
    let code = compress(value);
    let decoded = uncompress(code);
    println!(
        "{} -> {} (exponent {}, fraction {:#x}) -> {} [error {}, step {}]",
        value,
        format!("{:#04x}", code).green().bold(),
        format::exponent(code),
        format::fraction(code),
        decoded,
        value.abs_diff(decoded),
        ulp(code)
    );
}

fn handle_uncompress(code: u8) {
    let magnitude = uncompress(code);
    println!(
        "{:#04x} -> {} ({})",
        code,
        magnitude.to_string().green().bold(),
        format!("{:#06x}", magnitude)
    );
}

fn handle_table() {
    println!("{}", "code  magnitude  step".bold());
    for code in 0..=u8::MAX {
        let line = format!("{:#04x}  {:>9}  {:>4}", code, uncompress(code), ulp(code));
        // Highlight where the decoder switches from truncating to exact.
        if format::exponent(code) == format::LINEAR_EXPONENT && format::fraction(code) == 0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}

fn handle_rate(millis: u64, config: &TickConfig) -> Result<(), Ufloat8Error> {
    let requested = Duration::from_millis(millis);
    let ticks = rate::duration_to_ticks(requested, config)?;
    let code = rate::compress_duration(requested, config)?;
    let actual = rate::uncompress_duration(code, config);

    println!(
        "{:?} @ {} Hz = {} ticks -> {} -> {} ticks = {:?}",
        requested,
        config.tick_hz,
        ticks,
        format!("{:#04x}", code).green().bold(),
        uncompress(code),
        actual
    );
    if actual != requested {
        log::info!("Requested period is not on the grid; the timer will run at {:?}", actual);
    }
    Ok(())
}

fn parse_u8(s: &str) -> Result<u8, String> {
    parse_u16(s).and_then(|v| u8::try_from(v).map_err(|_| format!("{s} does not fit in one byte")))
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid value '{s}': {e}"))
}
