//! fisfmt - Render values the way the receipt capture screens show them.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fisfmt::{to_title_case, truncate_string, FormatConfig, Formatter};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fisfmt")]
#[command(about = "Format values with Turkish locale conventions", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Text printed for missing or unparsable input
    #[arg(long, global = true)]
    placeholder: Option<String>,

    /// Currency symbol appended to amounts
    #[arg(long, global = true)]
    symbol: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format an amount, e.g. 1.234,56 ₺
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: Option<f64>,
        /// Leave out the currency symbol
        #[arg(long)]
        plain: bool,
    },
    /// Format a date, dd.MM.yyyy unless a pattern is given
    Date {
        date: Option<String>,
        /// date-fns style pattern, e.g. "d MMMM yyyy"
        #[arg(long, short)]
        pattern: Option<String>,
    },
    /// Format a date with time, dd.MM.yyyy HH:mm
    Datetime { date: Option<String> },
    /// Describe a date relative to now, e.g. 2 saat önce
    Relative { date: Option<String> },
    /// Group a phone number
    Phone { phone: Option<String> },
    /// Normalize a 10-digit tax ID
    Vkn { vkn: Option<String> },
    /// Abbreviate a number, e.g. 1,2K
    Compact {
        #[arg(allow_negative_numbers = true)]
        number: Option<f64>,
    },
    /// Format a percentage, e.g. 45,68%
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: Option<f64>,
        /// Number of fraction digits
        #[arg(long, short)]
        decimals: Option<usize>,
    },
    /// Format a byte count, e.g. 1,5 KB
    Size { bytes: u64 },
    /// Capitalize every word
    Title { text: String },
    /// Cap text at a number of characters
    Truncate { text: String, max_length: usize },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting fisfmt");
    }

    let formatter = Formatter::new(build_config(&args));
    println!("{}", render(&formatter, &args.command));

    if args.log.is_some() {
        tracing::info!("fisfmt exited");
    }

    Ok(())
}

fn build_config(args: &Args) -> FormatConfig {
    let mut config = FormatConfig::default();
    if let Some(placeholder) = &args.placeholder {
        config = config.with_placeholder(placeholder.as_str());
    }
    if let Some(symbol) = &args.symbol {
        config = config.with_currency_symbol(symbol.as_str());
    }
    config
}

fn render(formatter: &Formatter, command: &Command) -> String {
    tracing::debug!("Rendering {:?}", command);
    match command {
        Command::Currency { amount, plain } => formatter.format_currency_with(*amount, !plain),
        Command::Date { date, pattern } => match pattern {
            Some(pattern) => formatter.format_date_with(date, pattern),
            None => formatter.format_date(date),
        },
        Command::Datetime { date } => formatter.format_date_time(date),
        Command::Relative { date } => formatter.format_relative_time(date),
        Command::Phone { phone } => formatter.format_phone(phone.as_deref()),
        Command::Vkn { vkn } => formatter.format_vkn(vkn.as_deref()),
        Command::Compact { number } => formatter.format_compact_number(*number),
        Command::Percent { value, decimals } => match decimals {
            Some(decimals) => formatter.format_percentage_with(*value, *decimals),
            None => formatter.format_percentage(*value),
        },
        Command::Size { bytes } => formatter.format_file_size(*bytes),
        Command::Title { text } => to_title_case(text),
        Command::Truncate { text, max_length } => truncate_string(text, *max_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_render_currency() {
        let args = parse(&["fisfmt", "currency", "1234.56"]);
        let formatter = Formatter::new(build_config(&args));
        assert_eq!(render(&formatter, &args.command), "1.234,56 ₺");

        let args = parse(&["fisfmt", "currency", "--plain", "-5"]);
        assert_eq!(render(&formatter, &args.command), "-5,00");
    }

    #[test]
    fn test_missing_argument_is_null_input() {
        let args = parse(&["fisfmt", "--placeholder", "yok", "currency"]);
        let formatter = Formatter::new(build_config(&args));
        assert_eq!(render(&formatter, &args.command), "yok");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["fisfmt", "currency", "10", "--symbol", "TL"]);
        let formatter = Formatter::new(build_config(&args));
        assert_eq!(render(&formatter, &args.command), "10,00 TL");
    }

    #[test]
    fn test_render_date_with_pattern() {
        let args = parse(&["fisfmt", "date", "2024-01-15", "--pattern", "d MMMM yyyy"]);
        let formatter = Formatter::default();
        assert_eq!(render(&formatter, &args.command), "15 Ocak 2024");
    }

    #[test]
    fn test_render_text_commands() {
        let formatter = Formatter::default();
        let args = parse(&["fisfmt", "title", "merhaba dünya"]);
        assert_eq!(render(&formatter, &args.command), "Merhaba Dünya");
        let args = parse(&["fisfmt", "truncate", "abcdefghij", "5"]);
        assert_eq!(render(&formatter, &args.command), "abcde...");
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(Args::try_parse_from(["fisfmt", "size", "lots"]).is_err());
    }
}
