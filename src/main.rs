use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use qseries::config::Config;
use qseries::math::{base::NumberBase, parsefmt, series, Num};

#[derive(Parser)]
#[command(version, about = "Exact rational series approximations of exp and ln")]
pub struct Args {
    #[command(subcommand)]
    command: Command,
    /// Radix of the printed result
    #[arg(short, long, global = true, value_enum)]
    base: Option<NumberBase>,
    /// Maximum number of fractional digits to print
    #[arg(short, long, global = true)]
    places: Option<u32>,
    /// Print the exact fraction instead of digits
    #[arg(long, global = true)]
    fraction: bool,
}

#[derive(Subcommand)]
enum Command {
    /// e raised to POWER
    Exp {
        #[arg(allow_hyphen_values = true)]
        power: String,
        #[arg(short, long, allow_hyphen_values = true)]
        terms: Option<i64>,
    },
    /// Natural logarithm of X
    Ln {
        #[arg(allow_hyphen_values = true)]
        x: String,
        #[arg(short, long, allow_hyphen_values = true)]
        terms: Option<i64>,
    },
}

fn parse_arg(s: &str) -> Result<Num, String> {
    parsefmt::parse(s).ok_or_else(|| format!("not a number: {s}"))
}

fn run(args: Args, conf: Config) -> Result<String, String> {
    let result = match args.command {
        Command::Exp { power, terms } => {
            let power = parse_arg(&power)?;
            series::exp(&power, terms.unwrap_or(conf.exp_terms))
        },
        Command::Ln { x, terms } => {
            let x = parse_arg(&x)?;
            series::ln(&x, terms.unwrap_or(conf.ln_terms))
        },
    }
    .map_err(|err| err.to_string())?;

    if args.fraction {
        Ok(parsefmt::fmt_fraction(&result))
    } else {
        let base = args.base.unwrap_or(conf.base);
        let places = args.places.unwrap_or(conf.max_fractional_places);
        Ok(parsefmt::fmt(&result, base, places))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let conf = Config::load();
    debug!("loaded config: {conf:?}");
    match run(args, conf) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("qseries: {err}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_line(line: &[&str]) -> Result<String, String> {
        let args = Args::try_parse_from(std::iter::once("qseries").chain(line.iter().copied()))
            .map_err(|err| err.to_string())?;
        run(args, Config::default())
    }

    #[test]
    fn exp_prints_digits() {
        assert_eq!(run_line(&["exp", "0"]).unwrap(), "1");
        assert_eq!(run_line(&["exp", "1", "-t", "2"]).unwrap(), "2");
        assert!(run_line(&["exp", "1", "-p", "6"]).unwrap().starts_with("2.718281"));
    }

    #[test]
    fn exp_fraction_and_base() {
        assert_eq!(run_line(&["exp", "1/2", "-t", "3", "--fraction"]).unwrap(), "13/8");
        assert_eq!(run_line(&["exp", "1/2", "-t", "3", "-b", "binary"]).unwrap(), "0b1.101");
    }

    #[test]
    fn ln_prints_digits() {
        assert!(run_line(&["ln", "2", "-t", "50", "-p", "12"]).unwrap().starts_with("0.6931471805"));
        assert!(run_line(&["ln", "0.5", "-t", "50", "-p", "12"]).unwrap().starts_with("-0.6931471805"));
    }

    #[test]
    fn errors_are_reported() {
        assert_eq!(run_line(&["exp", "1", "-t", "-1"]), Err("terms must be non-negative".to_owned()));
        assert_eq!(run_line(&["ln", "1"]), Err("division by zero".to_owned()));
        assert_eq!(run_line(&["ln", "abc"]), Err("not a number: abc".to_owned()));
    }
}
