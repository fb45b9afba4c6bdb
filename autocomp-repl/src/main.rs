use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use autocomp_core::Error;
use autocomp_core::model::prediction::checked_limit;
use autocomp_core::model::word_model::WordModel;

/// Interactive word completion.
///
/// Reads one line per query on stdin and prints the predictions for it.
/// A single word is completed from whole-corpus frequencies, otherwise the
/// last word is completed from the words seen after the one before it.
#[derive(Parser, Debug)]
#[command(name = "autocomp", version)]
struct Config {
	/// Training corpus (plain text)
	#[arg(long, env = "AUTOCOMP_CORPUS", default_value = "big.txt")]
	corpus: PathBuf,

	/// Number of predictions per line
	#[arg(long, env = "AUTOCOMP_LIMIT", default_value_t = 5, allow_negative_numbers = true)]
	limit: i64,
}

/// Parses the argument of a `:limit N` command.
fn parse_limit(arg: &str) -> Result<usize, Error> {
	let limit: i64 = arg
		.trim()
		.parse()
		.map_err(|_| Error::InvalidInput(format!("'{}' is not a number", arg.trim())))?;
	checked_limit(limit)
}

/// Answers every line of `input` until end of stream.
///
/// - `:limit N` changes the number of predictions for the following lines
/// - any other line is a prediction query
///
/// Invalid queries are reported on `output` and do not stop the loop.
fn run<R: BufRead, W: Write>(model: &WordModel, mut limit: usize, input: R, mut output: W) -> io::Result<()> {
	for line in input.lines() {
		let line = line?;

		if let Some(arg) = line.trim_start().strip_prefix(":limit") {
			match parse_limit(arg) {
				Ok(n) => {
					limit = n;
					writeln!(output, "limit set to {}", limit)?;
				}
				Err(e) => writeln!(output, "error: {}", e)?,
			}
			output.flush()?;
			continue;
		}

		match model.predict(&line, limit) {
			Ok(predictions) if predictions.is_empty() => writeln!(output, "no predictions")?,
			Ok(predictions) => {
				for prediction in predictions {
					writeln!(output, "{}", prediction)?;
				}
			}
			Err(e) => {
				warn!("Ignoring query {:?}: {}", line, e);
				writeln!(output, "error: {}", e)?;
			}
		}
		output.flush()?;
	}
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let config = Config::parse();
	let limit = checked_limit(config.limit)?;

	// The corpus must be fully loaded before any query
	let model = WordModel::from_file(&config.corpus)?;
	info!("Ready, type a partial line and press Enter (Ctrl-D to exit)");

	let stdin = io::stdin();
	run(&model, limit, stdin.lock(), io::stdout().lock())?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = "short text for short test for you";

	fn session(input: &str, limit: usize) -> String {
		let model = WordModel::from_text(SAMPLE);
		let mut output = Vec::new();
		run(&model, limit, input.as_bytes(), &mut output).unwrap();
		String::from_utf8(output).unwrap()
	}

	#[test]
	fn answers_each_line() {
		assert_eq!(session("sh\nshort t\n", 5), "short (2)\ntest (1)\ntext (1)\n");
	}

	#[test]
	fn empty_line_reports_an_error_and_continues() {
		let output = session("\nfo\n", 5);
		let lines: Vec<&str> = output.lines().collect();
		assert!(lines[0].starts_with("error: invalid input"));
		assert_eq!(lines[1], "for (2)");
	}

	#[test]
	fn unknown_prefix_has_no_predictions() {
		assert_eq!(session("zebra\n", 5), "no predictions\n");
	}

	#[test]
	fn limit_command() {
		assert_eq!(session(":limit 1\nshort t\n", 5), "limit set to 1\ntest (1)\n");
		assert!(session(":limit -2\n", 5).starts_with("error: invalid input"));
		assert!(session(":limit many\n", 5).starts_with("error: invalid input"));
	}

	#[test]
	fn config_rejects_negative_limit() {
		let config = Config::try_parse_from(["autocomp", "--limit", "-1"]).unwrap();
		assert!(checked_limit(config.limit).is_err());
	}
}
