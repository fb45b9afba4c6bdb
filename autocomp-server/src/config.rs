use std::path::PathBuf;

use clap::Parser;

/// Command line options of the prediction server.
///
/// Each option can also be given through its environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "autocomp-server", version, about = "Serves word predictions over HTTP")]
pub struct Config {
	/// Training corpus (plain text)
	#[arg(long, env = "AUTOCOMP_CORPUS", default_value = "big.txt")]
	pub corpus: PathBuf,

	/// Address to bind
	#[arg(long, env = "AUTOCOMP_HOST", default_value = "127.0.0.1")]
	pub host: String,

	#[arg(long, env = "AUTOCOMP_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Number of predictions when a request does not set `limit`
	#[arg(long, env = "AUTOCOMP_LIMIT", default_value_t = 5)]
	pub limit: usize,

	/// Number of HTTP workers (defaults to the number of CPUs)
	#[arg(long, env = "AUTOCOMP_WORKERS")]
	pub workers: Option<usize>,
}

/// Request settings shared with the handlers.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
	pub limit: usize,
}

impl From<&Config> for Settings {
	fn from(config: &Config) -> Self {
		Self { limit: config.limit }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::try_parse_from(["autocomp-server"]).unwrap();
		assert_eq!(config.host, "127.0.0.1");
		assert_eq!(config.port, 5000);
		assert_eq!(Settings::from(&config).limit, 5);
		assert!(config.workers.is_none());
	}

	#[test]
	fn overrides() {
		let config =
			Config::try_parse_from(["autocomp-server", "--corpus", "data/news.txt", "--port", "8080", "--limit", "3"]).unwrap();
		assert_eq!(config.corpus, PathBuf::from("data/news.txt"));
		assert_eq!(config.port, 8080);
		assert_eq!(config.limit, 3);
	}
}
