use std::path::PathBuf;

/// Process configuration read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub workers: usize,
	/// Optional JSON generation config; defaults are used when absent.
	pub generation_config: Option<PathBuf>,
}

impl ServerConfig {
	pub const DEFAULT_HOST: &'static str = "0.0.0.0";
	pub const DEFAULT_PORT: u16 = 8000;

	/// Reads `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS` and `WORDGEN_CONFIG`.
	pub fn from_env() -> Result<Self, String> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Same as `from_env`, with an injectable variable lookup.
	///
	/// # Errors
	/// Returns an error if the port or the worker count is set but invalid.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let host = lookup("SERVER_HOST")
			.filter(|s| !s.trim().is_empty())
			.unwrap_or_else(|| Self::DEFAULT_HOST.to_owned());

		let port = match lookup("SERVER_PORT") {
			Some(s) => s
				.trim()
				.parse::<u16>()
				.map_err(|_| format!("SERVER_PORT must be a port number, got '{s}'"))?,
			None => Self::DEFAULT_PORT,
		};

		let workers = match lookup("SERVER_WORKERS") {
			Some(s) => match s.trim().parse::<usize>() {
				Ok(n) if n > 0 => n,
				_ => return Err(format!("SERVER_WORKERS must be a positive integer, got '{s}'")),
			},
			None => num_cpus::get(),
		};

		let generation_config = lookup("WORDGEN_CONFIG")
			.filter(|s| !s.trim().is_empty())
			.map(PathBuf::from);

		Ok(Self { host, port, workers, generation_config })
	}
}
