use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the persisted session file
pub const SESSION_FILE_ENV: &str = "ESTATE_SESSION_FILE";
/// Environment variable toggling the simulated API pauses
pub const SIMULATE_LATENCY_ENV: &str = "ESTATE_SIMULATE_LATENCY";

/// Pauses inserted before each simulated call completes, purely so a front
/// end has something to show a spinner for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub login: Duration,
    pub register: Duration,
    pub submission: Duration,
    /// Profile and password saves on the settings page
    pub settings: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self {
            login: Duration::ZERO,
            register: Duration::ZERO,
            submission: Duration::ZERO,
            settings: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(1000),
            register: Duration::from_millis(1500),
            submission: Duration::from_millis(2000),
            settings: Duration::from_millis(1000),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    pub session_file: PathBuf,
    pub latency: Latency,
}

impl MarketConfig {
    /// Reads `ESTATE_SESSION_FILE` and `ESTATE_SIMULATE_LATENCY`, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        let session_file = env::var_os(SESSION_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);
        let simulate = env::var(SIMULATE_LATENCY_ENV)
            .map(|s| parse_flag(&s))
            .unwrap_or(true);

        Self {
            session_file,
            latency: if simulate { Latency::default() } else { Latency::none() },
        }
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
            latency: Latency::default(),
        }
    }
}

/// `<data dir>/estate-market/local_storage.json`, or the working directory
/// when the platform has no data dir.
pub fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("estate-market"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("local_storage.json")
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}
