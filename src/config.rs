//! Startup settings read from the environment.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5251;
pub const DEFAULT_DATA_FILE: &str = "Exelfiles/Foodsales.xlsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address the server binds to (`HOST`)
    pub host: String,

    /// Port the server listens on (`PORT`)
    pub port: u16,

    /// Spreadsheet loaded at startup (`SALES_DATA_FILE`)
    pub data_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from any key-value source, falling back to the
    /// defaults for missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let host = lookup("HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = lookup("PORT")
            .map(|port| port.parse::<u16>().ok())
            .flatten()
            .unwrap_or(defaults.port);

        let data_file = lookup("SALES_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        Settings {
            host,
            port,
            data_file,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
