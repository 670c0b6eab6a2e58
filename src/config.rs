use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "PatientRecords";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overrides the listen address.
pub const ADDR_ENV: &str = "PATIENT_RECORDS_ADDR";
/// Overrides the SQLite database path.
pub const DB_ENV: &str = "PATIENT_RECORDS_DB";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var} value {value:?}: {reason}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("Cannot determine home directory")]
    NoHomeDir,
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,patient_records_lib=debug"
}

/// Get the application data directory (~/PatientRecords/)
pub fn app_data_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(APP_NAME))
}

/// Database path: `PATIENT_RECORDS_DB`, else `<app data>/patients.db`.
pub fn database_path() -> Result<PathBuf, ConfigError> {
    match std::env::var_os(DB_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(app_data_dir()?.join("patients.db")),
    }
}

/// Listen address: `PATIENT_RECORDS_ADDR`, else `127.0.0.1:8080`.
pub fn bind_addr() -> Result<SocketAddr, ConfigError> {
    let value = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    parse_addr(&value)
}

fn parse_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddr {
            var: ADDR_ENV,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir().unwrap();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn default_addr_parses() {
        let addr = parse_addr(DEFAULT_ADDR).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn invalid_addr_rejected() {
        let err = parse_addr("localhost:http").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { var: ADDR_ENV, .. }));
    }
}
