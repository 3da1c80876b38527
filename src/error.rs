// SPDX-License-Identifier: MPL-2.0
use crate::application::AglError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Argument Error: {0}")]
    Args(String),
    #[error("AGL Error: {0}")]
    Agl(#[from] AglError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Args(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn agl_error_converts_and_formats() {
        let err: Error = AglError::MissingRecordedAltitude.into();
        assert!(matches!(err, Error::Agl(AglError::MissingRecordedAltitude)));
        assert_eq!(
            format!("{}", err),
            "AGL Error: no GPS altitude (MSL) found; cannot compute AGL"
        );
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let toml_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn pico_args_error_becomes_args_error() {
        let err: Error = pico_args::Error::MissingArgument.into();
        match err {
            Error::Args(message) => assert!(!message.is_empty()),
            _ => panic!("expected Args variant"),
        }
    }
}
