use error_stack::Report;

use crate::error::DriverError;

pub mod config;
pub mod database;
pub mod error;
pub mod remote;
mod row;

/// Reads `key` from the process environment or a `.env` file.
///
/// An unset variable is `Ok(None)`; anything else unreadable is an error.
pub(crate) fn env(key: &str) -> error_stack::Result<Option<String>, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(Report::new(error)
            .change_context(DriverError::Env)
            .attach_printable(format!("Env {key} could not be read"))),
    }
}
