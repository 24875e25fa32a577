use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use error_stack::{Report, ResultExt};
use reqwest::Url;
use vodca::References;

use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

const SERVER_ADDR: &str = "SERVER_ADDR";
const CATALOG_SEED_PATH: &str = "CATALOG_SEED_PATH";
const BOOKS_API_URL: &str = "BOOKS_API_URL";
const BOOKS_API_TIMEOUT_SECS: &str = "BOOKS_API_TIMEOUT_SECS";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, References)]
pub struct AppConfig {
    bind: SocketAddr,
    seed_path: Option<PathBuf>,
    remote: Option<RemoteConfig>,
}

#[derive(Debug, Clone, References)]
pub struct RemoteConfig {
    url: Url,
    timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::load(crate::env).convert_error()
    }

    fn load<F>(lookup: F) -> error_stack::Result<Self, DriverError>
    where
        F: Fn(&str) -> error_stack::Result<Option<String>, DriverError>,
    {
        let bind = lookup(SERVER_ADDR)?
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .change_context(DriverError::Env)
            .attach_printable_lazy(|| format!("{SERVER_ADDR} must be a socket address"))?;

        let seed_path = lookup(CATALOG_SEED_PATH)?
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let remote = match lookup(BOOKS_API_URL)?.filter(|url| !url.is_empty()) {
            None => None,
            Some(url) => {
                let url = Url::parse(&url)
                    .change_context(DriverError::Env)
                    .attach_printable_lazy(|| format!("{BOOKS_API_URL} must be an absolute url"))?;
                let secs = match lookup(BOOKS_API_TIMEOUT_SECS)? {
                    None => DEFAULT_TIMEOUT_SECS,
                    Some(secs) => secs.parse::<u64>().change_context(DriverError::Env).attach_printable_lazy(
                        || format!("{BOOKS_API_TIMEOUT_SECS} must be a whole number of seconds"),
                    )?,
                };
                if secs == 0 {
                    return Err(Report::new(DriverError::Env)
                        .attach_printable(format!("{BOOKS_API_TIMEOUT_SECS} must be positive")));
                }
                Some(RemoteConfig {
                    url,
                    timeout: Duration::from_secs(secs),
                })
            }
        };

        Ok(Self {
            bind,
            seed_path,
            remote,
        })
    }
}
