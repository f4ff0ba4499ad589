use std::fmt::{Display, Formatter};

use crate::config::ConfigError;
use crate::impl_err;
use crate::route::RouteError;
use crate::store::StoreError;

/// Crate-level error, wrapping the error of each submodule.
#[derive(Debug)]
pub enum Error {
    Route(RouteError),
    Store(StoreError),
    Config(ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl_err!(RouteError, Route);
impl_err!(StoreError, Store);
impl_err!(ConfigError, Config);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Route(err) => write!(f, "route: {err}"),
            Error::Store(err) => write!(f, "store: {err}"),
            Error::Config(err) => write!(f, "config: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Route(err) => Some(err),
            Error::Store(err) => Some(err),
            Error::Config(err) => Some(err),
        }
    }
}
