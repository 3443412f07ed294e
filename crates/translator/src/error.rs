use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Configuration(String),
    #[error("language code {code:?} is not supported by {alias}")]
    InvalidLanguageCode { code: String, alias: &'static str },
    #[error("translate by {alias} failed")]
    Provider {
        alias: &'static str,
        #[source]
        source: ProviderError,
    },
    #[error("no translation client registered as {0:?}")]
    UnknownClient(String),
}

/// Failure after the request left the adapter.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Response(String),
}

pub type Result<T> = std::result::Result<T, Error>;
