mod deepl;
mod error;
pub mod language;
mod registry;

use std::collections::HashMap;

use async_trait::async_trait;

pub use deepl::{AUTH_KEY, BASE_URI, DEFAULT_BASE_URI, Deepl, LANGUAGE_CODES};
pub use error::{Error, ProviderError, Result};
pub use registry::Registry;

/// A remote machine translation service.
///
/// Clients start unconfigured; `set_configuration` has to succeed before
/// `translate` can be used.
#[async_trait]
pub trait Client: Send + Sync {
    /// Short identifier used to select the client, e.g. `deepl`.
    fn alias(&self) -> &'static str;

    fn full_name(&self) -> &'static str;

    fn set_configuration(&mut self, config: &HashMap<String, String>) -> Result<()>;

    /// Translates `payload` into `to`. Without `from` the service detects the
    /// source language itself.
    async fn translate(&self, payload: &str, from: Option<&str>, to: &str) -> Result<String>;

    /// Maps `code` to the form the service expects, e.g. `en-US` to `EN`.
    fn normalize(&self, code: &str) -> Result<&'static str>;

    fn supports_language(&self, code: &str) -> bool {
        self.normalize(code).is_ok()
    }
}
