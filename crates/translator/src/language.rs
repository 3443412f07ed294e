use super::error::{Error, Result};

/// Reduces `code` to one of `supported`.
///
/// An exact match is returned as is. Otherwise the first two characters are
/// upper-cased and looked up, so locale tags such as `en-US` fall back to
/// their language.
pub fn normalize(
    code: &str,
    supported: &[&'static str],
    alias: &'static str,
) -> Result<&'static str> {
    if let Some(found) = supported.iter().copied().find(|supported| *supported == code) {
        return Ok(found);
    }

    let prefix = code.chars().take(2).collect::<String>().to_uppercase();
    match supported.iter().copied().find(|supported| *supported == prefix) {
        Some(found) => Ok(found),
        None => Err(Error::InvalidLanguageCode {
            code: code.to_string(),
            alias,
        }),
    }
}
