use std::collections::HashSet;

use validator::{ValidateUrl, ValidationError};

use super::translator::Translator;

pub fn translators(translators: &[Translator]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for translator in translators {
        if !seen.insert(translator.alias()) {
            let msg = format!("{} 重复配置", translator.alias());
            let err = ValidationError::new("duplicate").with_message(msg.into());
            return Err(err);
        }
        match translator {
            Translator::Deepl { auth_key, base_uri } => {
                if auth_key.trim().is_empty() {
                    let msg = format!("{} 的 auth_key 不能为空", translator.alias());
                    let err = ValidationError::new("auth_key").with_message(msg.into());
                    return Err(err);
                }
                if let Some(base_uri) = base_uri {
                    if !base_uri.validate_url() {
                        let msg = format!("base_uri 不是url > {base_uri}");
                        let err = ValidationError::new("base_uri").with_message(msg.into());
                        return Err(err);
                    }
                }
            }
        }
    }

    Ok(())
}
