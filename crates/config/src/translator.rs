use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Translator {
    #[serde(rename = "deepl")]
    Deepl {
        auth_key: String,
        base_uri: Option<String>,
    },
}

impl Translator {
    /// Alias of the client this entry configures.
    pub fn alias(&self) -> &'static str {
        match self {
            Translator::Deepl { .. } => "deepl",
        }
    }

    /// Option mapping handed to the client's `set_configuration`.
    pub fn options(&self) -> HashMap<String, String> {
        let mut options = HashMap::new();
        match self {
            Translator::Deepl { auth_key, base_uri } => {
                options.insert("authKey".to_string(), auth_key.clone());
                if let Some(base_uri) = base_uri {
                    options.insert("baseUri".to_string(), base_uri.clone());
                }
            }
        }

        options
    }
}
