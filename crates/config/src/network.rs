use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Network {
    #[serde(default = "default_timeout")]
    #[validate(range(min = 1, message = "超时时间必须大于0"))]
    pub timeout: u64,
    #[validate(url(message = "不是url"))]
    pub proxy: Option<String>,
}

impl Default for Network {
    fn default() -> Network {
        Network {
            timeout: default_timeout(),
            proxy: None,
        }
    }
}

fn default_timeout() -> u64 {
    5
}
