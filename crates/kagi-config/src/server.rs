use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

const fn default_port() -> u16 {
    8080
}

const fn default_max_body_size() -> usize {
    1024 * 1024
}

fn default_host() -> SmolStr {
    SmolStr::new_static("127.0.0.1")
}

fn default_webhook_path() -> SmolStr {
    SmolStr::new_static("/keygen")
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    #[serde(default = "default_host")]
    pub host: SmolStr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for buffered webhook bodies, in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default = "default_webhook_path")]
    pub webhook_path: SmolStr,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_size: default_max_body_size(),
            webhook_path: default_webhook_path(),
        }
    }
}
