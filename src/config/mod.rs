use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_FILE: &str = "ytinfo.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://www.youtube.com/get_video_info".to_string(),
            user_agent: format!("ytinfo/{}", env!("CARGO_PKG_VERSION")),
            timeout: 30,
        }
    }
}

impl Config {
    /// Loads `ytinfo.toml` from the working directory, falling back to the
    /// defaults when no file is present.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}
