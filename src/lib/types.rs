use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BotConfig {
    pub name: String,
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}
