pub mod telegram;
mod types;
pub mod utils;
pub use types::{BotConfig, Config, DEFAULT_API_URL};
