pub mod settings;

pub use settings::{AppConfig, QuerySettings, ServerSettings};
