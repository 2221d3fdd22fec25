mod config;
pub mod model;
mod service;

use std::{fs, path::Path};

use config::Root;
use model::WebpilotContext;

pub use service::Browser;
pub use service::tagger::Tags;

pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<WebpilotContext> {
    let config = serde_norway::from_str::<Root>(&fs::read_to_string(path)?)?;
    config.try_into()
}
