use crate::model::{Action, QueryParams, WebpilotContext};

mod command_parser;
mod context_parser;
pub mod tagger;
mod url_template;

/// The platform side of the interpreter: whatever renders pages and runs
/// script against them. Implementations live outside this crate.
pub trait Browser {
    fn navigate(&mut self, url: &str) -> anyhow::Result<()>;

    /// Clicks the first clickable element whose trimmed, lower-cased
    /// visible text equals `text`.
    fn click_element_by_text(&mut self, text: &str) -> anyhow::Result<()>;
}

impl WebpilotContext {
    /// Hands an interpreted action to the browser. The non-actions were
    /// already reported when they were interpreted, so they are no-ops here.
    pub fn execute(&self, action: &Action, browser: &mut impl Browser) -> anyhow::Result<()> {
        match action {
            Action::Search { query } => {
                let mut params = QueryParams::default();
                params.set("query", query);
                let url = self.search_url.render(&params)?;
                browser.navigate(&url)
            }
            Action::Click { link_text } => browser.click_element_by_text(link_text),
            Action::Unrecognized { .. } | Action::MissingTarget { .. } | Action::NoVerbFound => {
                Ok(())
            }
        }
    }
}
