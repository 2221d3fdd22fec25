use indexmap::IndexMap;

pub use action::{Action, ParsedCommand, Verb};
pub use token::{LexicalClass, Token};

pub mod action;
pub mod token;

#[derive(Debug)]
pub struct WebpilotContext {
    pub lexicon: Lexicon,
    pub search_url: UrlTemplate,
}

/// Word classifications the tagger consults before its built-in tables,
/// in configuration order.
#[derive(Debug, Default)]
pub struct Lexicon {
    pub overrides: IndexMap<String, LexicalClass>,
}

#[derive(PartialEq, Debug)]
pub struct TemplateSlot {
    pub name: String,
    pub start: usize,
}

#[derive(PartialEq, Debug)]
pub struct UrlTemplate {
    pub value: String,
    pub slots: Vec<TemplateSlot>,
}

#[derive(Default)]
pub struct QueryParams {
    pub params: IndexMap<String, String>,
}

impl QueryParams {
    pub fn set(&mut self, name: &str, value: &str) {
        self.params.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&String> {
        self.params.get(name)
    }
}
