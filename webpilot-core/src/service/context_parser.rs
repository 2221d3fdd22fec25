use std::str::FromStr;

use anyhow::{bail, ensure};
use indexmap::IndexMap;

use crate::{
    config,
    model::{self, LexicalClass},
};

impl TryFrom<config::Root> for model::WebpilotContext {
    type Error = anyhow::Error;

    fn try_from(value: config::Root) -> Result<Self, Self::Error> {
        let search_url: model::UrlTemplate = value.search_url.parse()?;
        ensure!(
            search_url.slots.iter().any(|slot| slot.name == "query"),
            "The search URL must contain a {{{{query}}}} slot"
        );

        let mut overrides = IndexMap::new();
        for entry in value.lexicon {
            overrides.insert(entry.word.to_lowercase(), entry.class.parse()?);
        }

        Ok(Self {
            lexicon: model::Lexicon { overrides },
            search_url,
        })
    }
}

impl FromStr for LexicalClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let class = match s {
            "verb" => Self::Verb,
            "noun" => Self::Noun,
            "pronoun" => Self::Pronoun,
            "determiner" => Self::Determiner,
            "preposition" => Self::Preposition,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "conjunction" => Self::Conjunction,
            "number" => Self::Number,
            "punctuation" => Self::Punctuation,
            "other" => Self::Other,
            _ => bail!("Unknown lexical class: {s}"),
        };
        Ok(class)
    }
}
