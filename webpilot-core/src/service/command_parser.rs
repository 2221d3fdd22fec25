use std::str::FromStr;

use anyhow::bail;
use log::{debug, warn};

use crate::model::{Action, LexicalClass, ParsedCommand, Verb, WebpilotContext};

impl FromStr for Verb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verb = match s {
            "search" => Verb::Search,
            "click" => Verb::Click,
            _ => bail!("Unknown command verb: {s}"),
        };
        Ok(verb)
    }
}

impl WebpilotContext {
    /// Maps a free-text command to an action. Total: every outcome,
    /// including "no verb at all", is a variant of [`Action`].
    pub fn interpret(&self, command: &str) -> Action {
        let parsed = self.split_verb(command);

        let Some(verb) = parsed.verb else {
            warn!("Could not find a verb in the command");
            self.dump_lexical_tags(command);
            return Action::NoVerbFound;
        };

        let Ok(known) = verb.parse::<Verb>() else {
            warn!("Unrecognized command verb: {verb}");
            self.dump_lexical_tags(command);
            return Action::Unrecognized { verb };
        };

        let Some(target) = parsed.target else {
            warn!("Command verb {known} has no target");
            return Action::MissingTarget { verb: known };
        };

        match known {
            Verb::Search => {
                let query = match target.get(..4) {
                    Some(prefix) if prefix.eq_ignore_ascii_case("for ") => target[4..].to_string(),
                    _ => target,
                };
                Action::Search { query }
            }
            Verb::Click => {
                let link_text = target
                    .trim_matches(|c| c == '\'' || c == '"')
                    .to_lowercase();
                Action::Click { link_text }
            }
        }
    }

    /// Splits a command at its first verb-classified token. Tokens past
    /// that point are never inspected.
    fn split_verb(&self, command: &str) -> ParsedCommand {
        let Some(token) = self
            .lexicon
            .tag(command)
            .find(|token| token.class == LexicalClass::Verb)
        else {
            return ParsedCommand::default();
        };

        let mut rest = command[token.end..].chars();
        rest.next(); // the separator between the verb and its target
        let target = rest.as_str().trim();

        ParsedCommand {
            verb: Some(token.text.to_lowercase()),
            target: (!target.is_empty()).then(|| target.to_string()),
        }
    }

    fn dump_lexical_tags(&self, text: &str) {
        for token in self.lexicon.tag(text) {
            debug!("{}: {}", token.text, token.class);
        }
    }
}
