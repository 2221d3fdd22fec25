use std::fmt;

/// The closed set of verbs the interpreter can execute. Anything else the
/// tagger marks as a verb ends up as `Action::Unrecognized`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verb {
    Search,
    Click,
}

#[derive(PartialEq, Debug)]
pub enum Action {
    Search { query: String },
    Click { link_text: String },
    Unrecognized { verb: String },
    MissingTarget { verb: Verb },
    NoVerbFound,
}

/// The verb/target split of a command. `target` is only present when `verb`
/// is, and is never an empty string.
#[derive(PartialEq, Debug, Default)]
pub struct ParsedCommand {
    pub verb: Option<String>,
    pub target: Option<String>,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Search => "search",
            Verb::Click => "click",
        })
    }
}
