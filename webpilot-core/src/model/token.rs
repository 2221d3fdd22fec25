use std::fmt;

/// The closed word-level tagging scheme. Everything the command parser
/// cares about is whether a token is a `Verb`; the remaining classes exist
/// for the diagnostic dump and for lexicon overrides.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LexicalClass {
    Verb,
    Noun,
    Pronoun,
    Determiner,
    Preposition,
    Adjective,
    Adverb,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

/// A word-level unit of a command, with its byte span in the source text.
#[derive(PartialEq, Debug)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub class: LexicalClass,
}

impl LexicalClass {
    pub fn as_str(self) -> &'static str {
        match self {
            LexicalClass::Verb => "verb",
            LexicalClass::Noun => "noun",
            LexicalClass::Pronoun => "pronoun",
            LexicalClass::Determiner => "determiner",
            LexicalClass::Preposition => "preposition",
            LexicalClass::Adjective => "adjective",
            LexicalClass::Adverb => "adverb",
            LexicalClass::Conjunction => "conjunction",
            LexicalClass::Number => "number",
            LexicalClass::Punctuation => "punctuation",
            LexicalClass::Other => "other",
        }
    }
}

impl fmt::Display for LexicalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
