use logos::{Lexer, Logos};

use crate::model::{LexicalClass, Lexicon, Token};

#[derive(Logos, Debug)]
#[logos(skip r"[\s\t]+")]
enum RawToken {
    #[regex(r"[A-Za-z]+(?:'[A-Za-z]+)*")]
    Word,
    #[regex(r"[0-9]+(?:\.[0-9]+)?")]
    Number,
    #[regex(r"[^A-Za-z0-9\s]")]
    Punctuation,
}

/// A single left-to-right tagging pass over a command string.
pub struct Tags<'a> {
    lexer: Lexer<'a, RawToken>,
    lexicon: &'a Lexicon,
    prev: Option<LexicalClass>,
}

impl<'a> Iterator for Tags<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // A lexing failure ends the stream rather than surfacing an error.
        let raw = self.lexer.next()?.ok()?;
        let span = self.lexer.span();
        let class = match raw {
            RawToken::Word => self.lexicon.classify(self.lexer.slice(), self.prev),
            RawToken::Number => LexicalClass::Number,
            RawToken::Punctuation => LexicalClass::Punctuation,
        };
        self.prev = Some(class);
        Some(Token {
            text: self.lexer.slice(),
            start: span.start,
            end: span.end,
            class,
        })
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "another", "any", "each", "every", "that", "the", "these", "this", "those",
];

const PREPOSITIONS: &[&str] = &[
    "about", "after", "at", "before", "by", "for", "from", "in", "into", "of", "on", "onto",
    "over", "to", "under", "with",
];

const PRONOUNS: &[&str] = &[
    "he", "her", "him", "i", "it", "me", "she", "them", "they", "us", "we", "you",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "nor", "or", "so", "yet"];

const ADVERBS: &[&str] = &[
    "again", "back", "down", "here", "just", "later", "never", "now", "soon", "then", "there",
    "today", "up",
];

const ADJECTIVES: &[&str] = &[
    "big", "first", "last", "new", "next", "old", "previous", "second", "small", "third",
];

const VERBS: &[&str] = &[
    "browse", "click", "close", "download", "enter", "find", "go", "hide", "jump", "load",
    "locate", "navigate", "open", "play", "press", "refresh", "reload", "scroll", "search",
    "select", "show", "stop", "submit", "tap", "type", "visit", "zoom",
];

impl Lexicon {
    /// Tags word-level units of `text` in order. Each call starts a fresh
    /// pass, so the stream can be re-walked at will.
    pub fn tag<'a>(&'a self, text: &'a str) -> Tags<'a> {
        Tags {
            lexer: RawToken::lexer(text),
            lexicon: self,
            prev: None,
        }
    }

    fn classify(&self, word: &str, prev: Option<LexicalClass>) -> LexicalClass {
        let folded = word.to_lowercase();
        let folded = folded.as_str();

        if let Some(class) = self.overrides.get(folded) {
            return *class;
        }
        if DETERMINERS.contains(&folded) {
            return LexicalClass::Determiner;
        }
        if PREPOSITIONS.contains(&folded) {
            return LexicalClass::Preposition;
        }
        if PRONOUNS.contains(&folded) {
            return LexicalClass::Pronoun;
        }
        if CONJUNCTIONS.contains(&folded) {
            return LexicalClass::Conjunction;
        }
        if ADVERBS.contains(&folded) {
            return LexicalClass::Adverb;
        }
        if ADJECTIVES.contains(&folded) {
            return LexicalClass::Adjective;
        }
        if VERBS.contains(&folded) {
            // "the search bar": a determiner in front forces the noun reading
            if prev == Some(LexicalClass::Determiner) {
                return LexicalClass::Noun;
            }
            return LexicalClass::Verb;
        }
        if folded.len() > 3 && folded.ends_with("ly") {
            return LexicalClass::Adverb;
        }
        LexicalClass::Noun
    }
}
