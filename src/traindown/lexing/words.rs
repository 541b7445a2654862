//! Performance line words
//!
//! A performance line such as `100kg 5r 3s` is a run of whitespace separated words. The
//! words are defined with the logos derive macro; their values are extracted by callbacks
//! so that the scanner only has to map them onto [`Token`]s.

use crate::traindown::lexing::error::ScanError;
use crate::traindown::token::{Token, TokenKind};
use logos::{Lexer, Logos};

/// All words that may appear on a performance line
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t]+")]
pub enum Word {
    #[regex(r"[0-9]+(\.[0-9]+)?|\.[0-9]+", |lex| lex.slice().to_owned())]
    Load(String),

    // Load immediately followed by its unit, e.g. 100kg or 225lbs
    #[regex(r"([0-9]+(\.[0-9]+)?|\.[0-9]+)([kK][gG][sS]?|[lL][bB][sS]?)", split_unit)]
    LoadWithUnit((String, String)),

    #[regex(r"([0-9]+(\.[0-9]+)?|\.[0-9]+)%", strip_suffix)]
    PercentOfMax(String),

    #[regex(r"[0-9]+([rR]|[rR][eE][pP][sS]?)", strip_suffix)]
    Reps(String),

    #[regex(r"[0-9]+([sS]|[sS][eE][tT][sS]?)", strip_suffix)]
    Sets(String),

    #[regex(r"[0-9]+([fF]|[fF][aA][iI][lL][sS]?)", strip_suffix)]
    Fails(String),
}

fn number_end(slice: &str) -> usize {
    slice
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(slice.len())
}

fn split_unit(lex: &mut Lexer<Word>) -> (String, String) {
    let slice = lex.slice();
    let (load, unit) = slice.split_at(number_end(slice));
    (load.to_owned(), unit.to_owned())
}

fn strip_suffix(lex: &mut Lexer<Word>) -> String {
    let slice = lex.slice();
    slice[..number_end(slice)].to_owned()
}

impl Word {
    fn push_tokens(self, line: usize, tokens: &mut Vec<Token>) {
        let (kind, value) = match self {
            Word::Load(value) => (TokenKind::Load, value),
            Word::LoadWithUnit((load, unit)) => {
                tokens.push(Token::new(TokenKind::Load, load).at_line(line));
                (TokenKind::Unit, unit)
            }
            Word::PercentOfMax(value) => (TokenKind::PercentOfMax, value),
            Word::Reps(value) => (TokenKind::Reps, value),
            Word::Sets(value) => (TokenKind::Sets, value),
            Word::Fails(value) => (TokenKind::Fails, value),
        };
        tokens.push(Token::new(kind, value).at_line(line));
    }
}

/// Tokenize one trimmed performance line.
///
/// Each whitespace separated word must be exactly one [`Word`]. A word that logos can only
/// cover partially (`1.2.3`, `5rep5`, `9r9r`) fails with [`ScanError::UnexpectedWord`].
pub fn lex_performance(source: &str, line: usize) -> Result<Vec<Token>, ScanError> {
    let mut tokens = Vec::new();

    for text in source.split_whitespace() {
        let word = lex_word(text).ok_or_else(|| ScanError::UnexpectedWord {
            line,
            word: text.to_owned(),
        })?;
        word.push_tokens(line, &mut tokens);
    }

    Ok(tokens)
}

fn lex_word(text: &str) -> Option<Word> {
    let mut lexer = Word::lexer(text);
    let word = lexer.next()?.ok()?;
    (lexer.span().end == text.len()).then_some(word)
}
