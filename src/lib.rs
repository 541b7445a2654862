//! # traindown
//!
//! A parser for the Traindown training log format.
//!
//! Parsing happens in two stages. The [scanner](traindown::lexing) turns raw text into a flat
//! list of tokens, and the [session builder](traindown::parsing::builder) folds those tokens
//! into a [`Session`](traindown::ast::Session). The scanner knows nothing about scopes and the
//! builder never sees raw text.
//!
//!     @ 2023-01-15
//!     # bodyweight: 82
//!
//!     Squat:
//!       100kg 5r 3s
//!       * felt fast
//!     + Pull up:
//!       20 8r
//!
//! Per-line problems (a bad number, a malformed metadata line, an unreadable date) never
//! abort a parse. They are collected in `Session::errors` and the affected field keeps a
//! sensible default. Only text that cannot be tokenized at all is a hard error.

pub mod traindown;

pub use traindown::ast::{Diagnostic, DiagnosticKind, Metadata, Movement, Performance, Session};
pub use traindown::error::ParseError;
pub use traindown::parsing::{parse_bytes, parse_str, Parser};
