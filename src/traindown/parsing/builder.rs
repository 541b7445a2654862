//! Session builder
//!
//! Folds a token sequence into a [`Session`]. All state lives in [`BuildState`], which is
//! threaded through the fold by value: each token consumes the previous state and returns
//! the next one, and [`BuildState::finish`] applies the end-of-stream rules.
//!
//! Scope
//!
//!     Metadata and notes attach to the innermost scope that is current when they are read:
//!
//!         Session      until the first movement token, even if a load was seen
//!         Performance  while a performance is open (after a load)
//!         Movement     otherwise
//!
//!     Leaving session scope is permanent.
//!
//! Flushing
//!
//!     A performance is appended to the current movement when the next load or movement
//!     token arrives. At end of stream it is appended only if its load is non-zero; a
//!     trailing zero-load performance is dropped on purpose. A movement is appended to the
//!     session when the next movement token arrives or at end of stream, but only if it has a
//!     name. Loads seen before the first movement therefore land in the unnamed placeholder,
//!     which becomes the first named movement.
//!
//! Nothing here can fail. Values that do not parse become [`Diagnostic`]s on the session and
//! the field keeps its previous (or default) value.

use crate::traindown::ast::{Diagnostic, DiagnosticKind, Metadata, Movement, Performance, Session};
use crate::traindown::dates::DateInterpreter;
use crate::traindown::token::{Token, TokenKind};

/// Where metadata and notes are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Session,
    Movement,
    Performance,
}

/// Accumulator for the token fold.
#[derive(Debug, Clone)]
pub struct BuildState {
    session: Session,
    movement: Movement,
    performance: Performance,
    scope: Scope,
    performance_open: bool,
}

impl Default for BuildState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildState {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            movement: Movement::new(),
            performance: Performance::new(),
            scope: Scope::Session,
            performance_open: false,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn performance_open(&self) -> bool {
        self.performance_open
    }

    /// Apply one token.
    pub fn apply<D: DateInterpreter>(mut self, token: &Token, dates: &D) -> Self {
        let line = token.line();
        let value = token.value();

        match token.kind() {
            TokenKind::Date => match dates.parse_freeform(value) {
                Ok(date) => self.session.date = Some(date),
                Err(err) => {
                    let now = dates.now();
                    tracing::warn!(line, value, %now, "unparseable date, falling back to now");
                    self.diagnose(
                        line,
                        DiagnosticKind::InvalidDate {
                            value: value.to_owned(),
                            reason: err.to_string(),
                        },
                    );
                    self.session.date = Some(now);
                }
            },
            TokenKind::Fails => {
                if let Some(fails) = self.int_value(line, "fails", value) {
                    self.performance.fails = fails;
                }
            }
            TokenKind::Load => {
                if self.performance_open {
                    self.flush_performance();
                }
                self.performance.load = self.float_value(line, "load", value).unwrap_or(0.0);
                self.performance_open = true;
                if self.scope != Scope::Session {
                    self.scope = Scope::Performance;
                }
            }
            TokenKind::Metadata => match value.split_once(':') {
                Some((key, val)) => {
                    self.metadata_in_scope().insert(key.trim(), val.trim());
                }
                None => self.diagnose(
                    line,
                    DiagnosticKind::MalformedMetadata {
                        value: value.to_owned(),
                    },
                ),
            },
            TokenKind::Movement | TokenKind::MovementSuperset => {
                if self.performance_open {
                    self.flush_performance();
                }
                self.performance_open = false;
                self.scope = Scope::Movement;

                let previous = std::mem::take(&mut self.movement);
                if previous.is_placeholder() {
                    self.movement = previous;
                } else {
                    self.session.push_movement(previous);
                }
                self.movement.name = value.to_owned();
                self.movement.is_superset = token.kind() == TokenKind::MovementSuperset;
            }
            TokenKind::Note => self.notes_in_scope().push(value.to_owned()),
            TokenKind::Reps => {
                if let Some(reps) = self.int_value(line, "reps", value) {
                    self.performance.reps = reps;
                }
            }
            TokenKind::Sets => {
                if let Some(sets) = self.int_value(line, "sets", value) {
                    self.performance.sets = sets;
                }
            }
            TokenKind::Unit => self.performance.unit = value.to_owned(),
            TokenKind::PercentOfMax => {
                if let Some(percent) = self.float_value(line, "percentOfMax", value) {
                    self.performance.percent_of_max = Some(percent);
                }
            }
            TokenKind::Comment => {}
        }

        self
    }

    /// Apply the end-of-stream rules and hand back the session.
    pub fn finish(mut self) -> Session {
        if self.performance.load != 0.0 {
            self.flush_performance();
        }
        if !self.movement.is_placeholder() {
            let movement = std::mem::take(&mut self.movement);
            self.session.push_movement(movement);
        }
        tracing::debug!(
            movements = self.session.movements.len(),
            errors = self.session.errors.len(),
            "built session"
        );
        self.session
    }

    fn flush_performance(&mut self) {
        let performance = std::mem::take(&mut self.performance);
        self.movement.push_performance(performance);
    }

    fn metadata_in_scope(&mut self) -> &mut Metadata {
        match self.scope {
            Scope::Session => &mut self.session.metadata,
            Scope::Performance => &mut self.performance.metadata,
            Scope::Movement => &mut self.movement.metadata,
        }
    }

    fn notes_in_scope(&mut self) -> &mut Vec<String> {
        match self.scope {
            Scope::Session => &mut self.session.notes,
            Scope::Performance => &mut self.performance.notes,
            Scope::Movement => &mut self.movement.notes,
        }
    }

    fn diagnose(&mut self, line: usize, kind: DiagnosticKind) {
        self.session.errors.push(Diagnostic::new(line, kind));
    }

    fn int_value(&mut self, line: usize, field: &str, value: &str) -> Option<i64> {
        match value.trim().parse::<i64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.diagnose(
                    line,
                    DiagnosticKind::InvalidInteger {
                        field: field.to_owned(),
                        value: value.to_owned(),
                    },
                );
                None
            }
        }
    }

    fn float_value(&mut self, line: usize, field: &str, value: &str) -> Option<f64> {
        match value.trim().parse::<f64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.diagnose(
                    line,
                    DiagnosticKind::InvalidFloat {
                        field: field.to_owned(),
                        value: value.to_owned(),
                    },
                );
                None
            }
        }
    }
}

/// Fold a token sequence into a session.
pub fn build_session<D: DateInterpreter>(tokens: &[Token], dates: &D) -> Session {
    tokens
        .iter()
        .fold(BuildState::new(), |state, token| state.apply(token, dates))
        .finish()
}
