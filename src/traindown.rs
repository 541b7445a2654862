//! Main module for traindown library functionality

pub mod ast;
pub mod config;
pub mod dates;
pub mod error;
pub mod lexing;
pub mod parsing;
pub mod token;
