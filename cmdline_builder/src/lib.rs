//! Builder module for `cmdline`.
//! See [documentation root](https://docs.rs/cmdline/latest/cmdline/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{program_name, ConfigError, GeneralParser, HelpStyle, Outcome, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
