mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError};
pub use middleware::{GeneralParser, Outcome};
pub use printer::{program_name, HelpStyle};

pub(crate) use base::Parser;
pub(crate) use interface::*;
pub(crate) use middleware::exit;
pub(crate) use printer::Printer;
