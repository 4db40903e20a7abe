use std::collections::HashSet;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Arguments;
use crate::constant::*;
use crate::matcher::*;
use crate::model::{OptionKind, ProgramOption};

/// A defect in the option declarations.
///
/// These are programming errors, detected when the parser is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A non-reserved option without a description.
    #[error("Config error: option '{0}' requires a description.")]
    EmptyDescription(String),

    /// A description (or about message) ending with `.`; the period is added when printing.
    #[error("Config error: the description of '{0}' must not end with a period.")]
    TrailingPeriod(String),

    /// A default value on `help` or `version`.
    #[error("Config error: reserved option '{0}' cannot take a default value.")]
    ReservedDefault(String),

    /// `help` or `version` given as an alias to [`ProgramOption::flags`](crate::ProgramOption::flags).
    #[error("Config error: '{0}' is reserved and can only be declared by name.")]
    ReservedName(String),

    /// More than one plain (non `-`) alias.
    #[error("Config error: option cannot have multiple names ('{first}' and '{second}').")]
    MultipleNames {
        /// The name which was kept.
        first: String,
        /// The name which was rejected.
        second: String,
    },

    /// Neither a name nor a flag.
    #[error("Config error: option '{0}' needs a name or at least one flag.")]
    Anonymous(String),

    /// A name that looks like a flag.
    #[error("Config error: name '{0}' cannot start with '-'.")]
    InvalidName(String),

    /// A flag which can never be matched (ex: `-` or `--key=value`).
    #[error("Config error: invalid flag '{0}'.")]
    InvalidFlag(String),

    /// The same flag declared twice.
    #[error("Config error: cannot duplicate the flag '{0}'.")]
    DuplicateFlag(String),

    /// The same name declared twice.
    #[error("Config error: cannot duplicate the name '{0}'.")]
    DuplicateName(String),

    /// More than one positional.
    #[error("Config error: only one positional is supported ('{first}' and '{second}').")]
    MultiplePositionals {
        /// The positional declared first.
        first: String,
        /// The positional declared second.
        second: String,
    },
}

/// A rejected command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag that was not declared.
    #[error("Error: unknown option '{0}'")]
    UnknownOption(String),

    /// A value-bearing flag at the end of the command line, or followed by another flag.
    #[error("Error: missing value for option '{flag}' ({description}).")]
    MissingValue {
        /// The flag as given.
        flag: String,
        /// The description of its option.
        description: String,
    },

    /// A bare value with no positional left to bind to.
    #[error("Error: unexpected value '{0}'.")]
    UnexpectedValue(String),

    /// The mandatory positional was never given.
    #[error("Error: missing '{name}' value ({description}).")]
    MissingPositional {
        /// The positional's name.
        name: String,
        /// The positional's description.
        description: String,
    },

    /// The same key given twice.
    #[error("Error: option '{0}' was specified more than once.")]
    Repeated(String),
}

pub(crate) struct Parser {
    options: Vec<ProgramOption>,
    index: FlagIndex,
    defaults: Arguments,
    positional: Option<usize>,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl Parser {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default()).unwrap()
    }

    pub(crate) fn new(options: Vec<ProgramOption>) -> Result<Self, ConfigError> {
        for option in &options {
            option.validate()?;
        }

        let (index, defaults, positional) = FlagIndex::build(&options)?;

        Ok(Self {
            options,
            index,
            defaults,
            positional,
        })
    }

    pub(crate) fn options(&self) -> &[ProgramOption] {
        &self.options
    }

    pub(crate) fn defaults(&self) -> &Arguments {
        &self.defaults
    }

    fn lookup(&self, flag: &str) -> Option<&ProgramOption> {
        self.index.find(flag).map(|i| &self.options[i])
    }

    fn reserved(&self, token: &str) -> Option<&ProgramOption> {
        match Token::classify(token) {
            Token::Flag { flag, .. } => self.lookup(flag).filter(|option| option.is_reserved()),
            Token::Value(_) => None,
        }
    }

    /// Scan the tokens (program name excluded) against the declarations.
    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<Action, ParseError> {
        // The first help or version flag wins over anything else on the command line, valid or not.
        if let Some(option) = tokens.iter().find_map(|token| self.reserved(token)) {
            return match option.kind() {
                OptionKind::Help => Ok(Action::PrintHelp),
                OptionKind::Version => Ok(Action::PrintVersion(option.default_value().to_string())),
                _ => unreachable!("internal error - only reserved options are early exits"),
            };
        }

        let mut scan = Scan::new(
            self.defaults.clone(),
            self.positional.map(|i| &self.options[i]),
        );
        let mut position = 0;

        while position < tokens.len() {
            let token = tokens[position];
            position += 1;

            match Token::classify(token) {
                Token::Flag { flag, inline } => {
                    let option = self
                        .lookup(flag)
                        .ok_or_else(|| ParseError::UnknownOption(flag.to_string()))?;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' matched {:?} '{}'.", option.kind(), option.identity());
                    }

                    match option.kind() {
                        OptionKind::Help | OptionKind::Version => {
                            unreachable!("internal error - reserved flags are checked before scanning")
                        }
                        OptionKind::FlagValue => {
                            let value = match inline {
                                Some(value) => value,
                                None => match tokens.get(position) {
                                    Some(next) if !is_flag(next) => {
                                        position += 1;
                                        *next
                                    }
                                    _ => {
                                        return Err(ParseError::MissingValue {
                                            flag: flag.to_string(),
                                            description: option.description().to_string(),
                                        });
                                    }
                                },
                            };
                            scan.assign(option.name(), value)?;
                        }
                        OptionKind::Switch => {
                            scan.assign(flag, inline.unwrap_or(SWITCH_VALUE))?;
                        }
                        OptionKind::Positional => {
                            unreachable!("internal error - positionals are never indexed by flag")
                        }
                    }
                }
                Token::Value(value) => match scan.pending.take() {
                    Some(positional) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Token '{value}' bound to positional '{}'.", positional.name());
                        }

                        scan.assign(positional.name(), value)?;
                    }
                    None => return Err(ParseError::UnexpectedValue(value.to_string())),
                },
            }
        }

        scan.finish().map(Action::Complete)
    }
}

/// The accumulator threaded through a single scan.
struct Scan<'p> {
    arguments: Arguments,
    assigned: HashSet<String>,
    // The positional still waiting for a bare token.
    pending: Option<&'p ProgramOption>,
}

impl<'p> Scan<'p> {
    fn new(defaults: Arguments, positional: Option<&'p ProgramOption>) -> Self {
        Self {
            arguments: defaults,
            assigned: HashSet::default(),
            pending: positional,
        }
    }

    fn assign(&mut self, key: &str, value: &str) -> Result<(), ParseError> {
        if !self.assigned.insert(key.to_string()) {
            return Err(ParseError::Repeated(key.to_string()));
        }

        self.arguments.insert(key, value);
        Ok(())
    }

    fn finish(self) -> Result<Arguments, ParseError> {
        match self.pending {
            Some(positional) if positional.default_value().is_empty() => {
                Err(ParseError::MissingPositional {
                    name: positional.name().to_string(),
                    description: positional.description().to_string(),
                })
            }
            _ => Ok(self.arguments),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Complete(Arguments),
    PrintHelp,
    PrintVersion(String),
}
