use std::collections::{HashMap, HashSet};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Arguments;
use crate::constant::*;
use crate::model::{OptionKind, ProgramOption};
use crate::parser::ConfigError;

/// A single command line token, classified by its shape.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `-f` or `-f=VALUE`.
    Flag {
        flag: &'t str,
        inline: Option<&'t str>,
    },
    /// Anything not starting with `-`.
    Value(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        if !is_flag(token) {
            return Token::Value(token);
        }

        // Only the first '=' separates; the rest belongs to the value.
        match token.split_once(INLINE_SEPARATOR) {
            Some((flag, inline)) => Token::Flag {
                flag,
                inline: Some(inline),
            },
            None => Token::Flag {
                flag: token,
                inline: None,
            },
        }
    }
}

pub(crate) fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// Maps each flag alias to the position of its declaration.
#[derive(Debug, Default)]
pub(crate) struct FlagIndex {
    flags: HashMap<String, usize>,
}

impl FlagIndex {
    /// Index the declarations by flag, seed the defaults, and locate the (single) positional.
    pub(crate) fn build(
        options: &[ProgramOption],
    ) -> Result<(FlagIndex, Arguments, Option<usize>), ConfigError> {
        let mut index = FlagIndex::default();
        let mut defaults = Arguments::default();
        let mut names: HashSet<&str> = HashSet::default();
        let mut positional: Option<usize> = None;

        for (i, option) in options.iter().enumerate() {
            // Reserved aliases hold the about message or version string.
            for flag in option.flag_aliases() {
                index.insert(flag, i)?;
                defaults.insert(flag.clone(), option.default_value().to_string());
            }

            if option.is_reserved() {
                continue;
            }

            if !option.name().is_empty() {
                if !names.insert(option.name()) {
                    return Err(ConfigError::DuplicateName(option.name().to_string()));
                }

                defaults.insert(option.name().to_string(), option.default_value().to_string());
            }

            if option.kind() == OptionKind::Positional {
                if let Some(first) = positional.replace(i) {
                    return Err(ConfigError::MultiplePositionals {
                        first: options[first].name().to_string(),
                        second: option.name().to_string(),
                    });
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Indexed {} flags, seeded {} defaults, positional: {positional:?}.",
                index.flags.len(),
                defaults.len()
            );
        }

        Ok((index, defaults, positional))
    }

    fn insert(&mut self, flag: &str, position: usize) -> Result<(), ConfigError> {
        if self.flags.insert(flag.to_string(), position).is_some() {
            return Err(ConfigError::DuplicateFlag(flag.to_string()));
        }

        Ok(())
    }

    pub(crate) fn find(&self, flag: &str) -> Option<usize> {
        self.flags.get(flag).copied()
    }
}
