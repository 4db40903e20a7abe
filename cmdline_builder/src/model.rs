use crate::constant::*;
use crate::parser::ConfigError;

/// The role a [`ProgramOption`] plays during parsing.
///
/// The role is decided once, when the option is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `NAME`: a value supplied without a flag, bound by position.
    Positional,
    /// `-f VALUE`: a flag that consumes the following token.
    FlagValue,
    /// `-f`: a flag whose presence alone sets its key to `"true"`.
    Switch,
    /// `-h, --help`: prints the help message and exits with `0`.
    Help,
    /// `-v, --version`: prints the version and exits with `0`.
    Version,
}

/// A single option declaration.
///
/// Options are built via one of two constructors:
/// * [`ProgramOption::new`] takes a canonical name (a positional, or one of the reserved names `help`/`version`).
/// * [`ProgramOption::flags`] takes a list of aliases, of which at most one may be a plain (non `-`) name.
///
/// Declarations are checked when the parser is built (see [`CommandLineParser::build_parser`](crate::CommandLineParser::build_parser)).
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::{OptionKind, ProgramOption};
///
/// let input = ProgramOption::new("input", "Input file to rename");
/// let output = ProgramOption::flags(["-o", "--output", "output"], "Output file name")
///     .default("output.txt");
/// let verbose = ProgramOption::flags(["--verbose"], "Print more info");
///
/// assert_eq!(input.kind(), OptionKind::Positional);
/// assert_eq!(output.kind(), OptionKind::FlagValue);
/// assert_eq!(output.name(), "output");
/// assert_eq!(verbose.kind(), OptionKind::Switch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOption {
    kind: OptionKind,
    name: String,
    flags: Vec<String>,
    description: String,
    default_value: String,
    explicit_default: bool,
    // Plain tokens beyond the first given to `flags`; always a declaration defect.
    extra_names: Vec<String>,
}

impl ProgramOption {
    /// Declare an option by its canonical name.
    ///
    /// The names `help` and `version` are reserved.
    /// For these, `description` is the about message or version string respectively, and the flags are fixed to `-h, --help` or `-v, --version`.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::{OptionKind, ProgramOption};
    ///
    /// let help = ProgramOption::new("help", "Simple program to rename a file");
    /// assert_eq!(help.kind(), OptionKind::Help);
    /// assert_eq!(help.flag_aliases(), ["-h", "--help"]);
    /// assert_eq!(help.default_value(), "Simple program to rename a file");
    /// ```
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let description = description.into();

        let (kind, flags, description, default_value) = match name.as_str() {
            HELP_NAME => (
                OptionKind::Help,
                to_strings(&HELP_FLAGS),
                HELP_DESCRIPTION.to_string(),
                description,
            ),
            VERSION_NAME => (
                OptionKind::Version,
                to_strings(&VERSION_FLAGS),
                VERSION_DESCRIPTION.to_string(),
                description,
            ),
            _ => (
                OptionKind::Positional,
                Vec::default(),
                description,
                String::default(),
            ),
        };

        Self {
            kind,
            name,
            flags,
            description,
            default_value,
            explicit_default: false,
            extra_names: Vec::default(),
        }
    }

    /// Declare an option by its flag aliases.
    ///
    /// Aliases starting with `-` are flags.
    /// At most one alias may be a plain name; when present the option takes a value (`-o VALUE`) which is stored under that name.
    /// Without a plain name, the option is a switch whose presence stores `"true"` under the flag that was used.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::{OptionKind, ProgramOption};
    ///
    /// let quiet = ProgramOption::flags(["-q", "--quiet"], "Print nothing").default("false");
    /// assert_eq!(quiet.kind(), OptionKind::Switch);
    /// assert_eq!(quiet.name(), "");
    /// assert_eq!(quiet.default_value(), "false");
    /// ```
    pub fn flags<I, S>(aliases: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut name = String::default();
        let mut flags = Vec::default();
        let mut extra_names = Vec::default();

        for alias in aliases.into_iter().map(Into::into) {
            if alias.starts_with(FLAG_PREFIX) {
                flags.push(alias);
            } else if name.is_empty() {
                name = alias;
            } else {
                extra_names.push(alias);
            }
        }

        let kind = match (name.is_empty(), flags.is_empty()) {
            (true, _) => OptionKind::Switch,
            (false, true) => OptionKind::Positional,
            (false, false) => OptionKind::FlagValue,
        };

        Self {
            kind,
            name,
            flags,
            description: description.into(),
            default_value: String::default(),
            explicit_default: false,
            extra_names,
        }
    }

    /// Set the default value, used when the option is not given on the command line.
    /// A positional with a non-empty default is no longer mandatory.
    ///
    /// Not allowed on the reserved `help` and `version` options.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self.explicit_default = true;
        self
    }

    /// The role of this option.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// The canonical name (empty for switches).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The flag aliases, in declaration order.
    pub fn flag_aliases(&self) -> &[String] {
        &self.flags
    }

    /// The description shown in the help message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The default value.
    /// For `help` this is the about message, and for `version` the version string.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub(crate) fn is_reserved(&self) -> bool {
        matches!(self.kind, OptionKind::Help | OptionKind::Version)
    }

    /// How this option is named in error messages.
    pub(crate) fn identity(&self) -> String {
        if self.name.is_empty() {
            self.flags.join(", ")
        } else {
            self.name.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.is_reserved() {
            if self.explicit_default {
                return Err(ConfigError::ReservedDefault(self.name.clone()));
            }

            if self.default_value.ends_with('.') {
                return Err(ConfigError::TrailingPeriod(self.name.clone()));
            }

            return Ok(());
        }

        if self.name.is_empty() && self.flags.is_empty() {
            return Err(ConfigError::Anonymous(self.description.clone()));
        }

        if let Some(second) = self.extra_names.first() {
            return Err(ConfigError::MultipleNames {
                first: self.name.clone(),
                second: second.clone(),
            });
        }

        if self.name == HELP_NAME || self.name == VERSION_NAME {
            return Err(ConfigError::ReservedName(self.name.clone()));
        }

        if self.name.starts_with(FLAG_PREFIX) {
            return Err(ConfigError::InvalidName(self.name.clone()));
        }

        if let Some(flag) = self
            .flags
            .iter()
            .find(|f| f.len() < 2 || f.contains(INLINE_SEPARATOR))
        {
            return Err(ConfigError::InvalidFlag(flag.clone()));
        }

        if self.description.is_empty() {
            return Err(ConfigError::EmptyDescription(self.identity()));
        }

        if self.description.ends_with('.') {
            return Err(ConfigError::TrailingPeriod(self.identity()));
        }

        Ok(())
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_positional() {
        let option = ProgramOption::new("input", "Input file");

        assert_eq!(option.kind(), OptionKind::Positional);
        assert_eq!(option.name(), "input");
        assert!(option.flag_aliases().is_empty());
        assert_eq!(option.description(), "Input file");
        assert_eq!(option.default_value(), "");
        option.validate().unwrap();
    }

    #[rstest]
    #[case("help", OptionKind::Help, ["-h", "--help"], "print this help message")]
    #[case("version", OptionKind::Version, ["-v", "--version"], "print program version")]
    fn new_reserved(
        #[case] name: &str,
        #[case] expected_kind: OptionKind,
        #[case] expected_flags: [&str; 2],
        #[case] expected_description: &str,
    ) {
        let option = ProgramOption::new(name, "text for the slot");

        assert_eq!(option.kind(), expected_kind);
        assert_eq!(option.name(), name);
        assert_eq!(option.flag_aliases(), expected_flags);
        assert_eq!(option.description(), expected_description);
        assert_eq!(option.default_value(), "text for the slot");
        assert!(option.is_reserved());
        option.validate().unwrap();
    }

    #[rstest]
    #[case(vec!["-o", "--output"], OptionKind::Switch, "", vec!["-o", "--output"])]
    #[case(vec!["--verbose"], OptionKind::Switch, "", vec!["--verbose"])]
    #[case(vec!["-o", "output"], OptionKind::FlagValue, "output", vec!["-o"])]
    #[case(vec!["output", "-o", "--output"], OptionKind::FlagValue, "output", vec!["-o", "--output"])]
    #[case(vec!["output"], OptionKind::Positional, "output", vec![])]
    fn flags(
        #[case] aliases: Vec<&str>,
        #[case] expected_kind: OptionKind,
        #[case] expected_name: &str,
        #[case] expected_flags: Vec<&str>,
    ) {
        let option = ProgramOption::flags(aliases, "Something");

        assert_eq!(option.kind(), expected_kind);
        assert_eq!(option.name(), expected_name);
        assert_eq!(option.flag_aliases(), expected_flags);
        option.validate().unwrap();
    }

    #[test]
    fn default() {
        let option = ProgramOption::flags(["-o", "output"], "Output file").default("out.txt");
        assert_eq!(option.default_value(), "out.txt");
        option.validate().unwrap();

        let option = ProgramOption::new("input", "Input file").default("in.txt");
        assert_eq!(option.kind(), OptionKind::Positional);
        assert_eq!(option.default_value(), "in.txt");
        option.validate().unwrap();
    }

    #[rstest]
    #[case(ProgramOption::new("input", ""), ConfigError::EmptyDescription("input".to_string()))]
    #[case(ProgramOption::flags(["-q", "--quiet"], ""), ConfigError::EmptyDescription("-q, --quiet".to_string()))]
    #[case(ProgramOption::new("input", "Input file."), ConfigError::TrailingPeriod("input".to_string()))]
    #[case(ProgramOption::new("help", "About my program."), ConfigError::TrailingPeriod("help".to_string()))]
    #[case(ProgramOption::new("help", "About").default("x"), ConfigError::ReservedDefault("help".to_string()))]
    #[case(ProgramOption::new("version", "1.0").default(""), ConfigError::ReservedDefault("version".to_string()))]
    #[case(ProgramOption::flags(["-x", "help"], "Something"), ConfigError::ReservedName("help".to_string()))]
    #[case(ProgramOption::flags(["a", "-x", "b"], "Something"), ConfigError::MultipleNames { first: "a".to_string(), second: "b".to_string() })]
    #[case(ProgramOption::new("", "Something"), ConfigError::Anonymous("Something".to_string()))]
    #[case(ProgramOption::flags(Vec::<String>::new(), "Something"), ConfigError::Anonymous("Something".to_string()))]
    #[case(ProgramOption::new("-x", "Something"), ConfigError::InvalidName("-x".to_string()))]
    #[case(ProgramOption::flags(["-"], "Something"), ConfigError::InvalidFlag("-".to_string()))]
    #[case(ProgramOption::flags(["--a=b"], "Something"), ConfigError::InvalidFlag("--a=b".to_string()))]
    fn validate_invalid(#[case] option: ProgramOption, #[case] expected: ConfigError) {
        assert_eq!(option.validate().unwrap_err(), expected);
    }

    #[test]
    fn validate_reserved_empty() {
        ProgramOption::new("help", "").validate().unwrap();
        ProgramOption::new("version", "").validate().unwrap();
    }
}
