use std::env;
use std::io::Write;

use crate::api::Arguments;
use crate::model::ProgramOption;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

/// Why a parse stopped before producing [`Arguments`].
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The help flag was given; holds the rendered help message.
    Help(String),
    /// The version flag was given; holds the version string.
    Version(String),
    /// The command line was rejected; holds the error and the rendered help message.
    Failure {
        /// What was wrong with the command line.
        error: ParseError,
        /// The help message, shown after the error.
        usage: String,
    },
}

impl Outcome {
    /// The process exit code for this outcome: `0` for help/version, `1` for a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Help(_) | Outcome::Version(_) => 0,
            Outcome::Failure { .. } => 1,
        }
    }
}

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
pub struct GeneralParser {
    parser: Parser,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl GeneralParser {
    pub(crate) fn new(
        parser: Parser,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    /// The declarations this parser was built from.
    pub fn options(&self) -> &[ProgramOption] {
        self.parser.options()
    }

    /// The result of parsing a command line without any tokens (aside from the program).
    /// Mandatory positionals hold the empty string.
    pub fn defaults(&self) -> &Arguments {
        self.parser.defaults()
    }

    /// Render the help message for the program invoked as `argv0`.
    pub fn help(&self, argv0: &str) -> String {
        self.printer
            .render_help(argv0, self.parser.options())
            .join("\n")
    }

    /// Resolve the command line without printing or exiting.
    ///
    /// The first element of `argv` is the program invocation path, the rest are the tokens to parse.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::{CommandLineParser, Outcome, ParseError, ProgramOption};
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(ProgramOption::new("input", "Input file"))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// let outcome = parser.resolve(&["program", "-x"]).unwrap_err();
    /// assert_eq!(outcome.exit_code(), 1);
    /// assert!(matches!(outcome, Outcome::Failure { error: ParseError::UnknownOption(_), .. }));
    /// ```
    pub fn resolve(&self, argv: &[&str]) -> Result<Arguments, Outcome> {
        let (argv0, tokens) = match argv.split_first() {
            Some((argv0, tokens)) => (*argv0, tokens),
            None => ("", argv),
        };

        match self.parser.consume(tokens) {
            Ok(Action::Complete(arguments)) => Ok(arguments),
            Ok(Action::PrintHelp) => Err(Outcome::Help(self.help(argv0))),
            Ok(Action::PrintVersion(version)) => Err(Outcome::Version(version)),
            Err(error) => Err(Outcome::Failure {
                error,
                usage: self.help(argv0),
            }),
        }
    }

    /// Run the command line parser against the input `argv`.
    ///
    /// The first element of `argv` is the program invocation path, the rest are the tokens to parse.
    /// Tokens are scanned left to right: flags are looked up by name, bare values bind to the positional.
    ///
    /// If the command line is rejected (ex: an unknown flag, a missing value, etc), the error is written to stderr followed by the help message on stdout, and it returns with `Err(1)`.
    ///
    /// If the help flag (`-h` or `--help`) is encountered, the parser will display the help message and return with `Err(0)`.
    /// If the version flag (`-v` or `--version`) is encountered, the parser will display the version and return with `Err(0)`.
    pub fn parse_tokens(&self, argv: &[&str]) -> Result<Arguments, i32> {
        self.resolve(argv).map_err(|outcome| {
            let exit_code = outcome.exit_code();

            match outcome {
                Outcome::Help(usage) => self.user_interface.print(usage),
                Outcome::Version(version) => self.user_interface.print(version),
                Outcome::Failure { error, usage } => {
                    self.user_interface.print_error(error);
                    self.user_interface.print(usage);
                }
            }

            exit_code
        })
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves like [`GeneralParser::parse_tokens`], except the process exits (via `std::process::exit`) rather than returning an exit code.
    pub fn parse(self) -> Arguments {
        let argv: Vec<String> = env::args().collect();

        match self.parse_tokens(
            argv.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(arguments) => arguments,
            Err(exit_code) => exit(exit_code),
        }
    }
}

/// Flush stdout, then exit the process with `exit_code`.
pub(crate) fn exit(exit_code: i32) -> ! {
    let _ = std::io::stdout().flush();
    std::process::exit(exit_code)
}
