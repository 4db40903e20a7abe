use crate::api::Arguments;
use crate::model::ProgramOption;
use crate::parser::{
    exit, ConfigError, ConsoleInterface, GeneralParser, HelpStyle, Parser, Printer,
    UserInterface,
};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::CommandLineParser;
///
/// let parser = CommandLineParser::new()
///     // Configure with CommandLineParser::add.
///     .build();
/// parser.parse_tokens(&["program"]).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CommandLineParser {
    options: Vec<ProgramOption>,
    style: HelpStyle,
}

impl CommandLineParser {
    /// Create a command line parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option declaration to the command line parser.
    ///
    /// The order of declarations is the order of the help message.
    /// It does not affect the parsing semantics.
    ///
    /// ### Example
    /// ```
    /// # use cmdline_builder as cmdline;
    /// use cmdline::{CommandLineParser, ProgramOption};
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(ProgramOption::new("input", "Input file to rename"))
    ///     .add(ProgramOption::flags(["-o", "--output", "output"], "Output file name").default("output.txt"))
    ///     .build();
    ///
    /// let arguments = parser.parse_tokens(&["program", "-o", "b.txt", "a.txt"]).unwrap();
    ///
    /// assert_eq!(&arguments["input"], "a.txt");
    /// assert_eq!(&arguments["output"], "b.txt");
    /// ```
    pub fn add(mut self, option: ProgramOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add several option declarations at once, in order.
    pub fn extend(mut self, options: impl IntoIterator<Item = ProgramOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Choose the layout of the help message.
    /// If repeated, only the final style will apply.
    pub fn style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, ConfigError> {
        let parser = Parser::new(self.options)?;
        Ok(GeneralParser::new(
            parser,
            Printer::terminal(self.style),
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated flag).
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated flag).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                exit(1)
            }
        }
    }
}

/// Parse `argv` against the `options` in one call.
///
/// The first element of `argv` is the program invocation path.
/// Exits the process on a declaration defect (`1`), a rejected command line (`1`), or a help/version request (`0`).
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::ProgramOption;
///
/// let arguments = cmdline::parse(
///     &["rename", "a.txt", "--verbose"],
///     [
///         ProgramOption::new("help", "Simple program to rename a file"),
///         ProgramOption::new("version", "1.0"),
///         ProgramOption::new("input", "Input file to rename"),
///         ProgramOption::flags(["-o", "--output", "output"], "Output file name").default("output.txt"),
///         ProgramOption::flags(["--verbose"], "Print more info about what is being done"),
///     ],
/// );
///
/// assert_eq!(&arguments["input"], "a.txt");
/// assert_eq!(&arguments["output"], "output.txt");
/// assert!(arguments.is_set("--verbose"));
/// ```
pub fn parse<S: AsRef<str>>(
    argv: &[S],
    options: impl IntoIterator<Item = ProgramOption>,
) -> Arguments {
    let parser = CommandLineParser::new().extend(options).build();
    let argv: Vec<&str> = argv.iter().map(AsRef::as_ref).collect();

    match parser.parse_tokens(argv.as_slice()) {
        Ok(arguments) => arguments,
        Err(exit_code) => exit(exit_code),
    }
}
