use terminal_size::{terminal_size, Width};

use crate::model::{OptionKind, ProgramOption};
use crate::parser::{ColumnRenderer, LeftWidth, TotalWidth};

/// The layout of the help message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HelpStyle {
    /// ```console
    /// Usage: rename [OPTIONS] input
    ///        rename [-h | --help | -v | --version]
    ///
    /// Simple program to rename a file.
    ///
    /// Options:
    ///
    ///   -o, --output        Output file name
    /// ```
    #[default]
    Unix,
    /// ```console
    /// Simple program to rename a file.
    ///
    /// rename [--verbose] input
    ///
    ///   -o, --output
    ///         Output file name
    /// ```
    Windows,
}

const FLAGS_INDENT: usize = 2;
const FLAGS_WIDTH: usize = 20;
const DESCRIPTION_INDENT: usize = 8;

/// Extract the program name from its invocation path (`argv[0]`).
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::program_name;
///
/// assert_eq!(program_name("/usr/local/bin/rename"), "rename");
/// assert_eq!(program_name("rename"), "rename");
/// ```
pub fn program_name(argv0: &str) -> &str {
    let separator = |c: char| c == '/' || (cfg!(windows) && c == '\\');

    match argv0.rfind(separator) {
        // Both separators are a single byte.
        Some(i) => &argv0[i + 1..],
        None => argv0,
    }
}

pub(crate) struct Printer {
    style: HelpStyle,
    terminal_width: Option<usize>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(HelpStyle::Unix, None)
    }

    pub(crate) fn terminal(style: HelpStyle) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(style, terminal_width)
    }

    pub(crate) fn new(style: HelpStyle, terminal_width: Option<usize>) -> Self {
        Self {
            style,
            terminal_width,
        }
    }

    /// Render the help message, one entry per line.
    pub(crate) fn render_help(&self, argv0: &str, options: &[ProgramOption]) -> Vec<String> {
        let program = program_name(argv0);

        match self.style {
            HelpStyle::Unix => self.render_unix(program, options),
            HelpStyle::Windows => self.render_windows(program, options),
        }
    }

    fn render_unix(&self, program: &str, options: &[ProgramOption]) -> Vec<String> {
        let mut about = "";
        let mut named = String::default();
        let mut reserved: Vec<&str> = Vec::default();

        for option in options {
            match option.kind() {
                OptionKind::Help => {
                    about = option.default_value();
                    reserved.extend(option.flag_aliases().iter().map(String::as_str));
                }
                OptionKind::Version => {
                    reserved.extend(option.flag_aliases().iter().map(String::as_str));
                }
                _ if !option.name().is_empty() => {
                    named.push(' ');
                    named.push_str(option.name());
                }
                _ => {}
            }
        }

        let mut lines = vec![format!("Usage: {program} [OPTIONS]{named}")];

        if !reserved.is_empty() {
            lines.push(format!("       {program} [{}]", reserved.join(" | ")));
        }

        lines.push(String::default());

        if !about.is_empty() {
            lines.push(format!("{about}."));
            lines.push(String::default());
        }

        lines.push("Options:".to_string());
        lines.push(String::default());

        let column_renderer = ColumnRenderer::new(
            FLAGS_INDENT,
            LeftWidth(FLAGS_WIDTH),
            self.terminal_width.map(TotalWidth),
        );

        for option in options.iter().filter(|o| !o.flag_aliases().is_empty()) {
            lines.extend(column_renderer.render(&option.flag_aliases().join(", "), option.description()));
        }

        lines.push(String::default());
        lines
    }

    fn render_windows(&self, program: &str, options: &[ProgramOption]) -> Vec<String> {
        let mut about = "";
        let mut switches = String::default();
        let mut named = String::default();

        for option in options {
            match option.kind() {
                OptionKind::Help => about = option.default_value(),
                OptionKind::Version => {}
                OptionKind::Switch => {
                    if let Some(first) = option.flag_aliases().first() {
                        switches.push_str(&format!(" [{first}]"));
                    }
                }
                OptionKind::Positional | OptionKind::FlagValue => {
                    named.push(' ');
                    named.push_str(option.name());
                }
            }
        }

        let mut lines = Vec::default();

        if !about.is_empty() {
            lines.push(format!("{about}."));
        }

        lines.push(String::default());
        lines.push(format!("{program}{switches}{named}"));
        lines.push(String::default());

        let column_renderer = ColumnRenderer::new(
            0,
            LeftWidth(DESCRIPTION_INDENT),
            self.terminal_width.map(TotalWidth),
        );

        for option in options.iter().filter(|o| !o.flag_aliases().is_empty()) {
            lines.push(format!(
                "{:indent$}{}",
                "",
                option.flag_aliases().join(", "),
                indent = FLAGS_INDENT
            ));
            lines.extend(column_renderer.render("", option.description()));
        }

        lines.push(String::default());
        lines
    }
}
