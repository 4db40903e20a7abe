//! `cmdline` is a small declarative command line parser for Rust.
//!
//! Declare the options of your program as a list of [`ProgramOption`]s, hand over the command line, and get back an [`Arguments`] map from option keys to string values.
//! `cmdline` deliberately stays small:
//! * *Declarative*:
//! The whole Cli is described by a list of declarations; there are no callbacks or handlers.
//! * *Strings in, strings out*:
//! Every value is a string, and every declared key is present in the result (holding its default when not given).
//! Converting values to domain types is up to the caller.
//! * *Built-in help & version*:
//! Declaring `help` or `version` gives the program `-h, --help` and `-v, --version`, with a generated help message.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/rename.rs")]
//! ```
//!
//! ```console
//! $ rename -h
//! Usage: rename [OPTIONS] input output
//!        rename [-h | --help | -v | --version]
//!
//! Simple program to rename a file.
//!
//! Options:
//!
//!   -h, --help          print this help message
//!   -v, --version       print program version
//!   -o, --output        Output file name
//!   --verbose           Print more info about what is being done
//!
//! $ rename a.txt --verbose
//! Renaming file 'a.txt'
//! Output file: output.txt
//!
//! $ rename a.txt -x
//! Error: unknown option '-x'
//! Usage: rename [OPTIONS] input output
//! <truncated>
//! ```
//!
//! # Declarations
//! Each [`ProgramOption`] is one of:
//! * A *positional*: [`ProgramOption::new`] with a plain name (ex: `input`).
//! Bound by the bare (non `-`) token on the command line.
//! At most one positional may be declared; without a default it is mandatory.
//! * A *value-bearing flag*: [`ProgramOption::flags`] with flags and a name (ex: `["-o", "--output", "output"]`).
//! Takes the following token (`-o out.txt`) or an inline value (`-o=out.txt`), stored under its name.
//! * A *switch*: [`ProgramOption::flags`] with flags only (ex: `["--verbose"]`).
//! Stored under the flag as given, holding `"true"` when present.
//! * `help` / `version`: [`ProgramOption::new`] with the reserved names.
//! The second argument is the about message for the help page (or the version string).
//!
//! Declaration defects (ex: a duplicated flag, a description ending with a period) are reported as a [`ConfigError`] when the parser is built.
//!
//! # Resolution
//! Tokens are scanned left to right.
//! The first help or version flag wins over everything else on the command line, printing the help message or the version.
//! Both exit with code `0`.
//! The help and version flags are also keys of the result, holding the about message and the version string.
//! Unknown flags, missing values, surplus bare values, a repeated key, or a missing mandatory positional are a [`ParseError`]: the error is shown followed by the help message, and the exit code is `1`.
//!
//! There are three entry points, from least to most convenient:
//! * [`GeneralParser::resolve`]: returns the [`Outcome`], without printing or exiting.
//! * [`GeneralParser::parse_tokens`]: prints, and returns the exit code.
//! * [`GeneralParser::parse`] (or [`parse`]): prints, and exits the process.
//!
//! # Features
//! * `tracing_debug`: emit [tracing](https://docs.rs/tracing) debug events while building and running the parser.
pub use cmdline_builder::*;
