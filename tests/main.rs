use cmdline::{
    CommandLineParser, ConfigError, GeneralParser, Outcome, ParseError, ProgramOption,
};
use rstest::rstest;
use std::collections::BTreeSet;

fn rename_options() -> Vec<ProgramOption> {
    vec![
        ProgramOption::new("help", "Simple program to rename a file"),
        ProgramOption::new("version", "1.0"),
        ProgramOption::new("input", "Input file to rename"),
        ProgramOption::flags(["-o", "--output", "output"], "Output file name")
            .default("output.txt"),
        ProgramOption::flags(["--verbose"], "Print more info about what is being done")
            .default("false"),
    ]
}

fn rename_parser() -> GeneralParser {
    CommandLineParser::new()
        .extend(rename_options())
        .build_parser()
        .unwrap()
}

#[test]
fn builder_compiles() {
    CommandLineParser::new().build();
}

#[rstest]
#[case(vec![])]
#[case(vec![ProgramOption::new("input", "Input")])]
#[case(vec![
    ProgramOption::new("input", "Input"),
    ProgramOption::flags(["-a", "--all"], "All"),
    ProgramOption::flags(["-n", "count"], "Count").default("1"),
])]
fn construction_succeeds(#[case] options: Vec<ProgramOption>) {
    let parser = CommandLineParser::new()
        .extend(options.clone())
        .build_parser()
        .unwrap();

    assert_eq!(parser.options(), options.as_slice());
}

#[rstest]
#[case(vec![
    ProgramOption::new("first", "First"),
    ProgramOption::new("second", "Second"),
])]
#[case(vec![
    ProgramOption::flags(["-a"], "A"),
    ProgramOption::flags(["-b", "-a"], "B"),
])]
fn construction_fails(#[case] options: Vec<ProgramOption>) {
    let result = CommandLineParser::new().extend(options).build_parser();

    assert!(matches!(
        result,
        Err(ConfigError::MultiplePositionals { .. }) | Err(ConfigError::DuplicateFlag(_))
    ));
}

#[test]
fn no_tokens_gives_defaults() {
    let parser = CommandLineParser::new()
        .add(ProgramOption::new("input", "Input").default("-"))
        .add(ProgramOption::flags(["-o", "output"], "Output").default("out.txt"))
        .add(ProgramOption::flags(["--verbose"], "Verbose").default("false"))
        .build_parser()
        .unwrap();

    let arguments = parser.resolve(&["program"]).unwrap();

    assert_eq!(&arguments, parser.defaults());
    assert_eq!(&arguments["input"], "-");
    assert_eq!(&arguments["output"], "out.txt");
    assert_eq!(&arguments["-o"], "out.txt");
    assert_eq!(&arguments["--verbose"], "false");
}

#[rstest]
#[case(vec!["rename", "a.txt", "-o", "out.txt"], "out.txt", "false")]
#[case(vec!["rename", "-o", "out.txt", "a.txt"], "out.txt", "false")]
#[case(vec!["rename", "--output=out.txt", "a.txt"], "out.txt", "false")]
#[case(vec!["rename", "a.txt"], "output.txt", "false")]
#[case(vec!["rename", "--verbose", "a.txt"], "output.txt", "true")]
fn flag_value_and_switch(
    #[case] argv: Vec<&str>,
    #[case] expected_output: &str,
    #[case] expected_verbose: &str,
) {
    let arguments = rename_parser().parse_tokens(argv.as_slice()).unwrap();

    assert_eq!(&arguments["input"], "a.txt");
    assert_eq!(&arguments["output"], expected_output);
    assert_eq!(&arguments["--verbose"], expected_verbose);
}

#[test]
fn missing_positional() {
    let outcome = rename_parser().resolve(&["rename"]).unwrap_err();

    assert_eq!(outcome.exit_code(), 1);
    match outcome {
        Outcome::Failure { error, usage } => {
            assert!(error.to_string().contains("input"));
            assert!(usage.starts_with("Usage: rename [OPTIONS] input output\n"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn second_bare_token() {
    let parser = rename_parser();

    let outcome = parser.resolve(&["rename", "a.txt", "b.txt"]).unwrap_err();

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(
        outcome,
        Outcome::Failure { error: ParseError::UnexpectedValue(ref value), .. } if value == "b.txt"
    ));
    assert_eq!(parser.parse_tokens(&["rename", "a.txt", "b.txt"]), Err(1));
}

#[rstest]
#[case(vec!["rename", "--help"])]
#[case(vec!["rename", "-h", "a.txt"])]
#[case(vec!["rename", "-x", "--help"])]
#[case(vec!["rename", "a.txt", "b.txt", "-o", "-h"])]
fn help_wins(#[case] argv: Vec<&str>) {
    let outcome = rename_parser().resolve(argv.as_slice()).unwrap_err();

    assert_eq!(outcome.exit_code(), 0);
    match outcome {
        Outcome::Help(message) => {
            assert!(message.starts_with("Usage: rename [OPTIONS] input output\n"));
            assert!(message.contains("Simple program to rename a file.\n"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn version() {
    let parser = rename_parser();

    let outcome = parser.resolve(&["rename", "a.txt", "--version"]).unwrap_err();

    assert_eq!(outcome, Outcome::Version("1.0".to_string()));
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(parser.parse_tokens(&["rename", "-v"]), Err(0));
}

#[rstest]
#[case(vec!["rename", "-x"], "-x")]
#[case(vec!["rename", "a.txt", "--missing=value"], "--missing")]
fn unknown_option(#[case] argv: Vec<&str>, #[case] expected: &str) {
    let parser = rename_parser();

    let outcome = parser.resolve(argv.as_slice()).unwrap_err();

    assert_eq!(outcome.exit_code(), 1);
    match outcome {
        Outcome::Failure { error, .. } => {
            assert_eq!(error, ParseError::UnknownOption(expected.to_string()));
            assert!(error.to_string().contains("unknown option"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(parser.parse_tokens(argv.as_slice()), Err(1));
}

#[rstest]
#[case(vec!["rename", "a.txt", "-o"])]
#[case(vec!["rename", "-o", "--verbose", "a.txt"])]
fn missing_value(#[case] argv: Vec<&str>) {
    let outcome = rename_parser().resolve(argv.as_slice()).unwrap_err();

    assert!(matches!(
        outcome,
        Outcome::Failure { error: ParseError::MissingValue { ref flag, .. }, .. } if flag == "-o"
    ));
}

#[rstest]
#[case(vec!["rename", "a.txt"])]
#[case(vec!["rename", "a.txt", "--verbose"])]
#[case(vec!["rename", "-o", "b.txt", "a.txt"])]
#[case(vec!["rename", "--output", "b.txt", "--verbose", "a.txt"])]
fn keys_round_trip(#[case] argv: Vec<&str>) {
    let parser = rename_parser();

    let arguments = parser.resolve(argv.as_slice()).unwrap();

    let declared: BTreeSet<&str> = parser.defaults().iter().map(|(key, _)| key).collect();
    let resolved: BTreeSet<&str> = arguments.iter().map(|(key, _)| key).collect();
    assert_eq!(resolved, declared);
    assert_eq!(
        declared,
        BTreeSet::from([
            "--help",
            "--output",
            "--verbose",
            "--version",
            "-h",
            "-o",
            "-v",
            "input",
            "output",
        ])
    );
    assert_eq!(&arguments["--version"], "1.0");
    assert_eq!(&arguments["-h"], "Simple program to rename a file");
}

#[rstest]
#[case(vec!["rename", "-v", "--help"], Outcome::Version("1.0".to_string()))]
#[case(vec!["rename", "a.txt", "b.txt", "--version"], Outcome::Version("1.0".to_string()))]
fn version_before_help(#[case] argv: Vec<&str>, #[case] expected: Outcome) {
    let outcome = rename_parser().resolve(argv.as_slice()).unwrap_err();

    assert_eq!(outcome, expected);
    assert_eq!(outcome.exit_code(), 0);
}
