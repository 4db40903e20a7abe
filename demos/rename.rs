use cmdline::ProgramOption;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let arguments = cmdline::parse(
        &argv,
        [
            ProgramOption::new("help", "Simple program to rename a file"),
            ProgramOption::new("version", "1.0"),
            ProgramOption::new("input", "Input file to rename"),
            ProgramOption::flags(["-o", "--output", "output"], "Output file name")
                .default("output.txt"),
            ProgramOption::flags(["--verbose"], "Print more info about what is being done"),
        ],
    );

    if arguments.is_set("--verbose") {
        println!("Renaming file '{}'", &arguments["input"]);
    }

    println!("Output file: {}", &arguments["output"]);
}
