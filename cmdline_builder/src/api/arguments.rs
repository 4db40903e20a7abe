use std::collections::BTreeMap;

/// The resolved command line: option keys mapped to string values.
///
/// Keys are:
/// * the canonical name of a positional or value-bearing option (ex: `input`, `output`),
/// * each flag alias of a value-bearing option or switch (ex: `-o`, `--verbose`),
/// * each flag alias of `help`/`version`, holding the about message or version string (ex: `--version`).
///
/// Every declared key is present, holding its default unless given on the command line.
///
/// ### Example
/// ```
/// # use cmdline_builder as cmdline;
/// use cmdline::{CommandLineParser, ProgramOption};
///
/// let parser = CommandLineParser::new()
///     .add(ProgramOption::new("input", "Input file"))
///     .add(ProgramOption::flags(["--verbose"], "Print more").default("false"))
///     .build_parser()
///     .unwrap();
///
/// let arguments = parser.parse_tokens(&["program", "file.txt", "--verbose"]).unwrap();
/// assert_eq!(&arguments["input"], "file.txt");
/// assert!(arguments.is_set("--verbose"));
/// assert_eq!(&arguments["undeclared"], "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: BTreeMap<String, String>,
}

impl Arguments {
    /// Get the value of a key, if declared.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the key was declared.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether the key holds the switch value `"true"`.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Iterate the key-value pairs, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no keys at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Unwrap into the underlying ordered map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.values
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

/// Unknown keys index to the empty string.
impl std::ops::Index<&str> for Arguments {
    type Output = str;

    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or("")
    }
}

impl From<Arguments> for BTreeMap<String, String> {
    fn from(arguments: Arguments) -> Self {
        arguments.into_inner()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
