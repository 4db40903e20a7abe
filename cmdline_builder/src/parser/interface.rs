use crate::parser::base::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftWidth(pub usize);

#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalWidth(pub usize);

/// Renders a left column (ex: flags) and a right column (ex: description) side by side.
/// When the total width is known, the right column is wrapped to fit.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    left: LeftWidth,
    total: Option<TotalWidth>,
}

// Leave a small margin on the right of the terminal.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Room for about three average (5 letter) words.
pub(crate) const MINIMUM_RIGHT_WIDTH: usize = 17;

impl ColumnRenderer {
    pub(crate) fn new(indent: usize, left: LeftWidth, total: Option<TotalWidth>) -> Self {
        Self {
            indent,
            left,
            total,
        }
    }

    pub(crate) fn render(&self, left: &str, right: &str) -> Vec<String> {
        let indent = self.indent;
        let left_length = left.chars().count();
        // A left side at (or beyond) the column width still gets a single space.
        let gap = if left_length < self.left.0 {
            self.left.0 - left_length
        } else {
            1
        };
        let column = indent + left_length + gap;

        let parts = match &self.total {
            Some(TotalWidth(total)) => {
                let target_total = (*total as f64 * TARGET_TOTAL_FACTOR) as usize;
                let right_width = if target_total > column + MINIMUM_RIGHT_WIDTH {
                    target_total - column
                } else {
                    MINIMUM_RIGHT_WIDTH
                };

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Column {column} within the target total {target_total}.  Selecting right: {right_width}.");
                }

                chunk(right, right_width)
            }
            None => vec![right.to_string()],
        };

        let mut out = Vec::default();

        for (i, part) in parts.iter().enumerate() {
            if i == 0 {
                out.push(format!("{:indent$}{left}{:gap$}{part}", "", ""));
            } else {
                out.push(format!("{:column$}{part}", ""));
            }
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}{:gap$}", "", ""));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() < width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}
