pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_FLAGS: [&str; 2] = ["-h", "--help"];
pub(crate) const HELP_DESCRIPTION: &str = "print this help message";

pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_FLAGS: [&str; 2] = ["-v", "--version"];
pub(crate) const VERSION_DESCRIPTION: &str = "print program version";

pub(crate) const FLAG_PREFIX: char = '-';
pub(crate) const INLINE_SEPARATOR: char = '=';
pub(crate) const SWITCH_VALUE: &str = "true";
