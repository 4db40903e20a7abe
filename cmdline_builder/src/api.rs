mod arguments;
mod core;

pub use self::core::*;
pub use arguments::*;
