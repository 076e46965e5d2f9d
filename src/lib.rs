//! Turn flat listings of backslash-separated paths into sorted, indented
//! outlines.
//!
//! ```
//! let tree = pathtree::from_str("docs\\readme.txt 100\ndocs\\img\\logo.png 50").unwrap();
//! assert_eq!(pathtree::to_string(&pathtree::sort(&tree)), "docs\n  img\n    logo.png\n  readme.txt\n");
//! ```

mod error;
pub use error::{Error, Result, SyntaxError};

mod parse;

mod parser;
pub use parser::{from_str, parse};

mod run;
pub use run::{
    read_tree, run, write_tree, Config, Format, DEFAULT_INPUT, DEFAULT_OUTPUT,
};

mod ser;
pub use ser::{to_string, to_string_styled, to_writer, Style, Styled};

mod sort;
pub use sort::sort;

mod tree;
pub use tree::{Entry, Folder};

#[cfg(test)]
mod tests;
