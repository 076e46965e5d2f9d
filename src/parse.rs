//! Stateless parsing primitives
//!
//! Everything here works on a single line or a single path component and
//! knows nothing about the tree being built.

use crate::SyntaxError;

/// Separator between path components.
pub const SEPARATOR: char = '\\';

/// What the last component of a path declares.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Leaf<'a> {
    Folder(&'a str),
    File(&'a str, u64),
}

impl<'a> Leaf<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Leaf::Folder(name) => name,
            Leaf::File(name, _) => name,
        }
    }
}

/// Split a trimmed, nonempty line into its folder components and final leaf.
pub fn path(line: &str) -> Result<(Vec<&str>, Leaf<'_>), SyntaxError> {
    let mut components: Vec<&str> = line.split(SEPARATOR).collect();
    // `split` always yields at least one item.
    let last = components.pop().unwrap_or_default();

    for c in &components {
        folder_name(c)?;
    }

    Ok((components, leaf(last)?))
}

/// Accept any nonempty component as a folder name.
///
/// Spaces carry no meaning in the middle of a path, so `a 5` is a folder
/// called `a 5` here.
pub fn folder_name(component: &str) -> Result<&str, SyntaxError> {
    if component.is_empty() {
        Err(SyntaxError::EmptyComponent)
    } else {
        Ok(component)
    }
}

/// Read the last component of a path, either `name` or `name size`.
pub fn leaf(component: &str) -> Result<Leaf<'_>, SyntaxError> {
    let mut tokens = component.split(' ');
    let name = tokens.next().unwrap_or_default();
    let size = tokens.next();

    if tokens.next().is_some() {
        return Err(SyntaxError::TooManyTokens(component.to_string()));
    }

    if name.is_empty() {
        return Err(SyntaxError::EmptyComponent);
    }

    match size {
        None => Ok(Leaf::Folder(name)),
        Some(size) => Ok(Leaf::File(name, file_size(size)?)),
    }
}

/// Parse a base-10 file size.
pub fn file_size(text: &str) -> Result<u64, SyntaxError> {
    // `u64::from_str` would also take a leading '+'.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SyntaxError::InvalidSize(text.to_string()));
    }
    text.parse()
        .map_err(|_| SyntaxError::InvalidSize(text.to_string()))
}
