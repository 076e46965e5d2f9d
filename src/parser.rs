//! Building the tree from path lines.

use tracing::{debug, trace, warn};

use crate::{
    parse::{self, Leaf},
    Entry, Error, Folder, Result, SyntaxError,
};

/// Parse a complete path listing.
pub fn from_str(input: &str) -> Result<Folder> {
    parse(input.lines())
}

/// Build a folder tree from path lines.
///
/// Lines sharing a folder prefix share one subtree. Blank lines are skipped.
/// Parsing stops at the first malformed line.
pub fn parse<I, S>(lines: I) -> Result<Folder>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Folder::new();
    let mut count = 0;

    for (i, line) in lines.into_iter().enumerate() {
        let line_no = i + 1;
        let line = line.as_ref().trim();
        if line.is_empty() {
            trace!(line = line_no, "skipping blank line");
            continue;
        }

        insert(&mut root, line_no, line)
            .map_err(|kind| Error::Syntax { line: line_no, kind })?;
        count += 1;
    }

    debug!(paths = count, top_level = root.len(), "parsed path listing");
    Ok(root)
}

fn insert(
    root: &mut Folder,
    line_no: usize,
    line: &str,
) -> std::result::Result<(), SyntaxError> {
    let (folders, leaf) = parse::path(line)?;

    let mut current = root;
    for name in folders {
        current = current.subfolder_mut(name)?;
    }

    let name = leaf.name();
    let Some(existing) = current.get_mut(name) else {
        let entry = match leaf {
            Leaf::Folder(_) => Entry::Folder(Folder::new()),
            Leaf::File(_, size) => Entry::File(size),
        };
        current.insert(name.to_string(), entry);
        return Ok(());
    };

    match (existing, leaf) {
        (Entry::Folder(_), Leaf::Folder(_)) => {}
        (Entry::File(old), Leaf::File(_, size)) => {
            if *old != size {
                debug!(line = line_no, name, old = *old, new = size, "file size redeclared");
            }
            *old = size;
        }
        (existing, _) => {
            let kind = if existing.is_folder() { "folder" } else { "file" };
            warn!(
                line = line_no,
                name,
                existing = kind,
                "name already used by a different kind of entry, keeping the first one"
            );
        }
    }

    Ok(())
}
