use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::{Entry, Folder};

/// Return a sorted copy of a folder tree.
///
/// At every level folders come first in name order, followed by files from
/// largest to smallest. Files of equal size are in name order.
pub fn sort(folder: &Folder) -> Folder {
    let mut folders = Vec::new();
    let mut files: BTreeMap<Reverse<u64>, Vec<&String>> = BTreeMap::new();

    for (name, entry) in folder.iter() {
        match entry {
            Entry::Folder(sub) => folders.push((name, sort(sub))),
            Entry::File(size) => files.entry(Reverse(*size)).or_default().push(name),
        }
    }

    folders.sort_by(|(a, _), (b, _)| a.cmp(b));

    let folders = folders
        .into_iter()
        .map(|(name, sub)| (name.clone(), Entry::Folder(sub)));

    let files = files.into_iter().flat_map(|(Reverse(size), mut names)| {
        names.sort();
        names.into_iter().map(move |name| (name.clone(), Entry::File(size)))
    });

    folders.chain(files).collect()
}
