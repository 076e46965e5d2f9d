use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::SyntaxError;

/// A single named item in a folder.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Folder(Folder),
    /// File with its size.
    File(u64),
}

impl Entry {
    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }
}

/// Folder contents, keyed by entry name.
///
/// Iteration order is the order entries will be written in. The parser
/// leaves them in insertion order, `sort` imposes the canonical one.
///
/// Equality compares contents and ignores order. Compare written output when
/// order matters.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder(pub IndexMap<String, Entry>);

impl Folder {
    pub fn new() -> Folder {
        Folder::default()
    }

    /// Return the child folder with the given name, creating it if it does
    /// not exist yet.
    ///
    /// Fails if the name is already taken by a file.
    pub fn subfolder_mut(
        &mut self,
        name: &str,
    ) -> std::result::Result<&mut Folder, SyntaxError> {
        match self
            .0
            .entry(name.to_string())
            .or_insert_with(|| Entry::Folder(Folder::default()))
        {
            Entry::Folder(folder) => Ok(folder),
            Entry::File(_) => Err(SyntaxError::NotAFolder(name.to_string())),
        }
    }

    /// List every file in the tree as a backslash-joined path and its size.
    ///
    /// Paths come in iteration order.
    pub fn leaves(&self) -> Vec<(String, u64)> {
        fn walk(
            prefix: &str,
            folder: &Folder,
            acc: &mut Vec<(String, u64)>,
        ) {
            for (name, entry) in folder.iter() {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}\\{}", prefix, name)
                };
                match entry {
                    Entry::Folder(sub) => walk(&path, sub, acc),
                    Entry::File(size) => acc.push((path, *size)),
                }
            }
        }

        let mut ret = Vec::new();
        walk("", self, &mut ret);
        ret
    }
}

impl std::ops::Deref for Folder {
    type Target = IndexMap<String, Entry>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Folder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::iter::FromIterator<(String, Entry)> for Folder {
    fn from_iter<U: IntoIterator<Item = (String, Entry)>>(iter: U) -> Self {
        Folder(iter.into_iter().collect())
    }
}

impl fmt::Debug for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print(
            f: &mut fmt::Formatter,
            depth: usize,
            folder: &Folder,
        ) -> fmt::Result {
            for (name, entry) in folder.iter() {
                for _ in 0..depth {
                    write!(f, "  ")?;
                }
                match entry {
                    Entry::Folder(sub) => {
                        writeln!(f, "{}/", name)?;
                        print(f, depth + 1, sub)?;
                    }
                    Entry::File(size) => writeln!(f, "{} ({})", name, size)?,
                }
            }

            Ok(())
        }

        if self.is_empty() {
            writeln!(f, "ø")
        } else {
            print(f, 0, self)
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::ser::Styled::new(self, Default::default()))
    }
}

#[doc(hidden)]
#[macro_export(local_inner_macros)]
macro_rules! folder_entry {
    ([$($body:tt)*]) => {
        $crate::Entry::Folder(folder![$($body)*])
    };
    ($size:expr) => {
        $crate::Entry::File($size)
    };
}

/// Construct folder literals.
///
/// Bracketed values are subfolders, anything else is a file size.
///
/// ```
/// let tree = pathtree::folder![
///     "docs" => ["readme.txt" => 100],
///     "src" => [],
/// ];
/// assert_eq!(tree.leaves(), vec![("docs\\readme.txt".to_string(), 100)]);
/// ```
#[macro_export]
macro_rules! folder {
    [$($name:expr => $value:tt),* $(,)?] => {
        {
            let ret: $crate::Folder =
                ::std::iter::FromIterator::from_iter(::std::vec![
                    $(($name.to_string(), $crate::folder_entry!($value))),*
                ]);
            ret
        }
    }
}
