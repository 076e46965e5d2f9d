use std::{fmt, io};

use crate::{Entry, Folder};

/// Indentation used for one level of nesting.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Style {
    Tabs,
    Spaces(usize),
}

impl Default for Style {
    fn default() -> Self {
        Style::Spaces(2)
    }
}

impl Style {
    fn indent(self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Style::Tabs => {
                for _ in 0..depth {
                    write!(f, "\t")?;
                }
                Ok(())
            }
            Style::Spaces(n) => write!(f, "{:1$}", "", depth * n),
        }
    }
}

/// Outline view of a folder in a given style.
///
/// Each entry name goes on its own line, folder contents one level deeper
/// than the folder. File sizes are not shown.
#[derive(Copy, Clone, Debug)]
pub struct Styled<'a> {
    folder: &'a Folder,
    style: Style,
}

impl<'a> Styled<'a> {
    pub fn new(folder: &'a Folder, style: Style) -> Styled<'a> {
        Styled { folder, style }
    }
}

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print(
            f: &mut fmt::Formatter<'_>,
            style: Style,
            depth: usize,
            folder: &Folder,
        ) -> fmt::Result {
            for (name, entry) in folder.iter() {
                style.indent(f, depth)?;
                writeln!(f, "{}", name)?;

                if let Entry::Folder(sub) = entry {
                    print(f, style, depth + 1, sub)?;
                }
            }

            Ok(())
        }

        print(f, self.style, 0, self.folder)
    }
}

/// Write the outline of a folder in its current entry order.
pub fn to_writer<W: io::Write>(
    folder: &Folder,
    mut writer: W,
    style: Style,
) -> io::Result<()> {
    write!(writer, "{}", Styled::new(folder, style))
}

pub fn to_string(folder: &Folder) -> String {
    to_string_styled(folder, Default::default())
}

pub fn to_string_styled(folder: &Folder, style: Style) -> String {
    Styled::new(folder, style).to_string()
}
