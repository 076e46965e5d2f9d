//! Reading a path listing from disk and writing the sorted outline back.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{from_str, ser, sort, Error, Folder, Result, Style};

pub const DEFAULT_INPUT: &str = "./input_data.txt";
pub const DEFAULT_OUTPUT: &str = "./output_data.txt";

/// Output file format.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub enum Format {
    /// Indented entry names.
    #[default]
    Outline,
    /// The tree as a JSON object, files mapped to their sizes.
    Json,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub style: Style,
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            style: Style::default(),
            format: Format::default(),
        }
    }
}

/// Read the input listing, sort it and write the output file.
///
/// The output file is only created once the whole input has been parsed.
pub fn run(config: &Config) -> Result<()> {
    let tree = read_tree(&config.input)?;
    let tree = sort(&tree);
    write_tree(&config.output, &tree, config.style, config.format)?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        files = tree.leaves().len(),
        "wrote sorted tree"
    );
    Ok(())
}

/// Parse a path listing file.
pub fn read_tree(path: impl AsRef<Path>) -> Result<Folder> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "read path listing");

    from_str(&text)
}

/// Write a tree to a file in its current entry order.
pub fn write_tree(
    path: impl AsRef<Path>,
    tree: &Folder,
    style: Style,
    format: Format,
) -> Result<()> {
    let path = path.as_ref();
    let write = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            Format::Outline => ser::to_writer(tree, &mut writer, style)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut writer, tree)?;
                writeln!(writer)?;
            }
        }
        writer.flush()
    };

    write().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
