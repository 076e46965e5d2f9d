use crate::{
    folder, from_str, parse, read_tree, run, sort, to_string, to_string_styled,
    Config, Entry, Error, Folder, Format, Style, SyntaxError,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::fs;

macro_rules! test {
    ($listing:expr, $outline:expr) => {
        test($listing, $outline, Style::default());
    };

    ($listing:expr, $outline:expr, $style:expr) => {
        test($listing, $outline, $style);
    };
}

#[test]
fn readme_example() {
    test!(
        "\
docs\\readme.txt 100
docs\\img\\logo.png 50
docs\\img\\icon.png 50
src\\main 10",
        "\
docs
  img
    icon.png
    logo.png
  readme.txt
src
  main
"
    );
}

#[test]
fn shared_folders() {
    test!(
        "\
A\\B\\f1 10
A\\B\\f2 20",
        "\
A
  B
    f2
    f1
"
    );
}

#[test]
fn folders_first_at_every_level() {
    test!(
        "\
z 1
a\\big 900
a\\m\\deep 1
b
a\\small 3",
        "\
a
  m
    deep
  big
  small
b
z
"
    );
}

#[test]
fn size_groups() {
    test!(
        "\
x 5
y 10
z 5
w 0",
        "\
y
x
z
w
"
    );
}

#[test]
fn other_styles() {
    test!("a\\b\\c 1", "a\n\tb\n\t\tc\n", Style::Tabs);
    test!("a\\b\\c 1", "a\n b\n  c\n", Style::Spaces(1));
}

#[test]
fn empty_listing() {
    test!("", "");
    test!("\n\n", "");
}

#[test]
fn run_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("input_data.txt"),
        output: dir.path().join("output_data.txt"),
        ..Default::default()
    };
    fs::write(
        &config.input,
        "docs\\readme.txt 100\r\ndocs\\img\\logo.png 50\r\nsrc\\main 10\r\n",
    )
    .unwrap();

    run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "docs\n  img\n    logo.png\n  readme.txt\nsrc\n  main\n"
    );
}

#[test]
fn run_overwrites_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("in.txt"),
        output: dir.path().join("out.txt"),
        ..Default::default()
    };
    fs::write(&config.input, "b 1\na 2\n").unwrap();
    fs::write(&config.output, "stale content\nfrom an earlier run\n").unwrap();

    run(&config).unwrap();

    assert_eq!(fs::read_to_string(&config.output).unwrap(), "a\nb\n");
}

#[test]
fn run_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("in.txt"),
        output: dir.path().join("out.json"),
        format: Format::Json,
        ..Default::default()
    };
    fs::write(&config.input, "x 5\nd\\f 1\ny 10\n").unwrap();

    run(&config).unwrap();

    let json = fs::read_to_string(&config.output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({"d": {"f": 1}, "y": 10, "x": 5}));

    // Key order in the file follows sort order.
    let keys: Vec<usize> =
        ["\"d\"", "\"y\"", "\"x\""].iter().map(|k| json.find(k).unwrap()).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "{}", json);

    let back: Folder = serde_json::from_str(&json).unwrap();
    assert_eq!(back, folder!["d" => ["f" => 1], "y" => 10, "x" => 5]);
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("does_not_exist.txt"),
        output: dir.path().join("out.txt"),
        ..Default::default()
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "{:?}", err);
    assert!(!config.output.exists());

    assert!(matches!(read_tree(&config.input), Err(Error::Read { .. })));
}

#[test]
fn malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("in.txt"),
        output: dir.path().join("out.txt"),
        ..Default::default()
    };
    fs::write(&config.input, "a\\b 1\na\\c one\n").unwrap();

    let err = run(&config).unwrap_err();
    assert_eq!(err.syntax(), Some(&SyntaxError::InvalidSize("one".into())));
    assert_eq!(err.to_string(), "line 2: file size \"one\" is not a non-negative integer");
    assert!(!config.output.exists());
}

#[test]
fn unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("in.txt"),
        output: dir.path().join("no_such_dir").join("out.txt"),
        ..Default::default()
    };
    fs::write(&config.input, "a 1\n").unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::Write { .. }), "{:?}", err);
}

/// Test that a path listing sorts into the expected outline.
fn test(listing: &str, outline: &str, style: Style) {
    let tree = from_str(listing).expect("Listing did not parse");
    let sorted = sort(&tree);
    let output = to_string_styled(&sorted, style);

    if output != outline {
        println!("Listing \n\x1b[1;32m{}\x1b[0m", listing);
        println!("Outline \n\x1b[1;31m{}\x1b[0m", output);
    }

    assert_eq!(output, outline);

    // Sorting never changes what is in the tree.
    assert_eq!(sorted, tree);
}

/// Path listings with folder and file names drawn from disjoint alphabets,
/// so no name is ever used for both kinds.
fn listing() -> impl Strategy<Value = Vec<String>> {
    let line = (
        prop::collection::vec("[A-C]{1,2}", 0..4),
        "[a-e]{1,3}",
        prop::option::of(0u64..8),
    )
        .prop_map(|(mut folders, name, size)| {
            match size {
                Some(size) => folders.push(format!("{} {}", name, size)),
                None => folders.push(name.to_uppercase()),
            }
            folders.join("\\")
        });
    prop::collection::vec(line, 0..24)
}

fn sorted_leaves(folder: &Folder) -> Vec<(String, u64)> {
    let mut ret = folder.leaves();
    ret.sort();
    ret
}

fn check_level(folder: &Folder) -> Result<(), TestCaseError> {
    let entries: Vec<_> = folder.iter().collect();
    for pair in entries.windows(2) {
        let ((a, a_entry), (b, b_entry)) = (pair[0], pair[1]);
        match (a_entry, b_entry) {
            (Entry::Folder(_), Entry::Folder(_)) => prop_assert!(a < b),
            (Entry::File(x), Entry::File(y)) => {
                prop_assert!(x > y || (x == y && a < b))
            }
            (Entry::File(_), Entry::Folder(_)) => {
                prop_assert!(false, "file {} before folder {}", a, b)
            }
            (Entry::Folder(_), Entry::File(_)) => {}
        }
    }
    for entry in folder.values() {
        if let Entry::Folder(sub) = entry {
            check_level(sub)?;
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn sort_is_idempotent(lines in listing()) {
        let tree = parse(&lines).unwrap();
        let once = sort(&tree);
        let twice = sort(&once);
        prop_assert_eq!(to_string(&once), to_string(&twice));
        prop_assert_eq!(once.leaves(), twice.leaves());
    }

    #[test]
    fn sort_preserves_leaves(lines in listing()) {
        let tree = parse(&lines).unwrap();
        prop_assert_eq!(sorted_leaves(&sort(&tree)), sorted_leaves(&tree));
    }

    #[test]
    fn sort_is_independent_of_input_order(lines in listing()) {
        // Redeclared file sizes are last-write-wins, so drop files that
        // appear more than once before shuffling.
        let mut seen = std::collections::BTreeMap::new();
        for line in &lines {
            let key = line.rsplit_once(' ').map_or(line.as_str(), |(k, _)| k);
            *seen.entry(key.to_string()).or_insert(0) += 1;
        }
        let unique: Vec<&String> = lines
            .iter()
            .filter(|line| {
                line.rsplit_once(' ').map_or(true, |(k, _)| seen[k] == 1)
            })
            .collect();
        let reversed: Vec<&String> = unique.iter().rev().copied().collect();

        let a = sort(&parse(&unique).unwrap());
        let b = sort(&parse(&reversed).unwrap());
        prop_assert_eq!(to_string(&a), to_string(&b));
    }

    #[test]
    fn sorted_levels_are_ordered(lines in listing()) {
        let tree = parse(&lines).unwrap();
        check_level(&sort(&tree))?;
    }
}
