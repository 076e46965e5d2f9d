#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(tree) = pathtree::from_str(data) {
        let once = pathtree::sort(&tree);
        let twice = pathtree::sort(&once);
        assert_eq!(pathtree::to_string(&once), pathtree::to_string(&twice));

        let mut before = tree.leaves();
        let mut after = once.leaves();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
});
