//! Checks that the unit test tree mirrors `src` and that every test file tests something

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TEST_ROOT: &str = "tests";

    // Crate roots and module declaration files carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs"
            || relative == "main.rs"
            || relative == "mod.rs"
            || relative.ends_with("/mod.rs")
            || relative.ends_with("/main.rs")
    }

    fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                found.push(path.clone());
                walk(&path, found)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.push(path);
            }
        }
        Ok(())
    }

    // Directories and .rs files under a root, relative to it with `/` separators
    fn relative_entries(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut found = Vec::new();
        if let Err(error) = walk(base, &mut found) {
            assert!(!base.exists(), "Failed to scan {root}: {error}");
        }

        found
            .iter()
            .filter_map(|path| path.strip_prefix(base).ok())
            .map(|relative| {
                relative
                    .components()
                    .map(|part| part.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .collect()
    }

    fn report(title: &str, entries: &[String]) -> String {
        format!("{title}:\n  - {}", entries.join("\n  - "))
    }

    // Tests that each source file has a unit test file at the same relative path
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = relative_entries(SOURCE_ROOT);
        let units = relative_entries(UNIT_ROOT);

        let missing: Vec<String> = sources
            .iter()
            .filter(|relative| !is_structural(relative))
            .filter(|relative| !units.contains(*relative))
            .map(|relative| format!("src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source entries without unit tests", &missing)
        );
    }

    // Tests that no unit test file outlives its source file
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = relative_entries(SOURCE_ROOT);
        let units = relative_entries(UNIT_ROOT);

        let orphaned: Vec<String> = units
            .iter()
            .filter(|relative| !relative.ends_with("mod.rs"))
            .filter(|relative| !sources.contains(*relative))
            .map(|relative| format!("tests/unit/{relative} has no src/{relative}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test entries without sources", &orphaned)
        );
    }

    // Tests that every non-structural test file declares at least one test
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut empty = Vec::new();

        for relative in relative_entries(TEST_ROOT) {
            if !relative.ends_with(".rs") || is_structural(&relative) {
                continue;
            }
            let path = Path::new(TEST_ROOT).join(&relative);
            match fs::read_to_string(&path) {
                Ok(content) if content.contains("#[test]") => {}
                Ok(_) => empty.push(path.display().to_string()),
                Err(error) => empty.push(format!("{} (unreadable: {error})", path.display())),
            }
        }

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}
