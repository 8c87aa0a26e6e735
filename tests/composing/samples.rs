#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use formwork::formatting::Identity;
    use formwork::loading;
    use formwork::rendering::{render, Html, Typst};

    fn bundles(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("json")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .json files found in {:?}", dir);
        files.sort();
        files
    }

    #[test]
    fn ensure_samples_render() {
        let mut failures = Vec::new();

        for file in &bundles(Path::new("tests/samples/")) {
            let content = loading::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
            let bundle = loading::parse(file, &content)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e));

            let address = bundle.address();
            match bundle.compose(&address) {
                Ok(composed) => {
                    let html = render(&Html::default(), &composed);
                    let typst = render(&Typst::new(&bundle.settings), &composed);
                    let text = render(&Identity, &composed);
                    assert!(html.starts_with("<nav class=contents>") || html.starts_with("<article"));
                    assert!(!typst.is_empty());
                    assert!(!text.is_empty());
                }
                Err(e) => failures.push(format!("{:?}: {}", file, e)),
            }
        }

        if !failures.is_empty() {
            panic!("Samples failed to compose:\n{}", failures.join("\n"));
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let mut unexpected = Vec::new();

        for file in &bundles(Path::new("tests/broken/")) {
            let content = loading::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
            let bundle = loading::parse(file, &content)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e));

            let address = bundle.address();
            if bundle
                .compose(&address)
                .is_ok()
            {
                unexpected.push(file.clone());
            }
        }

        if !unexpected.is_empty() {
            panic!("Broken bundles composed without error: {:?}", unexpected);
        }
    }
}
