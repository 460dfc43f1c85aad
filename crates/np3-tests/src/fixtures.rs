//! JSON fixtures
//!
//! Each file under `testdata/` holds an `input` option document, as a user
//! would write it, and the `expected` profile decoded after encoding it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use np3_core::PictureControl;
use serde::Deserialize;

/// One fixture file
#[derive(Debug, Deserialize)]
pub struct Fixture {
    /// Partial profile; omitted fields take their defaults
    pub input: PictureControl,
    /// Full profile expected back from decode
    pub expected: PictureControl,
}

pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Load `testdata/<name>.json`
pub fn load_fixture(name: &str) -> anyhow::Result<Fixture> {
    let path = testdata_dir().join(format!("{name}.json"));
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing fixture {}", path.display()))
}

/// Names of every fixture in `testdata/`
pub fn fixture_names() -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(testdata_dir())? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
    }
    names.sort();
    Ok(names)
}
