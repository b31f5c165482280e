//! Build script: validates default-prompts.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let prompts_path: PathBuf = [&manifest_dir, "config", "default-prompts.json"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", prompts_path.display());
    let json = std::fs::read_to_string(&prompts_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. default-prompts.json must exist and be valid.",
            prompts_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct DefaultPrompts {
        truths: Vec<String>,
        dares: Vec<String>,
    }
    let _: DefaultPrompts = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "default-prompts.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
}
