//! Places the workspace `config.toml` next to the backend binary, where
//! `shared::config::load_config` looks for it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let source = manifest_dir.join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=no config.toml in the workspace root, the embedded defaults apply");
        return;
    }

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=could not locate the target profile directory");
        return;
    };

    let dest = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        panic!("copying config.toml to {}: {}", dest.display(), e);
    }
}

/// `target/<profile>` from `target/<profile>/build/backend-*/out`.
fn profile_dir() -> Option<PathBuf> {
    let out_dir = env::var("OUT_DIR").ok()?;
    let profile = env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
