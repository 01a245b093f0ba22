//! Build script for Consolify.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to where `config::load_env` looks for `.env`.
//!
//! - Linux: `~/.local/share/consolify/.env.example`
//! - macOS: `~/Library/Application Support/consolify/.env.example`
//! - Windows: `%LOCALAPPDATA%/consolify/.env.example`
//!
//! A missing template or an unwritable data directory produces a cargo
//! warning instead of a build failure.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    // Read-only or sandboxed home directories must not break the build.
    if let Err(e) = install_template(&env_example_path) {
        println!("cargo:warning=could not install .env.example: {}", e);
    }

    Ok(())
}

fn install_template(template: &Path) -> std::io::Result<()> {
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("consolify");
    fs::create_dir_all(&out_dir)?;

    let contents = fs::read_to_string(template)?;
    fs::write(out_dir.join(".env.example"), contents)
}
