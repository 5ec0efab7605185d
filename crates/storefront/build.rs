//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so the layout can link it under a
//! content-addressed name that is safe to cache forever.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

/// Hex characters of the digest kept in the file name.
const HASH_LEN: usize = 8;

fn main() -> Result<(), Box<dyn Error>> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let css_dir = manifest_dir.join("static/css");
    let css_path = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = fs::read(&css_path)?;
    let digest = format!("{:x}", Sha256::digest(&content));
    let hash = digest.get(..HASH_LEN).unwrap_or(&digest);

    // Exposed to the `css_hash` template filter
    println!("cargo:rustc-env=CSS_HASH={hash}");

    let derived_dir = css_dir.join("derived");
    fs::create_dir_all(&derived_dir)?;
    fs::write(derived_dir.join(format!("main.{hash}.css")), &content)?;

    Ok(())
}
