//! Optional match-card preview via an external image tool
//!
//! Looks for one image per candidate and shells out to ImageMagick to
//! composite them side by side. Every failure here is silent: the preview
//! is cosmetic and must never block or abort a run.

use std::path::{Path, PathBuf};
use std::process::Command;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

fn find_image(dir: &Path, name: &str) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Compose a side-by-side preview of the two candidates' images.
///
/// Returns the composited file's path, or None when either image is
/// missing or the external tool is unavailable or fails.
pub fn compose_preview(images_dir: &Path, left: &str, right: &str) -> Option<PathBuf> {
    let left_img = find_image(images_dir, left)?;
    let right_img = find_image(images_dir, right)?;

    let out = std::env::temp_dir().join(format!(
        "tourney-{}-vs-{}.png",
        file_safe(left),
        file_safe(right)
    ));
    let status = Command::new("convert")
        .arg(&left_img)
        .arg(&right_img)
        .arg("+append")
        .arg(&out)
        .status()
        .ok()?;
    status.success().then_some(out)
}
