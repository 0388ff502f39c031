//! Shared documents and helpers for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Every required key, no optional ones.
pub const MINIMAL_DOC: &str = r#"
[window]
width = 1024.0
height = 768.0
title = "Flow Editor"

[shape]
width = 140.0
height = 80.0
corner_radius = 12.0
base_color_rgb = [80, 150, 220]
"#;

/// Minimal document with extra lines appended to the given section.
#[allow(dead_code)]
pub fn doc_with(section: &str, lines: &str) -> String {
    let header = format!("[{}]\n", section);
    if MINIMAL_DOC.contains(&header) {
        MINIMAL_DOC.replacen(&header, &format!("{}{}\n", header, lines), 1)
    } else {
        format!("{}\n{}{}\n", MINIMAL_DOC, header, lines)
    }
}

/// Minimal document with one line of a section removed.
#[allow(dead_code)]
pub fn doc_without(line_prefix: &str) -> String {
    MINIMAL_DOC
        .lines()
        .filter(|line| !line.starts_with(line_prefix))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a document to a temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
