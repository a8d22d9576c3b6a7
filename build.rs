//! Build script to generate the embedded region table
//!
//! Reads the ISO 3166-1 region file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_region_table(
        "data/regions.tsv",
        &Path::new(&out_dir).join("regions.rs"),
        "REGIONS",
        "ISO 3166-1 alpha-2 region codes with English display names",
    );

    // Rebuild if the region table changes
    println!("cargo:rerun-if-changed=data/regions.tsv");
}

fn generate_region_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // `CODE<TAB>Name`; a bare code has no display name
    let rows: Vec<(&str, Option<&str>)> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((code, name)) if !name.trim().is_empty() => (code.trim(), Some(name.trim())),
            Some((code, _)) => (code.trim(), None),
            None => (line.trim(), None),
        })
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated region table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, Option<&str>)] = &[").unwrap();

    for (code, name) in rows {
        match name {
            Some(name) => writeln!(output, "    ({code:?}, Some({name:?})),").unwrap(),
            None => writeln!(output, "    ({code:?}, None),").unwrap(),
        }
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
