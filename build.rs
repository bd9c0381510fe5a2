//! Build script to generate the embedded movie catalog
//!
//! Reads the tab-separated catalog and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const FIELDS: usize = 6;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/movies.tsv",
        &Path::new(&out_dir).join("movies.rs"),
        "MOVIES",
        "Embedded movie catalog: title, year, director, actor, synopsis, poster",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/movies.tsv");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').map(str::trim).collect::<Vec<_>>())
        .collect();

    for (i, row) in rows.iter().enumerate() {
        assert!(
            row.len() == FIELDS && !row[0].is_empty(),
            "{input_path}: row {} must have {FIELDS} fields and a title",
            i + 1
        );
    }

    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated movie catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[[&str; {FIELDS}]] = &[").unwrap();

    for row in rows {
        let quoted: Vec<String> = row.iter().map(|field| format!("{field:?}")).collect();
        writeln!(output, "    [{}],", quoted.join(", ")).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of movies in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
