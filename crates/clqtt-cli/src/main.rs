//! Command-line front-end for the clqtt converter.
//!
//! Reads one `.clqtt` project file, runs the conversion, and writes the two
//! artifacts next to the input (or into an optional output directory):
//! `<stem>_numbered.html` and `<stem>_annotations.csv`. All domain logic
//! lives in `clqtt-core`; this binary only moves bytes.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{bail, Context, Result};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (input, out_dir) = match args.as_slice() {
        [input] => (PathBuf::from(input), None),
        [input, out_dir] => (PathBuf::from(input), Some(PathBuf::from(out_dir))),
        _ => bail!("usage: clqtt <input.clqtt> [output-dir]"),
    };

    let bytes = fs::read(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let output = clqtt_core::convert(&bytes)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    let stem = input
        .file_stem()
        .context("input path has no file name")?
        .to_string_lossy();
    let dir = match out_dir {
        Some(dir) => dir,
        None => input.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
    };

    let html_path = dir.join(format!("{stem}_numbered.html"));
    let csv_path = dir.join(format!("{stem}_annotations.csv"));

    fs::write(&html_path, output.html)
        .with_context(|| format!("failed to write {}", html_path.display()))?;
    fs::write(&csv_path, output.csv)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;

    println!("{}", html_path.display());
    println!("{}", csv_path.display());
    Ok(())
}
