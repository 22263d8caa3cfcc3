extern crate clap;
extern crate xdiff;

use clap::{App, AppSettings, Arg};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use xdiff::{open, write_diff, WordDiffError};

const USAGE: &str = "Usage: xdiff <a> <b>";

fn parse_args() -> Result<(PathBuf, PathBuf), String> {
    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() != 3 {
        return Err(format!("expected 2 arguments, got {}", args.len().saturating_sub(1)));
    }

    // Everything after the program name is a path, including `--` and `--help`.
    let argv = vec![
        args[0].clone(),
        OsString::from("--"),
        args[1].clone(),
        args[2].clone(),
    ];
    let matches = App::new("xdiff")
        .about("Compare two binary files as streams of little-endian 32-bit words")
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("FILE_A")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::with_name("FILE_B")
                .required(true)
                .allow_hyphen_values(true)
                .index(2),
        )
        .get_matches_from_safe(argv)
        .map_err(|why| why.message)?;

    let path = |name: &str| {
        matches
            .value_of_os(name)
            .map(PathBuf::from)
            .unwrap_or_default()
    };
    Ok((path("FILE_A"), path("FILE_B")))
}

fn run(path_a: &Path, path_b: &Path) -> xdiff::Result<()> {
    let a = open(path_a)?;
    let b = open(path_b)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_diff(
        &mut out,
        &path_a.to_string_lossy(),
        &path_b.to_string_lossy(),
        a,
        b,
    );
    // Flush what was printed even when the scan aborted.
    let flushed = out.flush().map_err(WordDiffError::WriteError);
    result?;
    flushed
}

fn main() {
    env_logger::init();

    let (path_a, path_b) = match parse_args() {
        Ok(paths) => paths,
        Err(why) => {
            log::debug!("argument error: {}", why);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(why) = run(&path_a, &path_b) {
        eprintln!("xdiff: {}", why);
        process::exit(1);
    }
}
