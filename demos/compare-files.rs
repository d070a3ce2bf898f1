use std::{env, path::Path, process};

use softdiff::diff_files;

/// Compares two text files and prints a block for every changed line.
///
/// Run it with:
/// `cargo run --example compare-files a.txt b.txt`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: compare-files <file-a> <file-b>");
        process::exit(1);
    }

    match diff_files(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(output) if output.is_empty() => println!("Files are identical."),
        Ok(output) => print!("{output}"),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}
