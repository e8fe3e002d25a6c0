//! unsheet CLI - spreadsheet part text extraction tool
//!
//! Reads the shared-strings and worksheet XML parts of an unzipped workbook,
//! resolves cell text, and writes a flat HEADERS/DATA report. A part that
//! fails to parse degrades to an empty result with a diagnostic; the report
//! is still produced and the run still succeeds.

use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;
use unsheet::{report, worksheet, Error, SharedStrings, Sheet};

/// Extract cell text from unzipped spreadsheet XML parts
#[derive(Parser)]
#[command(
    name = "unsheet",
    version,
    about = "Extract cell text from unzipped spreadsheet XML parts",
    long_about = "unsheet - extracts the shared-strings table and first worksheet\n\
                  of an already-unzipped workbook into a flat text report."
)]
struct Cli {
    /// Directory containing the unzipped workbook parts
    #[arg(default_value = "temp_excel")]
    dir: PathBuf,

    /// Shared-strings part, relative to DIR
    #[arg(long, default_value = unsheet::SHARED_STRINGS_PART)]
    shared_strings: PathBuf,

    /// Worksheet part, relative to DIR
    #[arg(long, default_value = unsheet::WORKSHEET_PART)]
    worksheet: PathBuf,

    /// Output report path
    #[arg(short, long, default_value = "extracted_sheet.txt")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    println!("Extracting sheet text...");

    println!("Reading shared strings...");
    let strings_path = cli.dir.join(&cli.shared_strings);
    let strings = SharedStrings::load(&strings_path).unwrap_or_else(|e| {
        eprintln!(
            "{} Error parsing shared strings: {}",
            "!".yellow().bold(),
            e
        );
        SharedStrings::default()
    });
    println!("Found {} shared strings", strings.len());

    println!("Reading worksheet data...");
    let sheet_path = cli.dir.join(&cli.worksheet);
    let sheet = worksheet::load(&sheet_path, &strings).unwrap_or_else(|e| {
        eprintln!("{} Error parsing worksheet: {}", "!".yellow().bold(), e);
        Sheet::new()
    });
    println!("Found {} rows", sheet.row_count());

    let text = report::render(&sheet);
    println!("\n{}", text);

    fs::write(&cli.output, &text)?;
    println!(
        "{} Report saved to: {}",
        "✓".green().bold(),
        cli.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_paths() {
        let cli = Cli::parse_from(["unsheet"]);
        assert_eq!(cli.dir, PathBuf::from("temp_excel"));
        assert_eq!(cli.shared_strings, PathBuf::from("xl/sharedStrings.xml"));
        assert_eq!(cli.worksheet, PathBuf::from("xl/worksheets/sheet1.xml"));
        assert_eq!(cli.output, PathBuf::from("extracted_sheet.txt"));
    }
}
