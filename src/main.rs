use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ffgp_convert::convert::{decode, output_path, packager};

#[derive(Parser)]
#[command(
    name = "ffgp",
    version,
    about = "ForeFlight to Garmin Pilot checklist converter",
    long_about = "Converts encrypted ForeFlight checklist documents (.fmd) into \
                  encrypted Garmin Pilot checklist binder packages (.gplts). The \
                  conversion is structural and cryptographic only; checklist \
                  content is carried over unchanged."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .fmd file to a .gplts package
    Convert {
        /// Path to the input .fmd file
        input: PathBuf,
        /// Output path (defaults to the input path with a .gplts extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a .fmd file and print a summary of its contents
    Inspect {
        /// Path to the input .fmd file
        input: PathBuf,
        /// Print the full decrypted document as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => {
            if !packager::is_source_file(&input) {
                eprintln!("Warning: {} does not have a .fmd extension", input.display());
            }

            let data = fs::read(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let package = ffgp_convert::convert(&data)?;

            let output = output.unwrap_or_else(|| output_path(&input));
            fs::write(&output, package)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Converted {} -> {}", input.display(), output.display());
        }

        Commands::Inspect { input, json } => {
            let data = fs::read(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let doc = decode(&data)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&doc)?);
                return Ok(());
            }

            println!("Name:       {}", doc.metadata.name);
            println!("Aircraft:   {}", doc.metadata.make_and_model);
            if !doc.metadata.aircraft_info.is_empty() {
                println!("Info:       {}", doc.metadata.aircraft_info);
            }
            println!("Groups:     {}", doc.groups.len());
            println!("Checklists: {}", doc.checklist_count());
            println!("Items:      {}", doc.item_count());
            println!();
            for group in &doc.groups {
                println!("{}", group.title);
                for checklist in &group.checklists {
                    println!("  {} ({} items)", checklist.title, checklist.items.len());
                }
            }
        }
    }

    Ok(())
}
