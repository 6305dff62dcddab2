use anyhow::{Result, bail};
use centrisieve::centrifuge::{NameTable, load_assignments, name_table_path};
use centrisieve::classify::{Decision, TaxonFilter};
use centrisieve::fastx::for_each_record;
use centrisieve::resolve::resolve_selectors;
use centrisieve::writer::{open_writer, write_record};
use clap::{ArgAction, Parser};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "centrisieve",
    about = "Segregate FASTA/FASTQ reads using Centrifuge classification reports"
)]
struct Cli {
    #[arg(short = 'f', long = "fasta")]
    fasta: PathBuf,

    #[arg(short = 's', long = "summary")]
    summary: PathBuf,

    #[arg(short = 'e', long = "exclude", default_value = "")]
    exclude: String,

    #[arg(short = 't', long = "take", default_value = "")]
    take: String,

    #[arg(short = 'o', long = "out_file", default_value = "filtered.fa")]
    out_file: String,

    #[arg(short = 'x', long = "exclude_file", default_value = "")]
    exclude_file: String,

    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.summary.is_file() {
        bail!("--summary \"{}\" is not a file", cli.summary.display());
    }
    if !cli.fasta.is_file() {
        bail!("--fasta \"{}\" is not a file", cli.fasta.display());
    }

    let names = NameTable::load(&name_table_path(&cli.summary)?)?;

    let exclude_ids = resolve_selectors(&cli.exclude, &names, cli.verbose);
    let take_ids = resolve_selectors(&cli.take, &names, cli.verbose);

    if exclude_ids.is_empty() && take_ids.is_empty() {
        bail!("must have --take and/or --exclude species");
    }

    if cli.verbose {
        if !exclude_ids.is_empty() {
            eprintln!(
                "Will exclude {} tax ID{}",
                exclude_ids.len(),
                if exclude_ids.len() == 1 { "" } else { "s" }
            );
        }
        if !take_ids.is_empty() {
            eprintln!(
                "Will take {} tax ID{}",
                take_ids.len(),
                if take_ids.len() == 1 { "" } else { "s" }
            );
        }
    }

    // an empty path value disables that destination
    let take_path = (!cli.out_file.is_empty()).then(|| PathBuf::from(&cli.out_file));
    let exclude_path = (!cli.exclude_file.is_empty()).then(|| PathBuf::from(&cli.exclude_file));

    if take_path.is_none() && exclude_path.is_none() {
        bail!("must have --out_file and/or --exclude_file");
    }

    let assignments = load_assignments(&cli.summary)?;
    let id_to_name = names.invert();
    let filter = TaxonFilter::new(take_ids, exclude_ids);

    let mut take_out = take_path.as_deref().map(open_writer).transpose()?;
    let mut exclude_out = exclude_path.as_deref().map(open_writer).transpose()?;

    let mut num_taken = 0_u64;
    let mut num_excluded = 0_u64;

    for_each_record(&cli.fasta, |record| {
        // a read name missing from the summary (or not UTF-8) has no taxID
        // and falls through to a silent skip
        let tax_id = std::str::from_utf8(record.name())
            .ok()
            .and_then(|name| assignments.get(name))
            .map(String::as_str)
            .unwrap_or("");

        match filter.decide(tax_id) {
            Decision::Excluded => {
                num_excluded += 1;
                if cli.verbose {
                    let species = id_to_name.get(tax_id).map(String::as_str).unwrap_or("NA");
                    eprintln!(
                        "{num_excluded:5}: EXCLUDE {} = {tax_id} ({species})",
                        String::from_utf8_lossy(record.name())
                    );
                }
                if let Some(out) = exclude_out.as_mut() {
                    write_record(out.as_mut(), &record)?;
                }
            }
            Decision::Taken => {
                num_taken += 1;
                if cli.verbose {
                    let species = id_to_name.get(tax_id).map(String::as_str).unwrap_or("NA");
                    eprintln!(
                        "{num_taken:5}: TAKE {} = {tax_id} ({species})",
                        String::from_utf8_lossy(record.name())
                    );
                }
                if let Some(out) = take_out.as_mut() {
                    write_record(out.as_mut(), &record)?;
                }
            }
            Decision::Skipped => {}
        }

        Ok(())
    })?;

    if let Some(out) = exclude_out.as_mut() {
        out.flush()?;
    }
    if let Some(out) = take_out.as_mut() {
        out.flush()?;
    }

    let mut parts = Vec::new();
    if let Some(path) = &exclude_path {
        parts.push(format!(
            "{} to \"{}\"",
            group_thousands(num_excluded),
            path.display()
        ));
    }
    if let Some(path) = &take_path {
        parts.push(format!(
            "{} to \"{}\"",
            group_thousands(num_taken),
            path.display()
        ));
    }
    println!("Done, wrote {}.", parts.join(", "));

    Ok(())
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
