#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write_fasta(path: &Path, records: &[(&str, &str)]) -> Result<()> {
    let mut out = String::new();
    for (id, seq) in records {
        out.push('>');
        out.push_str(id);
        out.push('\n');
        out.push_str(seq);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn write_fastq(path: &Path, records: &[(&str, &str, &str)]) -> Result<()> {
    let mut out = String::new();
    for (id, seq, qual) in records {
        out.push('@');
        out.push_str(id);
        out.push('\n');
        out.push_str(seq);
        out.push_str("\n+\n");
        out.push_str(qual);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// Centrifuge-style .tsv name report with extra columns the parser must skip.
pub fn write_tsv(path: &Path, rows: &[(&str, &str)]) -> Result<()> {
    let mut out = String::from("name\ttaxID\ttaxRank\tgenomeSize\n");
    for (name, tax_id) in rows {
        out.push_str(&format!("{name}\t{tax_id}\tspecies\t0\n"));
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// Centrifuge-style .sum classification report, one row per read.
pub fn write_sum(path: &Path, rows: &[(&str, &str)]) -> Result<()> {
    let mut out = String::from("readID\tseqID\ttaxID\tscore\n");
    for (read_id, tax_id) in rows {
        out.push_str(&format!("{read_id}\tcid|{tax_id}\t{tax_id}\t100\n"));
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
