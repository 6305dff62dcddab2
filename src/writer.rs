use crate::fastx::ReadRecord;
use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn open_writer(path: &Path) -> Result<Box<dyn Write>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let buffered = BufWriter::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzEncoder::new(buffered, Compression::default())))
    } else {
        Ok(Box::new(buffered))
    }
}

// Records keep their own format: FASTA without qualities, FASTQ with.
pub fn write_record(writer: &mut dyn Write, record: &ReadRecord) -> Result<()> {
    match &record.qual {
        None => {
            writer.write_all(b">")?;
            writer.write_all(&record.id)?;
            writer.write_all(b"\n")?;
            writer.write_all(&record.seq)?;
            writer.write_all(b"\n")?;
        }
        Some(qual) => {
            writer.write_all(b"@")?;
            writer.write_all(&record.id)?;
            writer.write_all(b"\n")?;
            writer.write_all(&record.seq)?;
            writer.write_all(b"\n+\n")?;
            writer.write_all(qual)?;
            writer.write_all(b"\n")?;
        }
    }

    Ok(())
}
