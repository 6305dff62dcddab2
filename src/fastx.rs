use anyhow::{Context, Result};
use needletail::parse_fastx_file;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct ReadRecord {
    pub id: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Option<Vec<u8>>,
}

impl ReadRecord {
    // First whitespace-delimited header field, the name Centrifuge reports
    // key reads by.
    pub fn name(&self) -> &[u8] {
        self.id
            .split(|b| b.is_ascii_whitespace())
            .next()
            .unwrap_or(&self.id)
    }
}

pub fn for_each_record<F>(path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(ReadRecord) -> Result<()>,
{
    let mut reader = parse_fastx_file(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;

    while let Some(record) = reader.next() {
        let record = record.with_context(|| format!("failed to parse {}", path.display()))?;
        f(ReadRecord {
            id: record.id().to_vec(),
            seq: record.seq().as_ref().to_vec(),
            qual: record.qual().map(|q| q.to_vec()),
        })?;
    }

    Ok(())
}
