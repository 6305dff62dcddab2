use anyhow::{Context, Result, bail};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct NameTable {
    name_to_id: HashMap<String, String>,
    known_ids: HashSet<String>,
}

impl NameTable {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut lines = text.lines();
        let header = lines
            .next()
            .with_context(|| format!("{} is empty", path.display()))?;
        let (name_col, id_col) = required_columns(header, "name", "taxID", path)?;

        let mut name_to_id = HashMap::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let (Some(name), Some(id)) = (fields.get(name_col), fields.get(id_col)) else {
                continue;
            };
            if name.is_empty() || id.is_empty() {
                continue;
            }
            // duplicate names: last row wins
            name_to_id.insert(name.to_lowercase(), (*id).to_string());
        }

        Ok(Self::from_map(name_to_id))
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let name_to_id = entries
            .into_iter()
            .map(|(name, id)| (name.into().to_lowercase(), id.into()))
            .collect();
        Self::from_map(name_to_id)
    }

    fn from_map(name_to_id: HashMap<String, String>) -> Self {
        let known_ids = name_to_id.values().cloned().collect();
        Self {
            name_to_id,
            known_ids,
        }
    }

    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }

    pub fn is_known_id(&self, id: &str) -> bool {
        self.known_ids.contains(id)
    }

    pub fn names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.name_to_id
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    // Lossy: names sharing a taxID collide and an arbitrary one survives.
    // Diagnostic display only, never matching logic.
    pub fn invert(&self) -> HashMap<String, String> {
        self.name_to_id
            .iter()
            .map(|(name, id)| (id.clone(), name.clone()))
            .collect()
    }
}

pub fn name_table_path(sum_file: &Path) -> Result<PathBuf> {
    if sum_file.extension().is_none_or(|ext| ext != "sum") {
        bail!(
            "--summary ({}) does not end with \".sum\"",
            sum_file.display()
        );
    }

    let tsv_file = sum_file.with_extension("tsv");
    if !tsv_file.is_file() {
        bail!("cannot find expected TSV file ({})", tsv_file.display());
    }

    Ok(tsv_file)
}

pub fn load_assignments(sum_file: &Path) -> Result<HashMap<String, String>> {
    let text = fs::read_to_string(sum_file)
        .with_context(|| format!("failed to read {}", sum_file.display()))?;
    let mut lines = text.lines();
    let header = lines
        .next()
        .with_context(|| format!("{} is empty", sum_file.display()))?;
    let (read_col, id_col) = required_columns(header, "readID", "taxID", sum_file)?;

    let mut read_to_tax = HashMap::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let (Some(read_id), Some(tax_id)) = (fields.get(read_col), fields.get(id_col)) else {
            continue;
        };
        if read_id.is_empty() {
            continue;
        }
        // taxIDs stay opaque here; validity is checked at classification time
        read_to_tax.insert((*read_id).to_string(), (*tax_id).to_string());
    }

    Ok(read_to_tax)
}

fn required_columns(header: &str, first: &str, second: &str, path: &Path) -> Result<(usize, usize)> {
    let columns: Vec<&str> = header.split('\t').map(str::trim).collect();

    let index_of = |wanted: &str| -> Result<usize> {
        columns
            .iter()
            .position(|c| *c == wanted)
            .with_context(|| format!("{} is missing required column \"{wanted}\"", path.display()))
    };

    Ok((index_of(first)?, index_of(second)?))
}
