use crate::error::{Error, Result};
use crate::reservoir::Reservoir;
use crate::{binary, text};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::iter::FromIterator;
use std::path::Path;
use std::slice;
use tracing::{debug, info, warn};

/// Ordered, owning collection of reservoirs.
///
/// Insertion order is the order used for listing and for both persisted forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Reservoir>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { records: vec![] }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stores a copy of `record` at the end; the caller keeps its own.
    pub fn append(&mut self, record: &Reservoir) {
        self.records.push(record.clone());
        debug!(name = record.name(), len = self.records.len(), "appended reservoir");
    }

    /// Removes and returns the record at `index`, shifting later records down.
    ///
    /// An index outside `[0, len)` leaves the catalog untouched and is
    /// reported as [`Error::IndexOutOfBounds`].
    pub fn remove_at(&mut self, index: usize) -> Result<Reservoir> {
        let len = self.records.len();
        if index >= len {
            warn!(index, len, "ignoring removal outside catalog bounds");
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let removed = self.records.remove(index);
        debug!(name = removed.name(), index, "removed reservoir");
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Option<&Reservoir> {
        self.records.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Reservoir> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Reservoir] {
        &self.records
    }

    /// Numbered listing, one block per record, numbered from 1.
    pub fn render(&self) -> String {
        self.iter()
            .enumerate()
            .map(|(i, r)| format!("Reservoir #{}:\n{}\n", i + 1, r.render()))
            .collect()
    }

    pub fn write_text<W: Write>(&self, mut sink: W) -> Result<()> {
        for r in &self.records {
            sink.write_all(r.encode_text().as_bytes())?;
        }
        sink.flush()?;
        Ok(())
    }

    pub fn write_binary<W: Write>(&self, mut sink: W) -> Result<()> {
        for r in &self.records {
            sink.write_all(&r.encode_binary())?;
        }
        sink.flush()?;
        Ok(())
    }

    /// Writes the text form to `path`, replacing any existing file.
    pub fn save_text(&self, path: &Path) -> Result<()> {
        self.write_text(BufWriter::new(File::create(path)?))?;
        info!(records = self.len(), path = %path.display(), "saved text catalog");
        Ok(())
    }

    /// Writes the binary form to `path`, replacing any existing file.
    pub fn save_binary(&self, path: &Path) -> Result<()> {
        self.write_binary(BufWriter::new(File::create(path)?))?;
        info!(records = self.len(), path = %path.display(), "saved binary catalog");
        Ok(())
    }

    pub fn from_text(s: &str) -> Result<Catalog> {
        Ok(text::decode(s)?.into_iter().collect())
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Catalog> {
        Ok(binary::decode(bytes)?.into_iter().collect())
    }

    pub fn load_text(path: &Path) -> Result<Catalog> {
        let catalog = Catalog::from_text(&fs::read_to_string(path)?)?;
        info!(records = catalog.len(), path = %path.display(), "loaded text catalog");
        Ok(catalog)
    }

    pub fn load_binary(path: &Path) -> Result<Catalog> {
        let bytes = fs::read(path)?;
        let catalog = Catalog::from_binary(&bytes)?;
        info!(
            records = catalog.len(),
            bytes = bytes.len(),
            path = %path.display(),
            "loaded binary catalog"
        );
        Ok(catalog)
    }
}

impl FromIterator<Reservoir> for Catalog {
    fn from_iter<I: IntoIterator<Item = Reservoir>>(iter: I) -> Self {
        Catalog {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Reservoir;
    type IntoIter = slice::Iter<'a, Reservoir>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
