//! Generic file-backed record repository
//!
//! One JSON array file per record kind inside the data directory.
//! Insertion order is preserved across save/load and is the only
//! ordering ever exposed; no sort is applied.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::warn;

use crate::domain::Record;
use crate::error::{Error, Result};

/// File-backed repository for one record kind
///
/// Owns the in-memory collection and the id invariant: ids are unique
/// and form a dense `1..N` sequence after every deletion.
#[derive(Debug)]
pub struct FileRepository<R: Record> {
    path: PathBuf,
    records: Vec<R>,
}

impl<R: Record> FileRepository<R> {
    /// Open the repository inside `data_dir`, creating the directory if
    /// needed. A missing file yields an empty collection; a malformed
    /// file fails with `DataCorruption` and is left untouched on disk.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(R::FILE_NAME);
        let (records, migrated) = Self::load(&path)?;

        let repo = Self { path, records };
        if migrated {
            // One-time id backfill for legacy files; rewrite immediately
            repo.save()?;
        }
        Ok(repo)
    }

    /// Like [`open`](Self::open), but a corrupt file falls back to an
    /// empty collection instead of failing. The bad file is left on disk
    /// for manual inspection and the corruption is logged.
    pub fn open_lenient(data_dir: &Path) -> Result<Self> {
        match Self::open(data_dir) {
            Ok(repo) => Ok(repo),
            Err(Error::DataCorruption { file, reason }) => {
                warn!(
                    "corrupt {} ({}); continuing with an empty {} collection, file kept for inspection",
                    file.display(),
                    reason,
                    R::KIND
                );
                Ok(Self {
                    path: file,
                    records: Vec::new(),
                })
            }
            Err(e) => Err(e),
        }
    }

    fn load(path: &Path) -> Result<(Vec<R>, bool)> {
        if !path.exists() {
            return Ok((Vec::new(), false));
        }
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut records: Vec<R> =
            serde_json::from_reader(reader).map_err(|e| Error::DataCorruption {
                file: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        // Records written before ids existed deserialize with id 0:
        // assign positional 1-based ids across the whole collection.
        let migrated = records.iter().any(|r| r.id() == 0);
        if migrated {
            for (i, record) in records.iter_mut().enumerate() {
                record.set_id(i as u32 + 1);
            }
        }
        Ok((records, migrated))
    }

    /// Ordered read-only view of the collection.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next created record will receive.
    pub fn next_id(&self) -> u32 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a validated record: duplicate-check, assign
    /// `max(existing) + 1`, persist, return the stored record.
    pub fn create(&mut self, mut record: R) -> Result<&R> {
        self.check_duplicate(&record, None)?;
        record.set_id(self.next_id());
        let pos = self.records.len();
        self.records.push(record);
        self.save()?;
        Ok(&self.records[pos])
    }

    /// Replace the record with `id` in place; the id is unchanged and
    /// the record itself is exempt from the duplicate check.
    pub fn update(&mut self, id: u32, mut record: R) -> Result<&R> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::NotFound { kind: R::KIND, id })?;
        self.check_duplicate(&record, Some(id))?;
        record.set_id(id);
        self.records[pos] = record;
        self.save()?;
        Ok(&self.records[pos])
    }

    /// Remove the record with `id`, reindex the remainder to `1..N` in
    /// their current order, persist, and return the removed record.
    pub fn delete(&mut self, id: u32) -> Result<R> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::NotFound { kind: R::KIND, id })?;
        let removed = self.records.remove(pos);
        for (i, record) in self.records.iter_mut().enumerate() {
            record.set_id(i as u32 + 1);
        }
        self.save()?;
        Ok(removed)
    }

    /// Apply `f` to every record in order, then persist once. Used for
    /// collection-wide fixups such as artifact renames after reindexing.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut R)) -> Result<()> {
        for record in &mut self.records {
            f(record);
        }
        self.save()
    }

    /// Serialize the full collection. Writes to a temporary sibling and
    /// renames over the target so a reader never observes a partial file.
    pub fn save(&self) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        {
            let file = File::create(&tmp).map_err(|e| Error::Persistence {
                file: self.path.clone(),
                source: e,
            })?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &self.records)?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| Error::Persistence {
            file: self.path.clone(),
            source: e,
        })
    }

    fn check_duplicate(&self, record: &R, exclude_id: Option<u32>) -> Result<()> {
        let Some(key) = record.unique_key() else {
            return Ok(());
        };
        let folded = key.folded();
        for existing in &self.records {
            if Some(existing.id()) == exclude_id {
                continue;
            }
            if let Some(other) = existing.unique_key() {
                if other.folded() == folded {
                    return Err(Error::Duplicate {
                        field: key.field,
                        value: key.value,
                    });
                }
            }
        }
        Ok(())
    }
}
