//src/pack/src/writer.rs
use error::{CompendiumError, Result};
use log::{debug, info};
use std::{
    fs,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::entry::Entry;

/// Line-delimited JSON pack file on disk
pub struct PackWriter {
    path: PathBuf,
}

impl PackWriter {
    /// Point the writer at `path`, creating its directory if needed
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(CompendiumError::InvalidPath(path.to_path_buf()));
        }

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !dir.exists() {
                debug!("creating pack directory {}", dir.display());
                fs::create_dir_all(dir)?;
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Write every entry as one compact JSON line, replacing any existing pack.
    ///
    /// The lines go to a sibling `.tmp` file which is renamed over the pack
    /// once everything is flushed.
    pub fn write_entries(&self, entries: &[Entry]) -> Result<usize> {
        let temp_path = self.path.with_extension("tmp");
        {
            let file = fs::File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            for entry in entries {
                serde_json::to_writer(&mut writer, entry)?;
                writer.write_all(b"\n")?;
                debug!("wrote {} [{}] ({})", entry.name, entry.system.quality, entry.id);
            }
            writer.flush()?;
        }

        fs::rename(&temp_path, &self.path)?;
        info!("committed {} entries to {}", entries.len(), self.path.display());

        Ok(entries.len())
    }

    /// Parse a pack back into entries, one per non-empty line
    pub fn read_entries(&self) -> Result<Vec<Entry>> {
        let file = fs::File::open(&self.path)?;
        let mut entries = Vec::new();

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|source| {
                CompendiumError::InvalidRecord {
                    line: index + 1,
                    source,
                }
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
