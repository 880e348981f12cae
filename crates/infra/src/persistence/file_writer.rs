// crates/infra/src/persistence/file_writer.rs
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use zipf_domain::NormalizedEntry;
use zipf_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        // Unique temp file name in the same directory so the rename stays on
        // one filesystem. PID + current time nanos keeps name creation cheap.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();

        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        // Attempt to sync the parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

/// Persist normalized entries in the caller-given order, one record per
/// line. The write is all-or-nothing: a failed run leaves no partial file.
pub fn save_word_counts(path: &Path, entries: &[NormalizedEntry]) -> InfraResult<()> {
    let mut data = String::new();
    for entry in entries {
        // writeln! to a String cannot fail.
        let _ = writeln!(data, "{} {} {}", entry.word, entry.count, entry.percentage);
    }

    FileWriter::atomic_write(path, data.as_bytes()).map_err(|source| {
        InfrastructureError::FileWrite { path: path.to_path_buf(), source }
    })
}
