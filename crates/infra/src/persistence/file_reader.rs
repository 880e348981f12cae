// crates/infra/src/persistence/file_reader.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use zipf_domain::NormalizedEntry;
use zipf_shared_kernel::{InfraResult, InfrastructureError, Occurrences, Percentage};

/// Load normalized entries from a counts file.
///
/// Lines beginning with `#` and blank lines are skipped; every other line
/// must hold exactly three whitespace-separated fields: word, integer
/// count, float percentage. Record order is preserved verbatim. A
/// malformed line fails the whole load with its 1-based line number and
/// content.
pub fn load_word_counts(path: &Path) -> InfraResult<Vec<NormalizedEntry>> {
    let file = File::open(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        entries.push(parse_record(&line).map_err(|reason| InfrastructureError::Parse {
            path: path.to_path_buf(),
            line_number: index + 1,
            line: line.clone(),
            reason,
        })?);
    }
    Ok(entries)
}

fn parse_record(line: &str) -> std::result::Result<NormalizedEntry, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [word, count, percentage] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    let count: u64 = count
        .parse()
        .map_err(|e| format!("invalid count '{count}': {e}"))?;
    let percentage: f64 = percentage
        .parse()
        .map_err(|e| format!("invalid percentage '{percentage}': {e}"))?;

    Ok(NormalizedEntry {
        word: (*word).to_owned(),
        count: Occurrences::new(count),
        percentage: Percentage::new(percentage),
    })
}
