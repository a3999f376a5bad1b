use std::path::Path;

use crate::models::Vocabulary;

const COL_COUNT: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Validation(String),
}

/// Read a seed vocabulary from a headerless `label,payload` CSV file.
pub fn read_csv(file_path: &Path) -> Result<Vocabulary, ImportError> {
    log::info!("importing vocabulary from {} ...", file_path.display());

    let file = std::fs::File::open(file_path)?;
    read(file)
}

fn read<R: std::io::Read>(r: R) -> Result<Vocabulary, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(r);

    let mut out = Vocabulary::new();
    let mut n = 0;

    for result in reader.records() {
        let record = result?;
        n += 1;

        if record.len() != COL_COUNT {
            return Err(ImportError::Validation(format!(
                "line {}: expected {} columns, got {}",
                n,
                COL_COUNT,
                record.len()
            )));
        }

        let label = &record[0];
        let payload = &record[1];
        if label.is_empty() || payload.is_empty() {
            log::warn!("line {}: empty label or payload, skipping", n);
            continue;
        }

        out.insert(label.to_string(), payload.to_string());
    }

    log::info!("finished. imported {} entries", out.len());
    Ok(out)
}
