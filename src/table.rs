use std::path::Path;

use crate::error::{NormalizeError, Result};
use crate::models::ClassificationResult;

/// Header row of the exported table.
pub const OUTPUT_HEADER: [&str; 2] = ["original_str", "regexp_str"];

/// CSV dialect for the input table.
#[derive(Debug, Clone)]
pub struct InputFormat {
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for InputFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
        }
    }
}

/// Load every descriptor from `path`.
///
/// Each field of each row is one descriptor; rows with several fields are
/// flattened in row-major order. Rows may have differing lengths. The whole
/// file is read before anything is returned, so a bad row fails the load.
pub fn load_descriptors(path: &Path, format: &InputFormat) -> Result<Vec<String>> {
    let input_err = |source| NormalizeError::InputAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(format.has_headers)
        .flexible(true)
        .from_path(path)
        .map_err(input_err)?;

    let mut descriptors = Vec::new();
    for record in reader.records() {
        let record = record.map_err(input_err)?;
        descriptors.extend(record.iter().map(str::to_string));
    }
    Ok(descriptors)
}

/// Write `results` to `path` in the order given, header first.
pub fn export_results(path: &Path, results: &[ClassificationResult]) -> Result<()> {
    let output_err = |source| NormalizeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(output_err)?;
    writer.write_record(OUTPUT_HEADER).map_err(output_err)?;
    for result in results {
        writer
            .write_record([result.original.as_str(), result.label()])
            .map_err(output_err)?;
    }
    writer.flush().map_err(|e| output_err(csv::Error::from(e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rank, Resolution};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_single_column() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "Ph.D. - PHD").unwrap();
        writeln!(f, "\"Master of Science, Biology\"").unwrap();
        writeln!(f, "some college").unwrap();

        let descriptors = load_descriptors(f.path(), &InputFormat::default()).unwrap();
        assert_eq!(
            descriptors,
            vec!["Ph.D. - PHD", "Master of Science, Biology", "some college"]
        );
    }

    #[test]
    fn test_load_flattens_rows() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "degree").unwrap();
        writeln!(f, "MBA;JD").unwrap();
        writeln!(f, "PhD").unwrap();

        let format = InputFormat {
            delimiter: b';',
            has_headers: true,
        };
        let descriptors = load_descriptors(f.path(), &format).unwrap();
        assert_eq!(descriptors, vec!["MBA", "JD", "PhD"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_descriptors(&dir.path().join("nope.csv"), &InputFormat::default())
            .unwrap_err();
        assert!(matches!(err, NormalizeError::InputAccess { .. }));
    }

    #[test]
    fn test_export() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let results = vec![
            ClassificationResult {
                original: "Ph.D. - PHD".to_string(),
                rank: Rank::Phd,
                resolution: Resolution::Abbreviation,
            },
            ClassificationResult {
                original: "some college".to_string(),
                rank: Rank::Invalid,
                resolution: Resolution::Unranked,
            },
        ];

        export_results(&out, &results).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "original_str,regexp_str\nPh.D. - PHD,PHD\nsome college,\n"
        );
    }

    #[test]
    fn test_export_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("out.csv");
        let err = export_results(&out, &[]).unwrap_err();
        assert!(matches!(err, NormalizeError::OutputWrite { .. }));
    }
}
