//! Sample ingestion from delimited text.
//!
//! The loader turns a comma-separated file into one flat 1-D sample sequence:
//! every field that parses as a float is kept, in reading order, regardless of
//! which row or column it came from. Non-numeric fields (header rows, labels)
//! and blank fields are skipped. Validation of the resulting values (finite,
//! at least two) happens in `SampleSet::new`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::SampleSet;
use crate::error::{Error, Result};

/// Load a sample set from a CSV file.
pub fn load_samples(path: &Path) -> Result<SampleSet> {
    let file = File::open(path).map_err(|e| {
        Error::Io(format!("failed to open '{}': {e}", path.display()))
    })?;
    read_samples(file)
}

/// Read a sample set from any delimited-text source.
pub fn read_samples<R: Read>(reader: R) -> Result<SampleSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| Error::Io(format!("CSV parse error: {e}")))?;
        for field in record.iter() {
            if field.is_empty() {
                continue;
            }
            if let Ok(v) = field.parse::<f64>() {
                values.push(v);
            }
        }
    }

    if values.is_empty() {
        return Err(Error::InvalidInput(
            "no numeric samples found in input".to_string(),
        ));
    }
    SampleSet::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_single_column() {
        let samples = read_samples("3.0\n1.0\n2.0\n".as_bytes()).unwrap();
        assert_eq!(samples.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn flattens_multiple_columns_and_skips_headers() {
        let input = "time,stress\n1.5,2.5\n3.5,4.5\n";
        let samples = read_samples(input.as_bytes()).unwrap();
        assert_eq!(samples.values(), &[1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn skips_blank_fields_and_ragged_rows() {
        let input = "1.0,,2.0\n3.0\n";
        let samples = read_samples(input.as_bytes()).unwrap();
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn no_numeric_fields_is_invalid_input() {
        let err = read_samples("a,b\nc,d\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_samples(Path::new("/nonexistent/samples.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
