//! CSV encoding for client-side exports

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export.")]
    NoData,

    #[error("Failed to encode CSV: {0}")]
    Encode(String),
}

/// Types that can be written as a CSV row
pub trait CsvExportable {
    /// Column headers, in row order
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Encode rows with a header line. Fields containing commas, quotes or
/// line breaks are quoted. An empty input produces `ExportError::NoData`.
pub fn encode_csv<T: CsvExportable>(rows: &[T]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(T::headers())
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row.to_csv_row())
            .map_err(|e| ExportError::Encode(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        amount: f64,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.amount.to_string()]
        }
    }

    #[test]
    fn test_empty_rows_is_no_data() {
        let rows: Vec<Line> = Vec::new();
        assert!(matches!(encode_csv(&rows), Err(ExportError::NoData)));
    }

    #[test]
    fn test_plain_rows() {
        let rows = vec![Line { name: "Hotel", amount: 1500.0 }];
        assert_eq!(encode_csv(&rows).unwrap(), "Name,Amount\nHotel,1500\n");
    }

    #[test]
    fn test_separators_and_quotes_are_escaped() {
        let rows = vec![
            Line { name: "ENT & REP, Jakarta", amount: 1.0 },
            Line { name: "say \"hi\"", amount: 2.0 },
            Line { name: "two\nlines", amount: 3.0 },
        ];
        let csv = encode_csv(&rows).unwrap();
        assert!(csv.contains("\"ENT & REP, Jakarta\",1\n"));
        assert!(csv.contains("\"say \"\"hi\"\"\",2\n"));
        assert!(csv.contains("\"two\nlines\",3\n"));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[0][0], "ENT & REP, Jakarta");
        assert_eq!(&records[2][0], "two\nlines");
    }
}
