//! Metrics table output, as CSV or an `.xlsx` workbook.

use crate::{BatchError, BatchResult};
use layered_metrics::MetricsRow;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::fs::File;
use std::io;
use std::path::Path;

/// Write the metrics table, choosing the format from the file extension.
pub fn write_metrics_table(path: &Path, rows: &[MetricsRow]) -> BatchResult<()> {
    let is_xlsx = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("xlsx"));
    if is_xlsx {
        write_metrics_xlsx(path, rows)
    } else {
        write_metrics_csv(path, rows)
    }
}

/// Write the header and one record per row.
///
/// The header is written even when `rows` is empty.
pub fn write_metrics<W: io::Write>(writer: W, rows: &[MetricsRow]) -> Result<(), csv::Error> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(MetricsRow::COLUMNS)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the metrics table to a CSV file.
pub fn write_metrics_csv(path: &Path, rows: &[MetricsRow]) -> BatchResult<()> {
    let to_error = |message: String| BatchError::Output {
        path: path.display().to_string(),
        message,
    };
    let file = File::create(path).map_err(|e| to_error(e.to_string()))?;
    write_metrics(file, rows).map_err(|e| to_error(e.to_string()))
}

/// Write the metrics table to a single-sheet workbook.
///
/// Identity columns are text cells; every metric is a number cell.
pub fn write_metrics_xlsx(path: &Path, rows: &[MetricsRow]) -> BatchResult<()> {
    build_workbook(rows)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|e| BatchError::Output {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn build_workbook(rows: &[MetricsRow]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in MetricsRow::COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (idx, row) in rows.iter().enumerate() {
        let line = idx as u32 + 1;
        sheet.write_string(line, 0, row.url_id.as_str())?;
        sheet.write_string(line, 1, row.url.as_str())?;
        for (offset, value) in row.values().iter().enumerate() {
            sheet.write_number(line, offset as u16 + 2, *value)?;
        }
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_metrics::DocumentMetrics;

    fn row(url_id: &str) -> MetricsRow {
        let metrics = DocumentMetrics {
            positive_score: 2,
            negative_score: 1,
            polarity_score: 0.25,
            subjectivity_score: 0.5,
            avg_sentence_length: 4.5,
            percentage_complex_words: 12.5,
            fog_index: 6.8,
            avg_words_per_sentence: 4.5,
            complex_word_count: 1,
            word_count: 8,
            syllables_per_word: 1.625,
            personal_pronouns: 3,
            avg_word_length: 5.75,
        };
        MetricsRow::new(url_id, format!("https://example.com/{}", url_id), &metrics)
    }

    #[test]
    fn test_write_rows() {
        let mut out = Vec::new();
        write_metrics(&mut out, &[row("a1"), row("b2")]).unwrap();

        insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r###"
        URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,POLARITY SCORE,SUBJECTIVITY SCORE,AVG SENTENCE LENGTH,PERCENTAGE OF COMPLEX WORDS,FOG INDEX,AVG NUMBER OF WORDS PER SENTENCE,COMPLEX WORD COUNT,WORD COUNT,SYLLABLE PER WORD,PERSONAL PRONOUNS,AVG WORD LENGTH
        a1,https://example.com/a1,2,1,0.25,0.5,4.5,12.5,6.8,4.5,1,8,1.625,3,5.75
        b2,https://example.com/b2,2,1,0.25,0.5,4.5,12.5,6.8,4.5,1,8,1.625,3,5.75
        "###);
    }

    #[test]
    fn test_header_without_rows() {
        let mut out = Vec::new();
        write_metrics(&mut out, &[]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.trim_end(), MetricsRow::COLUMNS.join(","));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_metrics_csv(&path, &[row("a1")]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("URL_ID,URL,"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_write_xlsx_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output Data Structure.xlsx");
        write_metrics_table(&path, &[row("a1"), row("b2")]).unwrap();

        // Workbooks are zip archives.
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_other_extensions_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.txt");
        write_metrics_table(&path, &[row("a1")]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("URL_ID,URL,"));
    }

    #[test]
    fn test_unwritable_xlsx_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.xlsx");
        let err = write_metrics_table(&path, &[row("a1")]).unwrap_err();
        assert!(matches!(err, BatchError::Output { .. }));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.csv");
        let err = write_metrics_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, BatchError::Output { .. }));
    }
}
