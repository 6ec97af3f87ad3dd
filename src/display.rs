use crate::MetricsRow;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const SPACE_PADDING: usize = 2;

/// Columns holding text rather than numbers; these are left aligned.
const TEXT_COLUMNS: usize = 2;

/// Aligned console rendering of metrics rows.
///
/// Only `URL_ID` is shown until more columns are included:
///
/// ```text
/// URL_ID           POSITIVE SCORE  FOG INDEX
/// ───────────────  ──────────────  ─────────
/// blackassign0001               2      21.20
/// ```
pub struct MetricsTableDisplay<'a> {
    rows: &'a [MetricsRow],
    columns: Vec<usize>,
    precision: usize,
}

impl<'a> MetricsTableDisplay<'a> {
    pub fn new(rows: &'a [MetricsRow]) -> Self {
        MetricsTableDisplay {
            rows,
            columns: vec![0],
            precision: 2,
        }
    }

    /// Include a column by its header name. Unknown names are ignored.
    pub fn include(&mut self, column: &str) -> &mut Self {
        if let Some(idx) = MetricsRow::COLUMNS.iter().position(|c| *c == column) {
            if !self.columns.contains(&idx) {
                self.columns.push(idx);
            }
        }
        self
    }

    /// Include every column in header order.
    pub fn include_all(&mut self) -> &mut Self {
        self.columns = (0..MetricsRow::COLUMNS.len()).collect();
        self
    }

    /// Digits after the decimal point for ratio columns.
    pub fn precision(&mut self, precision: usize) -> &mut Self {
        self.precision = precision;
        self
    }

    fn cell(&self, row: &MetricsRow, idx: usize) -> String {
        let ratio = |value: f64| format!("{:.*}", self.precision, value);
        match idx {
            0 => row.url_id.clone(),
            1 => row.url.clone(),
            2 => row.positive_score.to_string(),
            3 => row.negative_score.to_string(),
            4 => ratio(row.polarity_score),
            5 => ratio(row.subjectivity_score),
            6 => ratio(row.avg_sentence_length),
            7 => ratio(row.percentage_complex_words),
            8 => ratio(row.fog_index),
            9 => ratio(row.avg_words_per_sentence),
            10 => row.complex_word_count.to_string(),
            11 => row.word_count.to_string(),
            12 => ratio(row.syllables_per_word),
            13 => row.personal_pronouns.to_string(),
            _ => ratio(row.avg_word_length),
        }
    }
}

fn write_line(
    line: &mut String,
    cells: &[String],
    columns: &[usize],
    widths: &[usize],
) -> std::fmt::Result {
    for (pos, cell) in cells.iter().enumerate() {
        if pos > 0 {
            line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
        }
        let padding = widths[pos] - UnicodeWidthStr::width(cell.as_str());
        let is_last = pos + 1 == cells.len();
        if columns[pos] < TEXT_COLUMNS {
            line.write_str(cell)?;
            if !is_last {
                line.extend(std::iter::repeat(' ').take(padding));
            }
        } else {
            line.extend(std::iter::repeat(' ').take(padding));
            line.write_str(cell)?;
        }
    }
    Ok(())
}

// URL_ID           POSITIVE SCORE  FOG INDEX   - header
// ───────────────  ──────────────  ─────────   - rule, one per column width
// blackassign0001               2      21.20   - text left, numbers right
impl<'a> std::fmt::Display for MetricsTableDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|&idx| MetricsRow::COLUMNS[idx].to_string())
            .collect();
        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| self.columns.iter().map(|&idx| self.cell(row, idx)).collect())
            .collect();

        let mut widths: Vec<usize> = header
            .iter()
            .map(|cell| UnicodeWidthStr::width(cell.as_str()))
            .collect();
        for cells in &body {
            for (pos, cell) in cells.iter().enumerate() {
                widths[pos] = widths[pos].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut line = String::new();
        write_line(&mut line, &header, &self.columns, &widths)?;
        f.write_str(&line)?;

        f.write_char('\n')?;
        for (pos, width) in widths.iter().enumerate() {
            if pos > 0 {
                for _ in 0..SPACE_PADDING {
                    f.write_char(' ')?;
                }
            }
            for _ in 0..*width {
                f.write_char('─')?;
            }
        }

        for cells in &body {
            f.write_char('\n')?;
            line.clear();
            write_line(&mut line, cells, &self.columns, &widths)?;
            f.write_str(&line)?;
        }

        Ok(())
    }
}
