//! Tabulated report data and its CSV interchange form.

use serde::Serialize;

use crate::error::{Error, Result};

/// A header row plus data rows, ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tabulation {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Tabulation {
    #[must_use]
    pub fn new(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows,
        }
    }

    /// Write the table as CSV: header first, one line per row.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        for record in std::iter::once(&self.headers).chain(&self.rows) {
            let line: Vec<String> = record.iter().map(|field| quote(field)).collect();
            csv.push_str(&line.join(","));
            csv.push('\n');
        }
        csv
    }

    /// Read CSV written by [`Tabulation::to_csv`] or a spreadsheet.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] for empty input, an unterminated quote, or a
    /// row whose width differs from the header.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut records = parse_records(text)?.into_iter();
        let headers = records
            .next()
            .ok_or_else(|| Error::Parse("CSV has no header row".to_string()))?;

        let rows: Vec<Vec<String>> = records.collect();
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(Error::Parse(format!(
                "CSV row {} has {} fields, expected {}",
                index + 1,
                row.len(),
                headers.len()
            )));
        }

        Ok(Self { headers, rows })
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::Parse("CSV ends inside a quoted field".to_string()));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}
