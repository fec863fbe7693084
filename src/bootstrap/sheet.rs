//! Tabular reference-data reader for the chart-of-accounts sheet. The
//! exported sheet carries title and annotation rows before the data starts,
//! so a fixed number of leading rows is dropped and the rest are mapped by
//! column position.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::model::ChartOfAccount;

/// Leading header/annotation rows in the exported sheet.
pub const CHART_SHEET_SKIP_ROWS: usize = 5;

/// Column positions: code, description, nature, classification, dept status.
pub fn parse_chart_rows<R: Read>(reader: R) -> Result<Vec<ChartOfAccount>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut accounts = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed sheet row {}", index + 1))?;
        if index < CHART_SHEET_SKIP_ROWS {
            continue;
        }

        let field = |position: usize| record.get(position).unwrap_or("").trim().to_string();
        if field(0).is_empty() {
            continue; // trailing blank lines in exports
        }

        accounts.push(ChartOfAccount::new(
            field(0),
            field(1),
            field(2),
            field(3),
            field(4),
        ));
    }

    Ok(accounts)
}

pub fn load_chart_sheet(path: &str) -> Result<Vec<ChartOfAccount>> {
    let file = File::open(Path::new(path))
        .with_context(|| format!("Failed to open chart-of-accounts sheet at {}", path))?;
    parse_chart_rows(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
MICROFINANCE BACK OFFICE,,,,
CHART OF ACCOUNTS,,,,
Prepared by: Accounting,,,,
Updated: 2024-01-31,,,,
CODE,DESCRIPTION,NATURE,CLASSIFICATION,DEPT STATUS
1010,Loans Receivable,Debit,Asset,Active
4010,Interest Income,Credit,Income,Active
";

    #[test]
    fn drops_exactly_five_leading_rows() {
        let accounts = parse_chart_rows(SHEET.as_bytes()).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].code, "1010");
        assert_eq!(accounts[0].description, "Loans Receivable");
        assert_eq!(accounts[0].nature, "Debit");
        assert_eq!(accounts[0].classification, "Asset");
        assert_eq!(accounts[0].dept_status, "Active");
        assert_eq!(accounts[1].code, "4010");
    }

    #[test]
    fn skips_trailing_blank_lines() {
        let sheet = format!("{}\n,,,,\n", SHEET.trim_end());
        let accounts = parse_chart_rows(sheet.as_bytes()).unwrap();
        assert_eq!(accounts.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_chart_sheet("no/such/sheet.csv").is_err());
    }
}
