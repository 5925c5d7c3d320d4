// src/utils/csv.rs

//! CSV body parsing into header-keyed rows.

use std::sync::Arc;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::models::Row;

/// Parse a CSV body whose first line is the header row.
///
/// Short lines are accepted; their missing columns read as absent. Fields
/// past the last header are dropped. Values are kept untrimmed. A body that
/// is not valid UTF-8 is rejected.
pub fn parse_rows(data: impl AsRef<[u8]>) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_ref());

    let headers: Arc<[String]> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let values = record
            .iter()
            .take(headers.len())
            .map(str::to_string)
            .collect();
        rows.push(Row::new(Arc::clone(&headers), values));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_export() {
        let text = "\"Q No\",\"DISCIPLINA\"\n\"1\",\"LÍNGUA PORTUGUESA\"\n\"2\",\"\"\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("DISCIPLINA"), Some("LÍNGUA PORTUGUESA"));
        assert_eq!(rows[1].get("Q No"), Some("2"));
        assert_eq!(rows[1].get("DISCIPLINA"), Some(""));
        assert_eq!(rows[0].headers(), &["Q No".to_string(), "DISCIPLINA".to_string()]);
    }

    #[test]
    fn test_short_and_long_lines() {
        let text = "MASP,NOME\n100\n200,Bob,extra\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows[0].get("MASP"), Some("100"));
        assert_eq!(rows[0].get("NOME"), None);
        assert_eq!(rows[1].iter().count(), 2);
    }

    #[test]
    fn test_no_trimming() {
        let rows = parse_rows("MASP,NOME\n100 , Ana\n").unwrap();
        assert_eq!(rows[0].get("MASP"), Some("100 "));
        assert_eq!(rows[0].get("NOME"), Some(" Ana"));
    }

    #[test]
    fn test_empty_body() {
        assert!(parse_rows("").unwrap().is_empty());
        assert!(parse_rows("MASP,NOME\n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(parse_rows(b"MASP,NOME\n100,\xff\xfe\n").is_err());
        assert!(parse_rows(b"\xffMASP,NOME\n").is_err());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = parse_rows("a,b\n1,2\n\n3,4\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("a"), Some("3"));
    }
}
