//! Cleaned flat table CSV output

use crate::model::FlatRow;
use crate::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One CSV row with the missing-value substitutions applied
#[derive(Debug, Serialize)]
struct CleanedRow<'a> {
    category: &'a str,
    title: &'a str,
    price: f64,
    availability: u32,
    description: &'a str,
}

/// Writes the flat table as delimited UTF-8 text with a header row.
///
/// Unknown prices and availabilities are written as zero, unknown
/// descriptions as empty text, matching the substitutions the statistics
/// are computed over.
pub fn write_cleaned_table(rows: &[FlatRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(CleanedRow {
            category: &row.category,
            title: &row.title,
            price: row.price_filled(),
            availability: row.availability_filled(),
            description: row.description_filled(),
        })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_cleaned_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cleaned_books.csv");

        let rows = vec![
            FlatRow {
                category: "Fiction".to_string(),
                title: "A".to_string(),
                price: Some(10.0),
                availability: Some(5),
                description: Some("d1".to_string()),
            },
            FlatRow {
                category: "Fiction".to_string(),
                title: "B".to_string(),
                price: None,
                availability: Some(2),
                description: None,
            },
        ];

        write_cleaned_table(&rows, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "category,title,price,availability,description");
        assert_eq!(lines[1], "Fiction,A,10.0,5,d1");
        // Substituted values for the unknown price and description
        assert_eq!(lines[2], "Fiction,B,0.0,2,");
    }
}
