use std::path::Path;

use anyhow::{Context, Result};

use super::model::Catalog;

/// Extra columns appended to the original header on output.
pub const DERIVED_COLUMNS: [&str; 4] = ["SimplifiedName", "Weight", "Unit", "Weight_kg"];

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Load a product catalog from a CSV file.
///
/// Layout: header row with column names, `Name` column required. All other
/// columns are carried through untouched. A missing file, a malformed row,
/// or an absent `Name` column abort the load.
pub fn load_csv(path: &Path) -> Result<Catalog> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    let catalog = Catalog::new(headers, rows)?;
    log::debug!("loaded {} rows from {}", catalog.len(), path.display());
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Persist a catalog to a CSV file: the original columns followed by the
/// derived `SimplifiedName, Weight, Unit, Weight_kg` columns, one row per
/// record, no index column.
pub fn write_csv(catalog: &Catalog, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    let mut header = catalog.headers.clone();
    header.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));
    writer.write_record(&header).context("writing CSV header")?;

    for record in &catalog.records {
        let mut row = record.fields.clone();
        row.push(record.simplified_name.clone());
        row.push(record.weight.clone().unwrap_or_default());
        row.push(record.unit.clone().unwrap_or_default());
        row.push(record.weight_kg.map(|w| w.to_string()).unwrap_or_default());
        writer.write_record(&row).context("writing CSV row")?;
    }

    writer.flush().context("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_requires_name_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_name.csv");
        std::fs::write(&path, "Title,Price\nMilk,3.99\n").unwrap();
        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn load_missing_file_is_fatal() {
        assert!(load_csv(Path::new("definitely/not/here.csv")).is_err());
    }

    #[test]
    fn load_preserves_columns_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Name,Price,Aisle").unwrap();
        writeln!(file, "Milk 2 L,3.99,Dairy").unwrap();
        writeln!(file, "Bread 675g,2.49,Bakery").unwrap();
        drop(file);

        let catalog = load_csv(&path).unwrap();
        assert_eq!(catalog.headers, vec!["Name", "Price", "Aisle"]);
        assert_eq!(catalog.name_idx, 0);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records[1].fields, vec!["Bread 675g", "2.49", "Bakery"]);
    }
}
