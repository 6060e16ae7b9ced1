use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors – fatal load-time failures
// ---------------------------------------------------------------------------

/// Fatal failures when building a catalog. Per-row soft failures (a name
/// with no parseable weight) are represented as `None` fields on the
/// record, never as errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("input table has no 'Name' column (columns: {0:?})")]
    MissingNameColumn(Vec<String>),
}

// ---------------------------------------------------------------------------
// ProductRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog row: the original CSV fields plus the columns derived
/// during processing.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    /// Original column values, aligned with [`Catalog::headers`].
    pub fields: Vec<String>,
    /// Product name with known brand tokens removed.
    pub simplified_name: String,
    /// Raw weight capture, e.g. `"500"` or `"1.5"`. `None` until a pattern
    /// matches; never an empty-string sentinel.
    pub weight: Option<String>,
    /// Captured unit token, lowercased, e.g. `"g"` or `"pack"`.
    pub unit: Option<String>,
    /// Weight converted to kilograms. `None` when the only match was a
    /// count unit, or nothing matched at all.
    pub weight_kg: Option<f64>,
}

impl ProductRecord {
    /// Wrap a raw CSV row. Derived columns start unset.
    pub fn from_fields(fields: Vec<String>) -> Self {
        ProductRecord {
            fields,
            simplified_name: String::new(),
            weight: None,
            unit: None,
            weight_kg: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed catalog: original header row, the index of the `Name`
/// column, and every record in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Original column names, in file order.
    pub headers: Vec<String>,
    /// Position of the `Name` column within `headers`.
    pub name_idx: usize,
    /// All records (rows), in file order.
    pub records: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog from a header row and raw rows. Fails when the
    /// header has no `Name` column.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, CatalogError> {
        let name_idx = headers
            .iter()
            .position(|h| h == "Name")
            .ok_or_else(|| CatalogError::MissingNameColumn(headers.clone()))?;

        let records = rows.into_iter().map(ProductRecord::from_fields).collect();
        Ok(Catalog {
            headers,
            name_idx,
            records,
        })
    }

    /// The original `Name` value of a record.
    pub fn name_of<'a>(&self, record: &'a ProductRecord) -> &'a str {
        record.fields.get(self.name_idx).map_or("", |s| s.as_str())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
