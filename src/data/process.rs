use std::path::Path;

use anyhow::Result;

use crate::brands::simplify_name;
use crate::weight::{extract_weight, to_kilograms};

use super::loader;
use super::model::Catalog;

/// Row counts from a completed processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Rows present in the input table.
    pub loaded: usize,
    /// Rows with a parseable mass weight, written to the output table.
    pub kept: usize,
}

/// Transform a loaded catalog in place.
///
/// For every record: compute the simplified name and parse a weight, both
/// from the original `Name` value. Records that end up without a kilogram
/// weight (no match, or a count-unit match) are removed. A record that was
/// matched only by the count pattern still gets its raw weight and unit
/// recorded before it is discarded.
pub fn transform(catalog: &mut Catalog) {
    for i in 0..catalog.records.len() {
        let name = catalog.name_of(&catalog.records[i]).to_string();
        let record = &mut catalog.records[i];

        record.simplified_name = simplify_name(&name);

        if let Some((weight, unit)) = extract_weight(&name) {
            record.weight_kg = to_kilograms(&weight, &unit);
            record.weight = Some(weight);
            record.unit = Some(unit);
        }
    }

    catalog.records.retain(|r| r.weight_kg.is_some());
}

/// End-to-end batch run: load the input table, transform it, and persist
/// the surviving rows. All-or-nothing; a load or write failure aborts with
/// no partial output.
pub fn process_catalog(input: &Path, output: &Path) -> Result<ProcessSummary> {
    let mut catalog = loader::load_csv(input)?;
    let loaded = catalog.len();

    transform(&mut catalog);
    let kept = catalog.len();
    log::info!("{kept} of {loaded} rows had a parseable weight");

    loader::write_csv(&catalog, output)?;
    Ok(ProcessSummary { loaded, kept })
}
