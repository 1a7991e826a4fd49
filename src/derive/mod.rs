//! Field derivation engine.
//!
//! Every derived column is a pure function of one [`Record`]. The functions
//! here only read source columns and return the new value; [`derive_all`]
//! writes them back in output order. Nothing touches the network or disk.
//!
//! Empty or absent source values never fail: they omit the clause they
//! would have produced.
//!
//! # Example
//!
//! ```
//! use voucherkit::derive::derive_all;
//! use voucherkit::record::Record;
//!
//! let mut record = Record::from_pairs([("Landowner", "Jones"), ("catalogNumber", "DBG001234")]);
//! derive_all(&mut record);
//! assert_eq!(record.get("locationRemarks"), "Landowner: Jones.");
//! assert_eq!(record.get("otherCatalogNumbers"), "1234");
//! ```

pub mod descriptors;
pub mod text;

pub use descriptors::{description, dynamic_properties, Descriptor, DESCRIPTORS};
pub use text::{title_case, trim_list_artifacts};

use crate::columns;
use crate::record::Record;

/// Base URL of iNaturalist observation pages.
pub const INATURALIST_OBSERVATION_URL: &str = "https://inaturalist.org/observations/";

/// Number of leading characters of `catalogNumber` that form the
/// institutional prefix (e.g. `DBG00`).
pub const CATALOG_PREFIX_LEN: usize = 5;

/// Derive `habitat` from the plants recorded nearby.
pub fn habitat(record: &Record) -> String {
    labelled(record, columns::PLANTS_NEARBY, "Plants nearby", ". ")
}

/// Derive `dataGeneralizations` from the collecting permit.
pub fn data_generalizations(record: &Record) -> String {
    labelled(record, columns::PERMIT, "Permit", ".")
}

/// Derive `locationRemarks` from the landowner.
pub fn location_remarks(record: &Record) -> String {
    labelled(record, columns::LANDOWNER, "Landowner", ".")
}

/// Derive `occurrenceRemarks`: project title, collector notes and a link to
/// the iNaturalist observation.
pub fn occurrence_remarks(record: &Record) -> String {
    let mut remarks = String::new();

    let title = record.get(columns::PROJECT_TITLE);
    if !title.is_empty() {
        remarks.push_str(&title_case(title));
        remarks.push_str(". ");
    }

    let notes = record.get(columns::COLLECTOR_NOTES);
    if !notes.is_empty() {
        remarks.push_str(&title_case(notes));
        remarks.push_str(". ");
    }

    let id = record.get(columns::INATURALIST_ID);
    if !id.is_empty() {
        remarks.push_str(&inaturalist_link(id));
    }

    remarks
}

/// HTML anchor pointing at an iNaturalist observation.
pub fn inaturalist_link(id: &str) -> String {
    format!(
        "<a href='{url}{id}' target='_blank' style='color: blue';>iNaturalist Record: {id}</a>.",
        url = INATURALIST_OBSERVATION_URL,
        id = id
    )
}

/// Derive the updated `associatedTaxa`, appending the host when recorded.
///
/// Without a host the existing value is returned unchanged.
pub fn associated_taxa(record: &Record) -> String {
    let existing = record.get(columns::ASSOCIATED_TAXA);
    let host = record.get(columns::HOST);
    if host.is_empty() {
        return existing.to_string();
    }

    let joined = format!("{}, host: {}", existing, host);
    trim_list_artifacts(&joined).to_string()
}

/// Derive `otherCatalogNumbers`: the catalog number without its
/// institutional prefix.
pub fn other_catalog_numbers(record: &Record) -> String {
    record
        .get(columns::CATALOG_NUMBER)
        .chars()
        .skip(CATALOG_PREFIX_LEN)
        .collect()
}

/// Compute every derived column and write it into `record`.
///
/// `associatedTaxa` is updated in place; the other columns are created or
/// overwritten.
pub fn derive_all(record: &mut Record) {
    let derived = [
        (columns::HABITAT, habitat(record)),
        (columns::DATA_GENERALIZATIONS, data_generalizations(record)),
        (columns::LOCATION_REMARKS, location_remarks(record)),
        (columns::OCCURRENCE_REMARKS, occurrence_remarks(record)),
        (columns::DESCRIPTION, description(record)),
        (columns::DYNAMIC_PROPERTIES, dynamic_properties(record)),
        (columns::ASSOCIATED_TAXA, associated_taxa(record)),
        (columns::OTHER_CATALOG_NUMBERS, other_catalog_numbers(record)),
    ];

    for (column, value) in derived {
        record.set(column, value);
    }
}

fn labelled(record: &Record, column: &str, label: &str, terminator: &str) -> String {
    let value = record.get(column);
    if value.is_empty() {
        String::new()
    } else {
        format!("{}: {}{}", label, value, terminator)
    }
}
