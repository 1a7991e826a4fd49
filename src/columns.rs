//! Column names read and written by voucherkit.
//!
//! Source column names follow the fungarium data-entry template; derived
//! column names are Darwin Core terms (plus the USGS and GNV extensions).

pub const PLANTS_NEARBY: &str = "plants nearby";
pub const PERMIT: &str = "Permit";
pub const LANDOWNER: &str = "Landowner";
pub const PROJECT_TITLE: &str = "Project Title";
pub const COLLECTOR_NOTES: &str = "collector notes";
pub const INATURALIST_ID: &str = "iNaturalist ID";
pub const HABIT: &str = "habit";
pub const ODOR: &str = "odor";
pub const TASTE: &str = "taste";
pub const SPOROCARP_FORM: &str = "sporocarp form";
pub const PILEUS: &str = "pileus";
pub const CONTEXT: &str = "context";
pub const HYMENOPHORE: &str = "hymenophore";
pub const STIPE: &str = "stipe";
pub const MICRO: &str = "micro";
pub const HOST: &str = "host";
pub const ASSOCIATED_TAXA: &str = "associatedTaxa";
pub const CATALOG_NUMBER: &str = "catalogNumber";
pub const DECIMAL_LONGITUDE: &str = "decimalLongitude";
pub const DECIMAL_LATITUDE: &str = "decimalLatitude";
pub const SCIENTIFIC_NAME: &str = "scientificName";

pub const HABITAT: &str = "habitat";
pub const DATA_GENERALIZATIONS: &str = "dataGeneralizations";
pub const LOCATION_REMARKS: &str = "locationRemarks";
pub const OCCURRENCE_REMARKS: &str = "occurrenceRemarks";
pub const DESCRIPTION: &str = "description";
pub const DYNAMIC_PROPERTIES: &str = "dynamicProperties";
pub const OTHER_CATALOG_NUMBERS: &str = "otherCatalogNumbers";

pub const MINIMUM_ELEVATION: &str = "minimumElevationInMeters_USGS";
pub const GEOREFERENCE_REMARKS: &str = "georeferenceRemarks";
pub const GNV_MATCH_TYPE: &str = "GNVmatchType";
pub const GNV_MATCHED_CANONICAL: &str = "GNVmatchedCanonicalFull";
pub const GNV_IS_SYNONYM: &str = "GNVisSynonym";
pub const GNV_DATA_SOURCE: &str = "GNVdataSourceTitleShort";

/// Columns every input must carry for the field derivations.
pub const REQUIRED_COLUMNS: &[&str] = &[
    PLANTS_NEARBY,
    PERMIT,
    LANDOWNER,
    PROJECT_TITLE,
    COLLECTOR_NOTES,
    INATURALIST_ID,
    HABIT,
    ODOR,
    TASTE,
    SPOROCARP_FORM,
    PILEUS,
    CONTEXT,
    HYMENOPHORE,
    STIPE,
    MICRO,
    HOST,
    ASSOCIATED_TAXA,
    CATALOG_NUMBER,
];

/// Additional input columns needed when web enrichment is enabled.
pub const ENRICHMENT_SOURCE_COLUMNS: &[&str] =
    &[DECIMAL_LONGITUDE, DECIMAL_LATITUDE, SCIENTIFIC_NAME];

/// Derived columns appended to every output, in output order.
pub const DERIVED_COLUMNS: &[&str] = &[
    HABITAT,
    DATA_GENERALIZATIONS,
    LOCATION_REMARKS,
    OCCURRENCE_REMARKS,
    DESCRIPTION,
    DYNAMIC_PROPERTIES,
    OTHER_CATALOG_NUMBERS,
];

/// Columns appended after [`DERIVED_COLUMNS`] when enrichment is enabled.
pub const ENRICHMENT_COLUMNS: &[&str] = &[
    MINIMUM_ELEVATION,
    GEOREFERENCE_REMARKS,
    GNV_MATCH_TYPE,
    GNV_MATCHED_CANONICAL,
    GNV_IS_SYNONYM,
    GNV_DATA_SOURCE,
];

/// Input columns required for a run with or without enrichment.
pub fn required_columns(enrich: bool) -> Vec<&'static str> {
    let mut columns = REQUIRED_COLUMNS.to_vec();
    if enrich {
        columns.extend_from_slice(ENRICHMENT_SOURCE_COLUMNS);
    }
    columns
}

/// Columns appended to the input header, in output order.
pub fn appended_columns(enrich: bool) -> Vec<&'static str> {
    let mut columns = DERIVED_COLUMNS.to_vec();
    if enrich {
        columns.extend_from_slice(ENRICHMENT_COLUMNS);
    }
    columns
}

/// Required columns absent from `header`, in requirement order.
pub fn missing_columns(header: &[String], enrich: bool) -> Vec<String> {
    required_columns(enrich)
        .into_iter()
        .filter(|required| !header.iter().any(|column| column == required))
        .map(String::from)
        .collect()
}

/// Compute the output header: input columns, then appended columns not
/// already present in the input.
pub fn output_header(input: &[String], enrich: bool) -> Vec<String> {
    let mut header = input.to_vec();
    for column in appended_columns(enrich) {
        if !header.iter().any(|existing| existing == column) {
            header.push(column.to_string());
        }
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_header(enrich: bool) -> Vec<String> {
        required_columns(enrich)
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn enrichment_adds_source_columns() {
        assert_eq!(required_columns(false).len(), 18);
        assert_eq!(required_columns(true).len(), 21);
        assert!(required_columns(true).contains(&SCIENTIFIC_NAME));
    }

    #[test]
    fn appended_columns_in_output_order() {
        assert_eq!(
            appended_columns(false),
            vec![
                "habitat",
                "dataGeneralizations",
                "locationRemarks",
                "occurrenceRemarks",
                "description",
                "dynamicProperties",
                "otherCatalogNumbers",
            ]
        );
        let enriched = appended_columns(true);
        assert_eq!(enriched.len(), 13);
        assert_eq!(enriched[7], "minimumElevationInMeters_USGS");
        assert_eq!(enriched[12], "GNVdataSourceTitleShort");
    }

    #[test]
    fn missing_columns_reports_absent_names() {
        let mut header = full_header(false);
        header.retain(|c| c != HOST && c != MICRO);
        assert_eq!(missing_columns(&header, false), vec!["micro", "host"]);
    }

    #[test]
    fn missing_columns_checks_coordinates_only_when_enriching() {
        let header = full_header(false);
        assert!(missing_columns(&header, false).is_empty());
        assert_eq!(
            missing_columns(&header, true),
            vec!["decimalLongitude", "decimalLatitude", "scientificName"]
        );
    }

    #[test]
    fn output_header_appends_after_input() {
        let input = vec!["id".to_string(), "host".to_string()];
        let header = output_header(&input, false);
        assert_eq!(header[0], "id");
        assert_eq!(header[1], "host");
        assert_eq!(header[2], "habitat");
        assert_eq!(header.len(), 9);
    }

    #[test]
    fn output_header_does_not_duplicate_existing_columns() {
        let input = vec!["habitat".to_string(), "host".to_string()];
        let header = output_header(&input, false);
        assert_eq!(header.iter().filter(|c| *c == "habitat").count(), 1);
        assert_eq!(header.len(), 8);
    }
}
