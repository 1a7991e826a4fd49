//! Library integration tests.

use std::fs;

use indicatif::ProgressBar;
use tempfile::TempDir;
use voucherkit::columns;
use voucherkit::config::VoucherConfig;
use voucherkit::pipeline::Pipeline;
use voucherkit::record::Record;
use voucherkit::table::{create_writer, read_table};
use voucherkit::VoucherError;

#[test]
fn error_types_are_public() {
    let err = VoucherError::MissingColumns {
        missing: vec!["host".into(), "micro".into()],
    };
    assert_eq!(err.to_string(), "Input is missing required columns: host, micro");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> voucherkit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use voucherkit::cli::{Cli, Commands};

    let cli = Cli::parse_from(["voucherkit", "columns", "--json"]);
    if let Commands::Columns(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Columns command");
    }
}

#[test]
fn pipeline_round_trips_an_xlsx_sheet() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("vouchers.xlsx");
    let output = temp.path().join("enriched.xlsx");

    let header: Vec<String> = columns::REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
    let example = Record::from_pairs([("catalogNumber", "EXAMPLE")]);
    let specimen = Record::from_pairs([
        ("catalogNumber", "DBG004321"),
        ("habit", "stipitate"),
        ("odor", "fruity"),
        ("host", "Pinus"),
    ]);

    let mut writer = create_writer(&input, &header).unwrap();
    writer.write_row(&example.project(&header)).unwrap();
    writer.write_row(&specimen.project(&header)).unwrap();
    writer.finish().unwrap();

    let config = VoucherConfig::default();
    let summary = Pipeline::new(&config)
        .unwrap()
        .run(&input, &output, &ProgressBar::hidden())
        .unwrap();
    assert_eq!(summary.rows_written, 1);

    let table = read_table(&output).unwrap();
    assert_eq!(table.header, columns::output_header(&header, false));
    let record = Record::from_row(&table.header, table.rows[0].clone());
    assert_eq!(record.get("description"), "Habit: stipitate. Odor: fruity. ");
    assert_eq!(
        record.get("dynamicProperties"),
        r#"{"habit":"stipitate","odor":"fruity"}"#
    );
    assert_eq!(record.get("associatedTaxa"), "host: Pinus");
    assert_eq!(record.get("otherCatalogNumbers"), "4321");
}

#[test]
fn failed_run_keeps_previous_output() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("vouchers.csv");
    let output = temp.path().join("enriched.csv");
    fs::write(&input, "catalogNumber\nDBG1\n").unwrap();
    fs::write(&output, "previous run\n").unwrap();

    let result = Pipeline::new(&VoucherConfig::default())
        .unwrap()
        .run(&input, &output, &ProgressBar::hidden());

    assert!(matches!(result, Err(VoucherError::MissingColumns { .. })));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run\n");
}
