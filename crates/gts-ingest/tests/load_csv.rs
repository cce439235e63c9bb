//! File-based ingestion tests.

use std::io::Write;

use gts_ingest::load_csv;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

#[test]
fn loads_dataset_and_discovers_years() {
    let file = write_csv(
        "ISO code,Country,Variable code,Variable name,1950,1951,1952\n\
         BOL,Bolivia (Plurinational State of),rgdpna,Real GDP,100,110,\n\
         BOL,Bolivia (Plurinational State of),emp,Employment,1.2,1.3,1.4\n",
    );

    let dataset = load_csv(file.path()).expect("load csv");
    assert_eq!(dataset.years(), vec![1950, 1951, 1952]);
    assert_eq!(
        dataset.countries(),
        vec!["Bolivia (Plurinational State of)"]
    );

    let row = dataset
        .find_row("Bolivia (Plurinational State of)", "Real GDP")
        .expect("find row");
    assert_eq!(dataset.year_value(row, 1950), Some(100.0));
    assert_eq!(dataset.year_value(row, 1952), None);
}

#[test]
fn non_year_numeric_headers_are_ignored() {
    // "Rank" and a five-digit header must not join the year universe.
    let file = write_csv(
        "Country,Variable name,Rank,19500,1950\n\
         Bolivia,Real GDP,1,7,100\n",
    );
    let dataset = load_csv(file.path()).expect("load csv");
    assert_eq!(dataset.years(), vec![1950]);
}

#[test]
fn missing_variable_column_is_fatal() {
    let file = write_csv("Country,1950\nBolivia,100\n");
    let err = load_csv(file.path()).expect_err("must fail");
    assert!(format!("{err:#}").contains("Variable name"));
}

#[test]
fn dataset_without_year_columns_is_fatal() {
    let file = write_csv("Country,Variable name\nBolivia,Real GDP\n");
    assert!(load_csv(file.path()).is_err());
}
