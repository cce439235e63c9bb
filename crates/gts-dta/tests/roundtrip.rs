//! Write/read round-trip tests.

use proptest::prelude::*;

use gts_dta::{
    DtaColumn, DtaDataset, DtaReader, DtaValue, DtaWriter, DtaWriterOptions, read_dta, write_dta,
};

fn fixed_timestamp() -> DtaWriterOptions {
    DtaWriterOptions {
        timestamp: chrono::NaiveDate::from_ymd_opt(2026, 8, 4)
            .unwrap()
            .and_hms_opt(9, 30, 0),
    }
}

fn sample_dataset() -> DtaDataset {
    let mut ds = DtaDataset::with_columns(
        "growth accounting export",
        vec![
            DtaColumn::long("year"),
            DtaColumn::string("country", 40).with_label("Country"),
            DtaColumn::double("rgdp").with_label("Real GDP at constant prices"),
        ],
    );
    ds.add_row(vec![
        DtaValue::Int(Some(1950)),
        DtaValue::string("Bolivia (Plurinational State of)"),
        DtaValue::numeric(100.0),
    ]);
    ds.add_row(vec![
        DtaValue::Int(Some(1951)),
        DtaValue::string("Bolivia (Plurinational State of)"),
        DtaValue::numeric_missing(),
    ]);
    ds
}

#[test]
fn file_round_trip_preserves_everything() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sample.dta");
    write_dta(&path, &sample_dataset()).expect("write dta");

    let back = read_dta(&path).expect("read dta");
    assert_eq!(back, sample_dataset());
}

#[test]
fn in_memory_round_trip_with_fixed_timestamp_is_deterministic() {
    let ds = sample_dataset();
    let mut first = Vec::new();
    DtaWriter::with_options(&mut first, fixed_timestamp())
        .write_dataset(&ds)
        .expect("write dta");
    let mut second = Vec::new();
    DtaWriter::with_options(&mut second, fixed_timestamp())
        .write_dataset(&ds)
        .expect("write dta");
    assert_eq!(first, second);

    let back = DtaReader::new(first.as_slice())
        .read_dataset()
        .expect("read dta");
    assert_eq!(back, ds);
}

#[test]
fn missing_values_survive_the_trip() {
    let mut ds = DtaDataset::with_columns(
        "",
        vec![DtaColumn::long("year"), DtaColumn::double("value")],
    );
    ds.add_row(vec![DtaValue::Int(None), DtaValue::numeric_missing()]);

    let mut buf = Vec::new();
    DtaWriter::new(&mut buf).write_dataset(&ds).expect("write");
    let back = DtaReader::new(buf.as_slice()).read_dataset().expect("read");
    assert!(back.rows[0][0].is_missing());
    assert!(back.rows[0][1].is_missing());
}

fn value_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        3 => (-1.0e12f64..1.0e12).prop_map(Some),
        1 => Just(None),
    ]
}

proptest! {
    #[test]
    fn generated_datasets_round_trip(
        rows in prop::collection::vec((1900i32..2100, value_strategy(), value_strategy()), 0..50),
        label in "[ -~]{0,60}",
    ) {
        let mut ds = DtaDataset::with_columns(
            label,
            vec![
                DtaColumn::long("year"),
                DtaColumn::double("a").with_label("first series"),
                DtaColumn::double("b").with_label("second series"),
            ],
        );
        for (year, a, b) in rows {
            ds.add_row(vec![DtaValue::Int(Some(year)), DtaValue::Num(a), DtaValue::Num(b)]);
        }

        let mut buf = Vec::new();
        DtaWriter::with_options(&mut buf, fixed_timestamp())
            .write_dataset(&ds)
            .expect("write dta");
        let back = DtaReader::new(buf.as_slice()).read_dataset().expect("read dta");
        prop_assert_eq!(back, ds);
    }
}
