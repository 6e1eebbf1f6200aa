#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::path::Path;

use super::*;

const HEADER: &str = "Sales Person,Country,Product,Date,Amount,Boxes Shipped";

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn load_table(content: &str) -> SalesTable {
    let file = make_csv_file(content);
    let raw = DataLoader::load_csv(file.path()).unwrap();
    SalesTable::new(DataNormalizer::normalize(raw).unwrap())
}

// ── loader ────────────────────────────────────────────────────

#[test]
fn test_missing_file_is_fatal() {
    let result = DataLoader::load_csv(Path::new("no_such_dataset.csv"));
    assert!(matches!(result, Err(LoadError::FileNotFound(_))));
}

#[test]
fn test_header_only_file_has_no_data() {
    let file = make_csv_file(HEADER);
    let result = DataLoader::load_csv(file.path());
    assert!(matches!(result, Err(LoadError::NoData)));
}

// ── normalization ─────────────────────────────────────────────

#[test]
fn test_amount_currency_round_trip() {
    let table = load_table(&format!(
        "{HEADER}\nJehu Rudeforth,UK,Mint Chip Choco,04-Jan-22,\"$1,234\",180"
    ));
    let amounts = table.dataframe().column(COL_AMOUNT).unwrap().i64().unwrap();
    assert_eq!(amounts.get(0), Some(1234));
}

#[test]
fn test_plain_amount_also_accepted() {
    let table = load_table(&format!(
        "{HEADER}\nVan Tuxwell,India,85% Dark Bars,01-Aug-22,7205,121"
    ));
    let amounts = table.dataframe().column(COL_AMOUNT).unwrap().i64().unwrap();
    assert_eq!(amounts.get(0), Some(7205));
}

#[test]
fn test_year_month_derived_from_date() {
    let table = load_table(&format!(
        "{HEADER}\nGigi Bohling,Australia,Peanut Butter Cubes,25-Mar-22,\"$5,320\",94"
    ));
    let df = table.dataframe();
    assert_eq!(df.column(COL_YEAR).unwrap().i32().unwrap().get(0), Some(2022));
    assert_eq!(df.column(COL_MONTH).unwrap().i32().unwrap().get(0), Some(3));
}

#[test]
fn test_unparsable_date_yields_null_year_month() {
    let table = load_table(&format!(
        "{HEADER}\n\
         Jan Morforth,Canada,Eclairs,not-a-date,\"$2,001\",60\n\
         Jan Morforth,Canada,Eclairs,11-Feb-22,\"$1,500\",35"
    ));
    let df = table.dataframe();
    // bad row keeps its Amount but loses Date, Year and Month
    assert_eq!(table.height(), 2);
    assert_eq!(df.column(COL_DATE).unwrap().null_count(), 1);
    assert_eq!(df.column(COL_YEAR).unwrap().i32().unwrap().get(0), None);
    assert_eq!(df.column(COL_MONTH).unwrap().i32().unwrap().get(0), None);
    assert_eq!(df.column(COL_MONTH).unwrap().i32().unwrap().get(1), Some(2));
}

#[test]
fn test_missing_column_rejected() {
    let file = make_csv_file("Sales Person,Country,Product,Date,Boxes Shipped\na,b,c,04-Jan-22,1");
    let raw = DataLoader::load_csv(file.path()).unwrap();
    match DataNormalizer::normalize(raw) {
        Err(NormalizeError::MissingColumn(column)) => assert_eq!(column, COL_AMOUNT),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_malformed_amount_rejected() {
    let file = make_csv_file(&format!(
        "{HEADER}\nKelci Walkden,USA,White Choc,04-Jan-22,twelve,10"
    ));
    let raw = DataLoader::load_csv(file.path()).unwrap();
    assert!(DataNormalizer::normalize(raw).is_err());
}

#[test]
fn test_negative_amount_rejected() {
    let file = make_csv_file(&format!(
        "{HEADER}\nKelci Walkden,USA,White Choc,04-Jan-22,-50,10"
    ));
    let raw = DataLoader::load_csv(file.path()).unwrap();
    assert!(DataNormalizer::normalize(raw).is_err());
}

// ── table accessors ───────────────────────────────────────────

#[test]
fn test_column_names_include_derived() {
    let table = load_table(&format!(
        "{HEADER}\nMadelene Upcott,New Zealand,Eclairs,17-Jun-22,\"$3,073\",82"
    ));
    let names = table.column_names();
    assert_eq!(names.len(), 8);
    assert!(names.contains(&COL_YEAR.to_string()));
    assert!(names.contains(&COL_MONTH.to_string()));
}

#[test]
fn test_numeric_values_drop_nulls() {
    let table = load_table(&format!(
        "{HEADER}\n\
         Oby Sorrel,UK,99% Dark & Pure,12-Apr-22,\"$1,000\",\n\
         Oby Sorrel,UK,99% Dark & Pure,13-Apr-22,\"$2,000\",45"
    ));
    let boxes = table.numeric_values(COL_BOXES).unwrap();
    assert_eq!(boxes, vec![45.0]);
    let amounts = table.numeric_values(COL_AMOUNT).unwrap();
    assert_eq!(amounts.len(), 2);
}

#[test]
fn test_preview_renders_strings() {
    let table = load_table(&format!(
        "{HEADER}\n\
         Brien Boise,India,Organic Choco Syrup,20-Jul-22,\"$1,841\",57\n\
         Brien Boise,India,Organic Choco Syrup,21-Jul-22,\"$1,002\",12\n\
         Brien Boise,India,Organic Choco Syrup,22-Jul-22,\"$3,700\",99"
    ));
    let preview = table.preview(2);
    assert_eq!(preview.len(), 2);
    assert_eq!(preview[0].len(), 8);
    assert_eq!(preview[0][0], "Brien Boise");
    assert_eq!(preview[0][4], "1841");
}
