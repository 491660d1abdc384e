//! End-to-end tests for typed reads, rounded writes and table traversal

use excel_af::prelude::*;
use pretty_assertions::assert_eq;

fn cell(address: &str) -> Cell {
    Cell::parse(address).unwrap()
}

fn column_sheet() -> CustomSheet<MemorySheet> {
    // B2:B5 holds 1..4, C2:C5 holds labels
    let mut sheet = MemorySheet::new("Data");
    for (i, label) in ["one", "two", "three", "four"].iter().enumerate() {
        let row = 2 + i as u32;
        sheet = sheet
            .with_value(cell(&format!("B{row}")), (i + 1) as f64)
            .with_value(cell(&format!("C{row}")), *label);
    }
    CustomSheet::new(sheet)
}

#[test]
fn test_numbers_list_vertical() {
    let sheet = column_sheet();
    let table = Table::new(cell("B2"), Direction::Vertical, 4).unwrap();

    let numbers = sheet
        .get_numbers_list(&table, NumberType::Int, &CheckOptions::default())
        .unwrap();
    assert_eq!(
        numbers,
        vec![
            Some(Number::Int(1)),
            Some(Number::Int(2)),
            Some(Number::Int(3)),
            Some(Number::Int(4)),
        ]
    );
}

#[test]
fn test_numbers_list_horizontal() {
    let sheet = CustomSheet::new(
        MemorySheet::new("Row")
            .with_value(cell("D7"), 0.5)
            .with_value(cell("E7"), "2.25")
            .with_value(cell("G7"), true),
    );
    let table = Table::new(cell("D7"), Direction::Horizontal, 4).unwrap();

    let numbers = sheet
        .get_numbers_list(&table, NumberType::Float, &CheckOptions::default())
        .unwrap();
    assert_eq!(
        numbers,
        vec![
            Some(Number::Float(0.5)),
            Some(Number::Float(2.25)),
            None,
            Some(Number::Float(1.0)),
        ]
    );
}

#[test]
fn test_numbers_list_stops_at_first_rejected_value() {
    let sheet = column_sheet();
    let table = Table::new(cell("B2"), Direction::Vertical, 4).unwrap();
    let small = CheckOptions::new()
        .with_condition(|v| v.as_f64().map_or(false, |n| n < 3.0))
        .with_error_message("Must be below 3.");

    let err = sheet
        .get_numbers_list(&table, NumberType::Float, &small)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unacceptable value of the cell `B4`.\nMust be below 3."
    );
}

#[test]
fn test_skip_policy_reads_rejected_values_as_none() {
    let sheet = column_sheet();
    let table = Table::new(cell("B2"), Direction::Vertical, 4).unwrap();
    let even = CheckOptions::new()
        .with_condition(|v| v.as_f64().map_or(false, |n| n % 2.0 == 0.0))
        .with_reject_policy(RejectPolicy::Skip);

    let numbers = sheet
        .get_numbers_list(&table, NumberType::Int, &even)
        .unwrap();
    assert_eq!(
        numbers,
        vec![None, Some(Number::Int(2)), None, Some(Number::Int(4))]
    );
}

#[test]
fn test_labels_are_not_numbers() {
    let sheet = column_sheet();
    let err = sheet
        .get_number("C2", NumberType::Float, &CheckOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidValueType {
            expected: "float",
            actual: "string",
            ..
        }
    ));
}

#[test]
fn test_number_type_from_name() {
    let sheet = column_sheet();
    let number_type: NumberType = "int".parse().unwrap();
    assert_eq!(
        sheet
            .get_number("B3", number_type, &CheckOptions::default())
            .unwrap(),
        Some(Number::Int(2))
    );

    let err = "double".parse::<NumberType>().unwrap_err();
    assert_eq!(err.to_string(), "Unacceptable number type: double");
}

#[test]
fn test_boolean_values() {
    let sheet = CustomSheet::new(
        MemorySheet::new("Flags")
            .with_value(cell("A1"), true)
            .with_value(cell("A2"), false)
            .with_value(cell("A3"), 0.0)
            .with_value(cell("A4"), "yes"),
    );
    assert!(sheet.get_boolean_value("A1").unwrap());
    assert!(!sheet.get_boolean_value("A2").unwrap());
    assert!(!sheet.get_boolean_value("A3").unwrap());
    assert!(sheet.get_boolean_value("A4").unwrap());
    assert!(!sheet.get_boolean_value("A5").unwrap());
}

#[test]
fn test_fill_vertical_table_from_pairs() {
    let mut sheet = CustomSheet::new(MemorySheet::new("Out"));
    let table = Table::new(cell("A1"), Direction::Vertical, 3).unwrap();
    let data = TableData::from_pairs([("rate", 1.234), ("limit", 10.0)]);

    let last = sheet.fill_table(&table, &data).unwrap();
    assert_eq!(last.address(), "B3");

    assert_eq!(sheet.get_value("A1").unwrap(), CellValue::from("rate"));
    assert_eq!(sheet.get_value("B1").unwrap(), CellValue::Number(1.23));
    assert_eq!(sheet.get_value("A2").unwrap(), CellValue::from("limit"));
    assert_eq!(sheet.get_value("B2").unwrap(), CellValue::Number(10.0));
    assert_eq!(sheet.get_value("A3").unwrap(), CellValue::Null);
    assert_eq!(sheet.sheet().len(), 4);
}

#[test]
fn test_fill_horizontal_table_clears_leftovers() {
    let mut sheet = CustomSheet::new(
        MemorySheet::new("Out")
            .with_value(cell("C1"), "stale")
            .with_value(cell("C2"), 99.0)
            .with_value(cell("D1"), "outside"),
    );
    let table = Table::new(cell("A1"), Direction::Horizontal, 3).unwrap();
    let data = TableData::from_pairs([("x", 1), ("y", 2)]);

    let last = sheet.clear_or_fill_table(&table, None, Some(&data)).unwrap();
    assert_eq!(last.address(), "C2");

    assert_eq!(sheet.get_value("A1").unwrap(), CellValue::from("x"));
    assert_eq!(sheet.get_value("A2").unwrap(), CellValue::Number(1.0));
    assert_eq!(sheet.get_value("B1").unwrap(), CellValue::from("y"));
    assert_eq!(sheet.get_value("B2").unwrap(), CellValue::Number(2.0));
    assert_eq!(sheet.get_value("C1").unwrap(), CellValue::Null);
    assert_eq!(sheet.get_value("C2").unwrap(), CellValue::Null);
    assert_eq!(sheet.get_value("D1").unwrap(), CellValue::from("outside"));
}

#[test]
fn test_clear_table_with_wider_transverse() {
    let mut sheet = column_sheet();
    let table = Table::with_sizes(cell("B2"), Direction::Vertical, 4, 2).unwrap();

    let last = sheet.clear_table(&table).unwrap();
    assert_eq!(last.address(), "C5");
    assert!(sheet.sheet().is_empty());
}

#[test]
fn test_write_then_read_back_rounded() {
    let mut sheet = CustomSheet::new(MemorySheet::new("Calc"));
    let table = Table::new(cell("E10"), Direction::Horizontal, 3).unwrap();

    let last = sheet
        .set_numbers_list(&table, &[1.005, -2.345, 7.0], Some(2))
        .unwrap();
    assert_eq!(last.address(), "G10");

    assert_eq!(sheet.get_float("E10").unwrap(), Some(1.01));
    assert_eq!(sheet.get_float("F10").unwrap(), Some(-2.35));
    assert_eq!(sheet.get_int("G10").unwrap(), Some(7));
}

#[test]
fn test_shifted_cells_address_the_same_place() {
    let mut sheet = CustomSheet::new(MemorySheet::new("S"));
    let base = Cell::new(Row::new(2, 3).unwrap(), Column::new('B', 2).unwrap());
    assert_eq!(base.address(), "D5");

    sheet.set_value("hello", base, None).unwrap();
    assert_eq!(sheet.get_value("D5").unwrap(), CellValue::from("hello"));
}

#[test]
fn test_bad_addresses_are_reported() {
    let sheet = column_sheet();
    assert!(matches!(sheet.get_value("AA1"), Err(Error::Address(_))));
    assert!(matches!(sheet.get_value("B0"), Err(Error::Address(_))));
}

#[test]
fn test_column_z_tables_read_and_write_their_line() {
    let mut sheet = CustomSheet::new(MemorySheet::new("Edge"));
    let table = Table::new(cell("Z1"), Direction::Vertical, 3).unwrap();

    let last = sheet
        .set_numbers_list(&table, &[1.234, 2.0, 3.5], Some(1))
        .unwrap();
    assert_eq!(last.address(), "Z3");
    assert_eq!(
        sheet
            .get_numbers_list(&table, NumberType::Float, &CheckOptions::default())
            .unwrap(),
        vec![
            Some(Number::Float(1.2)),
            Some(Number::Float(2.0)),
            Some(Number::Float(3.5)),
        ]
    );

    // the default transverse column would be past Z
    assert!(matches!(
        sheet.clear_table(&table),
        Err(Error::Address(excel_af_core::Error::ColumnOverflow { .. }))
    ));
    assert_eq!(sheet.sheet().len(), 3);
}
