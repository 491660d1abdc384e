//! Example: fill a table on an in-memory sheet, then read it back

use excel_af::prelude::*;

fn main() -> Result<()> {
    let mut sheet = CustomSheet::new(MemorySheet::new("Prices"));

    // Labels in column A, rounded prices in column B
    let table = Table::new(Cell::parse("A2")?, Direction::Vertical, 4)?;
    let data = TableData::from_pairs([("tea", 2.499), ("coffee", 3.125), ("juice", 4.0)]);
    let last = sheet.fill_table(&table, &data)?;
    println!("Filled {} (last cell {last})", table.to_range_string());

    for (cell, value) in sheet.sheet().cells() {
        println!("{cell}\t{value}");
    }

    let prices = Table::new(Cell::parse("B2")?, Direction::Vertical, 3)?;
    let total: f64 = sheet
        .get_numbers_list(&prices, NumberType::Float, &CheckOptions::default())?
        .into_iter()
        .flatten()
        .map(|n| n.as_f64())
        .sum();
    println!("Total: {total}");

    Ok(())
}
