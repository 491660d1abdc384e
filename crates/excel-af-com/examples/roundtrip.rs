//! Example: write a few cells through the Excel COM bridge and read them back.
//!
//! Prerequisites:
//!   - WINE installed and in PATH
//!   - Microsoft Excel installed in the WINE prefix
//!   - excel-com-bridge.exe available (set EXCEL_AF_BRIDGE_EXE or place it
//!     next to the example binary)
//!
//! Run:
//!   cargo run --example roundtrip -p excel-af-com -- /tmp/roundtrip.xlsx

use excel_af_com::{ExcelBridge, ExcelBridgeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "roundtrip.xlsx".to_string());

    println!("Starting Excel COM bridge...");
    let bridge = ExcelBridge::start(ExcelBridgeConfig::from_env())?;

    let wb = bridge.open_or_create_workbook(&path)?;
    println!("Sheets: {:?}", wb.sheet_names()?);

    let sheet = wb.active_sheet();
    sheet.set_cell_value("A1", "Label")?;
    sheet.set_cell_value("B1", 1.25)?;
    sheet.set_cell_value("C1", true)?;

    for cell in ["A1", "B1", "C1", "D1"] {
        println!("{cell} = {}", sheet.get_cell_value(cell)?);
    }

    wb.save_in_place()?;
    wb.close()?;
    bridge.shutdown()?;
    Ok(())
}
