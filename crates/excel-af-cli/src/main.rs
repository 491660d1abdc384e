//! excel-af CLI - typed cell reads and writes against Excel workbooks

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use excel_af::com::BookSheet;
use excel_af::prelude::*;
use excel_af_com::{ExcelBridge, ExcelBridgeConfig, SheetRef};
use excel_af_core::DEFAULT_SIZE_TRANSVERSE;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "excel-af")]
#[command(
    author,
    version,
    about = "Read and write Excel cells through the WINE COM bridge"
)]
struct Cli {
    #[command(flatten)]
    bridge: BridgeArgs,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BridgeArgs {
    /// Path to excel-com-bridge.exe
    #[arg(long, global = true)]
    bridge_exe: Option<PathBuf>,

    /// WINE executable
    #[arg(long, global = true)]
    wine: Option<PathBuf>,

    /// WINEPREFIX for the bridge process
    #[arg(long, global = true)]
    wine_prefix: Option<PathBuf>,
}

#[derive(Args)]
struct TableArgs {
    /// First cell of the table (e.g. B2)
    #[arg(long)]
    first: Cell,

    /// Direction of the longitudinal axis
    #[arg(long, default_value = "vertical")]
    direction: Direction,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cell addresses of a table (no workbook needed)
    Address {
        #[command(flatten)]
        table: TableArgs,

        /// Cells along the longitudinal axis
        #[arg(long)]
        size: u32,

        /// Cells along the transverse axis
        #[arg(long, default_value_t = DEFAULT_SIZE_TRANSVERSE)]
        transverse: u32,

        /// Print every cell instead of the first longitudinal line
        #[arg(long)]
        all: bool,
    },

    /// Read one cell
    Get {
        workbook: PathBuf,

        /// Cell address (e.g. B3)
        address: String,

        /// Sheet name (default: the active sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Read the value as this type instead of raw
        #[arg(short = 't', long = "type", value_enum)]
        read_as: Option<ReadAs>,
    },

    /// Write one cell and save the workbook
    Set {
        workbook: PathBuf,

        /// Cell address (e.g. B3)
        address: String,

        /// Value to write; numbers and TRUE/FALSE are typed, empty clears
        value: String,

        /// Sheet name (default: the active sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Round numbers to this many decimal places
        #[arg(short, long)]
        accuracy: Option<u32>,
    },

    /// Read the numbers along a table's longitudinal line
    ReadTable {
        workbook: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Cells along the longitudinal axis
        #[arg(long)]
        size: u32,

        /// Number type: float or int
        #[arg(short = 't', long = "type", default_value = "float")]
        number_type: NumberType,

        /// Sheet name (default: the active sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Write values along a table's longitudinal line and save the workbook
    WriteTable {
        workbook: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Values, one per longitudinal cell
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,

        /// Round numbers to this many decimal places
        #[arg(short, long)]
        accuracy: Option<u32>,

        /// Sheet name (default: the active sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Clear every cell of a table and save the workbook
    ClearTable {
        workbook: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Cells along the longitudinal axis
        #[arg(long)]
        size: u32,

        /// Cells along the transverse axis
        #[arg(long, default_value_t = DEFAULT_SIZE_TRANSVERSE)]
        transverse: u32,

        /// Sheet name (default: the active sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// List all sheets in a workbook
    Sheets { workbook: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReadAs {
    Float,
    Int,
    Bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Address {
            table,
            size,
            transverse,
            all,
        } => print_addresses(&table, size, transverse, all),
        Commands::Get {
            workbook,
            address,
            sheet,
            read_as,
        } => with_bridge(&cli.bridge, |bridge| {
            let sheet = open_existing(bridge, &workbook, sheet)?;
            get_cell(&sheet, &address, read_as)
        }),
        Commands::Set {
            workbook,
            address,
            value,
            sheet,
            accuracy,
        } => with_bridge(&cli.bridge, |bridge| {
            let mut sheet = open_for_write(bridge, &workbook, sheet.as_deref())?;
            sheet
                .set_value(parse_value(&value), address.as_str(), accuracy)
                .with_context(|| format!("Failed to write {address}"))?;
            sheet.save().context("Failed to save workbook")?;
            tracing::info!("Wrote {address} in '{}'", workbook.display());
            Ok(())
        }),
        Commands::ReadTable {
            workbook,
            table,
            size,
            number_type,
            sheet,
        } => with_bridge(&cli.bridge, |bridge| {
            let sheet = open_existing(bridge, &workbook, sheet)?;
            let table = Table::new(table.first, table.direction, size)?;
            let numbers = sheet
                .get_numbers_list(&table, number_type, &CheckOptions::default())
                .with_context(|| format!("Failed to read {table}"))?;
            for (item, number) in table.linear_cells().zip(numbers) {
                let (_, _, cell) = item?;
                println!("{cell}\t{}", number.map(|n| n.to_string()).unwrap_or_default());
            }
            Ok(())
        }),
        Commands::WriteTable {
            workbook,
            table,
            values,
            accuracy,
            sheet,
        } => with_bridge(&cli.bridge, |bridge| {
            let values: Vec<CellValue> =
                values.iter().map(String::as_str).map(parse_value).collect();
            let table = Table::new(table.first, table.direction, values.len() as u32)
                .context("A table needs at least two values")?;
            let mut sheet = open_for_write(bridge, &workbook, sheet.as_deref())?;
            let last = sheet
                .set_numbers_list(&table, &values, accuracy)
                .with_context(|| format!("Failed to write {table}"))?;
            sheet.save().context("Failed to save workbook")?;
            tracing::info!("Wrote {} values, last cell {last}", values.len());
            Ok(())
        }),
        Commands::ClearTable {
            workbook,
            table,
            size,
            transverse,
            sheet,
        } => with_bridge(&cli.bridge, |bridge| {
            let table = Table::with_sizes(table.first, table.direction, size, transverse)?;
            let mut sheet = open_for_write(bridge, &workbook, sheet.as_deref())?;
            sheet
                .clear_table(&table)
                .with_context(|| format!("Failed to clear {table}"))?;
            sheet.save().context("Failed to save workbook")?;
            tracing::info!("Cleared {table}");
            Ok(())
        }),
        Commands::Sheets { workbook } => with_bridge(&cli.bridge, |bridge| {
            let book = bridge
                .open_workbook(&workbook)
                .with_context(|| format!("Failed to open '{}'", workbook.display()))?;
            for (i, name) in book.sheet_names()?.iter().enumerate() {
                println!("{}\t{}", i, name);
            }
            Ok(())
        }),
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .init();
}

/// Log filter used when RUST_LOG is not set
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

impl BridgeArgs {
    /// Environment config with command-line overrides applied
    fn config(&self) -> ExcelBridgeConfig {
        let mut config = ExcelBridgeConfig::from_env();
        if let Some(exe) = &self.bridge_exe {
            config.bridge_exe_path = Some(exe.clone());
        }
        if let Some(wine) = &self.wine {
            config.wine_path = wine.clone();
        }
        if let Some(prefix) = &self.wine_prefix {
            config.wine_prefix = Some(prefix.clone());
        }
        config
    }
}

/// Run `f` against a freshly started bridge, shutting it down afterwards
fn with_bridge<F>(args: &BridgeArgs, f: F) -> Result<()>
where
    F: FnOnce(&ExcelBridge) -> Result<()>,
{
    let bridge = ExcelBridge::start(args.config()).context("Failed to start the Excel bridge")?;
    let result = f(&bridge);
    let shutdown = bridge.shutdown().context("Failed to shut down the Excel bridge");
    result?;
    shutdown
}

fn open_existing<'a>(
    bridge: &'a ExcelBridge,
    path: &Path,
    sheet: Option<String>,
) -> Result<CustomSheet<BookSheet<'a>>> {
    let workbook = bridge
        .open_workbook(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;
    Ok(CustomSheet::new(BookSheet::new(workbook, SheetRef::from(sheet))))
}

fn open_for_write<'a>(
    bridge: &'a ExcelBridge,
    path: &Path,
    sheet: Option<&str>,
) -> Result<CustomSheet<BookSheet<'a>>> {
    CustomSheet::open(bridge, path, sheet)
        .with_context(|| format!("Failed to open '{}'", path.display()))
}

fn get_cell<S: SheetHandle>(
    sheet: &CustomSheet<S>,
    address: &str,
    read_as: Option<ReadAs>,
) -> Result<()> {
    let text = match read_as {
        None => match sheet.get_value(address)? {
            CellValue::Null => String::new(),
            value => value.to_string(),
        },
        Some(ReadAs::Bool) => sheet.get_boolean_value(address)?.to_string(),
        Some(ReadAs::Float) => sheet
            .get_float(address)?
            .map(|n| n.to_string())
            .unwrap_or_default(),
        Some(ReadAs::Int) => sheet
            .get_int(address)?
            .map(|n| n.to_string())
            .unwrap_or_default(),
    };
    println!("{text}");
    Ok(())
}

fn print_addresses(table: &TableArgs, size: u32, transverse: u32, all: bool) -> Result<()> {
    let table = Table::with_sizes(table.first, table.direction, size, transverse)?;
    if all {
        for item in table.cells() {
            let (l, t, cell) = item?;
            println!("{l}\t{t}\t{cell}");
        }
    } else {
        for item in table.linear_cells() {
            let (_, _, cell) = item?;
            println!("{cell}");
        }
    }
    Ok(())
}

/// Interpret a command-line value the way Excel would type it on entry
fn parse_value(text: &str) -> CellValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::String(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(""), CellValue::Null);
        assert_eq!(parse_value("TRUE"), CellValue::Bool(true));
        assert_eq!(parse_value("false"), CellValue::Bool(false));
        assert_eq!(parse_value(" 2.5 "), CellValue::Number(2.5));
        assert_eq!(parse_value("inf"), CellValue::String("inf".into()));
        assert_eq!(parse_value("B3"), CellValue::String("B3".into()));
    }

    #[test]
    fn test_cli_parses_table_args() {
        let cli = Cli::try_parse_from([
            "excel-af",
            "clear-table",
            "book.xlsx",
            "--first",
            "C2",
            "--direction",
            "horizontal",
            "--size",
            "4",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::ClearTable {
                table,
                size,
                transverse,
                ..
            } => {
                assert_eq!(table.first.address(), "C2");
                assert_eq!(table.direction, Direction::Horizontal);
                assert_eq!(size, 4);
                assert_eq!(transverse, DEFAULT_SIZE_TRANSVERSE);
            }
            _ => panic!("expected clear-table"),
        }
    }

    #[test]
    fn test_verbosity_selects_filter() {
        assert_eq!(default_filter(0), "info");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(5), "trace");
    }

    #[test]
    fn test_cli_rejects_bad_direction() {
        let result = Cli::try_parse_from([
            "excel-af", "address", "--first", "A1", "--direction", "diagonal", "--size", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bridge_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "excel-af",
            "sheets",
            "book.xlsx",
            "--wine",
            "/opt/wine/bin/wine",
            "--wine-prefix",
            "/tmp/prefix",
        ])
        .unwrap();
        let config = cli.bridge.config();
        assert_eq!(config.wine_path, PathBuf::from("/opt/wine/bin/wine"));
        assert_eq!(config.wine_prefix, Some(PathBuf::from("/tmp/prefix")));
    }
}
