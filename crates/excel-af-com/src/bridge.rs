//! Subprocess management and JSON IPC for the WINE bridge process.

use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use excel_com_protocol::{
    CellValue, Command as BridgeCommand, Request, Response, ResponseData, ResponseResult,
    SheetRef,
};

use crate::workbook::Workbook;

/// Environment variable naming the bridge executable.
pub const BRIDGE_EXE_ENV: &str = "EXCEL_AF_BRIDGE_EXE";

/// Environment variable naming the WINE executable.
pub const WINE_ENV: &str = "EXCEL_AF_WINE";

const BRIDGE_EXE_NAME: &str = "excel-com-bridge.exe";

/// Errors from the Excel COM bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Failed to spawn WINE bridge process: {0}")]
    SpawnFailed(#[from] io::Error),

    #[error("Bridge process not running")]
    NotRunning,

    #[error("Failed to send command to bridge: {0}")]
    SendFailed(String),

    #[error("Failed to read response from bridge: {0}")]
    ReadFailed(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Bridge returned error: {0}")]
    BridgeError(String),

    #[error("Unexpected response data")]
    UnexpectedResponse,

    #[error("Response id {actual} does not match request id {expected}")]
    IdMismatch { expected: u64, actual: u64 },

    #[error("WINE not found. Install WINE and ensure 'wine' is in PATH.")]
    WineNotFound,

    #[error("Bridge executable not found at: {0}")]
    BridgeExeNotFound(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Configuration for launching the bridge process.
#[derive(Debug, Clone)]
pub struct ExcelBridgeConfig {
    /// Path to `excel-com-bridge.exe`. If None, common locations are searched.
    pub bridge_exe_path: Option<PathBuf>,

    /// Path to the WINE executable. Defaults to "wine".
    pub wine_path: PathBuf,

    /// Optional WINEPREFIX to use (for isolating the WINE environment).
    pub wine_prefix: Option<PathBuf>,
}

impl Default for ExcelBridgeConfig {
    fn default() -> Self {
        Self {
            bridge_exe_path: None,
            wine_path: PathBuf::from("wine"),
            wine_prefix: None,
        }
    }
}

impl ExcelBridgeConfig {
    /// Defaults overridden by `EXCEL_AF_BRIDGE_EXE`, `EXCEL_AF_WINE` and `WINEPREFIX`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<std::ffi::OsString>) -> Self {
        let defaults = Self::default();
        Self {
            bridge_exe_path: lookup(BRIDGE_EXE_ENV).map(PathBuf::from),
            wine_path: lookup(WINE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.wine_path),
            wine_prefix: lookup("WINEPREFIX").map(PathBuf::from),
        }
    }
}

type Reader = Box<dyn BufRead + Send>;
type Writer = Box<dyn Write + Send>;

/// The main handle for communicating with the Excel COM bridge.
///
/// Requests are strictly sequential: each call writes one line and blocks
/// until the matching response line arrives.
pub struct ExcelBridge {
    child: Mutex<Option<Child>>,
    writer: Mutex<Writer>,
    reader: Mutex<Reader>,
    next_id: AtomicU64,
}

fn lock<T: ?Sized>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ExcelBridge {
    /// Start the bridge process and initialize Excel.
    pub fn start(config: ExcelBridgeConfig) -> Result<Self> {
        let exe_path = config.bridge_exe_path.unwrap_or_else(find_bridge_exe);

        if !exe_path.exists() {
            return Err(BridgeError::BridgeExeNotFound(
                exe_path.display().to_string(),
            ));
        }

        let mut cmd = std::process::Command::new(&config.wine_path);

        if let Some(prefix) = &config.wine_prefix {
            cmd.env("WINEPREFIX", prefix);
        }

        cmd.arg(&exe_path);
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::inherit()); // Bridge diagnostics go to our stderr

        tracing::info!(
            "Starting bridge {} via {}",
            exe_path.display(),
            config.wine_path.display()
        );

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                BridgeError::WineNotFound
            } else {
                BridgeError::SpawnFailed(e)
            }
        })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            return Err(BridgeError::NotRunning);
        };

        let bridge = Self {
            child: Mutex::new(Some(child)),
            writer: Mutex::new(Box::new(stdin)),
            reader: Mutex::new(Box::new(BufReader::new(stdout))),
            next_id: AtomicU64::new(1),
        };
        bridge.init()?;
        Ok(bridge)
    }

    /// Talk to a bridge over an already-connected pair of streams.
    ///
    /// No process is managed; [`shutdown`](Self::shutdown) only sends the
    /// shutdown command.
    pub fn from_transport<R, W>(reader: R, writer: W) -> Result<Self>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let bridge = Self {
            child: Mutex::new(None),
            writer: Mutex::new(Box::new(writer)),
            reader: Mutex::new(Box::new(reader)),
            next_id: AtomicU64::new(1),
        };
        bridge.init()?;
        Ok(bridge)
    }

    fn init(&self) -> Result<()> {
        self.send_command(BridgeCommand::Init)?;
        tracing::info!("Excel initialized");
        Ok(())
    }

    /// Send a command to the bridge and wait for the response.
    fn send_command(&self, command: BridgeCommand) -> Result<Option<ResponseData>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let request = Request { id, command };
        let json = serde_json::to_string(&request)?;
        tracing::debug!(id, "-> {json}");

        {
            let mut writer = lock(&self.writer);
            writeln!(writer, "{json}").map_err(|e| BridgeError::SendFailed(e.to_string()))?;
            writer
                .flush()
                .map_err(|e| BridgeError::SendFailed(e.to_string()))?;
        }

        let response: Response = {
            let mut reader = lock(&self.reader);
            let mut line = String::new();
            reader
                .read_line(&mut line)
                .map_err(|e| BridgeError::ReadFailed(e.to_string()))?;

            if line.is_empty() {
                return Err(BridgeError::NotRunning);
            }
            tracing::trace!(id, "<- {}", line.trim_end());

            serde_json::from_str(&line)?
        };

        if response.id != id {
            return Err(BridgeError::IdMismatch {
                expected: id,
                actual: response.id,
            });
        }

        match response.result {
            ResponseResult::Ok { data } => Ok(data),
            ResponseResult::Error { message } => {
                tracing::debug!(id, "bridge error: {message}");
                Err(BridgeError::BridgeError(message))
            }
        }
    }

    /// Create a new empty workbook.
    pub fn create_workbook(&self) -> Result<Workbook<'_>> {
        let handle = self.workbook_handle(BridgeCommand::CreateWorkbook)?;
        Ok(Workbook::new(self, handle, None))
    }

    /// Open an existing workbook from a Linux path.
    pub fn open_workbook(&self, path: impl AsRef<Path>) -> Result<Workbook<'_>> {
        let path = path.as_ref();
        let handle = self.workbook_handle(BridgeCommand::OpenWorkbook {
            path: linux_to_wine_path(path),
        })?;
        Ok(Workbook::new(self, handle, Some(path.to_path_buf())))
    }

    /// Open a workbook using a raw Windows/WINE path (no conversion).
    pub fn open_workbook_raw_path(&self, wine_path: &str) -> Result<Workbook<'_>> {
        let handle = self.workbook_handle(BridgeCommand::OpenWorkbook {
            path: wine_path.to_string(),
        })?;
        Ok(Workbook::new(self, handle, None))
    }

    /// Open the workbook at `path`, or create and save a new one there if no
    /// file exists yet.
    pub fn open_or_create_workbook(&self, path: impl AsRef<Path>) -> Result<Workbook<'_>> {
        let path = path.as_ref();
        if path.exists() {
            return self.open_workbook(path);
        }
        tracing::info!("{} does not exist, creating it", path.display());
        let mut workbook = self.create_workbook()?;
        workbook.save(path)?;
        Ok(workbook)
    }

    fn workbook_handle(&self, command: BridgeCommand) -> Result<u64> {
        match self.send_command(command)? {
            Some(ResponseData::WorkbookHandle { workbook }) => Ok(workbook),
            _ => Err(BridgeError::UnexpectedResponse),
        }
    }

    /// Shut down the bridge: close all workbooks, quit Excel, and wait for the process.
    pub fn shutdown(self) -> Result<()> {
        let result = self.send_command(BridgeCommand::Shutdown).map(|_| ());

        if let Some(mut child) = lock(&self.child).take() {
            let _ = child.wait();
        }
        tracing::info!("Bridge shut down");

        result
    }

    // -- Internal methods used by Workbook and Sheet --

    pub(crate) fn get_cell_value(
        &self,
        workbook: u64,
        sheet: SheetRef,
        cell: &str,
    ) -> Result<CellValue> {
        let data = self.send_command(BridgeCommand::GetCellValue {
            workbook,
            sheet,
            cell: cell.to_string(),
        })?;
        match data {
            Some(ResponseData::Value { value }) => Ok(value),
            _ => Err(BridgeError::UnexpectedResponse),
        }
    }

    pub(crate) fn set_cell_value(
        &self,
        workbook: u64,
        sheet: SheetRef,
        cell: &str,
        value: CellValue,
    ) -> Result<()> {
        self.send_command(BridgeCommand::SetCellValue {
            workbook,
            sheet,
            cell: cell.to_string(),
            value,
        })?;
        Ok(())
    }

    pub(crate) fn list_sheets(&self, workbook: u64) -> Result<Vec<String>> {
        match self.send_command(BridgeCommand::ListSheets { workbook })? {
            Some(ResponseData::SheetNames { sheets }) => Ok(sheets),
            _ => Err(BridgeError::UnexpectedResponse),
        }
    }

    pub(crate) fn save_workbook(&self, workbook: u64, path: &str) -> Result<()> {
        self.send_command(BridgeCommand::SaveWorkbook {
            workbook,
            path: path.to_string(),
        })?;
        Ok(())
    }

    pub(crate) fn close_workbook(&self, workbook: u64) -> Result<()> {
        self.send_command(BridgeCommand::CloseWorkbook { workbook })?;
        Ok(())
    }
}

impl Drop for ExcelBridge {
    fn drop(&mut self) {
        if let Some(mut child) = lock(&self.child).take() {
            tracing::warn!("Bridge dropped without shutdown, killing process");
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Convert a Linux filesystem path to a WINE (Windows) path.
///
/// WINE maps `/` to `Z:\`, so `/home/user/file.xlsx` becomes `Z:\home\user\file.xlsx`.
pub fn linux_to_wine_path(linux_path: &Path) -> String {
    let abs = if linux_path.is_absolute() {
        linux_path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(linux_path)
    };

    format!("Z:{}", abs.display()).replace('/', "\\")
}

/// Locate the bridge exe next to the current executable or in the target directory.
fn find_bridge_exe() -> PathBuf {
    if let Ok(mut exe) = std::env::current_exe() {
        exe.pop();
        let candidate = exe.join(BRIDGE_EXE_NAME);
        if candidate.exists() {
            return candidate;
        }
    }

    for profile in ["release", "debug"] {
        let candidate = PathBuf::from("target/x86_64-pc-windows-gnu")
            .join(profile)
            .join(BRIDGE_EXE_NAME);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(BRIDGE_EXE_NAME)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    /// Writer whose bytes stay readable after the bridge takes ownership.
    #[derive(Clone, Default)]
    pub(crate) struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub(crate) fn requests(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8(bytes.clone())
                .unwrap()
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// A bridge that answers with the given response lines, after an `Init` ack.
    pub(crate) fn scripted(responses: &[&str]) -> (ExcelBridge, Captured) {
        let mut script = String::from("{\"id\":1,\"status\":\"ok\"}\n");
        for line in responses {
            script.push_str(line);
            script.push('\n');
        }
        let captured = Captured::default();
        let bridge = ExcelBridge::from_transport(Cursor::new(script), captured.clone()).unwrap();
        (bridge, captured)
    }

    #[test]
    fn test_init_is_sent_first() {
        let (_bridge, captured) = scripted(&[]);
        let requests = captured.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["id"], 1);
        assert_eq!(requests[0]["cmd"], "Init");
    }

    #[test]
    fn test_create_workbook_returns_handle() {
        let (bridge, captured) = scripted(&[r#"{"id":2,"status":"ok","data":{"workbook":7}}"#]);
        let wb = bridge.create_workbook().unwrap();
        assert_eq!(wb.handle(), 7);
        assert_eq!(captured.requests()[1]["cmd"], "CreateWorkbook");
    }

    #[test]
    fn test_bridge_error_is_reported() {
        let (bridge, _) = scripted(&[r#"{"id":2,"status":"error","message":"no such file"}"#]);
        match bridge.open_workbook_raw_path("C:\\missing.xlsx") {
            Err(BridgeError::BridgeError(msg)) => assert_eq!(msg, "no such file"),
            other => panic!("unexpected: {:?}", other.map(|w| w.handle())),
        }
    }

    #[test]
    fn test_mismatched_id_is_rejected() {
        let (bridge, _) = scripted(&[r#"{"id":5,"status":"ok","data":{"workbook":1}}"#]);
        assert!(matches!(
            bridge.create_workbook(),
            Err(BridgeError::IdMismatch {
                expected: 2,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_closed_stream_means_not_running() {
        let (bridge, _) = scripted(&[]);
        assert!(matches!(
            bridge.create_workbook(),
            Err(BridgeError::NotRunning)
        ));
    }

    #[test]
    fn test_wrong_payload_is_unexpected() {
        let (bridge, _) = scripted(&[r#"{"id":2,"status":"ok","data":{"value":1}}"#]);
        assert!(matches!(
            bridge.create_workbook(),
            Err(BridgeError::UnexpectedResponse)
        ));
    }

    #[test]
    fn test_shutdown_without_process() {
        let (bridge, captured) = scripted(&[r#"{"id":2,"status":"ok"}"#]);
        bridge.shutdown().unwrap();
        assert_eq!(captured.requests()[1]["cmd"], "Shutdown");
    }

    #[test]
    fn test_linux_to_wine_path() {
        assert_eq!(
            linux_to_wine_path(Path::new("/home/user/book.xlsx")),
            "Z:\\home\\user\\book.xlsx"
        );
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ExcelBridgeConfig::from_lookup(|key| match key {
            BRIDGE_EXE_ENV => Some("/opt/bridge.exe".into()),
            "WINEPREFIX" => Some("/tmp/prefix".into()),
            _ => None,
        });
        assert_eq!(config.bridge_exe_path, Some(PathBuf::from("/opt/bridge.exe")));
        assert_eq!(config.wine_path, PathBuf::from("wine"));
        assert_eq!(config.wine_prefix, Some(PathBuf::from("/tmp/prefix")));
    }
}
