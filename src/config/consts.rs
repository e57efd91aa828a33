// src/config/consts.rs

// Layout under the project root
pub const DOWNLOADS_DIR: &str = "downloads";
pub const LOGS_DIR: &str = "logs";
pub const LOG_FILE: &str = "dashboard.log";
pub const ROOT_ENV: &str = "SSA_DASHBOARD_ROOT";

// Input
pub const DEFAULT_REPORT_FILE: &str = "Report.xlsx";
/// Used when only a text export sits in downloads/.
pub const FALLBACK_REPORT_FILE: &str = "Report.csv";
/// Zero-based row holding the report's column labels; rows above it are banner junk.
pub const DEFAULT_HEADER_ROW: usize = 2;

// Source system (display only)
pub const SAM_REPORT_URL: &str = "https://apps.itaipu.gov.br/SAM_SMA_Reports/SSAsExecuted.aspx";

// GUI
pub const APP_TITLE: &str = "Dashboard de SSAs";
pub const WINDOW_W: u32 = 1280;
pub const WINDOW_H: u32 = 860;
pub const TABLE_PAGE_SIZE: usize = 10;
