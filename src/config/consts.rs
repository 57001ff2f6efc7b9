// src/config/consts.rs

// Dataset
pub const DATA_FILE: &str = "data.json";
pub const HTTP_PORT: u16 = 80;
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "assembly_search/0.1";

/// First-row `HG_NM` value marking a column-label row instead of a member.
pub const HEADER_SENTINEL: &str = "이름";

// Local store
pub const STORE_DIR: &str = ".store";
pub const NOTES_FILE: &str = "notes.json";
pub const LOG_FILE: &str = "debug.log";
pub const NOTE_KEY_PREFIX: &str = "memo-";
pub const NOTE_KEY_SEP: &str = "-";

// Window
pub const APP_TITLE: &str = "국회의원 보좌진 검색";
pub const WINDOW_W: u32 = 900;
pub const WINDOW_H: u32 = 700;
