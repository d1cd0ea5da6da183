pub const EXTM3U_HEADER: &str = "#EXTM3U";
pub const EXTINF_PREFIX: &str = "#EXTINF:";
pub const COMMENT_PREFIX: char = '#';
pub const UNKNOWN_DURATION: i64 = -1;
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";
pub const M3U8_EXT: &str = "m3u8";
pub const DEFAULT_CONFIG_DIR: &str = "m3u-translator";
pub const DEFAULT_CONFIG_FILE: &str = "m3u-translator.toml";
pub const DEFAULT_LOG_FILE: &str = "m3u-translator.log";
