use anyhow::{Result, anyhow};
use clap::Parser;
use log::LevelFilter;
use std::{
    fs,
    io::ErrorKind,
    path::{self, Path, PathBuf},
    str::FromStr,
};
use toml::{Table, Value};

use crate::constants;

#[derive(Debug, Parser)]
#[command(version, about, author, long_about = None)]
pub struct CliOptions {
    /// Playlist file (.m3u or .m3u8) to read.
    pub playlist: PathBuf,

    /// Directory relative entries are resolved against (default: the playlist's directory).
    #[arg(short = 'b', long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Write the tracks back as a playlist to this file instead of printing them as JSON.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Path to the config file (default: <config_dir>/m3u-translator/m3u-translator.toml).
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Path to the log file (default: <cache_dir>/m3u-translator.log).
    #[arg(short = 'l', long = "log")]
    pub log_file: Option<PathBuf>,

    /// Skip lines of .m3u8 files that aren't valid UTF-8 instead of reading them as Latin-1.
    #[arg(long = "strict-m3u8")]
    pub strict_m3u8: bool,

    /// Print logs to stderr (default: false).
    #[arg(long = "stderr")]
    pub log_stderr: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParserConfig {
    pub strict_m3u8: bool,
}

#[derive(Debug, PartialEq)]
pub struct LogConfig {
    pub log_file: PathBuf,
    pub log_stderr: bool,
    pub level: LevelFilter,
}

#[derive(Debug, Default, PartialEq)]
pub struct Config {
    pub base_dir: Option<PathBuf>,
    pub parser_config: ParserConfig,
    pub log_config: LogConfig,
}

impl ParserConfig {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let mut config = Self::default();
        let table = content.as_ref().parse::<Table>()?;
        for (key, val) in table {
            if let ("strict_m3u8", Value::Boolean(strict_m3u8)) = (key.as_str(), val) {
                config.strict_m3u8 = strict_m3u8;
            }
        }

        Ok(config)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: dirs::cache_dir()
                .unwrap_or(".".into())
                .join(constants::DEFAULT_LOG_FILE),
            log_stderr: false,
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let mut config = Self::default();
        let table = content.as_ref().parse::<Table>()?;
        for (key, val) in table {
            match (key.as_str(), val) {
                ("log_file", Value::String(log_file)) => {
                    config.log_file = log_file.into();
                }
                ("log_level", Value::String(level)) => {
                    config.level = LevelFilter::from_str(&level)
                        .map_err(|_| anyhow!("invalid log level `{}`", level))?;
                }
                _ => (),
            }
        }

        Ok(config)
    }
}

impl Config {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let table = content.as_ref().parse::<Table>()?;
        let base_dir = match table.get("base_dir") {
            Some(Value::String(base_dir)) => Some(base_dir.into()),
            _ => None,
        };

        Ok(Self {
            base_dir,
            parser_config: ParserConfig::try_new(&content)?,
            log_config: LogConfig::try_new(&content)?,
        })
    }

    /// Reads `path`, or the default config file if `path` is `None`.
    /// Only a missing default file falls back to the defaults.
    pub fn try_from_file(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let default_path = dirs::config_dir()
                    .ok_or(anyhow!("no config dir found on the system"))?
                    .join(constants::DEFAULT_CONFIG_DIR)
                    .join(constants::DEFAULT_CONFIG_FILE);
                match fs::read_to_string(&default_path) {
                    Ok(content) => content,
                    Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
                    Err(e) => return Err(e.into()),
                }
            }
        };

        Self::try_new(content)
    }

    pub fn merge_with_cli(self, cli_opts: &CliOptions) -> Self {
        let parser_config = ParserConfig {
            strict_m3u8: cli_opts.strict_m3u8 || self.parser_config.strict_m3u8,
        };
        let log_config = LogConfig {
            log_file: cli_opts
                .log_file
                .clone()
                .unwrap_or(self.log_config.log_file),
            log_stderr: cli_opts.log_stderr || self.log_config.log_stderr,
            level: self.log_config.level,
        };

        Self {
            base_dir: cli_opts.base_dir.clone().or(self.base_dir),
            parser_config,
            log_config,
        }
    }

    /// The configured base directory, or the directory holding `playlist`,
    /// made absolute.
    pub fn base_dir_for(&self, playlist: &Path) -> Result<PathBuf> {
        let base_dir = match &self.base_dir {
            Some(base_dir) => base_dir.as_path(),
            None => playlist
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new(".")),
        };

        Ok(path::absolute(base_dir)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cli(args: &[&str]) -> CliOptions {
        CliOptions::parse_from(["m3u-translator"].iter().chain(args))
    }

    #[test]
    fn from_toml() {
        let config = Config::try_new(
            r#"
base_dir = "/music"
strict_m3u8 = true
log_file = "/tmp/m3u.log"
log_level = "debug"
unknown = 1
"#,
        )
        .unwrap();
        assert_eq!(config.base_dir, Some(PathBuf::from("/music")));
        assert!(config.parser_config.strict_m3u8);
        assert_eq!(config.log_config.log_file, PathBuf::from("/tmp/m3u.log"));
        assert_eq!(config.log_config.level, LevelFilter::Debug);

        let config = Config::try_new("strict_m3u8 = \"yes\"").unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::try_new("log_level = \"loud\"").is_err());
        assert!(Config::try_new("base_dir = ").is_err());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m3u-translator.toml");
        fs::write(&path, "base_dir = \"/music\"\n").unwrap();
        let config = Config::try_from_file(Some(&path)).unwrap();
        assert_eq!(config.base_dir, Some(PathBuf::from("/music")));

        assert!(Config::try_from_file(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn cli_wins() {
        let config = Config::try_new("base_dir = \"/music\"\nlog_file = \"/tmp/a.log\"").unwrap();
        let merged = config.merge_with_cli(&cli(&[
            "list.m3u",
            "-b",
            "/other",
            "--strict-m3u8",
            "--stderr",
        ]));
        assert_eq!(merged.base_dir, Some(PathBuf::from("/other")));
        assert!(merged.parser_config.strict_m3u8);
        assert!(merged.log_config.log_stderr);
        assert_eq!(merged.log_config.log_file, PathBuf::from("/tmp/a.log"));

        let config = Config::try_new("base_dir = \"/music\"").unwrap();
        let merged = config.merge_with_cli(&cli(&["list.m3u", "-l", "/tmp/b.log"]));
        assert_eq!(merged.base_dir, Some(PathBuf::from("/music")));
        assert!(!merged.parser_config.strict_m3u8);
        assert_eq!(merged.log_config.log_file, PathBuf::from("/tmp/b.log"));
    }

    #[cfg(unix)]
    #[test]
    fn base_dirs() {
        let config = Config::default();
        assert_eq!(
            config.base_dir_for(Path::new("/music/lists/a.m3u")).unwrap(),
            PathBuf::from("/music/lists")
        );
        let config = Config {
            base_dir: Some("/music".into()),
            ..Default::default()
        };
        assert_eq!(
            config.base_dir_for(Path::new("/elsewhere/a.m3u")).unwrap(),
            PathBuf::from("/music")
        );
        let config = Config::default();
        assert!(config.base_dir_for(Path::new("a.m3u")).unwrap().is_absolute());
    }
}
