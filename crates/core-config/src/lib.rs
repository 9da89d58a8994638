//! Configuration loading and parsing.
//!
//! Reads `segmint.toml` (or an override path supplied by the caller):
//!
//! ```toml
//! [width]
//! ambiguous = "wide"     # "narrow" (default) or "wide"
//!
//! [sentence]
//! abbreviations = false  # default true
//! ```
//!
//! Missing sections and fields take their defaults and unknown fields are
//! ignored. A file that fails to parse is reported with a `warn` event and
//! the defaults are used; loading never fails because of file contents.

use anyhow::Result;
use core_text::{AmbiguousWidth, Options};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

const FILE_NAME: &str = "segmint.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct WidthConfig {
    #[serde(default)]
    pub ambiguous: AmbiguousWidth,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SentenceConfig {
    #[serde(default = "SentenceConfig::default_abbreviations")]
    pub abbreviations: bool,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            abbreviations: Self::default_abbreviations(),
        }
    }
}

impl SentenceConfig {
    const fn default_abbreviations() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub width: WidthConfig,
    #[serde(default)]
    pub sentence: SentenceConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub path: Option<PathBuf>,
    pub file: ConfigFile, // parsed (or default) data
}

/// Best-effort config path: `segmint.toml` in the working directory, then the
/// platform config directory (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("segmint").join(FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_file_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(
                target: "config",
                path = %path.display(),
                ambiguous = ?file.width.ambiguous,
                abbreviations = file.sentence.abbreviations,
                "config_loaded"
            );
            Ok(Config {
                raw: Some(content),
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(
                target: "config",
                path = %path.display(),
                error = %e.message(),
                "config_parse_failed_using_defaults"
            );
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Segmentation options described by this configuration.
    pub fn options(&self) -> Options {
        Options::default()
            .with_ambiguous(self.file.width.ambiguous)
            .with_abbreviations(self.file.sentence.abbreviations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), contents).unwrap();
        tmp
    }

    fn capture<F: FnOnce()>(level: Level, f: F) -> String {
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();
        with_default(subscriber, f);
        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert!(cfg.raw.is_none());
        assert_eq!(cfg.options(), Options::default());
    }

    #[test]
    fn parses_width_and_sentence_sections() {
        let tmp =
            write_config("[width]\nambiguous = \"wide\"\n[sentence]\nabbreviations = false\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.width.ambiguous, AmbiguousWidth::Wide);
        assert!(!cfg.file.sentence.abbreviations);
        let options = cfg.options();
        assert_eq!(options.ambiguous, AmbiguousWidth::Wide);
        assert!(!options.abbreviations);
        assert_eq!(cfg.path.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let tmp = write_config("[sentence]\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.width.ambiguous, AmbiguousWidth::Narrow);
        assert!(cfg.file.sentence.abbreviations);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let tmp = write_config("[width]\nambiguous = \"wide\"\ntabs = 8\n[editor]\nx = 1\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.width.ambiguous, AmbiguousWidth::Wide);
    }

    #[test]
    fn parse_error_falls_back_with_warning() {
        let tmp = write_config("[width]\nambiguous = \"enormous\"\n");
        let path = tmp.path().to_path_buf();
        let mut cfg = None;
        let log_output = capture(Level::WARN, || {
            cfg = Some(load_from(Some(path)).unwrap());
        });
        assert_eq!(cfg.map(|c| c.file), Some(ConfigFile::default()));
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("config_parse_failed_using_defaults"));
    }

    #[test]
    fn load_logging_uses_config_target() {
        let tmp = write_config("[width]\nambiguous = \"narrow\"\n");
        let path = tmp.path().to_path_buf();
        let log_output = capture(Level::INFO, || {
            load_from(Some(path)).unwrap();
        });
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("config_loaded"));
    }
}
