//! Entry classification and extraction
//!
//! [`Extractor`] walks a container once and writes every entry in a form that
//! matches its kind:
//!
//! | Value          | Destination                          |
//! |----------------|--------------------------------------|
//! | text           | `extracted_txt/{key}.txt`            |
//! | byte array     | `extracted_bin/{key}{sniffed ext}`   |
//! | bitmap         | `extracted_img/{key}.png`            |
//! | anything else  | skipped with a warning               |
//!
//! Byte arrays that look like text are also written to
//! `extracted_txt/{key}_as_text.txt`. That second write is best effort: any
//! failure is dropped silently.

use crate::container::{ResourceEntry, ResourceReader, ResourceValue};
use crate::error::{ContainerError, ExtractError, Result};
use crate::events::{Event, EventSink};
use crate::signature::{detect_extension, is_likely_text};
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIN_DIR: &str = "extracted_bin";
pub const DEFAULT_TXT_DIR: &str = "extracted_txt";
pub const DEFAULT_IMG_DIR: &str = "extracted_img";

const TEXT_EXTENSION: &str = ".txt";
const IMAGE_EXTENSION: &str = ".png";
const HIDDEN_TEXT_SUFFIX: &str = "_as_text.txt";

/// Where and how entries are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Directory the output directories are created in
    pub output_root: PathBuf,
    pub bin_dir: PathBuf,
    pub txt_dir: PathBuf,
    pub img_dir: PathBuf,
    /// Whether byte arrays are also tried as text
    pub hidden_text: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            bin_dir: PathBuf::from(DEFAULT_BIN_DIR),
            txt_dir: PathBuf::from(DEFAULT_TXT_DIR),
            img_dir: PathBuf::from(DEFAULT_IMG_DIR),
            hidden_text: true,
        }
    }
}

impl ExtractConfig {
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn with_hidden_text(mut self, enabled: bool) -> Self {
        self.hidden_text = enabled;
        self
    }

    pub fn bin_path(&self) -> PathBuf {
        self.output_root.join(&self.bin_dir)
    }

    pub fn txt_path(&self) -> PathBuf {
        self.output_root.join(&self.txt_dir)
    }

    pub fn img_path(&self) -> PathBuf {
        self.output_root.join(&self.img_dir)
    }
}

/// Result of the primary write for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Written { path: PathBuf, bytes: u64 },
    Skipped { reason: String },
}

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub key: String,
    pub outcome: ExtractionOutcome,
    /// Speculative text file written for a byte array
    pub hidden_text: Option<PathBuf>,
}

/// Extracts container entries to disk, reporting progress to an event sink
pub struct Extractor<S> {
    config: ExtractConfig,
    sink: S,
}

impl<S: EventSink> Extractor<S> {
    pub fn new(config: ExtractConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Extract every entry of the container at `input`.
    ///
    /// Emits exactly one terminal event: success when all entries were handled,
    /// error otherwise. The first failing entry aborts the run, and files written
    /// before it stay on disk.
    pub fn run(&mut self, input: &Path) -> Result<Vec<EntryReport>> {
        if !input.is_file() {
            let err = ExtractError::InputNotFound(input.to_path_buf());
            self.sink.emit(Event::error(err.to_string()));
            return Err(err);
        }

        match self.run_container(input) {
            Ok(reports) => {
                self.sink.emit(Event::success("Resource extraction completed successfully!"));
                Ok(reports)
            }
            Err(err) => {
                self.sink.emit(Event::error(format!("Error extracting resources: {}", err)));
                Err(err)
            }
        }
    }

    fn run_container(&mut self, input: &Path) -> Result<Vec<EntryReport>> {
        self.prepare()?;

        self.sink.emit(Event::info("Initializing resource extraction..."));
        let name = input.file_name().map(Path::new).unwrap_or(input);
        self.sink.emit(Event::info(format!("Processing file: {}", name.display())));

        let reader = ResourceReader::open(input)?;
        let mut reports = Vec::with_capacity(reader.len());
        for entry in reader {
            reports.push(self.extract_entry(entry?)?);
        }
        Ok(reports)
    }

    /// Create the output directories; existing directories are fine
    pub fn prepare(&self) -> Result<()> {
        for dir in [self.config.bin_path(), self.config.txt_path(), self.config.img_path()] {
            fs::create_dir_all(&dir).map_err(|e| ExtractError::io(&dir, e))?;
        }
        Ok(())
    }

    /// Classify one entry and write it to the matching directory
    pub fn extract_entry(&mut self, entry: ResourceEntry) -> Result<EntryReport> {
        let ResourceEntry { key, value } = entry;
        self.sink.emit(Event::info(format!("Found resource: {}", key)));

        let mut hidden_text = None;
        let outcome = match value {
            ResourceValue::Text(text) => self.write_text(&key, &text)?,
            ResourceValue::Bytes(data) => {
                let outcome = self.write_binary(&key, &data)?;
                hidden_text = self.try_hidden_text(&key, &data);
                outcome
            }
            ResourceValue::Image(image) => self.write_image(&key, &image)?,
            other => {
                let reason =
                    format!("Unsupported resource type for {}: {}", key, other.kind_name());
                self.sink.emit(Event::warning(reason.clone()));
                ExtractionOutcome::Skipped { reason }
            }
        };

        Ok(EntryReport {
            key,
            outcome,
            hidden_text,
        })
    }

    fn write_text(&mut self, key: &str, text: &str) -> Result<ExtractionOutcome> {
        let path = self.config.txt_path().join(format!("{}{}", key, TEXT_EXTENSION));
        fs::write(&path, text).map_err(|e| ExtractError::io(&path, e))?;

        self.sink.emit(Event::success(format!(
            "Extracted string resource to {}",
            path.display()
        )));
        Ok(ExtractionOutcome::Written {
            path,
            bytes: text.len() as u64,
        })
    }

    fn write_binary(&mut self, key: &str, data: &[u8]) -> Result<ExtractionOutcome> {
        let extension = detect_extension(data);
        let path = self.config.bin_path().join(format!("{}{}", key, extension));
        fs::write(&path, data).map_err(|e| ExtractError::io(&path, e))?;

        self.sink.emit(Event::success(format!(
            "Extracted binary resource to {} ({} bytes)",
            path.display(),
            data.len()
        )));
        Ok(ExtractionOutcome::Written {
            path,
            bytes: data.len() as u64,
        })
    }

    fn write_image(&mut self, key: &str, image: &DynamicImage) -> Result<ExtractionOutcome> {
        let path = self.config.img_path().join(format!("{}{}", key, IMAGE_EXTENSION));
        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| ExtractError::Image {
                path: path.clone(),
                source,
            })?;
        let bytes = fs::metadata(&path).map_err(|e| ExtractError::io(&path, e))?.len();

        self.sink.emit(Event::success(format!(
            "Extracted bitmap resource to {}",
            path.display()
        )));
        Ok(ExtractionOutcome::Written { path, bytes })
    }

    /// Best-effort write of a byte array as UTF-8 text.
    ///
    /// Invalid sequences become U+FFFD. Runs even when a binary signature
    /// matched. Write failures are not reported.
    fn try_hidden_text(&mut self, key: &str, data: &[u8]) -> Option<PathBuf> {
        if !self.config.hidden_text || !is_likely_text(data) {
            return None;
        }

        let text = String::from_utf8_lossy(data);
        let path = self.config.txt_path().join(format!("{}{}", key, HIDDEN_TEXT_SUFFIX));
        if let Err(e) = fs::write(&path, text.as_bytes()) {
            log::debug!("Could not write {}: {}", path.display(), e);
            return None;
        }

        self.sink.emit(Event::success(format!(
            "Found possible text in binary resource: {}",
            path.display()
        )));
        Some(path)
    }
}

/// List `(key, kind)` pairs of a container without writing anything
pub fn list(input: &Path) -> std::result::Result<Vec<(String, String)>, ContainerError> {
    ResourceReader::open(input)?
        .into_iter()
        .map(|entry| entry.map(|e| (e.key, e.value.kind_name().to_string())))
        .collect()
}
