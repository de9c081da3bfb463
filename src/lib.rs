//! # resource-extractor
//!
//! Extracts the entries of a `.resources` container to disk.
//!
//! ## Container Format
//!
//! A `.resources` container is a binary key/value archive. It has a header,
//! a type table, a name index, and a data section:
//!
//! ```text
//! CE CA EF BE              magic
//! <manager header>         reader and resource-set type names
//! <version, counts, types> resource set header
//! <hashes, name offsets>   name index
//! <names>                  UTF-16 names, each with a data offset
//! <data>                   type code followed by the value
//! ```
//!
//! ## Extraction Rules
//!
//! Each entry is written according to its kind:
//! - **Text** → `extracted_txt/{key}.txt`, verbatim
//! - **Byte array** → `extracted_bin/{key}{ext}`, where `ext` is sniffed from
//!   the leading bytes (see [`signature`])
//! - **Bitmap** → `extracted_img/{key}.png`, re-encoded as PNG
//! - **Anything else** → skipped with a warning
//!
//! ## Hidden Text Detection
//!
//! Byte arrays are also checked for text content. A byte array qualifies when
//! it contains no control bytes other than tab, line feed and carriage
//! return. Qualifying arrays that are valid UTF-8 are written a second time to
//! `extracted_txt/{key}_as_text.txt`. Failures of this pass are ignored.
//!
//! ## Example
//!
//! ```no_run
//! use resource_extractor::{ExtractConfig, Extractor, LogSink};
//! use std::path::Path;
//!
//! let mut extractor = Extractor::new(ExtractConfig::default(), LogSink);
//! let reports = extractor.run(Path::new("Strings.resources"))?;
//! println!("{} entries", reports.len());
//! # Ok::<(), resource_extractor::ExtractError>(())
//! ```

pub mod bitmap;
pub mod container;
pub mod error;
pub mod events;
pub mod extractor;
pub mod signature;

pub use container::{
    ContainerHeader, Entries, Primitive, ResourceEntry, ResourceReader, ResourceValue,
    SerializationFormat,
};
pub use error::{ContainerError, ExtractError};
pub use events::{Event, EventSink, LogSink, Severity};
pub use extractor::{list, EntryReport, ExtractConfig, ExtractionOutcome, Extractor};
pub use signature::{detect_extension, is_likely_text, SignatureRule, SIGNATURES};
