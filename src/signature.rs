//! Content sniffing for binary resources

/// Extension used when no signature matches
pub const DEFAULT_EXTENSION: &str = ".bin";

// Control codes that may appear in text
const TAB: u8 = 0x09;
const LINE_FEED: u8 = 0x0A;
const CARRIAGE_RETURN: u8 = 0x0D;
const PRINTABLE_START: u8 = 32;

/// A file extension identified by a fixed byte prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRule {
    pub extension: &'static str,
    pub magic: &'static [u8],
}

impl SignatureRule {
    pub const fn new(extension: &'static str, magic: &'static [u8]) -> Self {
        Self { extension, magic }
    }

    /// True when `data` starts with this rule's magic bytes
    pub fn matches(&self, data: &[u8]) -> bool {
        data.starts_with(self.magic)
    }
}

/// Known signatures, checked in declaration order.
///
/// `.dll` shares its magic with `.exe` and is therefore never selected.
pub static SIGNATURES: &[SignatureRule] = &[
    SignatureRule::new(".exe", &[0x4D, 0x5A]),
    SignatureRule::new(".dll", &[0x4D, 0x5A]),
    SignatureRule::new(".zip", &[0x50, 0x4B, 0x03, 0x04]),
    SignatureRule::new(".png", &[0x89, 0x50, 0x4E, 0x47]),
];

/// Pick an extension for `data` using the default signature table
pub fn detect_extension(data: &[u8]) -> &'static str {
    detect_extension_with(data, SIGNATURES)
}

/// Pick an extension for `data`: the first matching rule wins, `.bin` otherwise
pub fn detect_extension_with(data: &[u8], rules: &[SignatureRule]) -> &'static str {
    rules
        .iter()
        .find(|rule| rule.matches(data))
        .map(|rule| rule.extension)
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Check whether a byte sequence looks like text.
///
/// Every byte must be 32 or above, or one of tab, line feed and carriage
/// return. High bytes (0x80-0xFF) are accepted without further checks, and an
/// empty sequence qualifies.
pub fn is_likely_text(data: &[u8]) -> bool {
    data.iter()
        .all(|&b| b >= PRINTABLE_START || matches!(b, TAB | LINE_FEED | CARRIAGE_RETURN))
}
