//! Subdomain wordlists and base-domain validation.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::EnumerationError;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Reads candidate labels from `path`.
///
/// Lines are whitespace-trimmed; blank lines and `#` comments are skipped.
/// Invalid UTF-8 bytes are dropped rather than rejected. File order and
/// duplicate lines are preserved.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>, EnumerationError> {
    let bytes: Vec<u8> = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EnumerationError::WordlistNotFound {
            path: path.to_path_buf(),
        },
        _ => EnumerationError::WordlistUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let words: Vec<String> = parse_wordlist(&bytes);
    debug!("loaded {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// Splits raw wordlist contents into candidate labels.
pub fn parse_wordlist(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes).replace(char::REPLACEMENT_CHARACTER, "");
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Checks hostname syntax: at most 253 characters, dot-separated labels of
/// 1-63 ASCII alphanumerics or hyphens, never starting or ending with a hyphen.
pub fn validate_domain(domain: &str) -> Result<(), EnumerationError> {
    let trimmed: &str = domain.strip_suffix('.').unwrap_or(domain);
    let invalid = || EnumerationError::InvalidDomain(domain.to_string());

    if trimmed.is_empty() || trimmed.len() > MAX_DOMAIN_LEN {
        return Err(invalid());
    }

    let labels_ok = trimmed.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    if labels_ok { Ok(()) } else { Err(invalid()) }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
