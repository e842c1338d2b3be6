//! Plain-text key lists
//!
//! One key per line, key name first and key bytes second, both in hex:
//! ```text
//! # comment
//! FA505078126ACB3E BDC51862ABED79B2DE48C8E7E66C6200
//! 0xFF813F7D062AC0BC=AA0B5C77F088CCC2D39049BD267F066D  // trailing columns ignored
//! ```
//! Fields may be separated by whitespace, `=`, `,` or `;`.

use std::path::Path;

use casc_core::{CascError, CascResult, KeyName};

use crate::keys::EncryptionKey;

/// Parse a key list. Blank lines and `#` / `//` comments are skipped.
pub fn parse_key_list(content: &str) -> CascResult<Vec<EncryptionKey>> {
    let mut keys = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line
            .split(|c: char| c.is_whitespace() || matches!(c, '=' | ',' | ';'))
            .filter(|field| !field.is_empty());

        let (Some(name), Some(key)) = (fields.next(), fields.next()) else {
            return Err(CascError::KeyFile {
                line: line_no,
                reason: "expected a key name and a key".into(),
            });
        };

        let name: KeyName = name.parse().map_err(|e| CascError::KeyFile {
            line: line_no,
            reason: format!("invalid key name '{name}': {e}"),
        })?;
        let key = EncryptionKey::from_hex(name, key).map_err(|e| CascError::KeyFile {
            line: line_no,
            reason: e.to_string(),
        })?;
        keys.push(key);
    }

    Ok(keys)
}

/// Read and parse a key list from disk.
pub fn load_key_file(path: &Path) -> CascResult<Vec<EncryptionKey>> {
    let content = std::fs::read_to_string(path)?;
    let keys = parse_key_list(&content)?;
    tracing::info!(count = keys.len(), "loaded key file: {}", path.display());
    Ok(keys)
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}
