//! Color acceptance and deterministic auto-coloring
//!
//! Color validity is checked here, at the UI boundary, before a recolor
//! command is built. The tree and board stores never validate colors
//! themselves; an invalid value must be rejected before it reaches them.

use crate::error::{Result, WorkspaceError};

/// Curated palette of 16 display colors (hex with `#`)
///
/// Chosen to be distinct and readable as folder/column accents on both
/// light and dark backgrounds.
pub const PALETTE: &[&str] = &[
    "#d73a4a", // red
    "#e36209", // orange
    "#f9c513", // yellow
    "#0e8a16", // green
    "#006b75", // teal
    "#1d76db", // blue
    "#5319e7", // purple
    "#b60205", // dark red
    "#d876e3", // pink
    "#0075ca", // ocean
    "#7057ff", // violet
    "#008672", // sea green
    "#e4e669", // lime
    "#bfd4f2", // light blue
    "#c5def5", // periwinkle
    "#fbca04", // gold
];

/// Basic CSS color keywords accepted alongside hex values
const KEYWORDS: &[&str] = &[
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "orange", "purple", "red", "silver", "teal", "white", "yellow",
];

/// Return a deterministic palette color for a slug
///
/// Uses a simple FNV-1a hash mapped to the palette index, so a folder or
/// column gets the same accent every time it is created under the same name.
pub fn auto_color(slug: &str) -> &'static str {
    let hash = fnv1a(slug);
    let idx = (hash as usize) % PALETTE.len();
    PALETTE[idx]
}

/// True if the value passes the CSS-color acceptance check
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` hex forms and the basic
/// CSS keywords.
pub fn is_valid_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    KEYWORDS.contains(&value.to_ascii_lowercase().as_str())
}

/// Validate a color at the UI boundary
pub fn validate_color(value: &str) -> Result<()> {
    if is_valid_color(value) {
        Ok(())
    } else {
        Err(WorkspaceError::invalid_color(value))
    }
}

/// FNV-1a hash (32-bit) for short strings
fn fnv1a(s: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_color_deterministic() {
        assert_eq!(auto_color("projects"), auto_color("projects"));
    }

    #[test]
    fn test_auto_color_is_palette_entry() {
        assert!(PALETTE.contains(&auto_color("inbox")));
    }

    #[test]
    fn test_hex_forms() {
        assert!(is_valid_color("#abc"));
        assert!(is_valid_color("#abcd"));
        assert!(is_valid_color("#1d76db"));
        assert!(is_valid_color("#1d76dbff"));
        assert!(!is_valid_color("#12345"));
        assert!(!is_valid_color("#zzz"));
        assert!(!is_valid_color("1d76db"));
    }

    #[test]
    fn test_keywords() {
        assert!(is_valid_color("teal"));
        assert!(is_valid_color("Teal"));
        assert!(!is_valid_color("blurple"));
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#0e8a16").is_ok());
        assert!(matches!(
            validate_color("not-a-color"),
            Err(WorkspaceError::InvalidColor { .. })
        ));
    }
}
