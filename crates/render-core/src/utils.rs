use serde::{Deserialize, Serialize};

/// Horizontal alignment of a text run relative to its anchor box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Encodes text for a simple font using WinAnsiEncoding.
///
/// Latin-1 maps directly; the handful of typographic characters that live in
/// the 0x80-0x9F block are translated, anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{0152}' => 0x8C,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            '\u{0153}' => 0x9C,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_keeps_latin1_and_maps_typography() {
        assert_eq!(to_win_ansi("Élève"), vec![0xC9, b'l', 0xE8, b'v', b'e']);
        let expected = vec![b'l', 0x92, 0xE9, b'c', b'o', b'l', b'e'];
        assert_eq!(to_win_ansi("l\u{2019}\u{e9}cole"), expected);
        assert_eq!(to_win_ansi("\u{4e2d}"), vec![b'?']);
    }
}
