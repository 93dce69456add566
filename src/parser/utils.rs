//! Whitespace rules shared by the matchers.
//!
//! The documents this tool reads treat U+001C..=U+001F (file, group, record
//! and unit separators) as whitespace, on top of Unicode `White_Space`.

/// Regex class for one whitespace character.
pub const WS: &str = r"[\s\x1C-\x1F]";

pub fn is_ws(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn trim_ws(s: &str) -> &str {
    s.trim_matches(is_ws)
}
