//! Text sanitization for single-line display.
//!
//! A field holds whatever text its form writes into it, but the input line
//! can only draw printable characters on one row. [`Sanitizer`] maps a value
//! onto that row: line breaks and tabs become a replacement string (a single
//! space by default) and any other control character is dropped.
//!
//! ```rust
//! use bubbletea_formfield::runeutil::{new_sanitizer, replace_tabs};
//!
//! let sanitizer = new_sanitizer(vec![]);
//! assert_eq!(sanitizer.sanitize_str("a\tb\nc\x07"), "a b c");
//!
//! let wide = new_sanitizer(vec![replace_tabs("  ")]);
//! assert_eq!(wide.sanitize_str("a\tb"), "a  b");
//! ```

/// Removes control characters and replaces line breaks and tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    /// Replacement for `\n` and `\r`.
    replace_newline: String,
    /// Replacement for `\t`.
    replace_tab: String,
}

impl Default for Sanitizer {
    /// One space for both tabs and line breaks, so every value stays on a
    /// single row and each of those characters takes one cell.
    fn default() -> Self {
        Self {
            replace_newline: " ".to_string(),
            replace_tab: " ".to_string(),
        }
    }
}

/// Option applied while building a [`Sanitizer`].
pub type SanitizerOpt = Box<dyn FnOnce(&mut Sanitizer)>;

/// Builds a sanitizer from the defaults plus the given options.
pub fn new_sanitizer(opts: Vec<SanitizerOpt>) -> Sanitizer {
    let mut s = Sanitizer::default();
    for opt in opts {
        opt(&mut s);
    }
    s
}

/// Sets the string tabs are replaced with.
pub fn replace_tabs(tab_repl: &str) -> SanitizerOpt {
    let repl = tab_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_tab = repl)
}

/// Sets the string `\n` and `\r` are replaced with.
pub fn replace_newlines(nl_repl: &str) -> SanitizerOpt {
    let repl = nl_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_newline = repl)
}

impl Sanitizer {
    /// Sanitizes a string.
    pub fn sanitize_str(&self, input: &str) -> String {
        self.sanitize_runes(&input.chars().collect::<Vec<_>>())
            .into_iter()
            .collect()
    }

    /// Sanitizes a slice of characters.
    pub fn sanitize_runes(&self, runes: &[char]) -> Vec<char> {
        let mut out: Vec<char> = Vec::with_capacity(runes.len());
        for &r in runes {
            match r {
                '\r' | '\n' => out.extend(self.replace_newline.chars()),
                '\t' => out.extend(self.replace_tab.chars()),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_text_on_one_row() {
        let s = Sanitizer::default();
        assert_eq!(s.sanitize_str("one\ntwo\r\nthree"), "one two  three");
        assert_eq!(s.sanitize_str("a\tb"), "a b");
        assert_eq!(s.sanitize_str("bell\x07 esc\x1b"), "bell esc");
        assert_eq!(s.sanitize_str("héllo ✓"), "héllo ✓");
    }

    #[test]
    fn test_custom_replacements() {
        let s = new_sanitizer(vec![replace_tabs("    "), replace_newlines(" | ")]);
        assert_eq!(s.sanitize_str("a\tb\nc"), "a    b | c");
        assert_eq!(
            s.sanitize_runes(&['x', '\t', 'y']),
            vec!['x', ' ', ' ', ' ', ' ', 'y']
        );
    }
}
