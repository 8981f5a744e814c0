//! Key bindings for the form field.
//!
//! A [`Binding`] is a set of key presses plus help text. Bindings are described
//! with the familiar string notation (`"ctrl+w"`, `"alt+backspace"`, `"home"`)
//! and matched against incoming `bubbletea_rs::KeyMsg` values.
//!
//! ```rust
//! use bubbletea_formfield::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let reveal = new_binding(vec![
//!     with_keys_str(&["ctrl+r"]),
//!     with_help("ctrl+r", "show password"),
//! ]);
//! let msg = KeyMsg { key: KeyCode::Char('r'), modifiers: KeyModifiers::CONTROL };
//! assert!(matches_binding(&msg, &reveal));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held. Shift is not compared.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses the `"ctrl+alt+x"` notation. Returns `None` for unknown key names.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "ctrl++" style: a trailing empty segment means the plus key itself
        if s.ends_with("++") {
            parts.truncate(parts.len() - 2);
            parts.push("+");
        }
        let key = parts.pop()?;
        for m in parts {
            match m {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "tab" => KeyCode::Tab,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Reports whether a key message is this press. Shift is ignored since it
    /// is already folded into the character case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        let relevant = !KeyModifiers::SHIFT;
        self.code == msg.key && (self.modifiers & relevant) == (msg.modifiers & relevant)
    }
}

/// Short help shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `ctrl+r`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied while building a [`Binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        opt(&mut b);
    }
    b
}

/// Sets the keys of a binding from string notation. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding out disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

impl Binding {
    /// The presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for the binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }
}

/// Reports whether `msg` triggers `binding`. Disabled bindings never match.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        let p = KeyPress::parse("alt+backspace").unwrap();
        assert_eq!(p.code, KeyCode::Backspace);
        assert_eq!(p.modifiers, KeyModifiers::ALT);

        let p = KeyPress::parse("ctrl+w").unwrap();
        assert_eq!(p.code, KeyCode::Char('w'));
        assert_eq!(p.modifiers, KeyModifiers::CONTROL);

        assert_eq!(KeyPress::parse("home").unwrap().code, KeyCode::Home);
        assert!(KeyPress::parse("hyper+x").is_none());
        assert!(KeyPress::parse("nonsense").is_none());
    }

    #[test]
    fn test_matches_binding() {
        let b = new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]);
        assert!(matches_binding(&key(KeyCode::Backspace, KeyModifiers::NONE), &b));
        assert!(matches_binding(&key(KeyCode::Char('h'), KeyModifiers::CONTROL), &b));
        assert!(!matches_binding(&key(KeyCode::Char('h'), KeyModifiers::NONE), &b));
        assert!(!matches_binding(&key(KeyCode::Backspace, KeyModifiers::ALT), &b));
    }

    #[test]
    fn test_shift_is_ignored() {
        let b = new_binding(vec![with_keys_str(&["ctrl+r"])]);
        let msg = key(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert!(matches_binding(&msg, &b));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["ctrl+v"]), with_disabled()]);
        let msg = key(KeyCode::Char('v'), KeyModifiers::CONTROL);
        assert!(!matches_binding(&msg, &b));

        b.set_enabled(true);
        assert!(matches_binding(&msg, &b));

        let empty = new_binding(vec![with_help("x", "nothing")]);
        assert!(!empty.enabled());
        assert_eq!(empty.help().desc, "nothing");
    }
}
