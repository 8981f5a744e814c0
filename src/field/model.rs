//! Core model implementation for the form field component.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{ChangeFn, FieldConfig, PasteErrMsg, TouchFn};
use super::validation::ValidationLookup;
use crate::runeutil::Sanitizer;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::Arc;
use std::time::Duration;

/// Shared handle to the form that owns a field's validation state.
pub type ParentForm = Arc<dyn ValidationLookup + Send + Sync>;

/// A labelled single-line input bound to a parent form.
///
/// The field displays whatever the form last wrote into it, reports every
/// user edit through the change notifier and every loss of focus through the
/// touch notifier. Password fields can be revealed and masked again; all
/// other input types render their value as typed. Below the input, at most
/// one validation message from the parent form is shown.
///
/// # Examples
///
/// ```rust
/// use bubbletea_formfield::field::{new, FieldConfig, InputType, ValueAccessor};
///
/// let mut field = new(
///     FieldConfig::new("password", "Password").with_input_type(InputType::Password),
/// );
/// field.write_value("hunter2");
/// assert_eq!(field.value(), "hunter2");
/// assert_eq!(field.effective_input_type(), InputType::Password);
///
/// field.toggle_visibility();
/// assert_eq!(field.effective_input_type(), InputType::Text);
/// ```
pub struct Model {
    /// Err holds the last paste failure, if any.
    pub err: Option<String>,

    /// Prompt drawn before the value.
    pub prompt: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the label line.
    pub label_style: Style,
    /// Style of the value.
    pub text_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the cursor block while focused.
    pub cursor_style: Style,
    /// Style of the `[show]`/`[hide]` control and state markers.
    pub marker_style: Style,
    /// Style of the validation message.
    pub error_style: Style,

    /// Width the value area is padded to. 0 means no padding.
    pub width: usize,

    /// Character drawn in place of each masked character.
    pub echo_character: char,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    /// Maps the value, label and placeholder onto a single printable row,
    /// and cleans pasted text.
    pub sanitizer: Sanitizer,

    pub(super) config: FieldConfig,
    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,
    /// Password masking, only meaningful for password fields.
    pub(super) hide: bool,
    pub(super) is_disabled: bool,
    pub(super) on_change: Option<ChangeFn>,
    pub(super) on_touched: Option<TouchFn>,
    pub(super) parent_form: Option<ParentForm>,
}

/// Creates a field for the given configuration.
///
/// The field starts unfocused, enabled, masked, with an empty value and no
/// notifiers registered.
pub fn new(config: FieldConfig) -> Model {
    Model {
        err: None,
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        label_style: Style::new().bold(true),
        text_style: Style::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        marker_style: Style::new().foreground(Color::from("244")),
        error_style: Style::new().foreground(Color::from("9")),
        width: 0,
        echo_character: '*',
        key_map: default_key_map(),
        sanitizer: Sanitizer::default(),
        config,
        value: Vec::new(),
        pos: 0,
        focus: false,
        hide: true,
        is_disabled: false,
        on_change: None,
        on_touched: None,
        parent_form: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new(FieldConfig::default())
    }
}

/// Creates a command that reads the system clipboard.
///
/// The command resolves to a [`PasteMsg`](super::PasteMsg) with the clipboard
/// text, or a [`PasteErrMsg`] when the clipboard cannot be read or clipboard
/// support is compiled out.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
