//! View rendering methods for the form field.

use super::model::Model;
use super::types::InputType;
use super::validation::validation_message;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// View renders the label, the input line and any validation message,
    /// one per line.
    pub fn view(&self) -> String {
        let mut lines = vec![self.label_view(), self.input_view()];
        if let Some(message) = self.validation_message() {
            lines.push(self.error_style.render(message));
        }
        lines.join("\n")
    }

    /// The message currently shown under the input, if any.
    pub fn validation_message(&self) -> Option<&'static str> {
        let form = self.parent_form.as_ref()?;
        validation_message(&**form, &self.config.field_name)
    }

    pub(super) fn label_view(&self) -> String {
        let style = if self.is_disabled {
            self.label_style.clone().faint(true)
        } else {
            self.label_style.clone()
        };
        style.render(&self.sanitizer.sanitize_str(&self.config.label))
    }

    pub(super) fn input_view(&self) -> String {
        let mut v = self.prompt_style.render(&self.prompt);

        let showing_placeholder = self.value.is_empty() && !self.config.placeholder.is_empty();
        if showing_placeholder {
            v.push_str(&self.placeholder_view());
        } else {
            v.push_str(&self.value_view());
        }

        // Fill remaining width so trailing controls line up across fields.
        // The cursor block at the end of the value takes one cell.
        if self.width > 0 {
            let cursor_cell = usize::from(
                self.focus
                    && !showing_placeholder
                    && self.drawn_cursor() >= self.echo_transform(&self.value).len(),
            );
            let used = self.shown_width() + cursor_cell;
            v.push_str(&" ".repeat(self.width.saturating_sub(used)));
        }

        if self.has_visibility_toggle() {
            let control = if self.hide { "[show]" } else { "[hide]" };
            v.push(' ');
            v.push_str(&self.marker_style.render(control));
        }
        if self.is_disabled {
            v.push(' ');
            v.push_str(&self.marker_style.render("(disabled)"));
        } else if self.config.is_readonly {
            v.push(' ');
            v.push_str(&self.marker_style.render("(readonly)"));
        }
        v
    }

    fn value_view(&self) -> String {
        let display = self.echo_transform(&self.value);
        let text_style = if self.is_disabled {
            self.text_style.clone().faint(true)
        } else {
            self.text_style.clone()
        };

        if !self.focus {
            let s: String = display.iter().collect();
            return text_style.render(&s);
        }

        let pos = self.drawn_cursor().min(display.len());
        let before: String = display[..pos].iter().collect();
        let mut v = text_style.render(&before);
        match display.get(pos) {
            Some(ch) => {
                v.push_str(&self.cursor_style.render(&ch.to_string()));
                let after: String = display[pos + 1..].iter().collect();
                v.push_str(&text_style.render(&after));
            }
            None => v.push_str(&self.cursor_style.render(" ")),
        }
        v
    }

    fn placeholder_view(&self) -> String {
        let placeholder = self.sanitizer.sanitize_str(&self.config.placeholder);
        if !self.focus {
            return self.placeholder_style.render(&placeholder);
        }
        // Cursor sits on the first placeholder character.
        let mut chars = placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        let rest: String = chars.collect();
        let mut v = self.cursor_style.render(&first);
        v.push_str(&self.placeholder_style.render(&rest));
        v
    }

    /// The characters drawn for `runes`: one echo character each while a
    /// password is masked, the sanitized text otherwise.
    pub(super) fn echo_transform(&self, runes: &[char]) -> Vec<char> {
        match self.effective_input_type() {
            InputType::Password => vec![self.echo_character; runes.len()],
            _ => self.sanitizer.sanitize_runes(runes),
        }
    }

    /// Cursor index into the drawn characters. Sanitizing can drop or widen
    /// characters, so this is the length of the drawn prefix, not `pos`.
    fn drawn_cursor(&self) -> usize {
        self.echo_transform(&self.value[..self.pos.min(self.value.len())])
            .len()
    }

    fn shown_width(&self) -> usize {
        let shown: String = if self.value.is_empty() {
            self.sanitizer.sanitize_str(&self.config.placeholder)
        } else {
            self.echo_transform(&self.value).into_iter().collect()
        };
        UnicodeWidthStr::width(shown.as_str())
    }
}
