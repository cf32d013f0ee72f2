//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Choice { options: Vec<String>, selected: usize },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single input together with its form group.
///
/// The group holds at most one error message; while it is set the input is
/// drawn with the error style.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create a selector field over a fixed list of options
    pub fn choice(name: &str, label: &str, options: Vec<String>) -> Self {
        Self {
            value: FieldValue::Choice {
                options,
                selected: 0,
            },
            ..Self::text(name, label)
        }
    }

    /// Get the text value (returns the selected option for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                options.get(*selected).map(String::as_str).unwrap_or("")
            }
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Push a character to the field value. Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Choice { .. } => false,
        }
    }

    /// Remove the last character from the field value. Returns true if the value changed.
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            FieldValue::Choice { .. } => false,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = 0,
        }
    }

    /// Select the next option (wraps around)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = (*selected + 1) % options.len();
            }
        }
    }

    /// Select the previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = selected.checked_sub(1).unwrap_or(options.len() - 1);
            }
        }
    }

    /// Select the option equal to `value`. Returns false if there is none.
    pub fn select_option(&mut self, value: &str) -> bool {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if let Some(index) = options.iter().position(|o| o == value) {
                *selected = index;
                return true;
            }
        }
        false
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, .. } if options.is_empty() => {
                "(no locations)".to_string()
            }
            FieldValue::Choice { options, selected } => {
                format!("◀ {} ▶  ({}/{})", self.as_text(), selected + 1, options.len())
            }
        }
    }

    /// Set the group's error message, replacing any previous one
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Remove the group's error message. No-op without one.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
