//! Form field value objects

/// A group of options rendered as checkboxes, or as radio buttons when exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    options: Vec<String>,
    checked: Vec<bool>,
    cursor: usize,
    exclusive: bool,
}

impl ChoiceGroup {
    /// Independent checkboxes, any subset may be checked
    pub fn checkboxes<S: AsRef<str>>(options: &[S]) -> Self {
        Self::build(options, false)
    }

    /// Radio buttons, at most one option checked
    pub fn radio<S: AsRef<str>>(options: &[S]) -> Self {
        Self::build(options, true)
    }

    fn build<S: AsRef<str>>(options: &[S], exclusive: bool) -> Self {
        Self {
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            checked: vec![false; options.len()],
            cursor: 0,
            exclusive,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Move the option cursor forward (wraps around)
    pub fn next_option(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    /// Move the option cursor backward (wraps around)
    pub fn prev_option(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.options.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Toggle the option under the cursor. Radio groups select it instead.
    pub fn toggle_at_cursor(&mut self) {
        if self.cursor >= self.checked.len() {
            return;
        }
        if self.exclusive {
            self.check_only(self.cursor);
        } else {
            self.checked[self.cursor] = !self.checked[self.cursor];
        }
    }

    /// Check the option with the given value; returns false if it does not exist
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                if self.exclusive {
                    self.check_only(index);
                } else {
                    self.checked[index] = true;
                }
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    fn check_only(&mut self, index: usize) {
        for (i, c) in self.checked.iter_mut().enumerate() {
            *c = i == index;
        }
    }

    /// Checked option values, in option order
    pub fn selected(&self) -> Vec<String> {
        self.options
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(o, _)| o.clone())
            .collect()
    }

    pub fn first_selected(&self) -> Option<&str> {
        self.options
            .iter()
            .zip(&self.checked)
            .find(|(_, checked)| **checked)
            .map(|(o, _)| o.as_str())
    }

    pub fn has_selection(&self) -> bool {
        self.checked.iter().any(|c| *c)
    }

    /// Uncheck everything and park the cursor on the first option
    pub fn clear(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = false);
        self.cursor = 0;
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choices(ChoiceGroup),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Rendered with a required marker
    pub required: bool,
    /// Maximum number of characters accepted by a text field
    pub max_len: Option<usize>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            required: false,
            max_len: None,
        }
    }

    /// Create a new choice field
    pub fn choices(name: &str, label: &str, group: ChoiceGroup) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choices(group),
            is_multiline: false,
            required: false,
            max_len: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn is_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_))
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choices(_) => "",
        }
    }

    pub fn choices_ref(&self) -> Option<&ChoiceGroup> {
        match &self.value {
            FieldValue::Choices(group) => Some(group),
            FieldValue::Text(_) => None,
        }
    }

    pub fn choices_mut(&mut self) -> Option<&mut ChoiceGroup> {
        match &mut self.value {
            FieldValue::Choices(group) => Some(group),
            FieldValue::Text(_) => None,
        }
    }

    /// Checked values of a choice field (empty for text fields)
    pub fn selected(&self) -> Vec<String> {
        self.choices_ref()
            .map(ChoiceGroup::selected)
            .unwrap_or_default()
    }

    /// Whether a choice field has any option checked
    pub fn has_selection(&self) -> bool {
        self.choices_ref().is_some_and(ChoiceGroup::has_selection)
    }

    /// Set the text value, cut to the field's maximum length
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = match self.max_len {
                Some(max) => value.chars().take(max).collect(),
                None => value,
            };
        }
    }

    /// Push a character to the field value; ignored once the field is full
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if self.max_len.is_some_and(|max| s.chars().count() >= max) {
                return;
            }
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choices(group) => group.clear(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choices(group) => group.selected().join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod choice_group {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_checkboxes_toggle_independently() {
            let mut group = ChoiceGroup::checkboxes(&["meat", "fish", "vegetarian"]);
            group.toggle_at_cursor();
            group.next_option();
            group.next_option();
            group.toggle_at_cursor();
            assert_eq!(group.selected(), vec!["meat", "vegetarian"]);

            group.prev_option();
            group.prev_option();
            group.toggle_at_cursor();
            assert_eq!(group.selected(), vec!["vegetarian"]);
        }

        #[test]
        fn test_radio_keeps_single_selection() {
            let mut group = ChoiceGroup::radio(&["yes", "no"]);
            group.toggle_at_cursor();
            assert_eq!(group.first_selected(), Some("yes"));
            group.next_option();
            group.toggle_at_cursor();
            assert_eq!(group.selected(), vec!["no"]);
            // Re-selecting the checked radio keeps it checked
            group.toggle_at_cursor();
            assert_eq!(group.selected(), vec!["no"]);
        }

        #[test]
        fn test_select_by_value() {
            let mut group = ChoiceGroup::checkboxes(&["wine", "champagne"]);
            assert!(group.select("champagne"));
            assert!(!group.select("beer"));
            assert_eq!(group.selected(), vec!["champagne"]);
            assert_eq!(group.cursor(), 1);
        }

        #[test]
        fn test_selected_follows_option_order() {
            let mut group = ChoiceGroup::checkboxes(&["a", "b", "c"]);
            group.select("c");
            group.select("a");
            assert_eq!(group.selected(), vec!["a", "c"]);
        }

        #[test]
        fn test_cursor_wraps() {
            let mut group = ChoiceGroup::checkboxes(&["a", "b"]);
            group.prev_option();
            assert_eq!(group.cursor(), 1);
            group.next_option();
            assert_eq!(group.cursor(), 0);
        }

        #[test]
        fn test_clear_unchecks_all() {
            let mut group = ChoiceGroup::checkboxes(&["a", "b"]);
            group.select("a");
            group.select("b");
            group.clear();
            assert!(!group.has_selection());
            assert_eq!(group.cursor(), 0);
        }

        #[test]
        fn test_empty_group_is_inert() {
            let mut group = ChoiceGroup::checkboxes::<&str>(&[]);
            group.next_option();
            group.prev_option();
            group.toggle_at_cursor();
            assert!(group.selected().is_empty());
        }
    }

    mod form_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_push_and_pop() {
            let mut field = FormField::text("guest-name", "Name", false);
            field.push_char('A');
            field.push_char('n');
            field.push_char('n');
            assert_eq!(field.as_text(), "Ann");
            field.pop_char();
            assert_eq!(field.as_text(), "An");
        }

        #[test]
        fn test_max_len_caps_input() {
            let mut field = FormField::text("wishes", "Wishes", true).with_max_len(3);
            for c in "hello".chars() {
                field.push_char(c);
            }
            assert_eq!(field.as_text(), "hel");
            field.set_text("abcdef".to_string());
            assert_eq!(field.as_text(), "abc");
        }

        #[test]
        fn test_text_ops_ignore_choice_fields() {
            let mut field =
                FormField::choices("guest-food", "Food", ChoiceGroup::checkboxes(&["fish"]));
            field.push_char('x');
            field.set_text("x".to_string());
            assert_eq!(field.as_text(), "");
            assert!(!field.is_text());
        }

        #[test]
        fn test_display_value_for_choices() {
            let mut field = FormField::choices(
                "guest-drink",
                "Drinks",
                ChoiceGroup::checkboxes(&["wine", "juice"]),
            );
            field.choices_mut().unwrap().select("wine");
            field.choices_mut().unwrap().select("juice");
            assert_eq!(field.display_value(), "wine, juice");
            assert_eq!(field.selected(), vec!["wine", "juice"]);
        }

        #[test]
        fn test_has_selection() {
            let mut food =
                FormField::choices("guest-food", "Food", ChoiceGroup::checkboxes(&["meat", "fish"]));
            assert!(!food.has_selection());
            food.choices_mut().unwrap().select("fish");
            assert!(food.has_selection());

            let text = FormField::text("guest-name", "Name", false);
            assert!(!text.has_selection());
        }

        #[test]
        fn test_clear_resets_both_kinds() {
            let mut text = FormField::text("companion-name", "Companion", false);
            text.set_text("Bob".to_string());
            text.clear();
            assert_eq!(text.as_text(), "");

            let mut choice =
                FormField::choices("attendance", "Attending?", ChoiceGroup::radio(&["yes", "no"]));
            choice.choices_mut().unwrap().select("yes");
            choice.clear();
            assert!(choice.selected().is_empty());
        }

        #[test]
        fn test_required_builder() {
            let field = FormField::text("guest-name", "Name", false).required();
            assert!(field.required);
        }
    }
}
