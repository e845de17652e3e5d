//! RSVP form state

use super::field::{ChoiceGroup, FormField};
use crate::config::Menu;
use crate::state::Attendance;

/// The endpoint keeps at most this many characters of the wishes text
pub const WISHES_MAX_LEN: usize = 1000;

/// Stable field names shared with the presentation layer
pub mod field_names {
    pub const GUEST_NAME: &str = "guest-name";
    pub const ATTENDANCE: &str = "attendance";
    pub const COMPANION_NAME: &str = "companion-name";
    pub const GUEST_FOOD: &str = "guest-food";
    pub const GUEST_DRINK: &str = "guest-drink";
    pub const COMPANION_FOOD: &str = "companion-food";
    pub const COMPANION_DRINK: &str = "companion-drink";
    pub const WISHES: &str = "wishes";
}

// Focus order; indices 2..=6 belong to the companion section
const NAME: usize = 0;
const ATTENDANCE: usize = 1;
const COMPANION: usize = 2;
const GUEST_FOOD: usize = 3;
const GUEST_DRINK: usize = 4;
const COMPANION_FOOD: usize = 5;
const COMPANION_DRINK: usize = 6;
const WISHES: usize = 7;
const SUBMIT_ROW: usize = 8;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Hidden fields are skipped by focus navigation
    fn is_field_visible(&self, _index: usize) -> bool {
        true
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_field_visible(index) {
                break;
            }
        }
        self.set_active_field(index);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_field_visible(index) {
                break;
            }
        }
        self.set_active_field(index);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Every value on the RSVP form plus the section visibility and focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: FormField,
    pub attendance: FormField,
    pub companion: FormField,
    pub guest_food: FormField,
    pub guest_drink: FormField,
    pub companion_food: FormField,
    pub companion_drink: FormField,
    pub wishes: FormField,
    pub companion_section_visible: bool,
    pub active_field_index: usize,
}

impl FormState {
    pub fn new(menu: &Menu) -> Self {
        Self {
            name: FormField::text(field_names::GUEST_NAME, "Your name", false).required(),
            attendance: FormField::choices(
                field_names::ATTENDANCE,
                "Will you attend?",
                ChoiceGroup::radio(&[Attendance::Yes.as_str(), Attendance::No.as_str()]),
            )
            .required(),
            companion: FormField::text(field_names::COMPANION_NAME, "Companion name", false),
            guest_food: FormField::choices(
                field_names::GUEST_FOOD,
                "Your food",
                ChoiceGroup::checkboxes(&menu.food),
            ),
            guest_drink: FormField::choices(
                field_names::GUEST_DRINK,
                "Your drinks",
                ChoiceGroup::checkboxes(&menu.drinks),
            ),
            companion_food: FormField::choices(
                field_names::COMPANION_FOOD,
                "Companion food",
                ChoiceGroup::checkboxes(&menu.food),
            ),
            companion_drink: FormField::choices(
                field_names::COMPANION_DRINK,
                "Companion drinks",
                ChoiceGroup::checkboxes(&menu.drinks),
            ),
            wishes: FormField::text(field_names::WISHES, "Wishes", true).with_max_len(WISHES_MAX_LEN),
            companion_section_visible: false,
            active_field_index: 0,
        }
    }

    /// Currently selected attendance, if any
    pub fn attendance(&self) -> Option<Attendance> {
        self.attendance
            .choices_ref()
            .and_then(ChoiceGroup::first_selected)
            .and_then(Attendance::parse)
    }

    /// Check the attendance radio for the given value
    pub fn select_attendance(&mut self, attendance: Attendance) {
        if let Some(group) = self.attendance.choices_mut() {
            group.select(attendance.as_str());
        }
    }

    /// Show or hide the companion section and set the guest-level required markers
    pub fn set_companion_section(&mut self, visible: bool) {
        self.companion_section_visible = visible;
        self.guest_food.required = visible;
        self.guest_drink.required = visible;
        if !self.is_field_visible(self.active_field_index) {
            self.active_field_index = WISHES;
        }
    }

    /// Companion name as typed, trimmed
    pub fn companion_name(&self) -> &str {
        self.companion.as_text().trim()
    }

    /// Back to the initial empty state: texts cleared, every option unchecked, section hidden
    pub fn reset(&mut self) {
        for field in [
            &mut self.name,
            &mut self.attendance,
            &mut self.companion,
            &mut self.guest_food,
            &mut self.guest_drink,
            &mut self.companion_food,
            &mut self.companion_drink,
            &mut self.wishes,
        ] {
            field.clear();
        }
        self.set_companion_section(false);
        self.active_field_index = 0;
    }

    /// Returns true if the submit row is currently focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Returns true if the attendance radio group is focused
    pub fn is_attendance_active(&self) -> bool {
        self.active_field_index == ATTENDANCE
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&Menu::default())
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        9 // eight fields, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn is_field_visible(&self, index: usize) -> bool {
        match index {
            COMPANION..=COMPANION_DRINK => self.companion_section_visible,
            _ => index <= SUBMIT_ROW,
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            NAME => Some(&mut self.name),
            ATTENDANCE => Some(&mut self.attendance),
            COMPANION => Some(&mut self.companion),
            GUEST_FOOD => Some(&mut self.guest_food),
            GUEST_DRINK => Some(&mut self.guest_drink),
            COMPANION_FOOD => Some(&mut self.companion_food),
            COMPANION_DRINK => Some(&mut self.companion_drink),
            WISHES => Some(&mut self.wishes),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            NAME => Some(&self.name),
            ATTENDANCE => Some(&self.attendance),
            COMPANION => Some(&self.companion),
            GUEST_FOOD => Some(&self.guest_food),
            GUEST_DRINK => Some(&self.guest_drink),
            COMPANION_FOOD => Some(&self.companion_food),
            COMPANION_DRINK => Some(&self.companion_drink),
            WISHES => Some(&self.wishes),
            // Submit row has no FormField
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> FormState {
        FormState::new(&Menu::default())
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let form = form();
        assert_eq!(form.active_field_index, 0);
        assert!(!form.companion_section_visible);
        assert!(form.attendance().is_none());
        assert!(form.name.required);
        assert!(form.attendance.required);
        assert!(!form.guest_food.required);
        assert!(!form.guest_drink.required);
        assert_eq!(form.name.name, field_names::GUEST_NAME);
        assert_eq!(form.wishes.max_len, Some(WISHES_MAX_LEN));
    }

    #[test]
    fn test_select_attendance() {
        let mut form = form();
        form.select_attendance(Attendance::Yes);
        assert_eq!(form.attendance(), Some(Attendance::Yes));
        form.select_attendance(Attendance::No);
        assert_eq!(form.attendance(), Some(Attendance::No));
    }

    #[test]
    fn test_navigation_skips_hidden_section() {
        let mut form = form();
        form.next_field();
        assert_eq!(form.active_field(), ATTENDANCE);
        form.next_field();
        assert_eq!(form.active_field(), WISHES);
        form.next_field();
        assert!(form.is_submit_row_active());
        form.next_field();
        assert_eq!(form.active_field(), NAME);
        form.prev_field();
        assert!(form.is_submit_row_active());
    }

    #[test]
    fn test_navigation_visits_section_when_visible() {
        let mut form = form();
        form.set_companion_section(true);
        form.set_active_field(ATTENDANCE);
        form.next_field();
        assert_eq!(form.active_field(), COMPANION);
        form.set_active_field(WISHES);
        form.prev_field();
        assert_eq!(form.active_field(), COMPANION_DRINK);
    }

    #[test]
    fn test_section_markers_follow_visibility() {
        let mut form = form();
        form.set_companion_section(true);
        assert!(form.guest_food.required);
        assert!(form.guest_drink.required);
        assert!(!form.companion.required);

        form.set_companion_section(false);
        assert!(!form.guest_food.required);
        assert!(!form.guest_drink.required);
    }

    #[test]
    fn test_hiding_section_moves_focus_out() {
        let mut form = form();
        form.set_companion_section(true);
        form.set_active_field(GUEST_FOOD);
        form.set_companion_section(false);
        assert_eq!(form.active_field(), WISHES);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = form();
        form.name.set_text("Ann".to_string());
        form.select_attendance(Attendance::Yes);
        form.set_companion_section(true);
        form.companion.set_text("Bob".to_string());
        form.guest_food.choices_mut().unwrap().select("fish");
        form.companion_drink.choices_mut().unwrap().select("wine");
        form.wishes.set_text("Congrats".to_string());
        form.set_active_field(WISHES);

        form.reset();

        assert_eq!(form, FormState::new(&Menu::default()));
    }

    #[test]
    fn test_get_active_field_mut_on_submit_row_is_none() {
        let mut form = form();
        form.set_active_field(100);
        assert!(form.is_submit_row_active());
        assert!(form.get_active_field_mut().is_none());
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = form();
        assert_eq!(form.get_field(0).unwrap().name, "guest-name");
        assert_eq!(form.get_field(1).unwrap().name, "attendance");
        assert_eq!(form.get_field(2).unwrap().name, "companion-name");
        assert_eq!(form.get_field(3).unwrap().name, "guest-food");
        assert_eq!(form.get_field(4).unwrap().name, "guest-drink");
        assert_eq!(form.get_field(5).unwrap().name, "companion-food");
        assert_eq!(form.get_field(6).unwrap().name, "companion-drink");
        assert_eq!(form.get_field(7).unwrap().name, "wishes");
        assert!(form.get_field(8).is_none());
    }

    #[test]
    fn test_companion_name_is_trimmed() {
        let mut form = form();
        form.companion.set_text("  Bob ".to_string());
        assert_eq!(form.companion_name(), "Bob");
    }
}
