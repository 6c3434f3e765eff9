//! Modal form state: a titled stack of labeled text fields.

/// One text field in a form.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

/// Editable form state. Focus moves field-to-field; characters edit the
/// focused field only.
#[derive(Debug, Clone)]
pub struct FormState {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormState {
    pub fn new(title: impl Into<String>, labels: &[&'static str]) -> Self {
        Self {
            title: title.into(),
            fields: labels
                .iter()
                .map(|label| FormField {
                    label,
                    value: String::new(),
                })
                .collect(),
            focused: 0,
        }
    }

    /// Pre-fill a field, for edit forms seeded from the selected record.
    pub fn with_value(mut self, label: &str, value: impl Into<String>) -> Self {
        if let Some(field) = self.fields.iter_mut().find(|f| f.label == label) {
            field.value = value.into();
        }
        self
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = if self.focused == 0 {
                self.fields.len() - 1
            } else {
                self.focused - 1
            };
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    /// Trimmed value of a field. Missing labels read as empty.
    pub fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.trim())
            .unwrap_or("")
    }

    /// Trimmed value, or `None` when the field was left blank.
    pub fn opt_value(&self, label: &str) -> Option<String> {
        let value = self.value(label);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Which create/edit/action form is open, with the record it targets.
#[derive(Debug, Clone)]
pub enum FormKind {
    CreateDocument,
    EditDocument { id: String },
    CreateNonconformance,
    CreateCapa,
    CreateAudit,
    CreateItem,
    CreateWorkOrder,
    CompleteWorkOrder { id: String },
    CreateInventoryRecord,
    AdjustInventory { id: String },
    CreateUser,
}

/// An open modal form.
#[derive(Debug, Clone)]
pub struct ActiveForm {
    pub kind: FormKind,
    pub state: FormState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = FormState::new("Test", &["a", "b", "c"]);
        assert_eq!(form.focused, 0);
        form.focus_previous();
        assert_eq!(form.focused, 2);
        form.focus_next();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn typing_edits_the_focused_field_only() {
        let mut form = FormState::new("Test", &["title", "description"]);
        form.insert_char('h');
        form.insert_char('i');
        form.focus_next();
        form.insert_char('x');
        assert_eq!(form.value("title"), "hi");
        assert_eq!(form.value("description"), "x");
        form.backspace();
        assert_eq!(form.value("description"), "");
    }

    #[test]
    fn blank_fields_read_as_none() {
        let mut form = FormState::new("Test", &["severity"]);
        assert_eq!(form.opt_value("severity"), None);
        form.insert_char(' ');
        assert_eq!(form.opt_value("severity"), None);
        form.insert_char('A');
        assert_eq!(form.opt_value("severity"), Some("A".to_string()));
    }

    #[test]
    fn with_value_seeds_edit_forms() {
        let form = FormState::new("Edit", &["title", "status"]).with_value("title", "SOP-001");
        assert_eq!(form.value("title"), "SOP-001");
        assert_eq!(form.value("status"), "");
    }
}
