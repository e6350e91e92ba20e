#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Phone,
    Email,
    Consent,
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    None,
}

/// Stable name of a terminal-step control, also used as its DOM id.
pub type FieldId = &'static str;

#[derive(Clone, Debug, PartialEq)]
pub struct LeadField {
    pub id: FieldId,
    pub kind: FieldKind,
    pub label: &'static str,
    pub value: FieldValue,
    pub invalid: bool,
}

impl LeadField {
    pub fn new(id: FieldId, kind: FieldKind, label: &'static str) -> Self {
        let value = match kind {
            FieldKind::Consent => FieldValue::Checked(false),
            FieldKind::Submit => FieldValue::None,
            _ => FieldValue::Text(String::new()),
        };
        Self { id, kind, label, value, invalid: false }
    }

    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) => text,
            _ => "",
        }
    }

    pub fn checked(&self) -> bool {
        matches!(self.value, FieldValue::Checked(true))
    }
}

/// Controls of the terminal lead step, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    fields: Vec<LeadField>,
}

impl LeadForm {
    pub fn new(fields: Vec<LeadField>) -> Self {
        Self { fields }
    }

    /// Name, phone, email, consent and the submit button.
    pub fn lead_capture() -> Self {
        Self::new(vec![
            LeadField::new("lead-name", FieldKind::Text, "Your name"),
            LeadField::new("lead-phone", FieldKind::Phone, "Phone"),
            LeadField::new("lead-email", FieldKind::Email, "Email"),
            LeadField::new(
                "lead-consent",
                FieldKind::Consent,
                "I agree to the processing of my personal data",
            ),
            LeadField::new("lead-submit", FieldKind::Submit, "Get the offer"),
        ])
    }

    pub fn fields(&self) -> &[LeadField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&LeadField> {
        self.fields.iter().find(|f| f.id == id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut LeadField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Stores an edit and clears that field's mark. Other marks stay.
    pub fn set_text(&mut self, id: &str, value: String) {
        if let Some(field) = self.field_mut(id) {
            if matches!(field.value, FieldValue::Text(_)) {
                field.value = FieldValue::Text(value);
            }
            field.invalid = false;
        }
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(field) = self.field_mut(id) {
            if matches!(field.value, FieldValue::Checked(_)) {
                field.value = FieldValue::Checked(checked);
            }
            field.invalid = false;
        }
    }

    pub fn toggle(&mut self, id: &str) {
        let checked = self.field(id).map(LeadField::checked).unwrap_or(false);
        self.set_checked(id, !checked);
    }

    pub fn clear_marks(&mut self) {
        for field in &mut self.fields {
            field.invalid = false;
        }
    }

    pub fn mark(&mut self, id: &str) {
        if let Some(field) = self.field_mut(id) {
            field.invalid = true;
        }
    }

    pub fn is_marked(&self, id: &str) -> bool {
        self.field(id).map(|f| f.invalid).unwrap_or(false)
    }

    pub fn marked(&self) -> Vec<FieldId> {
        self.fields.iter().filter(|f| f.invalid).map(|f| f.id).collect()
    }

    pub fn first_invalid(&self) -> Option<FieldId> {
        self.fields.iter().find(|f| f.invalid).map(|f| f.id)
    }
}
