//! Field descriptors for the entry forms
//!
//! Each entity publishes an ordered list of its editable fields. Forms and
//! the session prompt iterate these lists instead of walking struct keys.

/// How a field is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
    Email,
    Phone,
    Choice(&'static [&'static str]),
}

impl InputKind {
    pub fn hint(&self) -> String {
        match self {
            InputKind::Text => "text".to_string(),
            InputKind::Number => "number".to_string(),
            InputKind::Date => "YYYY-MM-DD".to_string(),
            InputKind::Email => "name@domain".to_string(),
            InputKind::Phone => "10 digits".to_string(),
            InputKind::Choice(options) => options.join("|"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

const fn field(key: &'static str, label: &'static str, kind: InputKind, required: bool) -> FieldDescriptor {
    FieldDescriptor {
        key,
        label,
        kind,
        required,
    }
}

pub const DRIVER_STATUSES: &[&str] = &["active", "inactive"];

pub const DRIVER_FIELDS: &[FieldDescriptor] = &[
    field("name", "Name", InputKind::Text, true),
    field("license", "License", InputKind::Text, true),
    field("phone", "Phone", InputKind::Phone, true),
    field("street_address", "Street Address", InputKind::Text, true),
    field("city_state_zip", "City/State/ZIP", InputKind::Text, true),
    field("email", "Email", InputKind::Email, false),
    field("birth_date", "Birth Date", InputKind::Date, true),
    field("hire_date", "Hire Date", InputKind::Date, false),
    field("ssn", "SSN", InputKind::Text, false),
    field("photo_reference", "Photo", InputKind::Text, false),
    field("status", "Status", InputKind::Choice(DRIVER_STATUSES), false),
];

pub const LOAD_FIELDS: &[FieldDescriptor] = &[
    field("date", "Date", InputKind::Date, false),
    field("origin", "Origin", InputKind::Text, false),
    field("destination", "Destination", InputKind::Text, false),
    field("price", "Price", InputKind::Number, false),
    field("dispatch_percentage", "Dispatch %", InputKind::Number, false),
];

pub const EXPENSE_FIELDS: &[FieldDescriptor] = &[
    field("recurring", "Recurring", InputKind::Number, false),
    field("additional", "Additional", InputKind::Number, false),
    field("fuel", "Fuel", InputKind::Number, false),
];

/// Look a field up by key or by label, ignoring case
pub fn find_field(fields: &'static [FieldDescriptor], name: &str) -> Option<&'static FieldDescriptor> {
    let name = name.trim();
    fields
        .iter()
        .find(|f| f.key.eq_ignore_ascii_case(name) || f.label.eq_ignore_ascii_case(name))
}
