//! Weekly expense figures

use serde::{Deserialize, Serialize};

use haulsheet_types::{Error, Result};

use super::numeric::NumericField;
use super::schema::{find_field, EXPENSE_FIELDS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expenses {
    pub recurring: NumericField,
    pub additional: NumericField,
    pub fuel: NumericField,
}

impl Expenses {
    pub fn total(&self) -> f64 {
        self.recurring.value() + self.additional.value() + self.fuel.value()
    }

    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let descriptor = find_field(EXPENSE_FIELDS, key).ok_or_else(|| Error::UnknownField {
            entity: "expenses",
            key: key.to_string(),
        })?;
        let value = NumericField::new(value);
        match descriptor.key {
            "recurring" => self.recurring = value,
            "additional" => self.additional = value,
            "fuel" => self.fuel = value,
            other => unreachable!("expense schema key without setter: {}", other),
        }
        Ok(())
    }

    pub fn field(&self, key: &str) -> Option<String> {
        let descriptor = find_field(EXPENSE_FIELDS, key)?;
        let field = match descriptor.key {
            "recurring" => &self.recurring,
            "additional" => &self.additional,
            "fuel" => &self.fuel,
            _ => return None,
        };
        Some(field.raw().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let expenses = Expenses {
            recurring: NumericField::from_value(100.0),
            additional: NumericField::from_value(50.0),
            fuel: NumericField::from_value(200.0),
        };
        assert!((expenses.total() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_fields_count_as_zero() {
        let mut expenses = Expenses::default();
        expenses.set_field("fuel", "").unwrap();
        expenses.set_field("recurring", "75.5").unwrap();
        assert!((expenses.total() - 75.5).abs() < 1e-9);
        assert_eq!(expenses.field("fuel").as_deref(), Some(""));
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let expenses: Expenses = serde_json::from_str(r#"{"fuel": 20}"#).unwrap();
        assert_eq!(expenses.recurring.raw(), "0");
        assert!((expenses.total() - 20.0).abs() < 1e-9);
    }
}
