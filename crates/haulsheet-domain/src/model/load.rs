//! Load (one haul in the week)

use serde::{Deserialize, Serialize};

use haulsheet_types::{Error, Result};

use super::numeric::NumericField;
use super::schema::{find_field, LOAD_FIELDS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Load {
    pub date: String,
    pub origin: String,
    pub destination: String,
    pub price: NumericField,
    pub dispatch_percentage: NumericField,
}

impl Load {
    /// Share of the price kept by dispatch
    pub fn dispatch_fee(&self) -> f64 {
        self.price.value() * self.dispatch_percentage.value() / 100.0
    }

    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let descriptor = find_field(LOAD_FIELDS, key).ok_or_else(|| Error::UnknownField {
            entity: "load",
            key: key.to_string(),
        })?;
        match descriptor.key {
            "date" => self.date = value.to_string(),
            "origin" => self.origin = value.to_string(),
            "destination" => self.destination = value.to_string(),
            "price" => self.price = NumericField::new(value),
            "dispatch_percentage" => self.dispatch_percentage = NumericField::new(value),
            other => unreachable!("load schema key without setter: {}", other),
        }
        Ok(())
    }

    pub fn field(&self, key: &str) -> Option<String> {
        let descriptor = find_field(LOAD_FIELDS, key)?;
        let value = match descriptor.key {
            "date" => self.date.clone(),
            "origin" => self.origin.clone(),
            "destination" => self.destination.clone(),
            "price" => self.price.raw().to_string(),
            "dispatch_percentage" => self.dispatch_percentage.raw().to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_load_is_zeroed() {
        let load = Load::default();
        assert_eq!(load.price.raw(), "0");
        assert_eq!(load.dispatch_percentage.raw(), "0");
        assert_eq!(load.dispatch_fee(), 0.0);
    }

    #[test]
    fn test_dispatch_fee() {
        let mut load = Load::default();
        load.set_field("price", "1000").unwrap();
        load.set_field("dispatch_percentage", "10").unwrap();
        assert!((load.dispatch_fee() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_field_keeps_raw_text() {
        let mut load = Load::default();
        load.set_field("Price", "12oo").unwrap();
        assert_eq!(load.field("price").as_deref(), Some("12oo"));
        assert_eq!(load.price.value(), 0.0);
    }

    #[test]
    fn test_unknown_field() {
        let mut load = Load::default();
        assert!(load.set_field("weight", "20").is_err());
        assert!(load.field("weight").is_none());
    }
}
