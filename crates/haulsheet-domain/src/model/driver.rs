//! Driver record

use serde::{Deserialize, Serialize};

use haulsheet_types::{Error, Result};

use super::schema::{find_field, DRIVER_FIELDS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    #[default]
    Active,
    Inactive,
}

impl DriverStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(DriverStatus::Active),
            "inactive" => Some(DriverStatus::Inactive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    pub name: String,
    pub license: String,
    pub phone: String,
    pub street_address: String,
    pub city_state_zip: String,
    pub email: Option<String>,
    pub birth_date: String,
    pub hire_date: String,
    pub ssn: String,
    pub photo_reference: Option<String>,
    pub status: DriverStatus,
}

impl Driver {
    /// Street and city lines joined for single-line display
    pub fn address(&self) -> String {
        [self.street_address.trim(), self.city_state_zip.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let descriptor = find_field(DRIVER_FIELDS, key).ok_or_else(|| Error::UnknownField {
            entity: "driver",
            key: key.to_string(),
        })?;
        let value = value.to_string();
        match descriptor.key {
            "name" => self.name = value,
            "license" => self.license = value,
            "phone" => self.phone = value,
            "street_address" => self.street_address = value,
            "city_state_zip" => self.city_state_zip = value,
            "email" => self.email = non_blank(value),
            "birth_date" => self.birth_date = value,
            "hire_date" => self.hire_date = value,
            "ssn" => self.ssn = value,
            "photo_reference" => self.photo_reference = non_blank(value),
            "status" => {
                self.status = DriverStatus::parse(&value)
                    .ok_or_else(|| Error::Command(format!("Unknown driver status: {}", value)))?
            }
            other => unreachable!("driver schema key without setter: {}", other),
        }
        Ok(())
    }

    pub fn field(&self, key: &str) -> Option<String> {
        let descriptor = find_field(DRIVER_FIELDS, key)?;
        let value = match descriptor.key {
            "name" => self.name.clone(),
            "license" => self.license.clone(),
            "phone" => self.phone.clone(),
            "street_address" => self.street_address.clone(),
            "city_state_zip" => self.city_state_zip.clone(),
            "email" => self.email.clone().unwrap_or_default(),
            "birth_date" => self.birth_date.clone(),
            "hire_date" => self.hire_date.clone(),
            "ssn" => self.ssn.clone(),
            "photo_reference" => self.photo_reference.clone().unwrap_or_default(),
            "status" => self.status.label().to_string(),
            _ => return None,
        };
        Some(value)
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_joins_parts() {
        let driver = Driver {
            street_address: "12 Main St".to_string(),
            city_state_zip: "Laredo, TX 78040".to_string(),
            ..Default::default()
        };
        assert_eq!(driver.address(), "12 Main St, Laredo, TX 78040");
    }

    #[test]
    fn test_address_skips_blank_parts() {
        let driver = Driver {
            street_address: "12 Main St".to_string(),
            ..Default::default()
        };
        assert_eq!(driver.address(), "12 Main St");
        assert_eq!(Driver::default().address(), "");
    }

    #[test]
    fn test_set_and_read_fields() {
        let mut driver = Driver::default();
        driver.set_field("name", "Ana Gomez").unwrap();
        driver.set_field("Phone", "5551234567").unwrap();
        driver.set_field("email", "  ").unwrap();
        driver.set_field("status", "Inactive").unwrap();
        assert_eq!(driver.name, "Ana Gomez");
        assert_eq!(driver.field("phone").as_deref(), Some("5551234567"));
        assert_eq!(driver.email, None);
        assert_eq!(driver.status, DriverStatus::Inactive);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut driver = Driver::default();
        let err = driver.set_field("nickname", "Flash").unwrap_err();
        assert!(matches!(err, Error::UnknownField { entity: "driver", .. }));
    }

    #[test]
    fn test_bad_status_rejected() {
        let mut driver = Driver::default();
        assert!(driver.set_field("status", "on leave").is_err());
        assert_eq!(driver.status, DriverStatus::Active);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let driver: Driver = serde_json::from_str(r#"{"name": "Luis", "status": "inactive"}"#).unwrap();
        assert_eq!(driver.name, "Luis");
        assert_eq!(driver.status, DriverStatus::Inactive);
        assert!(driver.license.is_empty());
    }
}
