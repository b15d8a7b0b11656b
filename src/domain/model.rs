use serde::{Deserialize, Serialize};

/// A customer row as returned by `GET /api/clientes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "apellidos", default)]
    pub surname: String,
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub surname: String,
}

/// Body of `GET /api/clientes/{id}`. The API signals "not found" with an
/// empty body, `null`, or a missing/empty `nombre`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerLookup {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "apellidos", default)]
    pub surname: Option<String>,
}

impl CustomerLookup {
    pub fn found(self) -> Option<CustomerPayload> {
        match self.name {
            Some(name) if !name.is_empty() => Some(CustomerPayload {
                name,
                surname: self.surname.unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub surname: bool,
}

impl FieldErrors {
    pub fn has_errors(&self) -> bool {
        self.name || self.surname
    }
}

/// The in-progress edit state of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub search_id: String,
    pub name: String,
    pub surname: String,
    pub errors: FieldErrors,
}

impl EditBuffer {
    /// 重新計算必填欄位狀態，回傳是否全部有效
    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors {
            name: self.name.trim().is_empty(),
            surname: self.surname.trim().is_empty(),
        };
        !self.errors.has_errors()
    }

    pub fn payload(&self) -> CustomerPayload {
        CustomerPayload {
            name: self.name.clone(),
            surname: self.surname.clone(),
        }
    }

    /// The search id with surrounding whitespace removed, or `None` if blank.
    pub fn target_id(&self) -> Option<&str> {
        let id = self.search_id.trim();
        (!id.is_empty()).then_some(id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_uses_wire_names() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "_id": "65a1",
            "nombre": "Ana",
            "apellidos": "Pérez Gómez",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(customer.id, "65a1");
        assert_eq!(customer.name, "Ana");
        assert_eq!(customer.surname, "Pérez Gómez");
    }

    #[test]
    fn test_customer_missing_names_default_to_empty() {
        let customer: Customer =
            serde_json::from_value(serde_json::json!({"_id": "1"})).unwrap();
        assert_eq!(customer.name, "");
        assert_eq!(customer.surname, "");
    }

    #[test]
    fn test_payload_serializes_spanish_fields() {
        let payload = CustomerPayload {
            name: "Luis".to_string(),
            surname: "Mora".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"nombre": "Luis", "apellidos": "Mora"})
        );
    }

    #[test]
    fn test_lookup_found_requires_name() {
        let empty = CustomerLookup {
            name: Some(String::new()),
            surname: Some("Mora".to_string()),
        };
        assert_eq!(empty.found(), None);
        assert_eq!(CustomerLookup::default().found(), None);

        let lookup = CustomerLookup {
            name: Some("Luis".to_string()),
            surname: None,
        };
        assert_eq!(
            lookup.found(),
            Some(CustomerPayload {
                name: "Luis".to_string(),
                surname: String::new(),
            })
        );
    }

    #[test]
    fn test_validate_marks_blank_fields() {
        let mut buffer = EditBuffer {
            name: "  ".to_string(),
            surname: "Mora".to_string(),
            ..Default::default()
        };

        assert!(!buffer.validate());
        assert!(buffer.errors.name);
        assert!(!buffer.errors.surname);

        buffer.name = "Luis".to_string();
        assert!(buffer.validate());
        assert_eq!(buffer.errors, FieldErrors::default());
    }

    #[test]
    fn test_target_id_trims() {
        let mut buffer = EditBuffer::default();
        assert_eq!(buffer.target_id(), None);

        buffer.search_id = "   ".to_string();
        assert_eq!(buffer.target_id(), None);

        buffer.search_id = " 65a1 ".to_string();
        assert_eq!(buffer.target_id(), Some("65a1"));
    }
}
