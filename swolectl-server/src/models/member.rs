//! Member payload validation

use serde_json::Value;

use super::validation::{RecordReader, ValidationErrors};

/// Fields a member payload must carry, in schema order.
pub const MEMBER_FIELDS: [&str; 4] = ["name", "email", "phone", "membership_type"];

/// Validated member payload for insert or full-record update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_type: String,
}

impl NewMember {
    /// Validate an untyped JSON record into a member payload.
    ///
    /// # Rules
    /// - `name`, `email`, `phone`, `membership_type` are required strings
    /// - empty strings are accepted (presence only)
    /// - `member_id` is server-generated and dropped if supplied
    /// - any other key is rejected as unknown
    ///
    /// # Example
    /// ```
    /// use serde_json::json;
    /// use swolectl_server::models::NewMember;
    ///
    /// let ok = json!({"name": "Alice", "email": "a@x.com", "phone": "555", "membership_type": "gold"});
    /// assert!(NewMember::from_json(&ok).is_ok());
    ///
    /// let err = NewMember::from_json(&json!({"name": "Alice"})).unwrap_err();
    /// assert_eq!(err.len(), 3);
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = RecordReader::new(value, &MEMBER_FIELDS, &["member_id"]);

        let name = reader.string("name");
        let email = reader.string("email");
        let phone = reader.string("phone");
        let membership_type = reader.string("membership_type");

        match (reader.finish(), name, email, phone, membership_type) {
            (Ok(()), Some(name), Some(email), Some(phone), Some(membership_type)) => Ok(Self {
                name,
                email,
                phone,
                membership_type,
            }),
            (result, ..) => Err(result.err().unwrap_or_default()),
        }
    }
}
