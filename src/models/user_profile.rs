use serde::{Deserialize, Serialize};

/// A document in the `users` collection, keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub username: String,
    #[serde(rename = "FirstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "Age", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl UserProfile {
    pub fn new(username: String, first_name: String, age: i32) -> Self {
        Self {
            username,
            first_name: Some(first_name),
            last_name: None,
            age: Some(age),
        }
    }

    /// Field-level set: only `FirstName` and `Age` change.
    pub fn apply(&mut self, first_name: String, age: i32) {
        self.first_name = Some(first_name);
        self.age = Some(age);
    }
}
