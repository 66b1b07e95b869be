use std::collections::HashMap;

use actix_web::{HttpMessage, HttpRequest};
use serde::Serialize;
use url::form_urlencoded;

use crate::error::AppError;
use crate::models::user_profile::UserProfile;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProfileResponse {
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "FirstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            age: profile.age,
        }
    }
}

/// Fields of a profile write, taken from the submitted form.
#[derive(Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub first_name: String,
    pub age: i32,
}

impl ProfileForm {
    /// `key_param` names the field holding the username (`userId` or `username`).
    pub fn from_params(
        params: &HashMap<String, String>,
        key_param: &str,
    ) -> Result<Self, AppError> {
        let username = required(params, key_param)?;
        let first_name = required(params, "firstName")?;
        let age_str = required(params, "age")?;
        let age = age_str
            .trim()
            .parse::<i32>()
            .map_err(|e| AppError::BadRequest(format!("age '{}' is not a number: {}", age_str, e)))?;

        Ok(Self {
            username: username.to_string(),
            first_name: first_name.to_string(),
            age,
        })
    }
}

/// Request parameters from the query string and, for form posts, the body.
///
/// When a name repeats, the first value wins, query string before body.
pub fn request_params(req: &HttpRequest, body: &[u8]) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let mut collect = |pairs: form_urlencoded::Parse<'_>| {
        for (key, value) in pairs {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    };

    collect(form_urlencoded::parse(req.query_string().as_bytes()));
    if req.content_type() == "application/x-www-form-urlencoded" {
        collect(form_urlencoded::parse(body));
    }

    params
}

pub fn required<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str, AppError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| AppError::BadRequest(format!("missing parameter '{}'", name)))
}
