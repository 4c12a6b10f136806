use serde::{Deserialize, Serialize};

/// One advocate in the roster.
///
/// Field casing on the wire is camelCase to match the public API contract.
/// `specialties` preserves insertion order and may be empty; `phone_number`
/// is opaque and never searched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: String,
}

/// Payload for inserting a new advocate record (seeding, tests).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: String,
}
