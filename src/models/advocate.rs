use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
///
/// `specialties` is a JSON-encoded array in a TEXT column; `id` and
/// `created_at` are storage concerns that never reach the domain layer.
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: &'a str,
}

impl TryFrom<Advocate> for DomainAdvocate {
    type Error = serde_json::Error;

    fn try_from(advocate: Advocate) -> Result<Self, Self::Error> {
        let specialties: Vec<String> = serde_json::from_str(&advocate.specialties)?;
        Ok(Self {
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    type Error = serde_json::Error;

    fn try_from(advocate: &'a DomainNewAdvocate) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            specialties: serde_json::to_string(&advocate.specialties)?,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number.as_str(),
        })
    }
}
