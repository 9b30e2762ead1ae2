use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub destination: String,
    pub country: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub start_date: String,
    pub end_date: String,
    pub price: u32,
    pub level: String,
    pub highlights: Vec<String>,
    pub image_url: String,
    #[serde(with = "featured_flag")]
    pub featured: bool,
    pub spots_available: u32,
}

/// Program fields supplied by a caller; the id is always assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProgram {
    pub destination: String,
    pub country: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub start_date: String,
    pub end_date: String,
    pub price: u32,
    pub level: String,
    pub highlights: Vec<String>,
    pub image_url: String,
    pub featured: Option<bool>,
    pub spots_available: u32,
}

impl NewProgram {
    pub fn into_program(self, id: String) -> Program {
        Program {
            id,
            destination: self.destination,
            country: self.country,
            title: self.title,
            description: self.description,
            duration: self.duration,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            level: self.level,
            highlights: self.highlights,
            image_url: self.image_url,
            featured: self.featured.unwrap_or(false),
            spots_available: self.spots_available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub program_interest: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A contact form that already passed validation. Only `domain::schema`
/// builds these from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub program_interest: Option<String>,
    pub message: String,
}

impl NewContactSubmission {
    pub fn into_submission(self, id: String, created_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            program_interest: self.program_interest,
            message: self.message,
            created_at,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Existing clients compare `featured === "true"`, so the flag travels as a
/// string. Deserialization also takes a JSON bool.
pub mod featured_flag {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        struct FlagVisitor;

        impl Visitor<'_> for FlagVisitor {
            type Value = bool;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a boolean or the string \"true\"/\"false\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
                Ok(v)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
                parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }

    pub fn parse(value: &str) -> Option<bool> {
        match value {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}
