//! Turns untyped JSON bodies into validated value objects.
//!
//! Every rule is checked and every violation is reported, so a form can show
//! all of its field errors at once. Nothing is returned unless the whole
//! input is well-formed.

use crate::domain::model::{featured_flag, NewContactSubmission, NewProgram, NewUser};
use crate::utils::error::{FieldError, ValidationError};
use crate::utils::validation::{
    validate_email, validate_length, validate_non_empty_field, FieldResult,
};
use serde_json::{Map, Value};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

const REQUIRED: &str = "Required";
const EXPECTED_STRING: &str = "Expected string";
const EXPECTED_UNSIGNED: &str = "Expected a non-negative integer";

type SchemaResult<T> = std::result::Result<T, ValidationError>;

/// Collects field errors while reading values out of a JSON object.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    fn new(body: &'a Value) -> SchemaResult<Self> {
        match body.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: Vec::new(),
            }),
            None => Err(ValidationError::single("", "Expected object")),
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|v| !v.is_null())
    }

    fn fail(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    fn check(&mut self, result: FieldResult) {
        if let Err(e) = result {
            self.errors.push(e);
        }
    }

    fn required_string(&mut self, field: &str) -> Option<&'a str> {
        match self.present(field) {
            None => {
                self.fail(field, REQUIRED);
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                self.fail(field, EXPECTED_STRING);
                None
            }
        }
    }

    fn optional_string(&mut self, field: &str) -> Option<&'a str> {
        match self.present(field) {
            None => None,
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                self.fail(field, EXPECTED_STRING);
                None
            }
        }
    }

    /// Required string that must contain something besides whitespace.
    fn required_text(&mut self, field: &str) -> Option<&'a str> {
        let value = self.required_string(field)?;
        match validate_non_empty_field(field, value) {
            Ok(()) => Some(value),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    fn unsigned(&mut self, field: &str, value: &Value) -> Option<u32> {
        let parsed = value.as_u64().and_then(|n| u32::try_from(n).ok());
        if parsed.is_none() {
            self.fail(field, EXPECTED_UNSIGNED);
        }
        parsed
    }

    fn required_unsigned(&mut self, field: &str) -> Option<u32> {
        match self.present(field) {
            None => {
                self.fail(field, REQUIRED);
                None
            }
            Some(value) => self.unsigned(field, value),
        }
    }

    fn optional_unsigned(&mut self, field: &str) -> Option<Option<u32>> {
        match self.present(field) {
            None => Some(None),
            Some(value) => self.unsigned(field, value).map(Some),
        }
    }

    fn optional_flag(&mut self, field: &str) -> Option<Option<bool>> {
        match self.present(field) {
            None => Some(None),
            Some(Value::Bool(b)) => Some(Some(*b)),
            Some(Value::String(s)) => match featured_flag::parse(s) {
                Some(b) => Some(Some(b)),
                None => {
                    self.fail(field, "Expected \"true\" or \"false\"");
                    None
                }
            },
            Some(_) => {
                self.fail(field, "Expected boolean");
                None
            }
        }
    }

    fn string_list(&mut self, field: &str) -> Option<Vec<String>> {
        let items = match self.present(field) {
            None => {
                self.fail(field, REQUIRED);
                return None;
            }
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.fail(field, "Expected array of strings");
                return None;
            }
        };

        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(s) => out.push(s.to_string()),
                None => {
                    self.fail(&format!("{}.{}", field, i), EXPECTED_STRING);
                    ok = false;
                }
            }
        }
        ok.then_some(out)
    }

    fn finish<T>(self, value: Option<T>) -> SchemaResult<T> {
        match value {
            Some(v) if self.errors.is_empty() => Ok(v),
            _ => Err(ValidationError::new(self.errors)),
        }
    }
}

/// Validates a contact form body. Values are kept exactly as supplied; the
/// name length is measured after trimming.
pub fn validate_contact_submission(body: &Value) -> SchemaResult<NewContactSubmission> {
    let mut reader = FieldReader::new(body)?;

    let name = reader.required_string("name");
    if let Some(name) = name {
        let check = validate_length("name", "Name", name.trim(), NAME_MIN_CHARS, NAME_MAX_CHARS);
        reader.check(check);
    }

    let email = reader.required_string("email");
    if let Some(email) = email {
        reader.check(validate_email("email", email));
    }

    let phone = reader.optional_string("phone");
    let program_interest = reader.optional_string("programInterest");

    let message = reader.required_string("message");
    if let Some(message) = message {
        let check = validate_length(
            "message",
            "Message",
            message,
            MESSAGE_MIN_CHARS,
            MESSAGE_MAX_CHARS,
        );
        reader.check(check);
    }

    let value = match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Some(NewContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
            program_interest: program_interest.map(str::to_string),
            message: message.to_string(),
        }),
        _ => None,
    };
    reader.finish(value)
}

/// Validates a program body. `featured` and `spotsAvailable` may be omitted;
/// an `id` in the body is ignored.
pub fn validate_new_program(body: &Value) -> SchemaResult<NewProgram> {
    let mut reader = FieldReader::new(body)?;

    let destination = reader.required_text("destination");
    let country = reader.required_text("country");
    let title = reader.required_text("title");
    let description = reader.required_text("description");
    let duration = reader.required_text("duration");
    let start_date = reader.required_text("startDate");
    let end_date = reader.required_text("endDate");
    let price = reader.required_unsigned("price");
    let level = reader.required_text("level");
    let highlights = reader.string_list("highlights");
    let image_url = reader.required_text("imageUrl");
    let featured = reader.optional_flag("featured");
    let spots_available = reader.optional_unsigned("spotsAvailable");

    let value = (|| {
        Some(NewProgram {
            destination: destination?.to_string(),
            country: country?.to_string(),
            title: title?.to_string(),
            description: description?.to_string(),
            duration: duration?.to_string(),
            start_date: start_date?.to_string(),
            end_date: end_date?.to_string(),
            price: price?,
            level: level?.to_string(),
            highlights: highlights?,
            image_url: image_url?.to_string(),
            featured: featured?,
            spots_available: spots_available?.unwrap_or(0),
        })
    })();
    reader.finish(value)
}

pub fn validate_new_user(body: &Value) -> SchemaResult<NewUser> {
    let mut reader = FieldReader::new(body)?;

    let username = reader.required_text("username");
    let password = reader.required_text("password");

    let value = match (username, password) {
        (Some(username), Some(password)) => Some(NewUser {
            username: username.to_string(),
            password: password.to_string(),
        }),
        _ => None,
    };
    reader.finish(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(err: &ValidationError) -> Vec<&str> {
        err.details.iter().map(|d| d.field.as_str()).collect()
    }

    #[test]
    fn accepts_complete_contact_form() {
        let body = json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "phone": "555-1234",
            "programInterest": "Tokyo",
            "message": "I would like to learn more about this program please."
        });

        let form = validate_contact_submission(&body).unwrap();
        assert_eq!(form.name, "Jordan Lee");
        assert_eq!(form.phone.as_deref(), Some("555-1234"));
        assert_eq!(form.program_interest.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let body = json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "phone": null,
            "message": "I would like to learn more."
        });

        let form = validate_contact_submission(&body).unwrap();
        assert_eq!(form.phone, None);
        assert_eq!(form.program_interest, None);
    }

    #[test]
    fn short_message_is_the_only_violation() {
        let body = json!({"name": "Jo", "email": "jo@example.com", "message": "short"});

        let err = validate_contact_submission(&body).unwrap_err();
        assert_eq!(fields(&err), vec!["message"]);
        assert_eq!(err.details[0].message, "Message must be at least 10 characters");
    }

    #[test]
    fn reports_every_violation() {
        let body = json!({"name": "J", "email": "not-an-email", "message": "hi"});

        let err = validate_contact_submission(&body).unwrap_err();
        assert_eq!(fields(&err), vec!["name", "email", "message"]);
    }

    #[test]
    fn name_length_is_measured_trimmed() {
        let body = json!({"name": "  J  ", "email": "j@example.com", "message": "long enough message"});
        let err = validate_contact_submission(&body).unwrap_err();
        assert_eq!(fields(&err), vec!["name"]);

        let long = "a".repeat(101);
        let body = json!({"name": long, "email": "j@example.com", "message": "long enough message"});
        let err = validate_contact_submission(&body).unwrap_err();
        assert_eq!(err.details[0].message, "Name must be at most 100 characters");
    }

    #[test]
    fn message_lower_bound_is_inclusive() {
        let body = json!({"name": "Jordan", "email": "j@example.com", "message": "m".repeat(10)});
        assert!(validate_contact_submission(&body).is_ok());

        let body = json!({"name": "Jordan", "email": "j@example.com", "message": "m".repeat(9)});
        let err = validate_contact_submission(&body).unwrap_err();
        assert_eq!(fields(&err), vec!["message"]);
    }

    #[test]
    fn message_upper_bound_is_inclusive() {
        let body = json!({"name": "Jordan", "email": "j@example.com", "message": "m".repeat(1000)});
        assert!(validate_contact_submission(&body).is_ok());

        let body = json!({"name": "Jordan", "email": "j@example.com", "message": "m".repeat(1001)});
        assert!(validate_contact_submission(&body).is_err());
    }

    #[test]
    fn rejects_wrong_types_and_missing_fields() {
        let body = json!({"name": 42, "phone": 5551234, "message": "long enough message"});

        let err = validate_contact_submission(&body).unwrap_err();
        assert_eq!(fields(&err), vec!["name", "email", "phone"]);
        assert_eq!(err.details[0].message, "Expected string");
        assert_eq!(err.details[1].message, "Required");
    }

    #[test]
    fn rejects_non_object_body() {
        let err = validate_contact_submission(&json!(["name"])).unwrap_err();
        assert_eq!(fields(&err), vec![""]);
    }

    fn program_body() -> Value {
        json!({
            "destination": "Lisbon, Portugal",
            "country": "Portugal",
            "title": "Lisbon Surf & Portuguese",
            "description": "Portuguese classes by the ocean.",
            "duration": "3 weeks",
            "startDate": "June 2025",
            "endDate": "July 2025",
            "price": 3900,
            "level": "College & 18+",
            "highlights": ["Surf lessons", "Fado night"],
            "imageUrl": "/assets/lisbon.png"
        })
    }

    #[test]
    fn program_defaults_optional_fields() {
        let program = validate_new_program(&program_body()).unwrap();
        assert_eq!(program.featured, None);
        assert_eq!(program.spots_available, 0);
        assert_eq!(program.highlights.len(), 2);
    }

    #[test]
    fn program_featured_accepts_wire_string() {
        let mut body = program_body();
        body["featured"] = json!("true");
        body["spotsAvailable"] = json!(8);

        let program = validate_new_program(&body).unwrap();
        assert_eq!(program.featured, Some(true));
        assert_eq!(program.spots_available, 8);
    }

    #[test]
    fn program_rejects_negative_price_and_bad_highlights() {
        let mut body = program_body();
        body["price"] = json!(-10);
        body["highlights"] = json!(["ok", 3]);
        body["title"] = json!("   ");

        let err = validate_new_program(&body).unwrap_err();
        assert_eq!(fields(&err), vec!["title", "price", "highlights.1"]);
    }

    #[test]
    fn user_requires_username_and_password() {
        assert!(validate_new_user(&json!({"username": "admin", "password": "pw"})).is_ok());

        let err = validate_new_user(&json!({"username": ""})).unwrap_err();
        assert_eq!(fields(&err), vec!["username", "password"]);
    }
}
