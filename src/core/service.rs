use crate::domain::model::{ContactSubmission, Program, User};
use crate::domain::ports::Storage;
use crate::domain::schema::{validate_contact_submission, validate_new_program, validate_new_user};
use crate::utils::error::{AppError, Result};
use serde_json::Value;
use std::sync::Arc;

/// Validation in front of storage. Nothing reaches the store unless the
/// schema layer accepted the whole input.
pub struct CatalogService<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: Storage> CatalogService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    pub async fn list_programs(&self) -> Vec<Program> {
        self.storage.get_all_programs().await
    }

    pub async fn featured_programs(&self) -> Vec<Program> {
        self.storage.get_featured_programs().await
    }

    pub async fn programs_by_level(&self, level: &str) -> Vec<Program> {
        self.storage.get_programs_by_level(level).await
    }

    pub async fn program(&self, id: &str) -> Result<Program> {
        if id.trim().is_empty() {
            return Err(AppError::invalid_request("Program id is required"));
        }
        self.storage
            .get_program_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found("Program", id))
    }

    pub async fn create_program(&self, body: &Value) -> Result<Program> {
        let program = validate_new_program(body)?;
        self.storage.create_program(program).await
    }

    pub async fn submit_contact(&self, body: &Value) -> Result<ContactSubmission> {
        let form = match validate_contact_submission(body) {
            Ok(form) => form,
            Err(e) => {
                tracing::debug!(errors = e.details.len(), "Contact submission rejected");
                return Err(e.into());
            }
        };

        let submission = self.storage.create_contact_submission(form).await?;
        tracing::info!(
            id = %submission.id,
            email_domain = email_domain(&submission.email),
            "Contact submission received"
        );
        Ok(submission)
    }

    pub async fn contact_submissions(&self) -> Vec<ContactSubmission> {
        self.storage.get_all_contact_submissions().await
    }

    pub async fn register_user(&self, body: &Value) -> Result<User> {
        let user = validate_new_user(body)?;
        self.storage.create_user(user).await
    }
}

fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemStorage;
    use serde_json::json;

    async fn service() -> CatalogService<MemStorage> {
        let storage = Arc::new(MemStorage::new());
        storage.init().await.unwrap();
        CatalogService::new(storage)
    }

    #[tokio::test]
    async fn valid_submission_is_stored_verbatim() {
        let service = service().await;
        let body = json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "phone": "555-1234",
            "programInterest": "Tokyo",
            "message": "I would like to learn more about this program please."
        });

        let submission = service.submit_contact(&body).await.unwrap();
        assert_eq!(submission.name, "Jordan Lee");
        assert_eq!(submission.email, "jordan@example.com");
        assert_eq!(submission.phone.as_deref(), Some("555-1234"));
        assert_eq!(submission.program_interest.as_deref(), Some("Tokyo"));
        assert_eq!(
            submission.message,
            "I would like to learn more about this program please."
        );
        assert_eq!(service.contact_submissions().await, vec![submission]);
    }

    #[tokio::test]
    async fn invalid_submissions_never_reach_storage() {
        let service = service().await;
        let bodies = [
            json!({"name": "J", "email": "j@example.com", "message": "long enough message"}),
            json!({"name": "Jordan", "email": "j@example.com", "message": "short"}),
            json!({"name": "Jordan", "email": "jordan.example.com", "message": "long enough message"}),
            json!({"name": "Jordan", "email": "jordan@", "message": "long enough message"}),
        ];

        for body in &bodies {
            match service.submit_contact(body).await {
                Err(AppError::Validation(e)) => assert!(!e.details.is_empty()),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
        assert_eq!(service.storage().submission_count().await, 0);
    }

    #[tokio::test]
    async fn missing_program_is_not_found() {
        let service = service().await;
        let before = service.list_programs().await;

        let err = service.program("nonexistent-id").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(service.list_programs().await, before);

        let err = service.program("  ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest { .. }));
    }

    #[tokio::test]
    async fn created_program_is_listed() {
        let service = service().await;
        let body = json!({
            "destination": "Lisbon, Portugal",
            "country": "Portugal",
            "title": "Lisbon Surf & Portuguese",
            "description": "Portuguese classes by the ocean.",
            "duration": "3 weeks",
            "startDate": "June 2025",
            "endDate": "July 2025",
            "price": 3900,
            "level": "College & 18+",
            "highlights": ["Surf lessons"],
            "imageUrl": "/assets/lisbon.png",
            "id": "client-chosen"
        });

        let program = service.create_program(&body).await.unwrap();
        assert_ne!(program.id, "client-chosen");
        assert_eq!(service.program(&program.id).await.unwrap(), program);
        assert_eq!(service.programs_by_level("18+").await.len(), 3);
    }

    #[tokio::test]
    async fn register_user_rejects_duplicates() {
        let service = service().await;
        let body = json!({"username": "editor", "password": "pw"});

        service.register_user(&body).await.unwrap();
        let err = service.register_user(&body).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[test]
    fn extracts_email_domain() {
        assert_eq!(email_domain("jo@example.com"), "example.com");
        assert_eq!(email_domain("broken"), "");
    }
}
