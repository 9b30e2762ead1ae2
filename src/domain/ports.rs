use crate::domain::model::{
    ContactSubmission, NewContactSubmission, NewProgram, NewUser, Program, User,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Repository for every collection the site owns. Reads are fail-soft:
/// a missing record is `None`, an empty filter is an empty `Vec`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Prepares the store for use. Calling it again is a no-op.
    async fn init(&self) -> Result<()>;
    async fn close(&self) -> Result<()>;

    async fn get_user(&self, id: &str) -> Option<User>;
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    async fn create_user(&self, user: NewUser) -> Result<User>;

    async fn get_all_programs(&self) -> Vec<Program>;
    async fn get_featured_programs(&self) -> Vec<Program>;
    async fn get_program_by_id(&self, id: &str) -> Option<Program>;
    async fn get_programs_by_level(&self, level: &str) -> Vec<Program>;
    async fn create_program(&self, program: NewProgram) -> Result<Program>;

    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission>;
    /// Newest first.
    async fn get_all_contact_submissions(&self) -> Vec<ContactSubmission>;
}
