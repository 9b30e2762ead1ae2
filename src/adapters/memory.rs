use crate::adapters::seed::sample_programs;
use crate::domain::model::{
    ContactSubmission, NewContactSubmission, NewProgram, NewUser, Program, User,
};
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct MemState {
    programs: Vec<Program>,
    program_index: HashMap<String, usize>,
    submissions: Vec<ContactSubmission>,
    users: HashMap<String, User>,
    initialized: bool,
    closed: bool,
}

impl MemState {
    fn insert_program(&mut self, program: NewProgram) -> Program {
        let program = program.into_program(new_id());
        self.program_index
            .insert(program.id.clone(), self.programs.len());
        self.programs.push(program.clone());
        program
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Process-local store. Everything is lost when the value is dropped.
#[derive(Debug)]
pub struct MemStorage {
    state: RwLock<MemState>,
    seed_sample_programs: bool,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_seed(true)
    }

    /// A store that starts with an empty catalog after `init`.
    pub fn empty() -> Self {
        Self::with_seed(false)
    }

    pub fn with_seed(seed_sample_programs: bool) -> Self {
        Self {
            state: RwLock::new(MemState::default()),
            seed_sample_programs,
        }
    }

    pub async fn submission_count(&self) -> usize {
        self.state.read().await.submissions.len()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn init(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(AppError::StorageClosed);
        }
        if state.initialized {
            tracing::debug!("Storage already initialized, skipping seed");
            return Ok(());
        }

        if self.seed_sample_programs {
            for program in sample_programs() {
                state.insert_program(program);
            }
        }
        state.initialized = true;

        tracing::info!(programs = state.programs.len(), "In-memory storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if state.closed {
            return Ok(());
        }

        tracing::info!(
            programs = state.programs.len(),
            submissions = state.submissions.len(),
            users = state.users.len(),
            "Closing in-memory storage, discarding all records"
        );
        *state = MemState {
            closed: true,
            ..MemState::default()
        };
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Option<User> {
        self.state.read().await.users.get(id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.state
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(AppError::StorageClosed);
        }
        if state.users.values().any(|u| u.username == user.username) {
            return Err(AppError::Conflict {
                message: format!("Username '{}' is already taken", user.username),
            });
        }

        let user = User {
            id: new_id(),
            username: user.username,
            password: user.password,
        };
        state.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_all_programs(&self) -> Vec<Program> {
        self.state.read().await.programs.clone()
    }

    async fn get_featured_programs(&self) -> Vec<Program> {
        self.state
            .read()
            .await
            .programs
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    async fn get_program_by_id(&self, id: &str) -> Option<Program> {
        let state = self.state.read().await;
        state
            .program_index
            .get(id)
            .and_then(|&i| state.programs.get(i))
            .cloned()
    }

    async fn get_programs_by_level(&self, level: &str) -> Vec<Program> {
        self.state
            .read()
            .await
            .programs
            .iter()
            .filter(|p| p.level.contains(level))
            .cloned()
            .collect()
    }

    async fn create_program(&self, program: NewProgram) -> Result<Program> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(AppError::StorageClosed);
        }
        let program = state.insert_program(program);
        tracing::debug!(id = %program.id, title = %program.title, "Program created");
        Ok(program)
    }

    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(AppError::StorageClosed);
        }
        let submission = submission.into_submission(new_id(), Utc::now());
        state.submissions.push(submission.clone());
        Ok(submission)
    }

    async fn get_all_contact_submissions(&self) -> Vec<ContactSubmission> {
        let state = self.state.read().await;
        // reversed first so equal timestamps keep the later insert in front
        let mut submissions: Vec<ContactSubmission> =
            state.submissions.iter().rev().cloned().collect();
        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        submissions
    }
}
