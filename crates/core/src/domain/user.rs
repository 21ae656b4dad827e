// User Domain Model

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// User ID (UUID v4)
pub type UserId = String;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    JobSeeker,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::JobSeeker => "job_seeker",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job_seeker" => Ok(UserRole::JobSeeker),
            "admin" => Ok(UserRole::Admin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

/// User Entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub created_at: i64, // epoch ms
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            role: UserRole::JobSeeker,
            created_at,
        }
    }
}
