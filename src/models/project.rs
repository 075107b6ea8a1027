//! Construction project model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ProjectId;
use super::money::Money;
use super::record::{AsMonetaryRecord, MonetaryRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn all() -> &'static [ProjectStatus] {
        &[
            Self::Planning,
            Self::Active,
            Self::OnHold,
            Self::Completed,
            Self::Cancelled,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "planning" => Some(Self::Planning),
            "active" => Some(Self::Active),
            "on_hold" | "onhold" => Some(Self::OnHold),
            "completed" => Some(Self::Completed),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planning => write!(f, "Planlama"),
            Self::Active => write!(f, "Devam Ediyor"),
            Self::OnHold => write!(f, "Beklemede"),
            Self::Completed => write!(f, "Tamamlandı"),
            Self::Cancelled => write!(f, "İptal"),
        }
    }
}

/// A construction or real-estate project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub start_date: NaiveDate,
    /// Planned completion date, when one is set
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Completion percentage, 0-100
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub status: ProjectStatus,
    pub budget: Money,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: impl Into<Option<NaiveDate>>,
        budget: Money,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            name: name.into(),
            location: String::new(),
            start_date,
            end_date: end_date.into(),
            progress: 0,
            status: ProjectStatus::Planning,
            budget,
            currency: currency.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update progress; reaching 100 marks the project completed
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
        if self.progress == 100 {
            self.status = ProjectStatus::Completed;
        } else if self.progress > 0 && self.status == ProjectStatus::Planning {
            self.status = ProjectStatus::Active;
        }
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        if self.end_date.is_some_and(|end| end < self.start_date) {
            return Err(ProjectValidationError::EndBeforeStart);
        }
        if self.progress > 100 {
            return Err(ProjectValidationError::InvalidProgress(self.progress));
        }
        if self.budget.is_negative() {
            return Err(ProjectValidationError::NegativeBudget);
        }
        Ok(())
    }
}

/// Budget dated by start date
impl AsMonetaryRecord for Project {
    fn to_record(&self) -> MonetaryRecord {
        MonetaryRecord::new(self.budget, self.currency.clone()).with_date(self.start_date)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyName,
    EndBeforeStart,
    InvalidProgress(u8),
    NegativeBudget,
}

impl fmt::Display for ProjectValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Project name cannot be empty"),
            Self::EndBeforeStart => write!(f, "Project end date cannot be before its start date"),
            Self::InvalidProgress(p) => write!(f, "Progress must be between 0 and 100, got {}", p),
            Self::NegativeBudget => write!(f, "Project budget cannot be negative"),
        }
    }
}

impl std::error::Error for ProjectValidationError {}
