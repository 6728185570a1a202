use crate::config::WardConfig;
use crate::model::Patient;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod find;
pub mod get;
pub mod import;
pub mod list;
pub mod search;
pub mod seed;
pub mod stats;
pub mod update;

pub use stats::PatientStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command
    pub affected_patients: Vec<Patient>,
    /// Records to display, in ascending id order
    pub listed_patients: Vec<Patient>,
    pub stats: Option<PatientStats>,
    pub export: Option<String>,
    pub config: Option<WardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_patients(mut self, patients: Vec<Patient>) -> Self {
        self.affected_patients = patients;
        self
    }

    pub fn with_listed_patients(mut self, patients: Vec<Patient>) -> Self {
        self.listed_patients = patients;
        self
    }

    pub fn with_stats(mut self, stats: PatientStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_export(mut self, json: String) -> Self {
        self.export = Some(json);
        self
    }

    pub fn with_config(mut self, config: WardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message was reported at error level.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
