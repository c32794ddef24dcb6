use crate::config::GradebookConfig;
use crate::model::{Grade, StudentRecord};
use serde::Serialize;
use std::collections::BTreeMap;

pub mod add;
pub mod config;
pub mod find;
pub mod list;
pub mod rank;
pub mod stats;
pub mod update;

/// A record together with its 1-based position in a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub rank: usize,
    pub record: StudentRecord,
}

/// Number of students per grade. Every grade is present, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeDistribution(BTreeMap<Grade, usize>);

impl Default for GradeDistribution {
    fn default() -> Self {
        Self(Grade::ALL.iter().map(|g| (*g, 0)).collect())
    }
}

impl GradeDistribution {
    pub fn record(&mut self, grade: Grade) {
        *self.0.entry(grade).or_insert(0) += 1;
    }

    pub fn count(&self, grade: Grade) -> usize {
        self.0.get(&grade).copied().unwrap_or(0)
    }

    /// Grade/count pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        self.0.iter().map(|(g, c)| (*g, *c))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassStats {
    pub total_students: usize,
    /// Mean of every student's (already rounded) average.
    pub class_average: f64,
    pub highest_scorer: StudentRecord,
    pub lowest_scorer: StudentRecord,
    pub grade_distribution: GradeDistribution,
}

#[derive(Debug, Clone)]
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

/// Outcome of commands that report back through messages rather than records.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub config: Option<GradebookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: GradebookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
