use crate::config::DeckIdConfig;
use crate::model::Record;
use crate::view::ViewEntry;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod groups;
pub mod helpers;
pub mod init;
pub mod list;
pub mod moving;
pub mod reconcile;
pub mod renumber;
pub mod sweep;

#[derive(Debug, Clone)]
pub struct DeckIdPaths {
    pub root: PathBuf,
}

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

/// A group with its record counts, for group listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    pub records: usize,
    pub labeled: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_entries: Vec<ViewEntry>,
    pub groups: Vec<GroupSummary>,
    pub config: Option<DeckIdConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<ViewEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_groups(mut self, groups: Vec<GroupSummary>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_config(mut self, config: DeckIdConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
