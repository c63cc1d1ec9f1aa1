//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for all deckid operations, whatever the UI.
//!
//! `DeckIdApi` owns the store handle and the loaded configuration, so callers
//! never pass the label field name around. It:
//! - **Dispatches** to the matching `commands::*` function
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! ## Host Hooks
//!
//! A host application tells deckid about two events:
//! - a record is about to be created ([`OnRecordCreate`])
//! - a session has started ([`OnSessionStart`])
//!
//! Both are plain traits implemented by `DeckIdApi`. The host calls them
//! explicitly; nothing is registered globally.
//!
//! ## Generic Over RecordStore
//!
//! - Production: `DeckIdApi<FileStore>`
//! - Testing: `DeckIdApi<InMemoryStore>`

use crate::commands;
use crate::config::DeckIdConfig;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use crate::view::{Direction, OrderedView};
use uuid::Uuid;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DeckIdPaths, GroupSummary, MessageLevel};

/// Called by the host right before a new record is stored.
pub trait OnRecordCreate {
    /// Labels `record` for `group` if it carries the label field.
    ///
    /// Returns the assigned label, or `None` when the record has no label field.
    fn on_record_create(&mut self, record: &mut Record, group: &Uuid) -> Result<Option<String>>;
}

/// Called by the host once per session, before any other operation.
pub trait OnSessionStart {
    /// Never fails: problems are reported as error messages in the result.
    fn on_session_start(&mut self) -> CmdResult;
}

/// The main API facade for deckid operations.
pub struct DeckIdApi<S: RecordStore> {
    store: S,
    config: DeckIdConfig,
    paths: DeckIdPaths,
}

impl<S: RecordStore> DeckIdApi<S> {
    pub fn new(store: S, config: DeckIdConfig, paths: DeckIdPaths) -> Self {
        Self {
            store,
            config,
            paths,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &DeckIdConfig {
        &self.config
    }

    pub fn paths(&self) -> &DeckIdPaths {
        &self.paths
    }

    pub fn add_group(&mut self, name: &str, parent: Option<&str>) -> Result<CmdResult> {
        commands::groups::add(&mut self.store, name, parent)
    }

    pub fn list_groups(&self) -> Result<CmdResult> {
        commands::groups::list(&self.store, &self.config.label_field)
    }

    pub fn add_record(&mut self, group: &str, front: String, labeled: bool) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &self.config, group, front, labeled)
    }

    pub fn list(&self, group: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.config, group)
    }

    /// Fresh snapshot of one group, or of everything.
    pub fn ordered_view(&self, group: Option<&str>) -> Result<OrderedView> {
        commands::helpers::view_for(&self.store, &self.config.label_field, group)
    }

    pub fn move_up(&mut self, group: Option<&str>, position: usize) -> Result<CmdResult> {
        commands::moving::run(
            &mut self.store,
            &self.config,
            group,
            position,
            Direction::Up,
        )
    }

    pub fn move_down(&mut self, group: Option<&str>, position: usize) -> Result<CmdResult> {
        commands::moving::run(
            &mut self.store,
            &self.config,
            group,
            position,
            Direction::Down,
        )
    }

    pub fn sweep_group(&mut self, group: &str) -> Result<CmdResult> {
        commands::sweep::run(&mut self.store, &self.config, group)
    }

    pub fn reconcile(&mut self) -> Result<CmdResult> {
        commands::reconcile::run(&mut self.store, &self.config)
    }

    pub fn renumber_view(&mut self, group: Option<&str>) -> Result<CmdResult> {
        commands::renumber::run(&mut self.store, &self.config, group)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    /// Reads or writes `config.json`; a successful write also updates this session.
    pub fn config_action(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

impl<S: RecordStore> OnRecordCreate for DeckIdApi<S> {
    fn on_record_create(&mut self, record: &mut Record, group: &Uuid) -> Result<Option<String>> {
        commands::add::prepare(&mut self.store, &self.config.label_field, record, group)
    }
}

impl<S: RecordStore> OnSessionStart for DeckIdApi<S> {
    fn on_session_start(&mut self) -> CmdResult {
        if !self.config.reconcile_on_start {
            return CmdResult::default();
        }
        match commands::reconcile::run(&mut self.store, &self.config) {
            Ok(mut result) => {
                // A clean pass stays quiet; only repairs are worth showing.
                result
                    .messages
                    .retain(|m| m.level == MessageLevel::Warning);
                result
            }
            Err(e) => {
                tracing::error!(error = %e, "reconcile at session start failed");
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(format!(
                    "Could not reconcile labels: {}",
                    e
                )));
                result
            }
        }
    }
}
