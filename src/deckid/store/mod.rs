//! # Storage Layer
//!
//! The ordinal algorithms never own records. They read and rewrite one text
//! field on records that live in a host record store, reached through the
//! [`RecordStore`] trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file store used by the CLI
//!   - Groups and records stored together in `data.json`
//!   - Every write rewrites the file through a temp file and rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Write counting and failure injection
//!
//! ## Collaborator vs Host Operations
//!
//! The first block of trait methods is everything the ordinal core calls.
//! The second block (`add_group`, `insert_record`, ...) exists so a host can
//! populate the store; the core algorithms never call it.

use crate::error::{DeckIdError, Result};
use crate::model::{Group, Record, GROUP_PATH_SEPARATOR};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for the host record store.
pub trait RecordStore {
    /// Get a record by ID
    fn get_record(&self, id: &Uuid) -> Result<Record>;

    /// Persist a record's current field values
    fn update_record(&mut self, record: &Record) -> Result<()>;

    /// IDs of the records in a group, in insertion order.
    ///
    /// With `recursive == false` records of subgroups are excluded.
    fn group_members(&self, group: &Uuid, recursive: bool) -> Result<Vec<Uuid>>;

    /// The group's full name, subgroups joined to their parents with `::`
    fn group_display_name(&self, group: &Uuid) -> Result<String>;

    /// The group a record currently belongs to
    fn resolve_group(&self, record: &Record) -> Result<Uuid>;

    /// IDs of every record in the store, in insertion order
    fn all_records(&self) -> Result<Vec<Uuid>>;

    /// Register a new group
    fn add_group(&mut self, group: &Group) -> Result<()>;

    /// Add a new record to its group
    fn insert_record(&mut self, record: &Record) -> Result<()>;

    /// List all groups in creation order
    fn list_groups(&self) -> Result<Vec<Group>>;

    /// Find a group by its display name
    fn find_group(&self, name: &str) -> Result<Option<Group>>;
}

pub(crate) fn find_group_by_id<'a>(groups: &'a [Group], id: &Uuid) -> Result<&'a Group> {
    groups
        .iter()
        .find(|g| g.id == *id)
        .ok_or_else(|| DeckIdError::GroupNotFound(id.to_string()))
}

/// Builds `Parent::Child` style names by walking parent links.
pub(crate) fn qualified_name(groups: &[Group], id: &Uuid) -> Result<String> {
    let mut parts = Vec::new();
    let mut current = find_group_by_id(groups, id)?;
    loop {
        parts.push(current.name.as_str());
        match current.parent_id {
            // Parent links come from `add_group`, which refuses cycles.
            Some(parent) => current = find_group_by_id(groups, &parent)?,
            None => break,
        }
    }
    parts.reverse();
    Ok(parts.join(GROUP_PATH_SEPARATOR))
}

/// The group itself plus, when `recursive`, every group nested below it.
pub(crate) fn member_groups(groups: &[Group], root: &Uuid, recursive: bool) -> Vec<Uuid> {
    let mut found = vec![*root];
    if !recursive {
        return found;
    }
    let mut cursor = 0;
    while cursor < found.len() {
        let parent = found[cursor];
        found.extend(
            groups
                .iter()
                .filter(|g| g.parent_id == Some(parent))
                .map(|g| g.id),
        );
        cursor += 1;
    }
    found
}

/// Rejects a group whose parent is unknown or whose full name is already taken.
pub(crate) fn validate_new_group(groups: &[Group], group: &Group) -> Result<()> {
    if group.name.is_empty() {
        return Err(DeckIdError::Api("Group name cannot be empty".to_string()));
    }
    if groups.iter().any(|g| g.id == group.id) {
        return Err(DeckIdError::Store(format!(
            "Group {} already exists",
            group.id
        )));
    }
    let full_name = match group.parent_id {
        Some(parent) => format!(
            "{}{}{}",
            qualified_name(groups, &parent)?,
            GROUP_PATH_SEPARATOR,
            group.name
        ),
        None => group.name.clone(),
    };
    for existing in groups {
        if qualified_name(groups, &existing.id)? == full_name {
            return Err(DeckIdError::Store(format!(
                "Group '{}' already exists",
                full_name
            )));
        }
    }
    Ok(())
}

pub(crate) fn find_group_by_name(groups: &[Group], name: &str) -> Result<Option<Group>> {
    for group in groups {
        if qualified_name(groups, &group.id)? == name {
            return Ok(Some(group.clone()));
        }
    }
    Ok(None)
}
