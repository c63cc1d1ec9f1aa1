use super::{
    find_group_by_id, find_group_by_name, member_groups, qualified_name, validate_new_group,
    RecordStore,
};
use crate::error::{DeckIdError, Result};
use crate::model::{Group, Record};
use uuid::Uuid;

/// In-memory record store for testing.
///
/// Besides storing records it counts successful `update_record` calls and can
/// be told to fail writes, either all of them or every write after the next
/// `n` successful ones.
#[derive(Default)]
pub struct InMemoryStore {
    groups: Vec<Group>,
    records: Vec<Record>,
    writes: usize,
    simulate_write_error: bool,
    writes_before_failure: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Let the next `n` record updates succeed, then fail every one after.
    pub fn fail_writes_after(&mut self, n: usize) {
        self.writes_before_failure = Some(n);
    }

    /// Number of successful `update_record` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn check_write(&mut self) -> Result<()> {
        if self.simulate_write_error {
            return Err(DeckIdError::Store("Simulated write error".to_string()));
        }
        if let Some(remaining) = self.writes_before_failure.as_mut() {
            if *remaining == 0 {
                return Err(DeckIdError::Store("Simulated write error".to_string()));
            }
            *remaining -= 1;
        }
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn get_record(&self, id: &Uuid) -> Result<Record> {
        self.records
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or(DeckIdError::RecordNotFound(*id))
    }

    fn update_record(&mut self, record: &Record) -> Result<()> {
        self.check_write()?;
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(DeckIdError::RecordNotFound(record.id))?;
        *slot = record.clone();
        self.writes += 1;
        Ok(())
    }

    fn group_members(&self, group: &Uuid, recursive: bool) -> Result<Vec<Uuid>> {
        find_group_by_id(&self.groups, group)?;
        let groups = member_groups(&self.groups, group, recursive);
        Ok(self
            .records
            .iter()
            .filter(|r| groups.contains(&r.group_id))
            .map(|r| r.id)
            .collect())
    }

    fn group_display_name(&self, group: &Uuid) -> Result<String> {
        qualified_name(&self.groups, group)
    }

    fn resolve_group(&self, record: &Record) -> Result<Uuid> {
        Ok(find_group_by_id(&self.groups, &record.group_id)?.id)
    }

    fn all_records(&self) -> Result<Vec<Uuid>> {
        Ok(self.records.iter().map(|r| r.id).collect())
    }

    fn add_group(&mut self, group: &Group) -> Result<()> {
        validate_new_group(&self.groups, group)?;
        self.groups.push(group.clone());
        Ok(())
    }

    fn insert_record(&mut self, record: &Record) -> Result<()> {
        find_group_by_id(&self.groups, &record.group_id)?;
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(DeckIdError::Store(format!(
                "Record {} already exists",
                record.id
            )));
        }
        self.records.push(record.clone());
        Ok(())
    }

    fn list_groups(&self) -> Result<Vec<Group>> {
        Ok(self.groups.clone())
    }

    fn find_group(&self, name: &str) -> Result<Option<Group>> {
        find_group_by_name(&self.groups, name)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const LABEL_FIELD: &str = "Deck ID";
    pub const FRONT_FIELD: &str = "Front";

    /// Builds an [`InMemoryStore`] group by group, handing back the IDs it creates.
    #[derive(Default)]
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn group(&mut self, name: &str) -> Uuid {
            let group = Group::new(name);
            self.store.add_group(&group).unwrap();
            group.id
        }

        pub fn subgroup(&mut self, name: &str, parent: Uuid) -> Uuid {
            let parent = self
                .store
                .groups
                .iter()
                .find(|g| g.id == parent)
                .cloned()
                .unwrap();
            let group = Group::child_of(name, &parent);
            self.store.add_group(&group).unwrap();
            group.id
        }

        /// Adds a record whose label field holds `label` verbatim.
        pub fn labeled(&mut self, group: Uuid, label: &str) -> Uuid {
            let record = Record::new(
                group,
                [(FRONT_FIELD, format!("front of {}", label)), (LABEL_FIELD, label.to_string())],
            );
            self.store.insert_record(&record).unwrap();
            record.id
        }

        /// Adds a record with no label field at all.
        pub fn unlabeled(&mut self, group: Uuid, front: &str) -> Uuid {
            let record = Record::new(group, [(FRONT_FIELD, front)]);
            self.store.insert_record(&record).unwrap();
            record.id
        }

        pub fn label_of(&self, id: Uuid) -> Option<String> {
            self.store
                .get_record(&id)
                .unwrap()
                .field(LABEL_FIELD)
                .map(str::to_string)
        }

        pub fn labels_in(&self, group: Uuid) -> Vec<String> {
            self.store
                .group_members(&group, false)
                .unwrap()
                .into_iter()
                .filter_map(|id| self.label_of(id))
                .collect()
        }
    }
}
