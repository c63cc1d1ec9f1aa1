use super::{
    find_group_by_id, find_group_by_name, member_groups, qualified_name, validate_new_group,
    RecordStore,
};
use crate::error::{DeckIdError, Result};
use crate::model::{Group, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DATA_FILENAME: &str = "data.json";

/// On-disk layout of `data.json`. Both lists keep insertion order.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    groups: Vec<Group>,
    #[serde(default)]
    records: Vec<Record>,
}

/// Record store backed by a single JSON file.
///
/// Every operation reads the file and every mutation writes it back, so two
/// processes never share in-memory state.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DeckIdError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<StoreData> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(StoreData::default());
        }
        let content = fs::read_to_string(data_file).map_err(DeckIdError::Io)?;
        let data: StoreData = serde_json::from_str(&content).map_err(DeckIdError::Serialization)?;
        Ok(data)
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(data).map_err(DeckIdError::Serialization)?;

        // Write to a sibling temp file first so a crash never leaves half a file.
        let tmp_file = self.root.join(format!(".data-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(DeckIdError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.data_file()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(DeckIdError::Io(e));
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn get_record(&self, id: &Uuid) -> Result<Record> {
        self.load()?
            .records
            .into_iter()
            .find(|r| r.id == *id)
            .ok_or(DeckIdError::RecordNotFound(*id))
    }

    fn update_record(&mut self, record: &Record) -> Result<()> {
        let mut data = self.load()?;
        let slot = data
            .records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(DeckIdError::RecordNotFound(record.id))?;
        *slot = record.clone();
        self.save(&data)
    }

    fn group_members(&self, group: &Uuid, recursive: bool) -> Result<Vec<Uuid>> {
        let data = self.load()?;
        find_group_by_id(&data.groups, group)?;
        let groups = member_groups(&data.groups, group, recursive);
        Ok(data
            .records
            .iter()
            .filter(|r| groups.contains(&r.group_id))
            .map(|r| r.id)
            .collect())
    }

    fn group_display_name(&self, group: &Uuid) -> Result<String> {
        qualified_name(&self.load()?.groups, group)
    }

    fn resolve_group(&self, record: &Record) -> Result<Uuid> {
        Ok(find_group_by_id(&self.load()?.groups, &record.group_id)?.id)
    }

    fn all_records(&self) -> Result<Vec<Uuid>> {
        Ok(self.load()?.records.iter().map(|r| r.id).collect())
    }

    fn add_group(&mut self, group: &Group) -> Result<()> {
        let mut data = self.load()?;
        validate_new_group(&data.groups, group)?;
        data.groups.push(group.clone());
        self.save(&data)
    }

    fn insert_record(&mut self, record: &Record) -> Result<()> {
        let mut data = self.load()?;
        find_group_by_id(&data.groups, &record.group_id)?;
        if data.records.iter().any(|r| r.id == record.id) {
            return Err(DeckIdError::Store(format!(
                "Record {} already exists",
                record.id
            )));
        }
        data.records.push(record.clone());
        self.save(&data)
    }

    fn list_groups(&self) -> Result<Vec<Group>> {
        Ok(self.load()?.groups)
    }

    fn find_group(&self, name: &str) -> Result<Option<Group>> {
        find_group_by_name(&self.load()?.groups, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        // A non-empty directory where data.json should go makes the rename fail.
        fs::create_dir(store.data_file()).unwrap();
        fs::write(store.data_file().join("keep"), "x").unwrap();

        let err = store.save(&StoreData::default()).unwrap_err();

        assert!(matches!(err, DeckIdError::Io(_)));
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![DATA_FILENAME.to_string()]);
    }
}
