use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between a parent group's name and a subgroup's name in display names.
pub const GROUP_PATH_SEPARATOR: &str = "::";

/// A named container of records. Subgroups point at their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn child_of(name: impl Into<String>, parent: &Group) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id: Some(parent.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// A unit owned by the record store.
///
/// Fields keep their insertion order; the first field is what lists show
/// next to the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub group_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new<N, V>(group_id: Uuid, fields: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            group_id,
            created_at: Utc::now(),
            fields: fields
                .into_iter()
                .map(|(name, value)| Field {
                    name: name.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Sets a field's value, appending the field when the record lacks it.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn first_field(&self) -> Option<&str> {
        self.fields.first().map(|f| f.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_replaces_in_place() {
        let group = Group::new("Math");
        let mut record = Record::new(group.id, [("Front", "2+2"), ("Deck ID", "Math@00001")]);

        record.set_field("Deck ID", "Math@00002");

        assert_eq!(record.field("Deck ID"), Some("Math@00002"));
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.first_field(), Some("2+2"));
    }

    #[test]
    fn set_field_appends_missing_field() {
        let group = Group::new("Math");
        let mut record = Record::new(group.id, [("Front", "2+2")]);
        assert!(!record.has_field("Deck ID"));

        record.set_field("Deck ID", "Math@00001");

        assert!(record.has_field("Deck ID"));
        assert_eq!(record.fields.last().unwrap().name, "Deck ID");
    }

    #[test]
    fn child_group_points_at_parent() {
        let parent = Group::new("Languages");
        let child = Group::child_of("French", &parent);
        assert_eq!(child.parent_id, Some(parent.id));
        assert_eq!(parent.parent_id, None);
    }
}
