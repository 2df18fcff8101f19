use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::{ApplicantRecord, EntryId, RepeatingEntry};

/// Repeating collections of an application, named by their form keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    EducationHistory,
    WorkHistory,
    TrainingCourses,
    Guarantors,
    FamilyMembers,
}

impl Collection {
    pub const fn ordered() -> [Collection; 5] {
        [
            Collection::EducationHistory,
            Collection::WorkHistory,
            Collection::TrainingCourses,
            Collection::Guarantors,
            Collection::FamilyMembers,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Collection::EducationHistory => "educationHistory",
            Collection::WorkHistory => "workHistory",
            Collection::TrainingCourses => "trainingCourses",
            Collection::Guarantors => "guarantors",
            Collection::FamilyMembers => "familyMembers",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Collection {
    type Err = FormEditError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Collection::ordered()
            .into_iter()
            .find(|collection| collection.key() == value)
            .ok_or_else(|| FormEditError::UnknownCollection(value.to_string()))
    }
}

/// Errors raised while editing a draft. The record is left untouched whenever one is returned.
#[derive(Debug, thiserror::Error)]
pub enum FormEditError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("'{0}' is a repeating collection; edit it through its entries")]
    CollectionField(String),
    #[error("unknown flag '{flag}' in group '{group}'")]
    UnknownFlag { group: String, flag: String },
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),
    #[error("no entry '{id}' in {collection}")]
    EntryNotFound { collection: Collection, id: EntryId },
    #[error("entry identifiers cannot be edited")]
    ImmutableId,
    #[error("invalid value for '{field}': {source}")]
    InvalidValue {
        field: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("record encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// In-memory holder for one applicant record while it is being filled in.
///
/// Scalar fields and flags are addressed by their form keys (`maritalStatus`,
/// `jobTypes.phoneSales`), repeating entries by collection and [`EntryId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    record: ApplicantRecord,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: ApplicantRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &ApplicantRecord {
        &self.record
    }

    pub fn into_record(self) -> ApplicantRecord {
        self.record
    }

    /// Replace a single scalar field, e.g. `("maritalStatus", "married")`.
    pub fn set_field(&mut self, field: &str, value: Value) -> Result<(), FormEditError> {
        let mut document = self.encode()?;
        let slot = document
            .get_mut(field)
            .ok_or_else(|| FormEditError::UnknownField(field.to_string()))?;
        if slot.is_array() {
            return Err(FormEditError::CollectionField(field.to_string()));
        }
        if slot.is_object() {
            return Err(FormEditError::InvalidValue {
                field: field.to_string(),
                source: serde::de::Error::custom("flag groups are edited one flag at a time"),
            });
        }
        *slot = value;
        self.record = decode(document, field)?;
        Ok(())
    }

    /// Toggle one flag of a flag group, e.g. `("jobTypes", "phoneSales", true)`.
    pub fn set_flag(&mut self, group: &str, flag: &str, enabled: bool) -> Result<(), FormEditError> {
        let unknown = || FormEditError::UnknownFlag {
            group: group.to_string(),
            flag: flag.to_string(),
        };

        let mut document = self.encode()?;
        let slot = document
            .get_mut(group)
            .and_then(Value::as_object_mut)
            .and_then(|flags| flags.get_mut(flag))
            .filter(|slot| slot.is_boolean())
            .ok_or_else(unknown)?;
        *slot = Value::Bool(enabled);
        self.record = decode(document, group)?;
        Ok(())
    }

    /// Append a blank entry and return its freshly generated identifier.
    pub fn add_entry(&mut self, collection: Collection) -> EntryId {
        match collection {
            Collection::EducationHistory => push_blank(&mut self.record.education_history),
            Collection::WorkHistory => push_blank(&mut self.record.work_history),
            Collection::TrainingCourses => push_blank(&mut self.record.training_courses),
            Collection::Guarantors => push_blank(&mut self.record.guarantors),
            Collection::FamilyMembers => push_blank(&mut self.record.family_members),
        }
    }

    pub fn update_entry(
        &mut self,
        collection: Collection,
        id: &EntryId,
        field: &str,
        value: Value,
    ) -> Result<(), FormEditError> {
        match collection {
            Collection::EducationHistory => {
                patch_entry(&mut self.record.education_history, collection, id, field, value)
            }
            Collection::WorkHistory => {
                patch_entry(&mut self.record.work_history, collection, id, field, value)
            }
            Collection::TrainingCourses => {
                patch_entry(&mut self.record.training_courses, collection, id, field, value)
            }
            Collection::Guarantors => {
                patch_entry(&mut self.record.guarantors, collection, id, field, value)
            }
            Collection::FamilyMembers => {
                patch_entry(&mut self.record.family_members, collection, id, field, value)
            }
        }
    }

    pub fn remove_entry(&mut self, collection: Collection, id: &EntryId) -> Result<(), FormEditError> {
        let removed = match collection {
            Collection::EducationHistory => remove_by_id(&mut self.record.education_history, id),
            Collection::WorkHistory => remove_by_id(&mut self.record.work_history, id),
            Collection::TrainingCourses => remove_by_id(&mut self.record.training_courses, id),
            Collection::Guarantors => remove_by_id(&mut self.record.guarantors, id),
            Collection::FamilyMembers => remove_by_id(&mut self.record.family_members, id),
        };

        if removed {
            Ok(())
        } else {
            Err(FormEditError::EntryNotFound {
                collection,
                id: id.clone(),
            })
        }
    }

    pub fn entry_ids(&self, collection: Collection) -> Vec<EntryId> {
        match collection {
            Collection::EducationHistory => ids_of(&self.record.education_history),
            Collection::WorkHistory => ids_of(&self.record.work_history),
            Collection::TrainingCourses => ids_of(&self.record.training_courses),
            Collection::Guarantors => ids_of(&self.record.guarantors),
            Collection::FamilyMembers => ids_of(&self.record.family_members),
        }
    }

    fn encode(&self) -> Result<Map<String, Value>, FormEditError> {
        match serde_json::to_value(&self.record)? {
            Value::Object(map) => Ok(map),
            _ => Err(FormEditError::Encoding(serde::ser::Error::custom(
                "applicant record did not encode as an object",
            ))),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    document: Map<String, Value>,
    field: &str,
) -> Result<T, FormEditError> {
    serde_json::from_value(Value::Object(document)).map_err(|source| FormEditError::InvalidValue {
        field: field.to_string(),
        source,
    })
}

fn push_blank<T: RepeatingEntry>(entries: &mut Vec<T>) -> EntryId {
    let id = loop {
        let candidate = EntryId::generate();
        if !entries.iter().any(|entry| entry.id() == &candidate) {
            break candidate;
        }
    };
    entries.push(T::blank(id.clone()));
    id
}

fn patch_entry<T: RepeatingEntry>(
    entries: &mut [T],
    collection: Collection,
    id: &EntryId,
    field: &str,
    value: Value,
) -> Result<(), FormEditError> {
    if field == "id" {
        return Err(FormEditError::ImmutableId);
    }

    let entry = entries
        .iter_mut()
        .find(|entry| entry.id() == id)
        .ok_or_else(|| FormEditError::EntryNotFound {
            collection,
            id: id.clone(),
        })?;

    let mut document = match serde_json::to_value(&*entry)? {
        Value::Object(map) => map,
        _ => {
            return Err(FormEditError::Encoding(serde::ser::Error::custom(
                "entry did not encode as an object",
            )))
        }
    };
    let slot = document
        .get_mut(field)
        .ok_or_else(|| FormEditError::UnknownField(format!("{collection}.{field}")))?;
    *slot = value;
    *entry = decode(document, field)?;
    Ok(())
}

fn remove_by_id<T: RepeatingEntry>(entries: &mut Vec<T>, id: &EntryId) -> bool {
    match entries.iter().position(|entry| entry.id() == id) {
        Some(index) => {
            entries.remove(index);
            true
        }
        None => false,
    }
}

fn ids_of<T: RepeatingEntry>(entries: &[T]) -> Vec<EntryId> {
    entries.iter().map(|entry| entry.id().clone()).collect()
}
