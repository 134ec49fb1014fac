//! Diesel row models for household record persistence.

use super::schema::{acts, areas, chores, persons, templates};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::household::{
    domain::{
        Act, ActId, Area, AreaId, Chore, ChoreId, PersistedChore, Person, PersonId, Template,
        TemplateId, TemplateKind,
    },
    ports::{RecordStoreError, RecordStoreResult},
};

/// Row model for person records.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct PersonRow {
    /// Person identifier.
    pub id: Uuid,
    /// Person name.
    pub name: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Opaque payload.
    pub data: Value,
}

impl PersonRow {
    /// Maps a domain person onto a row.
    #[must_use]
    pub fn from_domain(person: &Person) -> Self {
        Self {
            id: person.id().into_inner(),
            name: person.name().to_owned(),
            email: person.email().map(str::to_owned),
            data: Value::Object(person.data().clone()),
        }
    }

    /// Reconstructs the domain person from this row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the payload does not parse.
    pub fn into_domain(self) -> RecordStoreResult<Person> {
        let data = serde_json::from_value(self.data).map_err(RecordStoreError::persistence)?;
        Ok(Person::from_persisted(
            PersonId::from_uuid(self.id),
            self.name,
            self.email,
            data,
        ))
    }
}

/// Row model for area records.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = areas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct AreaRow {
    /// Area identifier.
    pub id: Uuid,
    /// Area name.
    pub name: String,
    /// Current status label.
    pub status: Option<String>,
    /// Latest transition timestamp.
    pub updated: DateTime<Utc>,
    /// Payload including the status table.
    pub data: Value,
}

impl AreaRow {
    /// Maps a domain area onto a row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the payload does not serialise.
    pub fn from_domain(area: &Area) -> RecordStoreResult<Self> {
        let data = serde_json::to_value(area.data()).map_err(RecordStoreError::persistence)?;
        Ok(Self {
            id: area.id().into_inner(),
            name: area.name().to_owned(),
            status: area.status().map(str::to_owned),
            updated: area.updated(),
            data,
        })
    }

    /// Reconstructs the domain area from this row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the payload does not parse.
    pub fn into_domain(self) -> RecordStoreResult<Area> {
        let data = serde_json::from_value(self.data).map_err(RecordStoreError::persistence)?;
        Ok(Area::from_persisted(
            AreaId::from_uuid(self.id),
            self.name,
            self.status,
            self.updated,
            data,
        ))
    }
}

/// Row model for template records.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = templates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct TemplateRow {
    /// Template identifier.
    pub id: Uuid,
    /// Template name.
    pub name: String,
    /// Kind of record the template seeds.
    pub kind: String,
    /// Opaque seed payload.
    pub data: Value,
}

impl TemplateRow {
    /// Maps a domain template onto a row.
    #[must_use]
    pub fn from_domain(template: &Template) -> Self {
        Self {
            id: template.id().into_inner(),
            name: template.name().to_owned(),
            kind: template.kind().as_str().to_owned(),
            data: template.data().clone(),
        }
    }

    /// Reconstructs the domain template from this row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the kind label does not parse.
    pub fn into_domain(self) -> RecordStoreResult<Template> {
        let kind =
            TemplateKind::try_from(self.kind.as_str()).map_err(RecordStoreError::persistence)?;
        Ok(Template::from_persisted(
            TemplateId::from_uuid(self.id),
            self.name,
            kind,
            self.data,
        ))
    }
}

/// Row model for chore records.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = chores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct ChoreRow {
    /// Chore identifier.
    pub id: Uuid,
    /// Owning person identifier.
    pub person_id: Uuid,
    /// Chore name.
    pub name: String,
    /// Status label.
    pub status: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Latest lifecycle timestamp.
    pub updated: DateTime<Utc>,
    /// Lifecycle payload including the task sequence.
    pub data: Value,
}

impl ChoreRow {
    /// Maps a domain chore onto a row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the payload does not serialise.
    pub fn from_domain(chore: &Chore) -> RecordStoreResult<Self> {
        let data = serde_json::to_value(chore.data()).map_err(RecordStoreError::persistence)?;
        Ok(Self {
            id: chore.id().into_inner(),
            person_id: chore.person_id().into_inner(),
            name: chore.name().to_owned(),
            status: chore.status().to_owned(),
            created: chore.created(),
            updated: chore.updated(),
            data,
        })
    }

    /// Reconstructs the domain chore from this row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the payload does not parse.
    pub fn into_domain(self) -> RecordStoreResult<Chore> {
        let data = serde_json::from_value(self.data).map_err(RecordStoreError::persistence)?;
        Ok(Chore::from_persisted(PersistedChore {
            id: ChoreId::from_uuid(self.id),
            person_id: PersonId::from_uuid(self.person_id),
            name: self.name,
            status: self.status,
            created: self.created,
            updated: self.updated,
            data,
        }))
    }
}

/// Row model for act records.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = acts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct ActRow {
    /// Act identifier.
    pub id: Uuid,
    /// Owning person identifier.
    pub person_id: Uuid,
    /// Act name.
    pub name: String,
    /// Free-form judgement label.
    pub value: Option<String>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Act payload.
    pub data: Value,
}

impl ActRow {
    /// Maps a domain act onto a row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the payload does not serialise.
    pub fn from_domain(act: &Act) -> RecordStoreResult<Self> {
        let data = serde_json::to_value(act.data()).map_err(RecordStoreError::persistence)?;
        Ok(Self {
            id: act.id().into_inner(),
            person_id: act.person_id().into_inner(),
            name: act.name().to_owned(),
            value: act.value().map(str::to_owned),
            created: act.created(),
            data,
        })
    }

    /// Reconstructs the domain act from this row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the payload does not parse.
    pub fn into_domain(self) -> RecordStoreResult<Act> {
        let data = serde_json::from_value(self.data).map_err(RecordStoreError::persistence)?;
        Ok(Act::from_persisted(
            ActId::from_uuid(self.id),
            PersonId::from_uuid(self.person_id),
            self.name,
            self.value,
            self.created,
            data,
        ))
    }
}
