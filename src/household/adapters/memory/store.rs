//! In-memory record store for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::household::{
    domain::{Act, ActId, Area, AreaId, Chore, ChoreId, Person, PersonId, Template, TemplateId},
    ports::{RecordKind, RecordStore, RecordStoreError, RecordStoreResult},
};

/// Thread-safe in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    persons: HashMap<PersonId, Person>,
    areas: HashMap<AreaId, Area>,
    templates: HashMap<TemplateId, Template>,
    chores: HashMap<ChoreId, Chore>,
    acts: HashMap<ActId, Act>,
}

impl InMemoryRecordStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RecordStoreResult<std::sync::RwLockReadGuard<'_, InMemoryState>> {
        self.state
            .read()
            .map_err(|err| RecordStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RecordStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryState>> {
        self.state
            .write()
            .map_err(|err| RecordStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

fn create_in<K, V>(
    map: &mut HashMap<K, V>,
    key: K,
    record: &V,
    kind: RecordKind,
    id: Uuid,
) -> RecordStoreResult<()>
where
    K: Eq + Hash,
    V: Clone,
{
    if map.contains_key(&key) {
        return Err(RecordStoreError::Duplicate { kind, id });
    }
    map.insert(key, record.clone());
    Ok(())
}

/// Replaces a stored record, counting the write only when the new record
/// differs from the stored one.
fn update_in<K, V>(
    map: &mut HashMap<K, V>,
    key: K,
    record: &V,
    kind: RecordKind,
    id: Uuid,
) -> RecordStoreResult<u64>
where
    K: Eq + Hash,
    V: Clone + PartialEq,
{
    let stored = map.get(&key).ok_or(RecordStoreError::NotFound { kind, id })?;
    if stored == record {
        return Ok(0);
    }
    map.insert(key, record.clone());
    Ok(1)
}

fn delete_in<K, V>(map: &mut HashMap<K, V>, key: &K) -> u64
where
    K: Eq + Hash,
{
    u64::from(map.remove(key).is_some())
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create_person(&self, person: &Person) -> RecordStoreResult<()> {
        let mut state = self.write()?;
        create_in(
            &mut state.persons,
            person.id(),
            person,
            RecordKind::Person,
            person.id().into_inner(),
        )
    }

    async fn person(&self, id: PersonId) -> RecordStoreResult<Option<Person>> {
        Ok(self.read()?.persons.get(&id).cloned())
    }

    async fn person_by_name(&self, name: &str) -> RecordStoreResult<Option<Person>> {
        let state = self.read()?;
        Ok(state
            .persons
            .values()
            .find(|person| person.name() == name)
            .cloned())
    }

    async fn persons(&self) -> RecordStoreResult<Vec<Person>> {
        Ok(self.read()?.persons.values().cloned().collect())
    }

    async fn update_person(&self, person: &Person) -> RecordStoreResult<u64> {
        let mut state = self.write()?;
        update_in(
            &mut state.persons,
            person.id(),
            person,
            RecordKind::Person,
            person.id().into_inner(),
        )
    }

    async fn delete_person(&self, id: PersonId) -> RecordStoreResult<u64> {
        Ok(delete_in(&mut self.write()?.persons, &id))
    }

    async fn create_area(&self, area: &Area) -> RecordStoreResult<()> {
        let mut state = self.write()?;
        create_in(
            &mut state.areas,
            area.id(),
            area,
            RecordKind::Area,
            area.id().into_inner(),
        )
    }

    async fn area(&self, id: AreaId) -> RecordStoreResult<Option<Area>> {
        Ok(self.read()?.areas.get(&id).cloned())
    }

    async fn areas(&self) -> RecordStoreResult<Vec<Area>> {
        Ok(self.read()?.areas.values().cloned().collect())
    }

    async fn update_area(&self, area: &Area) -> RecordStoreResult<u64> {
        let mut state = self.write()?;
        update_in(
            &mut state.areas,
            area.id(),
            area,
            RecordKind::Area,
            area.id().into_inner(),
        )
    }

    async fn delete_area(&self, id: AreaId) -> RecordStoreResult<u64> {
        Ok(delete_in(&mut self.write()?.areas, &id))
    }

    async fn create_template(&self, template: &Template) -> RecordStoreResult<()> {
        let mut state = self.write()?;
        create_in(
            &mut state.templates,
            template.id(),
            template,
            RecordKind::Template,
            template.id().into_inner(),
        )
    }

    async fn template(&self, id: TemplateId) -> RecordStoreResult<Option<Template>> {
        Ok(self.read()?.templates.get(&id).cloned())
    }

    async fn templates(&self) -> RecordStoreResult<Vec<Template>> {
        Ok(self.read()?.templates.values().cloned().collect())
    }

    async fn update_template(&self, template: &Template) -> RecordStoreResult<u64> {
        let mut state = self.write()?;
        update_in(
            &mut state.templates,
            template.id(),
            template,
            RecordKind::Template,
            template.id().into_inner(),
        )
    }

    async fn delete_template(&self, id: TemplateId) -> RecordStoreResult<u64> {
        Ok(delete_in(&mut self.write()?.templates, &id))
    }

    async fn create_chore(&self, chore: &Chore) -> RecordStoreResult<()> {
        let mut state = self.write()?;
        create_in(
            &mut state.chores,
            chore.id(),
            chore,
            RecordKind::Chore,
            chore.id().into_inner(),
        )
    }

    async fn chore(&self, id: ChoreId) -> RecordStoreResult<Option<Chore>> {
        Ok(self.read()?.chores.get(&id).cloned())
    }

    async fn chores(&self) -> RecordStoreResult<Vec<Chore>> {
        Ok(self.read()?.chores.values().cloned().collect())
    }

    async fn update_chore(&self, chore: &Chore) -> RecordStoreResult<u64> {
        let mut state = self.write()?;
        update_in(
            &mut state.chores,
            chore.id(),
            chore,
            RecordKind::Chore,
            chore.id().into_inner(),
        )
    }

    async fn delete_chore(&self, id: ChoreId) -> RecordStoreResult<u64> {
        Ok(delete_in(&mut self.write()?.chores, &id))
    }

    async fn create_act(&self, act: &Act) -> RecordStoreResult<()> {
        let mut state = self.write()?;
        create_in(
            &mut state.acts,
            act.id(),
            act,
            RecordKind::Act,
            act.id().into_inner(),
        )
    }

    async fn act(&self, id: ActId) -> RecordStoreResult<Option<Act>> {
        Ok(self.read()?.acts.get(&id).cloned())
    }

    async fn acts(&self) -> RecordStoreResult<Vec<Act>> {
        Ok(self.read()?.acts.values().cloned().collect())
    }

    async fn update_act(&self, act: &Act) -> RecordStoreResult<u64> {
        let mut state = self.write()?;
        update_in(
            &mut state.acts,
            act.id(),
            act,
            RecordKind::Act,
            act.id().into_inner(),
        )
    }

    async fn delete_act(&self, id: ActId) -> RecordStoreResult<u64> {
        Ok(delete_in(&mut self.write()?.acts, &id))
    }
}
