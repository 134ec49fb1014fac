//! `PostgreSQL` record store implementation.
//!
//! Updates follow the read-compare-write pattern: the stored row is loaded
//! and compared against the incoming one so that the returned change count
//! reflects actual payload differences, not merely matched rows.

use super::{
    models::{ActRow, AreaRow, ChoreRow, PersonRow, TemplateRow},
    schema::{acts, areas, chores, persons, templates},
};
use crate::household::{
    domain::{Act, ActId, Area, AreaId, Chore, ChoreId, Person, PersonId, Template, TemplateId},
    ports::{RecordKind, RecordStore, RecordStoreError, RecordStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by the record store.
pub type RecordPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed record store.
#[derive(Debug, Clone)]
pub struct PostgresRecordStore {
    pool: RecordPgPool,
}

impl PostgresRecordStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RecordPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RecordStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RecordStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RecordStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RecordStoreError::persistence)?
    }
}

fn insert_error(err: DieselError, kind: RecordKind, id: Uuid) -> RecordStoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RecordStoreError::Duplicate { kind, id }
        }
        _ => RecordStoreError::persistence(err),
    }
}

fn count(rows: usize) -> RecordStoreResult<u64> {
    u64::try_from(rows).map_err(RecordStoreError::persistence)
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn create_person(&self, person: &Person) -> RecordStoreResult<()> {
        let row = PersonRow::from_domain(person);
        let id = person.id().into_inner();
        self.run_blocking(move |connection| {
            diesel::insert_into(persons::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| insert_error(err, RecordKind::Person, id))?;
            Ok(())
        })
        .await
    }

    async fn person(&self, id: PersonId) -> RecordStoreResult<Option<Person>> {
        self.run_blocking(move |connection| {
            let row = persons::table
                .find(id.into_inner())
                .select(PersonRow::as_select())
                .first::<PersonRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?;
            row.map(PersonRow::into_domain).transpose()
        })
        .await
    }

    async fn person_by_name(&self, name: &str) -> RecordStoreResult<Option<Person>> {
        let lookup = name.to_owned();
        self.run_blocking(move |connection| {
            let row = persons::table
                .filter(persons::name.eq(lookup))
                .select(PersonRow::as_select())
                .first::<PersonRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?;
            row.map(PersonRow::into_domain).transpose()
        })
        .await
    }

    async fn persons(&self) -> RecordStoreResult<Vec<Person>> {
        self.run_blocking(move |connection| {
            let rows = persons::table
                .select(PersonRow::as_select())
                .load::<PersonRow>(connection)
                .map_err(RecordStoreError::persistence)?;
            rows.into_iter().map(PersonRow::into_domain).collect()
        })
        .await
    }

    async fn update_person(&self, person: &Person) -> RecordStoreResult<u64> {
        let row = PersonRow::from_domain(person);
        let id = person.id().into_inner();
        self.run_blocking(move |connection| {
            let stored = persons::table
                .find(id)
                .select(PersonRow::as_select())
                .first::<PersonRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?
                .ok_or(RecordStoreError::NotFound {
                    kind: RecordKind::Person,
                    id,
                })?;
            if stored == row {
                return Ok(0);
            }
            diesel::update(persons::table.find(id))
                .set(&row)
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            Ok(1)
        })
        .await
    }

    async fn delete_person(&self, id: PersonId) -> RecordStoreResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(persons::table.find(id.into_inner()))
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            count(removed)
        })
        .await
    }

    async fn create_area(&self, area: &Area) -> RecordStoreResult<()> {
        let row = AreaRow::from_domain(area)?;
        let id = area.id().into_inner();
        self.run_blocking(move |connection| {
            diesel::insert_into(areas::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| insert_error(err, RecordKind::Area, id))?;
            Ok(())
        })
        .await
    }

    async fn area(&self, id: AreaId) -> RecordStoreResult<Option<Area>> {
        self.run_blocking(move |connection| {
            let row = areas::table
                .find(id.into_inner())
                .select(AreaRow::as_select())
                .first::<AreaRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?;
            row.map(AreaRow::into_domain).transpose()
        })
        .await
    }

    async fn areas(&self) -> RecordStoreResult<Vec<Area>> {
        self.run_blocking(move |connection| {
            let rows = areas::table
                .select(AreaRow::as_select())
                .load::<AreaRow>(connection)
                .map_err(RecordStoreError::persistence)?;
            rows.into_iter().map(AreaRow::into_domain).collect()
        })
        .await
    }

    async fn update_area(&self, area: &Area) -> RecordStoreResult<u64> {
        let row = AreaRow::from_domain(area)?;
        let id = area.id().into_inner();
        self.run_blocking(move |connection| {
            let stored = areas::table
                .find(id)
                .select(AreaRow::as_select())
                .first::<AreaRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?
                .ok_or(RecordStoreError::NotFound {
                    kind: RecordKind::Area,
                    id,
                })?;
            if stored == row {
                return Ok(0);
            }
            diesel::update(areas::table.find(id))
                .set(&row)
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            Ok(1)
        })
        .await
    }

    async fn delete_area(&self, id: AreaId) -> RecordStoreResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(areas::table.find(id.into_inner()))
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            count(removed)
        })
        .await
    }

    async fn create_template(&self, template: &Template) -> RecordStoreResult<()> {
        let row = TemplateRow::from_domain(template);
        let id = template.id().into_inner();
        self.run_blocking(move |connection| {
            diesel::insert_into(templates::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| insert_error(err, RecordKind::Template, id))?;
            Ok(())
        })
        .await
    }

    async fn template(&self, id: TemplateId) -> RecordStoreResult<Option<Template>> {
        self.run_blocking(move |connection| {
            let row = templates::table
                .find(id.into_inner())
                .select(TemplateRow::as_select())
                .first::<TemplateRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?;
            row.map(TemplateRow::into_domain).transpose()
        })
        .await
    }

    async fn templates(&self) -> RecordStoreResult<Vec<Template>> {
        self.run_blocking(move |connection| {
            let rows = templates::table
                .select(TemplateRow::as_select())
                .load::<TemplateRow>(connection)
                .map_err(RecordStoreError::persistence)?;
            rows.into_iter().map(TemplateRow::into_domain).collect()
        })
        .await
    }

    async fn update_template(&self, template: &Template) -> RecordStoreResult<u64> {
        let row = TemplateRow::from_domain(template);
        let id = template.id().into_inner();
        self.run_blocking(move |connection| {
            let stored = templates::table
                .find(id)
                .select(TemplateRow::as_select())
                .first::<TemplateRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?
                .ok_or(RecordStoreError::NotFound {
                    kind: RecordKind::Template,
                    id,
                })?;
            if stored == row {
                return Ok(0);
            }
            diesel::update(templates::table.find(id))
                .set(&row)
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            Ok(1)
        })
        .await
    }

    async fn delete_template(&self, id: TemplateId) -> RecordStoreResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(templates::table.find(id.into_inner()))
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            count(removed)
        })
        .await
    }

    async fn create_chore(&self, chore: &Chore) -> RecordStoreResult<()> {
        let row = ChoreRow::from_domain(chore)?;
        let id = chore.id().into_inner();
        self.run_blocking(move |connection| {
            diesel::insert_into(chores::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| insert_error(err, RecordKind::Chore, id))?;
            Ok(())
        })
        .await
    }

    async fn chore(&self, id: ChoreId) -> RecordStoreResult<Option<Chore>> {
        self.run_blocking(move |connection| {
            let row = chores::table
                .find(id.into_inner())
                .select(ChoreRow::as_select())
                .first::<ChoreRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?;
            row.map(ChoreRow::into_domain).transpose()
        })
        .await
    }

    async fn chores(&self) -> RecordStoreResult<Vec<Chore>> {
        self.run_blocking(move |connection| {
            let rows = chores::table
                .select(ChoreRow::as_select())
                .load::<ChoreRow>(connection)
                .map_err(RecordStoreError::persistence)?;
            rows.into_iter().map(ChoreRow::into_domain).collect()
        })
        .await
    }

    async fn update_chore(&self, chore: &Chore) -> RecordStoreResult<u64> {
        let row = ChoreRow::from_domain(chore)?;
        let id = chore.id().into_inner();
        self.run_blocking(move |connection| {
            let stored = chores::table
                .find(id)
                .select(ChoreRow::as_select())
                .first::<ChoreRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?
                .ok_or(RecordStoreError::NotFound {
                    kind: RecordKind::Chore,
                    id,
                })?;
            if stored == row {
                return Ok(0);
            }
            diesel::update(chores::table.find(id))
                .set(&row)
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            Ok(1)
        })
        .await
    }

    async fn delete_chore(&self, id: ChoreId) -> RecordStoreResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(chores::table.find(id.into_inner()))
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            count(removed)
        })
        .await
    }

    async fn create_act(&self, act: &Act) -> RecordStoreResult<()> {
        let row = ActRow::from_domain(act)?;
        let id = act.id().into_inner();
        self.run_blocking(move |connection| {
            diesel::insert_into(acts::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| insert_error(err, RecordKind::Act, id))?;
            Ok(())
        })
        .await
    }

    async fn act(&self, id: ActId) -> RecordStoreResult<Option<Act>> {
        self.run_blocking(move |connection| {
            let row = acts::table
                .find(id.into_inner())
                .select(ActRow::as_select())
                .first::<ActRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?;
            row.map(ActRow::into_domain).transpose()
        })
        .await
    }

    async fn acts(&self) -> RecordStoreResult<Vec<Act>> {
        self.run_blocking(move |connection| {
            let rows = acts::table
                .select(ActRow::as_select())
                .load::<ActRow>(connection)
                .map_err(RecordStoreError::persistence)?;
            rows.into_iter().map(ActRow::into_domain).collect()
        })
        .await
    }

    async fn update_act(&self, act: &Act) -> RecordStoreResult<u64> {
        let row = ActRow::from_domain(act)?;
        let id = act.id().into_inner();
        self.run_blocking(move |connection| {
            let stored = acts::table
                .find(id)
                .select(ActRow::as_select())
                .first::<ActRow>(connection)
                .optional()
                .map_err(RecordStoreError::persistence)?
                .ok_or(RecordStoreError::NotFound {
                    kind: RecordKind::Act,
                    id,
                })?;
            if stored == row {
                return Ok(0);
            }
            diesel::update(acts::table.find(id))
                .set(&row)
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            Ok(1)
        })
        .await
    }

    async fn delete_act(&self, id: ActId) -> RecordStoreResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(acts::table.find(id.into_inner()))
                .execute(connection)
                .map_err(RecordStoreError::persistence)?;
            count(removed)
        })
        .await
    }
}
