//! Service layer for chore creation and lifecycle actions.

use super::{ServiceError, ServiceResult, resolve_person};
use crate::household::{
    domain::{Chore, ChoreAction, ChoreId, ChoreSeed, TaskAction, TemplateId},
    ports::{RecordKind, RecordStore},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Chore creation and lifecycle orchestration service.
#[derive(Clone)]
pub struct ChoreLifecycleService<R, C>
where
    R: RecordStore,
    C: Clock + Send + Sync,
{
    store: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ChoreLifecycleService<R, C>
where
    R: RecordStore,
    C: Clock + Send + Sync,
{
    /// Creates a new chore lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<R>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a chore from a template fragment, explicit fields, or both.
    ///
    /// With a template present the merged seed goes through instantiation
    /// (language default, timestamp stamping, task expansion); explicit
    /// fields alone are accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when neither input is supplied, the owning
    /// person cannot be resolved, or persistence rejects the record.
    pub async fn create(
        &self,
        template: Option<ChoreSeed>,
        fields: Option<ChoreSeed>,
    ) -> ServiceResult<Chore> {
        let from_template = template.is_some();
        let seed = ChoreSeed::merged(template, fields)?;
        let person_id = resolve_person(&*self.store, seed.person_id, seed.person.as_deref()).await?;
        let now = self.clock.utc();

        let chore = if from_template {
            Chore::from_seed(seed, person_id, now)?
        } else {
            Chore::from_fields(seed, person_id, now)?
        };
        self.store.create_chore(&chore).await?;
        info!(chore_id = %chore.id(), name = chore.name(), "chore created");
        Ok(chore)
    }

    /// Creates a chore from a stored template, merged with optional
    /// explicit fields.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the template does not exist
    /// and [`ServiceError::Domain`] when it is not a chore template.
    pub async fn create_from_template(
        &self,
        template_id: TemplateId,
        fields: Option<ChoreSeed>,
    ) -> ServiceResult<Chore> {
        let template =
            self.store
                .template(template_id)
                .await?
                .ok_or(ServiceError::NotFound {
                    kind: RecordKind::Template,
                    id: template_id.into_inner(),
                })?;
        self.create(Some(template.chore_seed()?), fields).await
    }

    /// Retrieves a chore by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the chore does not exist.
    pub async fn chore(&self, chore_id: ChoreId) -> ServiceResult<Chore> {
        self.store
            .chore(chore_id)
            .await?
            .ok_or(ServiceError::NotFound {
                kind: RecordKind::Chore,
                id: chore_id.into_inner(),
            })
    }

    /// Applies a chore-level lifecycle action and persists the result.
    ///
    /// The returned count is the store's equality-based change count: `1`
    /// when the action changed the record, `0` when the requested state
    /// already held.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the chore does not exist.
    pub async fn apply(&self, chore_id: ChoreId, action: ChoreAction) -> ServiceResult<u64> {
        let mut chore = self.chore(chore_id).await?;
        let now = self.clock.utc();

        match action {
            ChoreAction::Next => chore.next(now),
            ChoreAction::Pause => chore.pause(now),
            ChoreAction::Unpause => chore.unpause(now),
            ChoreAction::Skip => chore.skip(now),
            ChoreAction::Unskip => chore.unskip(now),
            ChoreAction::Complete => chore.complete(now),
            ChoreAction::Incomplete => chore.incomplete(now),
        };

        let updated = self.store.update_chore(&chore).await?;
        debug!(chore_id = %chore_id, action = action.as_str(), updated, "chore action applied");
        Ok(updated)
    }

    /// Applies a task-level lifecycle action and persists the result.
    ///
    /// Bubbling runs inside the domain operation, so a task transition that
    /// ends or reopens the final task also adjusts the chore's own `end`
    /// before the single persistence call.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the chore does not exist and
    /// [`ServiceError::Domain`] for an out-of-range task index.
    pub async fn task_apply(
        &self,
        chore_id: ChoreId,
        task_index: usize,
        action: TaskAction,
    ) -> ServiceResult<u64> {
        let mut chore = self.chore(chore_id).await?;
        let now = self.clock.utc();

        match action {
            TaskAction::Pause => chore.task_pause(task_index, now)?,
            TaskAction::Unpause => chore.task_unpause(task_index, now)?,
            TaskAction::Skip => chore.task_skip(task_index, now)?,
            TaskAction::Unskip => chore.task_unskip(task_index, now)?,
            TaskAction::Complete => chore.task_complete(task_index, now)?,
            TaskAction::Incomplete => chore.task_incomplete(task_index, now)?,
        };

        let updated = self.store.update_chore(&chore).await?;
        debug!(
            chore_id = %chore_id,
            task_index,
            action = action.as_str(),
            updated,
            "task action applied"
        );
        Ok(updated)
    }
}
