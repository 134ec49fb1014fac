//! Service layer for act creation.

use super::{ServiceError, ServiceResult, resolve_person};
use crate::household::{
    domain::{Act, ActSeed, Chore, TemplateId},
    ports::{RecordKind, RecordStore},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Act creation orchestration service.
#[derive(Clone)]
pub struct ActService<R, C>
where
    R: RecordStore,
    C: Clock + Send + Sync,
{
    store: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ActService<R, C>
where
    R: RecordStore,
    C: Clock + Send + Sync,
{
    /// Creates a new act service.
    #[must_use]
    pub const fn new(store: Arc<R>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates an act from a template fragment, explicit fields, or both.
    ///
    /// When the merged payload carries a `chore` seed, a companion chore is
    /// instantiated for the same person and persisted before the act. Both
    /// records share a single clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when neither input is supplied, the owning
    /// person cannot be resolved, or persistence rejects either record.
    pub async fn create(
        &self,
        template: Option<ActSeed>,
        fields: Option<ActSeed>,
    ) -> ServiceResult<Act> {
        let seed = ActSeed::merged(template, fields)?;
        let person_id = resolve_person(&*self.store, seed.person_id, seed.person.as_deref()).await?;
        let now = self.clock.utc();

        let act = Act::from_seed(seed, person_id, now)?;
        if let Some(chore_seed) = act.data().chore.clone() {
            let chore = Chore::from_seed(chore_seed, person_id, now)?;
            self.store.create_chore(&chore).await?;
            info!(
                act_id = %act.id(),
                chore_id = %chore.id(),
                "companion chore created from act seed"
            );
        }
        self.store.create_act(&act).await?;
        info!(act_id = %act.id(), name = act.name(), "act created");
        Ok(act)
    }

    /// Creates an act from a stored template, merged with optional explicit
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the template does not exist
    /// and [`ServiceError::Domain`] when it is not an act template.
    pub async fn create_from_template(
        &self,
        template_id: TemplateId,
        fields: Option<ActSeed>,
    ) -> ServiceResult<Act> {
        let template =
            self.store
                .template(template_id)
                .await?
                .ok_or(ServiceError::NotFound {
                    kind: RecordKind::Template,
                    id: template_id.into_inner(),
                })?;
        self.create(Some(template.act_seed()?), fields).await
    }
}
