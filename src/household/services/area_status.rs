//! Service layer for area status transitions.

use super::{ServiceError, ServiceResult, resolve_person};
use crate::household::{
    domain::{Area, AreaId, Chore, StatusTransition},
    ports::{RecordKind, RecordStore},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Area status transition orchestration service.
#[derive(Clone)]
pub struct AreaStatusService<R, C>
where
    R: RecordStore,
    C: Clock + Send + Sync,
{
    store: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AreaStatusService<R, C>
where
    R: RecordStore,
    C: Clock + Send + Sync,
{
    /// Creates a new area status service.
    #[must_use]
    pub const fn new(store: Arc<R>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Retrieves an area by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the area does not exist.
    pub async fn area(&self, area_id: AreaId) -> ServiceResult<Area> {
        self.store.area(area_id).await?.ok_or(ServiceError::NotFound {
            kind: RecordKind::Area,
            id: area_id.into_inner(),
        })
    }

    /// Applies a requested status to an area.
    ///
    /// An unknown status or the area's current status is a no-op returning
    /// `0`. A distinct match updates the area and, when the matched entry
    /// carries a chore seed, instantiates that chore for the person the
    /// seed names before the area itself is persisted. Returns `1` when the
    /// transition fired.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the area does not exist and
    /// [`ServiceError::Domain`] when the seed's person cannot be resolved.
    pub async fn apply_status(&self, area_id: AreaId, requested: &str) -> ServiceResult<u64> {
        let mut area = self.area(area_id).await?;
        let now = self.clock.utc();

        let StatusTransition::Applied { chore: chore_seed } = area.apply_status(requested, now)
        else {
            debug!(area_id = %area_id, requested, "area status unchanged");
            return Ok(0);
        };

        if let Some(seed) = chore_seed {
            let person_id = resolve_person(&*self.store, seed.person_id, seed.person.as_deref())
                .await?;
            let chore = Chore::from_seed(seed, person_id, now)?;
            self.store.create_chore(&chore).await?;
            info!(
                area_id = %area_id,
                chore_id = %chore.id(),
                status = requested,
                "chore spawned by area status transition"
            );
        }

        self.store.update_area(&area).await?;
        info!(area_id = %area_id, status = requested, "area status applied");
        Ok(1)
    }
}
