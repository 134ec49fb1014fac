//! Domain model for household chore and behaviour tracking.
//!
//! The domain covers the template instantiation engine, the task and chore
//! lifecycle state machines, and the area status transition engine, keeping
//! all infrastructure concerns outside of the domain boundary.

mod act;
mod action;
mod area;
mod chore;
mod error;
mod ids;
mod payload;
mod person;
mod seed;
mod template;

pub use act::Act;
pub use action::{ChoreAction, TaskAction};
pub use area::{Area, StatusTransition};
pub use chore::{Chore, DEFAULT_LANGUAGE, PersistedChore, STATUS_STARTED};
pub use error::{DomainError, ParseActionError, ParseTemplateKindError};
pub use ids::{ActId, AreaId, ChoreId, PersonId, TemplateId};
pub use payload::{ActData, AreaData, ChoreData, ExtraFields, StatusEntry, TaskRecord};
pub use person::Person;
pub use seed::{ActSeed, ChoreSeed};
pub use template::{Template, TemplateKind};
