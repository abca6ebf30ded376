//! The service layer the controller delegates to.

use crate::domain::{NewPerson, Person};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

mod person_service;

pub use person_service::PersonServiceImpl;

/// Business operations over person records
///
/// Absence is never an error: lookups return `None` and mutations return the
/// number of affected records (0 or 1).
#[async_trait]
pub trait PersonService: Send + Sync {
    /// Stores a new person under a freshly generated identifier.
    async fn add_person(&self, person: NewPerson) -> Result<()>;

    async fn get_all_persons(&self) -> Result<Vec<Person>>;

    async fn get_person_by_id(&self, id: Uuid) -> Result<Option<Person>>;

    async fn delete_person(&self, id: Uuid) -> Result<u64>;

    /// Replaces every attribute of the matching person, keeping its id.
    async fn update_person(&self, id: Uuid, person: NewPerson) -> Result<u64>;
}
