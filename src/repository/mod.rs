//! Storage port for person records.

use crate::domain::{NewPerson, Person};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

mod memory;

pub use memory::InMemoryPersonRepository;

/// Persistence operations backing the default `PersonService`
///
/// Mutating operations report the number of affected records instead of
/// failing when the id is unknown.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn insert_person(&self, id: Uuid, person: NewPerson) -> Result<u64>;
    async fn select_all_people(&self) -> Result<Vec<Person>>;
    async fn select_person_by_id(&self, id: Uuid) -> Result<Option<Person>>;
    async fn delete_person_by_id(&self, id: Uuid) -> Result<u64>;
    async fn update_person_by_id(&self, id: Uuid, person: NewPerson) -> Result<u64>;
}
