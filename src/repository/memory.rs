use crate::domain::{NewPerson, Person};
use crate::error::{RegistryError, Result};
use crate::repository::PersonRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Insertion-ordered in-memory store
#[derive(Default)]
pub struct InMemoryPersonRepository {
    people: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn insert_person(&self, id: Uuid, person: NewPerson) -> Result<u64> {
        let mut people = self.people.write().await;
        if people.iter().any(|p| p.id == id) {
            return Err(RegistryError::Storage(format!("person {} already exists", id)));
        }
        people.push(Person::new(id, person));
        tracing::debug!(%id, "Inserted person");
        Ok(1)
    }

    async fn select_all_people(&self) -> Result<Vec<Person>> {
        Ok(self.people.read().await.clone())
    }

    async fn select_person_by_id(&self, id: Uuid) -> Result<Option<Person>> {
        Ok(self.people.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_person_by_id(&self, id: Uuid) -> Result<u64> {
        let mut people = self.people.write().await;
        let before = people.len();
        people.retain(|p| p.id != id);
        let removed = (before - people.len()) as u64;
        tracing::debug!(%id, removed, "Deleted person");
        Ok(removed)
    }

    async fn update_person_by_id(&self, id: Uuid, person: NewPerson) -> Result<u64> {
        let mut people = self.people.write().await;
        let updated = match people.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = Person::new(id, person);
                1
            }
            None => 0,
        };
        tracing::debug!(%id, updated, "Updated person");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_select_all_keeps_insertion_order() {
        let repo = InMemoryPersonRepository::new();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        repo.insert_person(a, NewPerson::new("Alice")).await.unwrap();
        repo.insert_person(b, NewPerson::new("Bob")).await.unwrap();

        let people = repo.select_all_people().await.unwrap();
        let ids: Vec<Uuid> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let repo = InMemoryPersonRepository::new();
        let id = Uuid::new_v4();
        repo.insert_person(id, NewPerson::new("Alice")).await.unwrap();

        let err = repo.insert_person(id, NewPerson::new("Eve")).await.unwrap_err();
        assert!(matches!(err, RegistryError::Storage(_)));
        assert_eq!(repo.select_all_people().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_record_and_keeps_id() {
        let repo = InMemoryPersonRepository::new();
        let id = Uuid::new_v4();
        repo.insert_person(id, NewPerson::new("Alice")).await.unwrap();

        assert_eq!(repo.update_person_by_id(id, NewPerson::new("Alicia")).await.unwrap(), 1);
        let person = repo.select_person_by_id(id).await.unwrap().unwrap();
        assert_eq!(person, Person { id, name: "Alicia".to_string() });
    }

    #[tokio::test]
    async fn test_missing_id_reports_zero() {
        let repo = InMemoryPersonRepository::new();
        let id = Uuid::new_v4();

        assert!(repo.select_person_by_id(id).await.unwrap().is_none());
        assert_eq!(repo.delete_person_by_id(id).await.unwrap(), 0);
        assert_eq!(repo.update_person_by_id(id, NewPerson::new("Nobody")).await.unwrap(), 0);
    }
}
