use crate::di::Injectable;
use crate::domain::{NewPerson, Person};
use crate::error::Result;
use crate::repository::PersonRepository;
use crate::service::PersonService;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Injectable)]
pub struct PersonServiceImpl {
    repository: Arc<dyn PersonRepository>,
}

impl PersonServiceImpl {
    pub fn new(repository: Arc<dyn PersonRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PersonService for PersonServiceImpl {
    async fn add_person(&self, person: NewPerson) -> Result<()> {
        let id = Uuid::new_v4();
        self.repository.insert_person(id, person).await?;
        tracing::debug!(%id, "Person added");
        Ok(())
    }

    async fn get_all_persons(&self) -> Result<Vec<Person>> {
        self.repository.select_all_people().await
    }

    async fn get_person_by_id(&self, id: Uuid) -> Result<Option<Person>> {
        self.repository.select_person_by_id(id).await
    }

    async fn delete_person(&self, id: Uuid) -> Result<u64> {
        self.repository.delete_person_by_id(id).await
    }

    async fn update_person(&self, id: Uuid, person: NewPerson) -> Result<u64> {
        self.repository.update_person_by_id(id, person).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryPersonRepository;

    fn service() -> PersonServiceImpl {
        PersonServiceImpl::new(Arc::new(InMemoryPersonRepository::new()))
    }

    #[tokio::test]
    async fn test_add_assigns_distinct_ids() {
        let service = service();
        service.add_person(NewPerson::new("Alice")).await.unwrap();
        service.add_person(NewPerson::new("Alice")).await.unwrap();

        let people = service.get_all_persons().await.unwrap();
        assert_eq!(people.len(), 2);
        assert_ne!(people[0].id, people[1].id);
    }

    #[tokio::test]
    async fn test_round_trip_then_delete() {
        let service = service();
        service.add_person(NewPerson::new("Alice")).await.unwrap();
        let id = service.get_all_persons().await.unwrap()[0].id;

        let found = service.get_person_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");

        assert_eq!(service.delete_person(id).await.unwrap(), 1);
        assert!(service.get_person_by_id(id).await.unwrap().is_none());
        assert_eq!(service.delete_person(id).await.unwrap(), 0);
    }
}
