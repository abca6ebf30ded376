use crate::common::OptionalJson;
use crate::di::Injectable;
use crate::domain::{NewPerson, Person, PersonRequest};
use crate::exception::HttpException;
use crate::pipe::Pipe;
use crate::pipe::builtins::{ParseUuidPipe, ValidationPipe};
use crate::service::PersonService;
use axum::{
    Json, Router,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};
use std::sync::Arc;
use uuid::Uuid;

type HandlerResult<T> = Result<T, HttpException>;
type IdParam = Result<Path<String>, PathRejection>;

#[derive(Injectable)]
pub struct PersonController {
    service: Arc<dyn PersonService>,
}

impl PersonController {
    pub fn new(service: Arc<dyn PersonService>) -> Self {
        Self { service }
    }

    pub fn base_path() -> &'static str {
        "/api/v1/person"
    }

    pub fn router<S>(controller: Arc<Self>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let add = {
            let controller = controller.clone();
            move |body: Result<Json<PersonRequest>, JsonRejection>| {
                let controller = controller.clone();
                async move { controller.add_person(body).await }
            }
        };
        let list = {
            let controller = controller.clone();
            move || {
                let controller = controller.clone();
                async move { controller.get_all_person().await }
            }
        };
        let get_one = {
            let controller = controller.clone();
            move |id: IdParam| {
                let controller = controller.clone();
                async move { controller.get_person_by_id(id).await }
            }
        };
        let delete = {
            let controller = controller.clone();
            move |id: IdParam| {
                let controller = controller.clone();
                async move { controller.delete_person(id).await }
            }
        };
        let update = {
            let controller = controller.clone();
            move |id: IdParam, body: Result<Json<PersonRequest>, JsonRejection>| {
                let controller = controller.clone();
                async move { controller.update_person(id, body).await }
            }
        };

        // the collection also answers with a trailing slash
        let base = Self::base_path();
        let collection = get(list).post(add);
        Router::new()
            .route(base, collection.clone())
            .route(&format!("{base}/"), collection)
            .route(
                &format!("{base}/{{id}}"),
                get(get_one).delete(delete).put(update),
            )
    }

    pub async fn add_person(
        &self,
        body: Result<Json<PersonRequest>, JsonRejection>,
    ) -> HandlerResult<()> {
        let person = Self::parse_body(body).await?;
        self.service.add_person(person).await?;
        Ok(())
    }

    pub async fn get_all_person(&self) -> HandlerResult<Json<Vec<Person>>> {
        Ok(Json(self.service.get_all_persons().await?))
    }

    pub async fn get_person_by_id(&self, id: IdParam) -> HandlerResult<OptionalJson<Person>> {
        let id = Self::parse_id(id).await?;
        Ok(OptionalJson(self.service.get_person_by_id(id).await?))
    }

    pub async fn delete_person(&self, id: IdParam) -> HandlerResult<Json<u64>> {
        let id = Self::parse_id(id).await?;
        Ok(Json(self.service.delete_person(id).await?))
    }

    pub async fn update_person(
        &self,
        id: IdParam,
        body: Result<Json<PersonRequest>, JsonRejection>,
    ) -> HandlerResult<Json<u64>> {
        let id = Self::parse_id(id).await?;
        let person = Self::parse_body(body).await?;
        Ok(Json(self.service.update_person(id, person).await?))
    }

    async fn parse_id(id: IdParam) -> HandlerResult<Uuid> {
        let Path(raw) = id?;
        Ok(ParseUuidPipe.transform(raw).await?)
    }

    async fn parse_body(body: Result<Json<PersonRequest>, JsonRejection>) -> HandlerResult<NewPerson> {
        let Json(request) = body?;
        let request = ValidationPipe::<PersonRequest>::new().transform(request).await?;
        Ok(NewPerson::try_from(request)?)
    }
}
