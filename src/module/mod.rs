use crate::controller::PersonController;
use crate::di::{Container, Injectable};
use crate::error::{RegistryError, Result};
use crate::repository::{InMemoryPersonRepository, PersonRepository};
use crate::service::{PersonService, PersonServiceImpl};
use std::sync::Arc;

/// Trait for application modules
///
/// A module registers its providers and controllers in dependency order.
pub trait Module {
    /// Register all providers and controllers in this module
    fn register(container: &mut Container) -> Result<()>;
}

/// Wires the person repository, service and controller.
///
/// Bindings that already exist in the container are kept, which lets callers
/// swap in another `dyn PersonRepository` or `dyn PersonService` before
/// registering the module.
pub struct PersonModule;

impl Module for PersonModule {
    fn register(container: &mut Container) -> Result<()> {
        if !container.contains::<dyn PersonRepository>() {
            container.register(InMemoryPersonRepository::new());
            container.register_trait::<dyn PersonRepository, InMemoryPersonRepository, _>(|r| {
                r as Arc<dyn PersonRepository>
            });
        }

        if !container.contains::<dyn PersonService>() {
            let service = PersonServiceImpl::inject(container).map_err(|e| {
                RegistryError::ModuleRegistrationFailed {
                    message: format!("PersonServiceImpl: {}", e),
                }
            })?;
            container.register(service);
            container.register_trait::<dyn PersonService, PersonServiceImpl, _>(|s| {
                s as Arc<dyn PersonService>
            });
        }

        let controller = PersonController::inject(container).map_err(|e| {
            RegistryError::ModuleRegistrationFailed {
                message: format!("PersonController: {}", e),
            }
        })?;
        container.register(controller);

        tracing::info!("PersonModule registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPerson;

    #[tokio::test]
    async fn test_register_wires_default_stack() {
        let mut container = Container::new();
        PersonModule::register(&mut container).unwrap();

        assert!(container.contains::<PersonController>());
        let service = container.resolve_trait::<dyn PersonService>().unwrap();
        service.add_person(NewPerson::new("Alice")).await.unwrap();

        // service and repository share the same store
        let repository = container.resolve_trait::<dyn PersonRepository>().unwrap();
        assert_eq!(repository.select_all_people().await.unwrap().len(), 1);
    }

    #[test]
    fn test_existing_repository_binding_is_kept() {
        let mut container = Container::new();
        container.register(InMemoryPersonRepository::new());
        container.register_trait::<dyn PersonRepository, InMemoryPersonRepository, _>(|r| {
            r as Arc<dyn PersonRepository>
        });
        let before = container.len();

        PersonModule::register(&mut container).unwrap();
        // service + controller only
        assert_eq!(container.len(), before + 2);
    }
}
