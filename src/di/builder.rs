use crate::di::Container;
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// # Example
/// ```
/// use person_registry::di::ContainerBuilder;
/// use person_registry::repository::{InMemoryPersonRepository, PersonRepository};
/// use std::sync::Arc;
///
/// let container = ContainerBuilder::new()
///     .register(InMemoryPersonRepository::new())
///     .bind::<dyn PersonRepository, InMemoryPersonRepository, _>(|r| r as Arc<dyn PersonRepository>)
///     .build();
/// assert!(container.contains::<dyn PersonRepository>());
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Bind a trait to a registered concrete implementation
    pub fn bind<Trait, Impl, F>(mut self, caster: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait, Impl, F>(caster);
        self
    }

    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
