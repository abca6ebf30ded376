use crate::error::{RegistryError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

type AnyArc = Arc<dyn Any + Send + Sync>;

/// Casts a concrete `Arc<Impl>` (erased) into an erased `Arc<Arc<dyn Trait>>`.
/// Returns `None` when the stored instance is not an `Impl`.
type CasterFn = Arc<dyn Fn(AnyArc) -> Option<AnyArc> + Send + Sync>;

/// Thread-safe dependency injection container.
///
/// Instances are keyed by their concrete type. A trait binding maps
/// `dyn Trait` to one registered implementation so that consumers can depend
/// on the trait alone.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, AnyArc>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), Arc::new(instance));
        tracing::debug!(service = type_name::<T>(), "Registered service");
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        self.trait_mappings.insert(trait_id, TypeId::of::<Impl>());

        let caster: CasterFn = Arc::new(move |instance: AnyArc| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as AnyArc)
        });
        self.casters.insert(trait_id, caster);

        tracing::debug!(
            binding = type_name::<Trait>(),
            implementation = type_name::<Impl>(),
            "Bound trait"
        );
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let instance = self
            .services
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::DependencyNotFound {
                type_name: type_name::<T>().to_string(),
            })?;

        instance
            .downcast::<T>()
            .map_err(|_| RegistryError::DowncastFailed {
                type_name: type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let trait_id = TypeId::of::<T>();

        let impl_id = self
            .trait_mappings
            .get(&trait_id)
            .map(|entry| *entry.value())
            .ok_or_else(|| RegistryError::DependencyNotFound {
                type_name: format!("no binding for trait '{}'", type_name::<T>()),
            })?;

        let caster = self
            .casters
            .get(&trait_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::DependencyNotFound {
                type_name: type_name::<T>().to_string(),
            })?;

        let instance = self
            .services
            .get(&impl_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::DependencyNotFound {
                type_name: format!(
                    "implementation for trait '{}' not registered",
                    type_name::<T>()
                ),
            })?;

        let downcast_failed = || RegistryError::DowncastFailed {
            type_name: type_name::<T>().to_string(),
        };

        // The caster yields an erased Arc<Arc<T>>; unwrap one level.
        let wrapper = caster(instance)
            .ok_or_else(downcast_failed)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed())?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
