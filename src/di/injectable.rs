use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// Usually derived with `#[derive(Injectable)]`, which resolves each
/// `Arc<T>` field by type and each `Arc<dyn Trait>` field through its trait
/// binding.
///
/// # Example
/// ```ignore
/// use person_registry::di::Injectable;
/// use person_registry::repository::PersonRepository;
/// use std::sync::Arc;
///
/// #[derive(Injectable)]
/// pub struct AuditedPersonService {
///     repository: Arc<dyn PersonRepository>,
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
