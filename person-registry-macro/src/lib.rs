use proc_macro::TokenStream;

mod injectable;

/// Derive macro for constructing a struct from the DI container
///
/// Every field must be an `Arc<T>` (resolved with `Container::resolve`) or an
/// `Arc<dyn Trait>` (resolved with `Container::resolve_trait`).
///
/// # Example
/// ```ignore
/// use person_registry::prelude::*;
///
/// #[derive(Injectable)]
/// pub struct PersonServiceImpl {
///     repository: Arc<dyn PersonRepository>,
/// }
/// ```
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}
