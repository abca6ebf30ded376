use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type, parse_macro_input};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    generate_injectable_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn generate_injectable_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(
                    fields,
                    "#[derive(Injectable)] only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[derive(Injectable)] can only be applied to structs",
            ));
        }
    };

    let mut field_injections = Vec::with_capacity(fields.len());
    for field in fields {
        let field_name = &field.ident;
        let inner = arc_inner_type(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(
                &field.ty,
                "injectable fields must be `Arc<T>` or `Arc<dyn Trait>`",
            )
        })?;

        // `dyn Trait` goes through the trait bindings, everything else by concrete type
        let resolve_method = match inner {
            Type::TraitObject(_) => quote!(resolve_trait),
            _ => quote!(resolve),
        };

        field_injections.push(quote! {
            #field_name: container.#resolve_method::<#inner>()?
        });
    }

    let is_unit = matches!(&input.data, Data::Struct(data) if matches!(data.fields, Fields::Unit));
    let body = if is_unit {
        quote!(Self)
    } else {
        quote!(Self { #(#field_injections),* })
    };

    Ok(quote! {
        impl #impl_generics ::person_registry::di::Injectable for #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn inject(
                container: &::person_registry::di::Container
            ) -> ::person_registry::Result<Self> {
                Ok(#body)
            }
        }
    })
}

/// Returns `T` for a field typed `Arc<T>` (also `std::sync::Arc<T>`).
fn arc_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Arc" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
