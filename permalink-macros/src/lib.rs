use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

mod association;

/// Derive macro for implementing `HasPermalink`.
///
/// The permalink is read from the field tagged `#[permalink]`, or from the
/// field named `permalink`. The field must be an `Option<PermalinkRecord>`.
///
/// ```rust,ignore
/// #[derive(HasPermalink)]
/// struct Page {
///     id: u64,
///     #[permalink]
///     link: Option<PermalinkRecord>,
/// }
/// ```
#[proc_macro_derive(HasPermalink, attributes(permalink))]
pub fn derive_has_permalink(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named,
            other => {
                return syn::Error::new_spanned(
                    other,
                    "HasPermalink can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "HasPermalink can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let field = match association::find_permalink_field(fields) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::permalink::HasPermalink for #name #ty_generics #where_clause {
            fn permalink(&self) -> ::core::option::Option<&::permalink::PermalinkRecord> {
                self.#field.as_ref()
            }
        }
    };

    TokenStream::from(expanded)
}
