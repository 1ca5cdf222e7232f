//! Field selection for `#[derive(HasPermalink)]`.

use proc_macro2::Span;
use syn::{FieldsNamed, Ident};

/// Find the field holding the permalink.
///
/// A field tagged `#[permalink]` wins; otherwise a field named `permalink`
/// is used. Tagging more than one field is an error.
pub(crate) fn find_permalink_field(fields: &FieldsNamed) -> syn::Result<&Ident> {
    let mut tagged = fields
        .named
        .iter()
        .filter(|f| f.attrs.iter().any(|a| a.path().is_ident("permalink")));

    if let Some(field) = tagged.next() {
        if let Some(extra) = tagged.next() {
            return Err(syn::Error::new_spanned(
                extra,
                "only one field may be tagged #[permalink]",
            ));
        }
        return field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(Span::call_site(), "permalink field must be named"));
    }

    fields
        .named
        .iter()
        .filter_map(|f| f.ident.as_ref())
        .find(|ident| *ident == "permalink")
        .ok_or_else(|| {
            syn::Error::new_spanned(
                fields,
                "no permalink field: name a field `permalink` or tag one with #[permalink]",
            )
        })
}
