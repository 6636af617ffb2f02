//! Token generation for the `FlagContainer` implementation.
//!
//! Named structs list every field with its visibility and raw tag, binding
//! only the fields that the runtime scan could turn into options. Tuple
//! structs list anonymous fields; enums and unions report an opaque shape.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Field, Fields, Token, Visibility};

use super::parse::{FieldTag, parse_field_tag};

fn visibility_tokens(krate: &TokenStream, vis: &Visibility) -> TokenStream {
    match vis {
        Visibility::Public(_) => quote! { #krate::FieldVisibility::Public },
        Visibility::Restricted(_) => quote! { #krate::FieldVisibility::Restricted },
        Visibility::Inherited => quote! { #krate::FieldVisibility::Private },
    }
}

fn tag_tokens(krate: &TokenStream, tag: &FieldTag) -> TokenStream {
    let entries = tag
        .entries
        .iter()
        .map(|(key, value)| quote! { (#key, #value) });
    quote! { #krate::Tag::new(&[#(#entries),*]) }
}

/// Shape expression for a struct with the given fields.
pub(crate) fn struct_shape(krate: &TokenStream, fields: &Fields) -> syn::Result<TokenStream> {
    match fields {
        Fields::Named(named) => named_shape(krate, &named.named),
        Fields::Unnamed(unnamed) => anonymous_shape(krate, &unnamed.unnamed),
        Fields::Unit => Ok(quote! { #krate::Shape::Struct(::std::vec::Vec::new()) }),
    }
}

/// Shape expression for containers that are not structs.
pub(crate) fn opaque_shape(krate: &TokenStream) -> TokenStream {
    quote! { #krate::Shape::Opaque }
}

fn named_shape(
    krate: &TokenStream,
    fields: &Punctuated<Field, Token![,]>,
) -> syn::Result<TokenStream> {
    let mut bound = Vec::new();
    let mut entries = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let tag = parse_field_tag(&field.attrs)?;
        let name = ident.unraw().to_string();
        let visibility = visibility_tokens(krate, &field.vis);
        let tag_expr = tag_tokens(krate, &tag);
        let destination = if tag.wants_binding(&field.vis) {
            bound.push(ident);
            let binding = quote_spanned! { field.ty.span() =>
                #krate::Bind::destination(#ident)
            };
            quote! { ::core::option::Option::Some(#binding) }
        } else {
            quote! { ::core::option::Option::None }
        };
        entries.push(quote! {
            #krate::FieldEntry::named(#name, #visibility, #tag_expr, #destination)
        });
    }
    Ok(quote! {
        let Self { #(#bound,)* .. } = self;
        #krate::Shape::Struct(::std::vec![#(#entries),*])
    })
}

fn anonymous_shape(
    krate: &TokenStream,
    fields: &Punctuated<Field, Token![,]>,
) -> syn::Result<TokenStream> {
    let entries = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let tag = parse_field_tag(&field.attrs)?;
            let visibility = visibility_tokens(krate, &field.vis);
            let tag_expr = tag_tokens(krate, &tag);
            Ok(quote! {
                #krate::FieldEntry::anonymous(#index, #visibility, #tag_expr)
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(quote! {
        #krate::Shape::Struct(::std::vec![#(#entries),*])
    })
}
