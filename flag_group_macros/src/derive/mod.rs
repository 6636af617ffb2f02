//! Expansion of `#[derive(Flags)]`.
//!
//! The derive replaces run-time reflection: it implements
//! `FlagContainer::shape` by listing the container's fields, in declaration
//! order, together with their visibility, raw `#[flag(...)]` entries and a
//! binding for the fields that may become options.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

use parse::parse_struct_attrs;

/// Builds the `FlagContainer` implementation for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let body = match &input.data {
        Data::Struct(data) => generate::struct_shape(&krate, &data.fields)?,
        Data::Enum(_) | Data::Union(_) => generate::opaque_shape(&krate),
    };
    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::FlagContainer for #ident #ty_generics #where_clause {
            fn shape(&mut self) -> #krate::Shape<'_> {
                #body
            }
        }
    })
}
