//! Procedural macros for `flag_group`.
//!
//! `#[derive(Flags)]` implements `flag_group::FlagContainer` for a struct so
//! that `flag_group::Group::new` can scan it. Every `#[flag(...)]` entry on a
//! field is recorded verbatim, with identifier keys converted to kebab-case:
//!
//! ```rust,ignore
//! #[derive(Flags)]
//! struct Options {
//!     #[flag(short = "v", long = "verbose", description = "enable verbose output")]
//!     pub verbose: bool,
//!     #[flag(long = "mode", base = 8)]
//!     pub mode: u32,
//!     #[flag(long = "cache", no_flag)]
//!     pub cache: std::collections::HashMap<String, String>,
//! }
//! ```
//!
//! Public fields carrying a non-empty `long` or `short` entry, and no
//! `no_flag` entry, must implement `flag_group::Bind`. Enums and unions
//! derive an opaque shape, which the group reports as an error.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flag_group::FlagContainer`.
#[proc_macro_derive(Flags, attributes(flag))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
