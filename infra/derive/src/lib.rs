#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every Herald crate:
//!
//! * [`herald_error`] turns an enum into a context-aware error type.
//! * [`herald_slice`] turns a struct into a registrable feature slice handle.
//! * [`main`] boots an `async fn main` on a tuned Tokio runtime (re-exported by `herald-runtime`).

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime from an `async fn main`.
///
/// # Arguments
///
/// * `high_performance` - Larger stacks and longer keep-alive, intended for servers.
/// * `memory_efficient` - Half the worker threads and smaller stacks.
/// * `default` (or no argument) - Auto-detected worker threads.
///
/// # Examples
///
/// ```rust,ignore
/// #[herald_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and, for every
///   variant with a `source` field, to `Result<T, SourceError>`.
/// * `From<SourceError>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[herald_derive::herald_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, StoreError> {
///     std::fs::read_to_string("store.bin").context("Reading the store")
/// }
/// ```
#[proc_macro_attribute]
pub fn herald_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is an `Arc` wrapper that derefs to
/// it and implements `herald_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[herald_derive::herald_slice]
/// pub struct Billing {
///     pub currency: String,
/// }
///
/// let slice = Billing::new(BillingInner { currency: "EUR".to_owned() });
/// ```
#[proc_macro_attribute]
pub fn herald_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
