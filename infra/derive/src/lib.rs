#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! This crate provides attribute macros that remove the boilerplate around
//! error enums, feature slices, API models, and the async runtime bootstrap.
//!
//! ## Usage
//! Depend on the crate from consuming workspace members:
//! ```toml
//! [dependencies]
//! waymark-derive = { path = "../infra/derive" }
//! ```
//!
//! Examples in the macro docstrings are `ignore`d to avoid compiling them in
//! this crate; copy them into consuming crates' tests as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the specialized Tokio runtime.
///
/// Transforms an `async fn main` into a standard `fn main` that initializes
/// a pre-configured Tokio runtime for the requested performance profile.
///
/// # Arguments
///
/// * `high_performance` - Optimized for high-throughput server environments.
/// * `memory_efficient` - Optimized for low-footprint edge environments.
/// * `default` - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[waymark_runtime::main(high_performance)]
/// async fn main() -> Result<(), ()> {
/// # Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro to define a standard API data model.
///
/// Keeps all DTOs (Data Transfer Objects) on the wire consistent by
/// injecting common behaviors and constraints.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize`, `Deserialize`, and `utoipa::ToSchema`.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Arguments
///
/// * `rename_all = "..."` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Disables strict field checking.
///
/// # Example
///
/// ```rust,ignore
/// use waymark_derive::api_model;
///
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct CategoryResponse {
///     pub id: String,
///     pub name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Wraps a standard async function and registers its metadata with `utoipa`.
///
/// # Arguments
///
/// Accepts standard `utoipa::path` arguments such as `get`, `post`,
/// `path = "..."`, `responses(...)`, and `tag = "..."`.
///
/// # Example
///
/// ```rust,ignore
/// use waymark_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> Result<(), ()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// Transforms a standard enum into a fully-featured error type integrated
/// with the Waymark infrastructure.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds
///   `.context()` to any `Result` convertible into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a
///   `#[source]` field, enabling the use of `?` for upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a
///    `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a
///    field marked `#[source]`/`#[from]` (compatible with `thiserror`).
/// 4. Tuple or unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use waymark_derive::waymark_error;
/// use std::borrow::Cow;
///
/// #[waymark_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io {
///         #[source]
///         source: std::io::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn waymark_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a Vertical Slice handle.
///
/// Transforms a struct into the full Slice pattern:
/// 1. Generates a thread-safe `Arc` wrapper.
/// 2. Implements `Deref` for transparent access to the inner state.
/// 3. Implements `FeatureSlice` for registration in the Kernel.
///
/// # Example
/// ```rust,ignore
/// #[waymark_derive::waymark_slice]
/// pub struct Catalog {
///     pub icons_dir: std::path::PathBuf,
/// }
///
/// fn init() -> Catalog {
///     Catalog::new(CatalogInner { icons_dir: "data/icons".into() })
/// }
/// ```
#[proc_macro_attribute]
pub fn waymark_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
