//! Client for a documentation site's declaration, instance and module index.
//!
//! [`DataCenter`] wraps each backend endpoint; the [`controllers`] use it to fill
//! placeholder lists on a [`page::Page`]. In the browser the crate is driven
//! through the `wasm` entry points, natively through the `m4doc-client` binary.

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod controllers;
pub mod error;
pub mod page;
pub mod render;
pub mod tracing;
pub mod transport;
pub mod types;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use client::{DataCenter, Endpoint, EndpointSupport};
pub use error::TransportError;
pub use page::{MemoryPage, Page, PageContext};
#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::HttpTransport;
pub use transport::{ResponseFormat, Transport};
pub use types::{Decl, DeclKind, LinkRecord, SearchRequest};
