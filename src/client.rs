//! The data-center client: one method per backend endpoint.
//!
//! Every method is a thin adapter over [`request_json`]: fixed path, fixed
//! body shape, fixed default. A failed request is logged and replaced by the
//! default, so callers only ever see data or an empty value.

use crate::error::TransportError;
use crate::transport::{Transport, request_json};
use crate::types::{Decl, DeclKind, LinkRecord, NamesRequest, SearchRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Whether the backend is known to answer an endpoint meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSupport {
    Implemented,
    /// Requests are still sent, but a diagnostic is emitted first and callers
    /// should expect the default.
    Degraded,
}

/// Backend endpoints known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SearchDecl,
    InstancesForClass,
    InstancesForType,
    AnnotateInstances,
    AnnotateInstancesFor,
    DeclNameToLink,
    ModuleImportedBy,
    ModuleNameToLink,
    LinkedImportedBy,
}

impl Endpoint {
    pub const ALL: [Self; 9] = [
        Self::SearchDecl,
        Self::InstancesForClass,
        Self::InstancesForType,
        Self::AnnotateInstances,
        Self::AnnotateInstancesFor,
        Self::DeclNameToLink,
        Self::ModuleImportedBy,
        Self::ModuleNameToLink,
        Self::LinkedImportedBy,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::SearchDecl => "/search_decl",
            Self::InstancesForClass => "/instances_for_class",
            Self::InstancesForType => "/instances_for_type",
            Self::AnnotateInstances => "/annotate_instances",
            Self::AnnotateInstancesFor => "/annotate_instances_for",
            Self::DeclNameToLink => "/decl_name_to_link",
            Self::ModuleImportedBy => "/module_imported_by",
            Self::ModuleNameToLink => "/module_name_to_link",
            Self::LinkedImportedBy => "/linked_imported_by",
        }
    }

    pub const fn support(self) -> EndpointSupport {
        match self {
            Self::InstancesForClass
            | Self::InstancesForType
            | Self::DeclNameToLink
            | Self::ModuleImportedBy
            | Self::ModuleNameToLink => EndpointSupport::Degraded,
            Self::SearchDecl
            | Self::AnnotateInstances
            | Self::AnnotateInstancesFor
            | Self::LinkedImportedBy => EndpointSupport::Implemented,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Handle to the index backend.
///
/// Built once per page load with [`DataCenter::init`] and passed to the page
/// controllers. The handle holds nothing but its transport.
#[derive(Debug, Clone)]
pub struct DataCenter<T> {
    transport: T,
}

impl<T: Transport> DataCenter<T> {
    /// Create a fresh handle. Calling this again yields another independent handle.
    pub fn init(transport: T) -> Self {
        tracing::debug!("data center initialized");
        Self { transport }
    }

    /// Search for declarations.
    pub async fn search(&self, request: &SearchRequest) -> Vec<Decl> {
        self.call(Endpoint::SearchDecl, request).await
    }

    /// Shorthand for a search with only a pattern and strictness.
    pub async fn search_pattern(&self, pattern: &str, strict: bool) -> Vec<Decl> {
        let request = if strict {
            SearchRequest::strict(pattern)
        } else {
            SearchRequest::fuzzy(pattern)
        };
        self.search(&request).await
    }

    /// Search restricted to the given kinds, capped at `max_results`.
    pub async fn search_kinds(
        &self,
        pattern: &str,
        kinds: Vec<DeclKind>,
        max_results: Option<usize>,
    ) -> Vec<Decl> {
        let mut request = SearchRequest::fuzzy(pattern).with_kinds(kinds);
        request.max_results = max_results;
        self.search(&request).await
    }

    /// Names of all instances of a typeclass.
    pub async fn instances_for_class(&self, class_name: &str) -> Vec<String> {
        self.call(Endpoint::InstancesForClass, class_name).await
    }

    /// Names of all instances that involve a type.
    pub async fn instances_for_type(&self, type_name: &str) -> Vec<String> {
        self.call(Endpoint::InstancesForType, type_name).await
    }

    /// Instances with links for each class in `names`, positionally aligned.
    pub async fn annotate_instances(&self, names: &[String]) -> Vec<Vec<LinkRecord>> {
        self.call(Endpoint::AnnotateInstances, &NamesRequest { names }).await
    }

    /// Instances with links for each type in `names`, positionally aligned.
    pub async fn annotate_instances_for(&self, names: &[String]) -> Vec<Vec<LinkRecord>> {
        self.call(Endpoint::AnnotateInstancesFor, &NamesRequest { names })
            .await
    }

    /// Site-relative link for a declaration name.
    pub async fn decl_name_to_link(&self, decl_name: &str) -> String {
        self.call(Endpoint::DeclNameToLink, decl_name).await
    }

    /// Names of modules that import `module_name`.
    pub async fn module_imported_by(&self, module_name: &str) -> Vec<String> {
        self.call(Endpoint::ModuleImportedBy, module_name).await
    }

    /// Site-relative link for a module name.
    pub async fn module_name_to_link(&self, module_name: &str) -> String {
        self.call(Endpoint::ModuleNameToLink, module_name).await
    }

    /// Modules importing `module_name`, each with its link.
    pub async fn linked_imported_by(&self, module_name: &str) -> Vec<LinkRecord> {
        self.call(Endpoint::LinkedImportedBy, module_name).await
    }

    /// Issue a request and return the tagged outcome without substituting a default.
    pub async fn try_call<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        if endpoint.support() == EndpointSupport::Degraded {
            tracing::warn!(%endpoint, "endpoint is not implemented by the backend yet");
        }
        request_json(&self.transport, endpoint.path(), body).await
    }

    async fn call<B, R>(&self, endpoint: Endpoint, body: &B) -> R
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        match self.try_call(endpoint, body).await {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(%endpoint, kind = error.kind(), %error, "request failed, using default");
                R::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths_are_unique() {
        let mut paths: Vec<&str> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_degraded_endpoints() {
        let degraded: Vec<Endpoint> = Endpoint::ALL
            .into_iter()
            .filter(|e| e.support() == EndpointSupport::Degraded)
            .collect();
        assert_eq!(
            degraded,
            [
                Endpoint::InstancesForClass,
                Endpoint::InstancesForType,
                Endpoint::DeclNameToLink,
                Endpoint::ModuleImportedBy,
                Endpoint::ModuleNameToLink,
            ]
        );
    }
}
