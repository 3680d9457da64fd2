use serde::{Deserialize, Serialize};

/// A display name paired with a link relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkRecord {
    pub name: String,
    pub link: String,
}

impl LinkRecord {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// A declaration as the index backend describes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decl {
    #[serde(default)]
    pub source_link: String,
    pub name: String,
    pub kind: DeclKind,
    #[serde(default)]
    pub doc_link: String,
    #[serde(default)]
    pub doc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Ctor,
    Def,
    Instance,
    Theorem,
    Axiom,
    Inductive,
    Structure,
    Class,
    Opaque,
}

impl DeclKind {
    pub const ALL: [Self; 9] = [
        Self::Ctor,
        Self::Def,
        Self::Instance,
        Self::Theorem,
        Self::Axiom,
        Self::Inductive,
        Self::Structure,
        Self::Class,
        Self::Opaque,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ctor => "ctor",
            Self::Def => "def",
            Self::Instance => "instance",
            Self::Theorem => "theorem",
            Self::Axiom => "axiom",
            Self::Inductive => "inductive",
            Self::Structure => "structure",
            Self::Class => "class",
            Self::Opaque => "opaque",
        }
    }
}

impl std::str::FromStr for DeclKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown declaration kind '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `/search_decl` request.
///
/// Absent optional fields are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub pattern: String,
    pub strict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_kinds: Option<Vec<DeclKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl SearchRequest {
    /// An exact-name lookup, the default search mode.
    pub fn strict(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            strict: true,
            allowed_kinds: None,
            max_results: None,
        }
    }

    /// A ranked fuzzy search.
    pub fn fuzzy(pattern: impl Into<String>) -> Self {
        Self {
            strict: false,
            ..Self::strict(pattern)
        }
    }

    pub fn with_kinds(mut self, kinds: Vec<DeclKind>) -> Self {
        self.allowed_kinds = Some(kinds);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// Body of the batched `/annotate_instances*` requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct NamesRequest<'a> {
    pub(crate) names: &'a [String],
}
