//! JSON-backed knowledge store. Read once, never mutated.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Company identity block (`company_info` in the JSON document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub location: String,
    pub established: String,
    pub website: String,
    pub email: String,
    pub boards_supported: Vec<String>,
}

impl CompanyInfo {
    /// Trading name without the legal suffix ("Shyampari Edutech").
    pub fn short_name(&self) -> &str {
        self.name
            .strip_suffix(" Pvt. Ltd.")
            .unwrap_or(&self.name)
            .trim()
    }

    /// First component of `location` ("Pune").
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or("").trim()
    }
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Shyampari Edutech Pvt. Ltd.".to_string(),
            location: "Pune, Maharashtra".to_string(),
            established: "2017".to_string(),
            website: "https://www.shyampariedutech.com".to_string(),
            email: "contact@shyampariedutech.com".to_string(),
            boards_supported: ["ICSE", "IGCSE", "CBSE", "IB", "A-Level"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Contact channels (`contact_info` in the JSON document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub website: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contact@shyampariedutech.com".to_string(),
            website: "https://www.shyampariedutech.com".to_string(),
        }
    }
}

/// Company facts used to build prompts. Fields absent from the file take the
/// built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub company_info: CompanyInfo,
    pub services: Vec<String>,
    pub demo_fee: String,
    pub contact_info: ContactInfo,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            company_info: CompanyInfo::default(),
            services: [
                "One-on-one personalized tutoring",
                "Small group batches (3-5 students)",
                "24/7 coordinator support",
                "Monthly progress reports",
                "Demo classes",
                "Tutor replacement guarantee",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            demo_fee: "₹500 (negotiable)".to_string(),
            contact_info: ContactInfo::default(),
        }
    }
}

impl KnowledgeBase {
    /// True when the document carries no usable facts at all.
    pub fn is_empty(&self) -> bool {
        self.company_info.name.trim().is_empty() && self.services.is_empty()
    }
}

/// Where the active knowledge base came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeSource {
    File(PathBuf),
    BuiltIn,
}

impl KnowledgeSource {
    pub fn label(&self) -> String {
        match self {
            KnowledgeSource::File(path) => path.display().to_string(),
            KnowledgeSource::BuiltIn => "built-in".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loaded knowledge base plus its provenance. Shared read-only behind `Arc`.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    base: KnowledgeBase,
    source: KnowledgeSource,
}

impl KnowledgeStore {
    /// Loads `path`, substituting the built-in facts on any failure. Never fails.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                tracing::info!(target: "shyampari::knowledge", path = %path.display(), "Knowledge base loaded successfully");
                store
            }
            Err(KnowledgeError::NotFound(p)) => {
                tracing::error!(target: "shyampari::knowledge", path = %p.display(), "Knowledge file not found, using built-in facts");
                Self::built_in()
            }
            Err(e) => {
                tracing::error!(target: "shyampari::knowledge", error = %e, "Error loading knowledge base, using built-in facts");
                Self::built_in()
            }
        }
    }

    /// Loads and parses `path` strictly.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                KnowledgeError::NotFound(path.to_path_buf())
            } else {
                KnowledgeError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let base: KnowledgeBase = serde_json::from_str(&raw).map_err(|source| KnowledgeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            base,
            source: KnowledgeSource::File(path.to_path_buf()),
        })
    }

    pub fn built_in() -> Self {
        Self {
            base: KnowledgeBase::default(),
            source: KnowledgeSource::BuiltIn,
        }
    }

    pub fn base(&self) -> &KnowledgeBase {
        &self.base
    }

    pub fn source(&self) -> &KnowledgeSource {
        &self.source
    }

    /// Reported by `/health` as `knowledge_base_loaded`.
    pub fn is_loaded(&self) -> bool {
        !self.base.is_empty()
    }
}
