//! File resource implementation.
//!
//! Files are the downloads attached to a variant.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a downloadable file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttributes {
    pub variant_id: u64,
    /// Unique UUID for the file.
    pub identifier: String,
    pub name: String,
    /// The file extension, e.g. `pdf`.
    pub extension: String,
    /// A signed URL valid for one hour.
    pub download_url: String,
    /// Size in bytes.
    pub size: i64,
    pub size_formatted: String,
    pub version: Option<String>,
    pub sort: i64,
    /// `draft` or `published`.
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RestResource for FileAttributes {
    const NAME: &'static str = "File";
    const TYPE: &'static str = "files";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::File(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Files
    }
}

/// A downloadable file.
pub type File = ResourceObject<FileAttributes>;
