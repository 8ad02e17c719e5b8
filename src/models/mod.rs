//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption.
//! - `tree`: Entry (upstream listing), Node, TreeResponse
//! - `repo`: RepoSummary, OwnerInfo, UserProfile, SessionInfo
//! - `content`: FileContent, SaveFileRequest, SavedFile
//! - `summary`: SummaryRequest, SummaryResponse

pub mod content;
pub mod repo;
pub mod summary;
pub mod tree;

pub use content::*;
pub use repo::*;
pub use summary::*;
pub use tree::*;
