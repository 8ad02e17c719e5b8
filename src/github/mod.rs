//! GitHub REST access, split by feature area like the API itself:
//! - `client`: request building, auth headers, status → error mapping
//! - `repos`: viewer profile, repository list and metadata
//! - `tree`: recursive branch listing and sidebar tree construction
//! - `contents`: file read and precondition-checked write

pub mod client;
pub mod contents;
pub mod repos;
pub mod tree;

pub use client::GitHubClient;
