use serde::Deserialize;

use crate::auth::Credential;
use crate::error::Result;
use crate::github::client::{GitHubClient, encode_path, repo_path};
use crate::models::{Entry, TreeResponse};
use crate::tree::{build_tree, count};

#[derive(Debug, Deserialize)]
struct TreeListing {
    tree: Vec<Entry>,
    #[serde(default)]
    truncated: bool,
}

/// Flat recursive listing of one branch.
#[derive(Debug, Clone)]
pub struct RepoTree {
    pub entries: Vec<Entry>,
    pub truncated: bool,
}

impl GitHubClient {
    pub async fn list_tree(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<RepoTree> {
        let request = self
            .get(
                credential,
                &format!("{}/git/trees/{}", repo_path(owner, repo), encode_path(branch)),
            )
            .query(&[("recursive", "1")]);
        let listing: TreeListing = self.send_json(request).await?;

        if listing.truncated {
            tracing::warn!(
                "Tree listing for {}/{}@{} was truncated at {} entries",
                owner,
                repo,
                branch,
                listing.tree.len()
            );
        }

        Ok(RepoTree {
            entries: listing.tree,
            truncated: listing.truncated,
        })
    }

    /// Fetch the flat listing and materialize it into the sidebar tree.
    /// Without a branch, the repository's default branch is used.
    pub async fn get_full_tree(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
    ) -> Result<TreeResponse> {
        let branch = match branch {
            Some(b) if !b.is_empty() => b.to_string(),
            _ => self.get_repo(credential, owner, repo).await?.default_branch,
        };

        let start = std::time::Instant::now();
        let listing = self.list_tree(credential, owner, repo, &branch).await?;
        let nodes = build_tree(&listing.entries)?;
        let (file_count, folder_count) = count(&nodes);
        tracing::info!(
            "Built tree for {}/{}@{}: {} files, {} folders in {:?}",
            owner,
            repo,
            branch,
            file_count,
            folder_count,
            start.elapsed()
        );

        Ok(TreeResponse {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch,
            truncated: listing.truncated,
            file_count,
            folder_count,
            nodes,
        })
    }
}
