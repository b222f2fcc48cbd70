// Code snippet endpoints
//
// All paths hang off `{base}/snippets`.

use tracing::debug;

use crate::client::DevHubClient;
use crate::error::Error;
use crate::types::{CodeSnippet, NewCodeSnippet};

impl DevHubClient {
    /// List every snippet.
    ///
    /// `GET /snippets`
    pub async fn list_snippets(&self) -> Result<Vec<CodeSnippet>, Error> {
        self.get(self.url(&["snippets"])).await
    }

    /// List only snippets flagged public.
    ///
    /// `GET /snippets/public`
    pub async fn list_public_snippets(&self) -> Result<Vec<CodeSnippet>, Error> {
        self.get(self.url(&["snippets", "public"])).await
    }

    /// `GET /snippets/language/{language}`
    pub async fn list_snippets_by_language(
        &self,
        language: &str,
    ) -> Result<Vec<CodeSnippet>, Error> {
        self.get(self.url(&["snippets", "language", language])).await
    }

    /// `GET /snippets/tag/{tag}`
    pub async fn list_snippets_by_tag(&self, tag: &str) -> Result<Vec<CodeSnippet>, Error> {
        self.get(self.url(&["snippets", "tag", tag])).await
    }

    /// `GET /snippets/{id}`
    pub async fn get_snippet(&self, id: &str) -> Result<CodeSnippet, Error> {
        self.get(self.url(&["snippets", id])).await
    }

    /// Create a snippet. The server assigns the identifier and timestamps.
    ///
    /// `POST /snippets`
    pub async fn create_snippet(&self, snippet: &NewCodeSnippet) -> Result<(), Error> {
        debug!(title = %snippet.title, language = %snippet.language, "creating snippet");
        self.post_no_response(self.url(&["snippets"]), snippet).await
    }

    /// Replace every field of a snippet. The server stamps `updatedAt`.
    ///
    /// `PUT /snippets/{id}`
    pub async fn update_snippet(&self, id: &str, snippet: &NewCodeSnippet) -> Result<(), Error> {
        debug!(id, title = %snippet.title, "updating snippet");
        self.put_no_response(self.url(&["snippets", id]), snippet).await
    }

    /// `DELETE /snippets/{id}`
    pub async fn delete_snippet(&self, id: &str) -> Result<(), Error> {
        debug!(id, "deleting snippet");
        self.delete(self.url(&["snippets", id])).await
    }
}
