// Portfolio link endpoints
//
// All paths hang off `{base}/portfolio`.

use tracing::debug;

use crate::client::DevHubClient;
use crate::error::Error;
use crate::types::{NewPortfolioLink, PortfolioLink};

impl DevHubClient {
    /// List all portfolio links in server order.
    ///
    /// `GET /portfolio`
    pub async fn list_portfolio_links(&self) -> Result<Vec<PortfolioLink>, Error> {
        self.get(self.url(&["portfolio"])).await
    }

    /// List portfolio links in one category.
    ///
    /// `GET /portfolio/category/{category}`
    pub async fn list_portfolio_links_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<PortfolioLink>, Error> {
        self.get(self.url(&["portfolio", "category", category])).await
    }

    /// Fetch a single portfolio link.
    ///
    /// `GET /portfolio/{id}`
    pub async fn get_portfolio_link(&self, id: &str) -> Result<PortfolioLink, Error> {
        self.get(self.url(&["portfolio", id])).await
    }

    /// Create a portfolio link. The server assigns the identifier.
    ///
    /// `POST /portfolio`
    pub async fn create_portfolio_link(&self, link: &NewPortfolioLink) -> Result<(), Error> {
        debug!(title = %link.title, "creating portfolio link");
        self.post_no_response(self.url(&["portfolio"]), link).await
    }

    /// Replace every field of a portfolio link.
    ///
    /// `PUT /portfolio/{id}`
    pub async fn update_portfolio_link(
        &self,
        id: &str,
        link: &NewPortfolioLink,
    ) -> Result<(), Error> {
        debug!(id, title = %link.title, "updating portfolio link");
        self.put_no_response(self.url(&["portfolio", id]), link).await
    }

    /// Delete a portfolio link.
    ///
    /// `DELETE /portfolio/{id}`
    pub async fn delete_portfolio_link(&self, id: &str) -> Result<(), Error> {
        debug!(id, "deleting portfolio link");
        self.delete(self.url(&["portfolio", id])).await
    }
}
