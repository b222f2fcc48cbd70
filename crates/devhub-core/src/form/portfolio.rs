// ── Portfolio link draft ──

use devhub_api::NewPortfolioLink;

use super::Draft;
use crate::model::PortfolioLink;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioDraft {
    pub title: String,
    pub url: String,
    pub order: i64,
    pub category: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioField {
    Title(String),
    Url(String),
    Order(i64),
    Category(String),
    Icon(String),
    Description(String),
}

impl Draft for PortfolioDraft {
    type Field = PortfolioField;
    type Request = NewPortfolioLink;

    fn set(&mut self, field: PortfolioField) {
        match field {
            PortfolioField::Title(v) => self.title = v,
            PortfolioField::Url(v) => self.url = v,
            PortfolioField::Order(v) => self.order = v,
            PortfolioField::Category(v) => self.category = v,
            PortfolioField::Icon(v) => self.icon = v,
            PortfolioField::Description(v) => self.description = v,
        }
    }

    fn to_request(&self) -> NewPortfolioLink {
        NewPortfolioLink {
            title: self.title.clone(),
            url: self.url.clone(),
            order: self.order,
            category: self.category.clone(),
            icon: self.icon.clone(),
            description: self.description.clone(),
        }
    }
}

/// Pre-fill a draft from a stored link, for editing.
impl From<&PortfolioLink> for PortfolioDraft {
    fn from(link: &PortfolioLink) -> Self {
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
            order: link.order,
            category: link.category.clone().unwrap_or_default(),
            icon: link.icon.clone().unwrap_or_default(),
            description: link.description.clone().unwrap_or_default(),
        }
    }
}
