//! Catalog feature slice: the navigation catalogue (categories and link
//! entries), its admin CRUD surface, the public navigation document, and
//! icon/description resolution for newly added links.

mod error;
mod fetch;
mod handlers;
mod icons;
mod model;
mod repository;

pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::fetch::{FetchedPage, PageFetcher};
pub use crate::handlers::router;
pub use crate::icons::{ICONS_ROUTE, IconStore};
pub use crate::model::{
    CategoryPayload, CategoryResponse, ListQuery, NavCategoryResponse, NavLinkResponse,
    PaginatedWebsites, WebsiteCreate, WebsiteResponse, WebsiteUpdate,
};
pub use crate::repository::{
    CategoryRepository, CategoryRow, WebsiteFields, WebsiteRepository, WebsiteRow,
};

use fxhash::FxHashMap;
use waymark_database::Database;
use waymark_domain::config::ApiConfig;
use waymark_domain::nav::{NavigationCategory, NavigationConfig, NavigationLink};
use waymark_domain::registry::InitializedSlice;

/// Catalog feature state.
#[waymark_derive::waymark_slice]
pub struct Catalog {
    pub categories: CategoryRepository,
    pub websites: WebsiteRepository,
    pub fetcher: PageFetcher,
    pub icons: IconStore,
}

impl Catalog {
    /// Assembles the full navigation document in display order.
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn navigation(&self) -> Result<NavigationConfig, CatalogError> {
        let categories = self.categories.list().await?;
        let websites = self.websites.list_all().await?;

        // Entries are already ordered; bucket them per category.
        let mut links: FxHashMap<String, Vec<NavigationLink>> = FxHashMap::default();
        for row in websites {
            let Some(category_id) = row.category_id.clone() else { continue };
            links.entry(category_id).or_default().push(NavigationLink {
                id: row.id,
                name: row.name,
                url: row.url,
                icon_url: row.icon_url,
                description: row.description,
                order: repository::order_of(row.position),
            });
        }

        Ok(NavigationConfig {
            categories: categories
                .into_iter()
                .map(|category| NavigationCategory {
                    links: links.remove(&category.id).unwrap_or_default(),
                    id: category.id,
                    name: category.name,
                    order: repository::order_of(category.position),
                })
                .collect(),
        })
    }

    /// Resolves missing icon/description for a link by fetching the target
    /// page, falling back to a generated letter badge. Network failures
    /// degrade silently; they never fail the catalog operation.
    pub async fn resolve_metadata(
        &self,
        url: &str,
        icon_url: Option<String>,
        description: Option<String>,
    ) -> (Option<String>, Option<String>) {
        let mut icon_url = icon_url;
        let mut description = description;

        if icon_url.is_none() || description.is_none() {
            if let Some(page) = self.fetcher.fetch(url).await {
                if icon_url.is_none() {
                    icon_url = page.icon_url();
                }
                if description.is_none() {
                    description = page.description();
                }
            }
        }

        if icon_url.is_none() {
            icon_url = match self.icons.save_letter_badge(url).await {
                Ok(public_path) => Some(public_path),
                Err(e) => {
                    tracing::warn!(%url, error = %e, "Letter badge generation failed");
                    None
                },
            };
        }

        (icon_url, description)
    }
}

/// Initialize the catalog feature.
///
/// # Errors
/// Returns an error if the fetcher client cannot be built or the icon
/// directory cannot be created.
pub fn init(config: &ApiConfig, db: &Database) -> Result<InitializedSlice, CatalogError> {
    let inner = CatalogInner {
        categories: CategoryRepository::new(db.clone()),
        websites: WebsiteRepository::new(db.clone()),
        fetcher: PageFetcher::new(&config.fetcher)?,
        icons: IconStore::open(&config.storage.data_dir)?,
    };

    let slice = Catalog::new(inner);
    tracing::info!("Catalog server slice initialized");

    Ok(InitializedSlice::new(slice))
}
