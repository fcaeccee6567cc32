//! Customer-facing catalog page controller.

use crate::CATALOG_PAGE_SIZE;
use crate::api::errors::ApiResult;
use crate::api::{ProductList, ProductListQuery, ProductLister};
use crate::domain::product::{Product, SortKey};
use crate::pagination::PageControls;

use super::{Applied, DisplayState, FetchState, FetchTicket};

/// Query and display state behind the customer product list.
///
/// Purely synchronous: setters issue a [`FetchTicket`] that the caller
/// executes against the API, feeding the outcome back through
/// [`CatalogController::apply`]. Pair with [`Catalog`] for a driver that does
/// both in one call.
#[derive(Debug)]
pub struct CatalogController {
    page: usize,
    page_size: usize,
    search: String,
    category: String,
    sort: SortKey,
    categories: Vec<String>,
    fetch: FetchState,
}

impl CatalogController {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            search: String::new(),
            category: String::new(),
            sort: SortKey::default(),
            categories: Vec::new(),
            fetch: FetchState::default(),
        }
    }

    /// Issues the initial fetch for the default query; call once on mount.
    pub fn init(&mut self) -> FetchTicket {
        self.refresh()
    }

    /// Changes the search text. Filter changes return to the first page
    /// because the filtered set has a different page count.
    pub fn set_search(&mut self, search: impl Into<String>) -> FetchTicket {
        self.search = search.into();
        self.page = 1;
        self.refresh()
    }

    /// Selects a category filter; an empty string selects all categories.
    pub fn set_category(&mut self, category: impl Into<String>) -> FetchTicket {
        self.category = category.into();
        self.page = 1;
        self.refresh()
    }

    pub fn set_sort(&mut self, sort: SortKey) -> FetchTicket {
        self.sort = sort;
        self.page = 1;
        self.refresh()
    }

    /// Jumps to a page without touching the filter fields.
    pub fn set_page(&mut self, page: usize) -> FetchTicket {
        self.page = page.max(1);
        self.refresh()
    }

    /// Re-issues a fetch for the current query state.
    pub fn refresh(&mut self) -> FetchTicket {
        let request = self.request();
        self.fetch.issue(request)
    }

    fn request(&self) -> ProductListQuery {
        ProductListQuery::new(self.page, self.page_size)
            .search(self.search.as_str())
            .category(self.category.as_str())
            .sort(self.sort)
    }

    /// Applies a completed fetch. Responses to superseded tickets are
    /// dropped; failures keep the previous page on screen. A successful
    /// response clamps the page into the reported range, effective on the
    /// next fetch.
    pub fn apply(&mut self, ticket: &FetchTicket, result: ApiResult<ProductList>) {
        if self.fetch.apply(ticket, result) == Applied::Replaced {
            self.page = self.page.min(self.fetch.display.total_pages);
            self.categories = distinct_categories(self.fetch.display.items());
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.fetch.display
    }

    /// Category options offered to the filter UI, in first-seen order.
    ///
    /// Derived from the current page's items only: a category that exists
    /// server-side but is absent from this page will not appear. Known
    /// limitation, pending a dedicated categories endpoint.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Pagination controls for the rendering layer.
    pub fn page_controls(&self) -> PageControls {
        PageControls::new(self.page, self.fetch.display.total_pages)
    }
}

/// Gathers the distinct non-empty categories present on the page.
fn distinct_categories(items: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in items {
        if !product.category.is_empty() && !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// Drives a [`CatalogController`] against a live API client.
pub struct Catalog<A> {
    api: A,
    controller: CatalogController,
}

impl<A> Catalog<A>
where
    A: ProductLister,
{
    #[must_use]
    pub fn new(api: A) -> Self {
        Self::with_page_size(api, CATALOG_PAGE_SIZE)
    }

    #[must_use]
    pub fn with_page_size(api: A, page_size: usize) -> Self {
        Self {
            api,
            controller: CatalogController::new(page_size),
        }
    }

    /// Loads the first page; call once when the page mounts.
    pub async fn init(&mut self) {
        let ticket = self.controller.init();
        self.complete(ticket).await;
    }

    pub async fn set_search(&mut self, search: impl Into<String>) {
        let ticket = self.controller.set_search(search);
        self.complete(ticket).await;
    }

    pub async fn set_category(&mut self, category: impl Into<String>) {
        let ticket = self.controller.set_category(category);
        self.complete(ticket).await;
    }

    pub async fn set_sort(&mut self, sort: SortKey) {
        let ticket = self.controller.set_sort(sort);
        self.complete(ticket).await;
    }

    pub async fn set_page(&mut self, page: usize) {
        let ticket = self.controller.set_page(page);
        self.complete(ticket).await;
    }

    pub async fn refresh(&mut self) {
        let ticket = self.controller.refresh();
        self.complete(ticket).await;
    }

    async fn complete(&mut self, ticket: FetchTicket) {
        let result = self.api.list_products(ticket.request().clone()).await;
        self.controller.apply(&ticket, result);
    }

    /// Controller state for rendering.
    pub fn controller(&self) -> &CatalogController {
        &self.controller
    }
}

/// Loads the newest products for the home-page featured strip.
///
/// Failures are logged and yield an empty list; the strip simply renders
/// nothing.
pub async fn load_featured<A>(api: &A, limit: usize) -> Vec<Product>
where
    A: ProductLister + ?Sized,
{
    let query = ProductListQuery::new(1, limit).sort(SortKey::Newest);
    match api.list_products(query).await {
        Ok(list) => list.items,
        Err(err) => {
            log::error!("Failed to fetch products: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::api::errors::ApiError;
    use crate::domain::types::ProductId;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id).expect("valid id"),
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            category: category.to_string(),
            description: String::new(),
            selling_price: Decimal::from(199),
            mrp: Decimal::from(249),
            stock: 5,
            visible: true,
            images: Vec::new(),
        }
    }

    fn page_of(items: Vec<Product>, total_items: usize) -> ProductList {
        ProductList::paged(items, total_items, 10)
    }

    #[test]
    fn search_change_resets_page_before_the_fetch_is_issued() {
        let mut controller = CatalogController::new(10);
        let ticket = controller.set_page(2);
        controller.apply(&ticket, Ok(page_of(vec![product("a", "skincare")], 25)));

        let ticket = controller.set_search("serum");
        assert_eq!(ticket.request().page, 1);
        assert_eq!(ticket.request().search.as_deref(), Some("serum"));
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn category_and_sort_changes_also_reset_page() {
        let mut controller = CatalogController::new(10);
        let ticket = controller.set_page(3);
        controller.apply(&ticket, Ok(page_of(Vec::new(), 40)));

        let ticket = controller.set_category("makeup");
        assert_eq!(ticket.request().page, 1);

        let ticket = controller.set_page(2);
        controller.apply(&ticket, Ok(page_of(Vec::new(), 40)));
        let ticket = controller.set_sort(SortKey::PriceDesc);
        assert_eq!(ticket.request().page, 1);
        assert_eq!(ticket.request().sort, Some(SortKey::PriceDesc));
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_one() {
        let mut controller = CatalogController::new(10);
        let first = controller.set_search("a");
        let second = controller.set_search("b");

        controller.apply(&second, Ok(page_of(vec![product("b1", "makeup")], 1)));
        controller.apply(
            &first,
            Ok(page_of(vec![product("a1", "skincare"), product("a2", "skincare")], 2)),
        );

        let display = controller.display();
        assert_eq!(display.items().len(), 1);
        assert_eq!(display.items()[0].id.as_str(), "b1");
        assert!(!display.is_loading());
        assert_eq!(controller.categories(), ["makeup"]);
    }

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut controller = CatalogController::new(10);
        let ticket = controller.init();
        controller.apply(
            &ticket,
            Ok(page_of(
                vec![
                    product("a", "skincare"),
                    product("b", "skincare"),
                    product("c", "makeup"),
                ],
                3,
            )),
        );

        let ticket = controller.refresh();
        controller.apply(&ticket, Err(ApiError::Server(500)));

        let display = controller.display();
        assert_eq!(display.items().len(), 3);
        assert!(!display.is_loading());
        assert!(!display.is_empty());
    }

    #[test]
    fn out_of_range_page_is_clamped_for_the_next_fetch() {
        let mut controller = CatalogController::new(10);
        let ticket = controller.set_page(4);
        assert_eq!(ticket.request().page, 4);

        // 25 items at 10 per page: only 3 pages exist.
        controller.apply(&ticket, Ok(page_of(Vec::new(), 25)));
        assert_eq!(controller.page(), 3);

        let ticket = controller.refresh();
        assert_eq!(ticket.request().page, 3);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let mut controller = CatalogController::new(10);
        let ticket = controller.init();
        controller.apply(
            &ticket,
            Ok(page_of(
                vec![
                    product("a", "skincare"),
                    product("b", "skincare"),
                    product("c", "makeup"),
                    product("d", ""),
                ],
                4,
            )),
        );

        assert_eq!(controller.categories(), ["skincare", "makeup"]);
    }

    #[test]
    fn empty_result_is_reported_as_empty() {
        let mut controller = CatalogController::new(12);
        let ticket = controller.set_search("no such product");
        controller.apply(&ticket, Ok(ProductList::paged(Vec::new(), 0, 12)));

        let display = controller.display();
        assert!(display.is_empty());
        assert_eq!(display.total_pages(), 1);
        assert!(controller.page_controls().pages.is_empty());
    }

    #[test]
    fn customer_request_always_carries_a_sort() {
        let mut controller = CatalogController::new(12);
        let ticket = controller.init();
        assert_eq!(ticket.request().sort, Some(SortKey::Newest));
        assert_eq!(ticket.request().search, None);
        assert_eq!(ticket.request().category, None);
    }
}
