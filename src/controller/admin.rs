//! Admin product table controller and its mutation relay.

use crate::ADMIN_PAGE_SIZE;
use crate::api::errors::ApiResult;
use crate::api::{ProductList, ProductListQuery, ProductLister, ProductWriter, UpdateProduct};
use crate::domain::types::ProductId;
use crate::pagination::PageControls;

use super::{Applied, DisplayState, FetchState, FetchTicket};

/// Message shown by the confirmation gate before a product is deleted.
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this product?";

/// Blocking yes/no prompt shown before destructive actions.
///
/// Injectable so tests and non-interactive frontends can answer without a
/// real dialog.
pub trait ConfirmGate {
    fn confirm(&self, message: &str) -> bool;
}

/// Query and display state behind the admin product table.
///
/// Same fetch discipline as
/// [`CatalogController`](super::catalog::CatalogController), minus sorting
/// and category extraction; the admin table keeps the backend's default
/// order.
#[derive(Debug)]
pub struct AdminController {
    page: usize,
    page_size: usize,
    search: String,
    category: String,
    fetch: FetchState,
}

impl AdminController {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            search: String::new(),
            category: String::new(),
            fetch: FetchState::default(),
        }
    }

    /// Issues the initial fetch for the default query; call once on mount.
    pub fn init(&mut self) -> FetchTicket {
        self.refresh()
    }

    /// Changes the search text; filter changes return to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) -> FetchTicket {
        self.search = search.into();
        self.page = 1;
        self.refresh()
    }

    /// Changes the category filter; an empty string selects all.
    pub fn set_category(&mut self, category: impl Into<String>) -> FetchTicket {
        self.category = category.into();
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
    }

    /// Applies a completed fetch; same stale/failure rules as the catalog.
    pub fn apply(&mut self, ticket: &FetchTicket, result: ApiResult<ProductList>) {
        if self.fetch.apply(ticket, result) == Applied::Replaced {
            self.page = self.page.min(self.fetch.display.total_pages);
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.fetch.display
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

    /// Pagination controls for the rendering layer.
    pub fn page_controls(&self) -> PageControls {
        PageControls::new(self.page, self.fetch.display.total_pages)
    }
}

/// Admin surface: the list controller plus the mutation relay that keeps it
/// consistent with the backend after edits.
pub struct AdminPanel<A, G> {
    api: A,
    gate: G,
    controller: AdminController,
}

impl<A, G> AdminPanel<A, G>
where
    A: ProductLister + ProductWriter,
    G: ConfirmGate,
{
    #[must_use]
    pub fn new(api: A, gate: G) -> Self {
        Self::with_page_size(api, gate, ADMIN_PAGE_SIZE)
    }

    #[must_use]
    pub fn with_page_size(api: A, gate: G, page_size: usize) -> Self {
        Self {
            api,
            gate,
            controller: AdminController::new(page_size),
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

    pub async fn set_page(&mut self, page: usize) {
        let ticket = self.controller.set_page(page);
        self.complete(ticket).await;
    }

    pub async fn refresh(&mut self) {
        let ticket = self.controller.refresh();
        self.complete(ticket).await;
    }

    /// Shows or hides a product, then re-fetches the current page so
    /// server-side counts stay authoritative. No local patching: hiding an
    /// item can change what the current filter matches.
    pub async fn set_visibility(&mut self, id: &ProductId, visible: bool) {
        let updates = UpdateProduct {
            visible: Some(visible),
        };
        match self.api.update_product(id, &updates).await {
            Ok(()) => self.refresh().await,
            Err(err) => log::error!("Failed to update product: {err}"),
        }
    }

    /// Deletes a product once the confirmation gate approves, then
    /// re-fetches the current page. Deleting the last item of a page can
    /// shrink the page count; the follow-up fetch clamps the page.
    pub async fn delete_product(&mut self, id: &ProductId) {
        if !self.gate.confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        match self.api.delete_product(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => log::error!("Failed to delete product: {err}"),
        }
    }

    async fn complete(&mut self, ticket: FetchTicket) {
        let result = self.api.list_products(ticket.request().clone()).await;
        self.controller.apply(&ticket, result);
    }

    /// Controller state for rendering.
    pub fn controller(&self) -> &AdminController {
        &self.controller
    }
}
