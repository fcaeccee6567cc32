//! List controllers shared by the customer and admin surfaces.
//!
//! Controllers are synchronous state machines. Every query-state change
//! issues a sequence-stamped [`FetchTicket`]; the caller performs the network
//! call and applies the result back, which only takes effect while the ticket
//! is still the newest one issued. A slow response to a superseded request
//! can therefore never overwrite a newer page. The async wrappers
//! ([`catalog::Catalog`], [`admin::AdminPanel`]) drive that cycle against a
//! live API client.

pub mod admin;
pub mod catalog;

use crate::api::errors::ApiResult;
use crate::api::{ProductList, ProductListQuery};
use crate::domain::product::Product;

/// Derived state handed to the rendering layer.
#[derive(Clone, Debug)]
pub struct DisplayState {
    items: Vec<Product>,
    total_pages: usize,
    is_loading: bool,
}

impl DisplayState {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
            is_loading: false,
        }
    }

    /// Products on the current page.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Page count reported by the last successful fetch (at least 1).
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// True exactly while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True once the last fetch settled and produced no items.
    pub fn is_empty(&self) -> bool {
        !self.is_loading && self.items.is_empty()
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one issued fetch: the request to execute plus the sequence
/// number used to detect superseded responses.
#[derive(Clone, Debug)]
pub struct FetchTicket {
    seq: u64,
    request: ProductListQuery,
}

impl FetchTicket {
    /// Request the caller should pass to
    /// [`ProductLister::list_products`](crate::api::ProductLister::list_products).
    pub fn request(&self) -> &ProductListQuery {
        &self.request
    }
}

/// Outcome of applying a completed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Applied {
    /// Response was current and replaced the display state.
    Replaced,
    /// Response belonged to a superseded request and was dropped.
    Stale,
    /// The current request failed; previous items were kept.
    Failed,
}

/// Fetch sequencing plus the display state it guards.
#[derive(Debug, Default)]
struct FetchState {
    issued: u64,
    display: DisplayState,
}

impl FetchState {
    fn issue(&mut self, request: ProductListQuery) -> FetchTicket {
        self.issued += 1;
        self.display.is_loading = true;
        FetchTicket {
            seq: self.issued,
            request,
        }
    }

    fn apply(&mut self, ticket: &FetchTicket, result: ApiResult<ProductList>) -> Applied {
        if ticket.seq != self.issued {
            // A newer request owns the display state now.
            return Applied::Stale;
        }
        self.display.is_loading = false;
        match result {
            Ok(list) => {
                self.display.items = list.items;
                self.display.total_pages = list.total_pages.max(1);
                Applied::Replaced
            }
            Err(err) => {
                log::error!("Failed to fetch products: {err}");
                Applied::Failed
            }
        }
    }
}
