use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::domain::types::ProductId;

/// Product read projection returned by the list endpoint.
///
/// `stock` and `visible` only carry meaning on the admin surface; the
/// customer endpoint may omit them, in which case the defaults apply.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub selling_price: Decimal,
    pub mrp: Decimal,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "visible_default")]
    pub visible: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

fn visible_default() -> bool {
    true
}

impl Product {
    /// Percentage off displayed when the list price exceeds the selling
    /// price; `None` when no discount applies.
    pub fn discount_percent(&self) -> Option<u32> {
        if self.mrp > self.selling_price && self.mrp > Decimal::ZERO {
            let off = (self.mrp - self.selling_price) * Decimal::ONE_HUNDRED / self.mrp;
            off.round().to_u32()
        } else {
            None
        }
    }
}

/// Server-side orderings accepted by the list endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Popular,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// Wire value sent in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
        }
    }
}
