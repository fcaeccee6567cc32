pub mod product;
pub mod types;
