//! Policies gating stock adjustments.

mod non_zero_quantity;
mod reorder_level;
mod sufficient_stock;

pub use non_zero_quantity::NonZeroQuantity;
pub use reorder_level::ReorderLevel;
pub use sufficient_stock::SufficientStock;
