//! Policies gating journal postings.

mod balanced_posting;
mod large_amount;
mod open_period;

pub use balanced_posting::BalancedPosting;
pub use large_amount::LargeAmount;
pub use open_period::OpenPeriod;

#[cfg(test)]
mod tests;
