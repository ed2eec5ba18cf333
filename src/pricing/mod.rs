mod format;
mod loader;
mod response;
mod types;

pub(crate) use loader::load_pricing;
#[cfg(test)]
pub(crate) use response::parse_pricing;
pub(crate) use response::{PricePolicy, PricingSheet};
pub(crate) use types::{FormattedPrice, QuotaType};
