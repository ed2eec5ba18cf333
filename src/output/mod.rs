mod format;
mod home;
mod json;
mod table;

pub(crate) use home::{print_home_page, print_notice};
pub(crate) use json::{
    output_endpoints_json, output_home_json, output_notice_json, output_pricing_json,
};
pub(crate) use table::{PricingTableOptions, print_pricing_table};
