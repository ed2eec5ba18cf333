use crate::home::{HomeContent, HomePage};

pub(crate) fn print_home_page(page: &HomePage, server_address: &str, base_endpoint: Option<&str>) {
    if page.cached {
        eprintln!("(showing stored copy)");
    }
    match &page.content {
        HomeContent::Url(url) => println!("Home page: {url}"),
        HomeContent::Markdown(markdown) => println!("{markdown}"),
        HomeContent::Empty => {
            println!("The Unified LLMs API Gateway\n");
            println!("Better price, better stability. Just replace the model base URL with:\n");
            println!("  {server_address}");
            if let Some(endpoint) = base_endpoint {
                println!("\n  e.g. {server_address}{endpoint}");
            }
        }
    }
}

/// Print a notice, or a short line when there is none
pub(crate) fn print_notice(notice: Option<&str>) {
    match notice {
        Some(text) => println!("{}", text.trim()),
        None => println!("No new notice."),
    }
}
