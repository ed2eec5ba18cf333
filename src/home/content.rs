use serde::Serialize;

use crate::api::{ApiResponse, Gateway};
use crate::consts::HOME_PAGE_CONTENT_PATH;
use crate::error::AppError;
use crate::store::{HOME_PAGE_CONTENT_KEY, Store};

/// Operator-supplied home page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub(crate) enum HomeContent {
    /// No custom content; the default banner applies
    Empty,
    /// External page to embed
    Url(String),
    /// Markdown source
    Markdown(String),
}

impl HomeContent {
    pub(crate) fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            HomeContent::Empty
        } else if raw.starts_with("https://") {
            HomeContent::Url(raw.to_string())
        } else {
            HomeContent::Markdown(raw.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HomePage {
    pub(crate) content: HomeContent,
    /// True when the gateway was unreachable and the stored copy was used
    pub(crate) cached: bool,
}

/// Fetch the home page content, refreshing the stored copy.
///
/// Transport failures fall back to the stored copy; an explicit
/// `success: false` from the gateway is reported as an error.
pub(crate) fn load_home_page(
    gateway: &dyn Gateway,
    store: &mut dyn Store,
    quiet: bool,
) -> Result<HomePage, AppError> {
    let cached = store.get(HOME_PAGE_CONTENT_KEY).unwrap_or_default();

    let body = match gateway.get_text(HOME_PAGE_CONTENT_PATH) {
        Ok(body) => body,
        Err(e) => {
            if !quiet {
                eprintln!("Warning: {e}; showing stored home page content");
            }
            return Ok(HomePage {
                content: HomeContent::from_raw(&cached),
                cached: true,
            });
        }
    };

    let raw = ApiResponse::<String>::parse(HOME_PAGE_CONTENT_PATH, &body)?
        .into_data(HOME_PAGE_CONTENT_PATH)?
        .unwrap_or_default();
    if raw != cached
        && let Err(e) = store.set(HOME_PAGE_CONTENT_KEY, &raw)
        && !quiet
    {
        eprintln!("Warning: {e}");
    }

    Ok(HomePage {
        content: HomeContent::from_raw(&raw),
        cached: false,
    })
}
