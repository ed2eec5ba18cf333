use chrono::NaiveDate;

use crate::api::{ApiResponse, Gateway};
use crate::consts::{DATE_FORMAT, NOTICE_PATH};
use crate::error::{AppError, StoreError};
use crate::store::{NOTICE_CLOSE_DATE_KEY, Store};
use crate::utils::debug_enabled;

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whether the notice was already dismissed on `today`
pub(crate) fn notice_dismissed(store: &dyn Store, today: NaiveDate) -> bool {
    store
        .get(NOTICE_CLOSE_DATE_KEY)
        .is_some_and(|stored| stored == date_key(today))
}

/// Fetch the gateway notice unless it was dismissed today.
///
/// Returns `None` when dismissed, blank, when the gateway declines to
/// serve one, or when it cannot be reached.
pub(crate) fn pending_notice(
    gateway: &dyn Gateway,
    store: &dyn Store,
    today: NaiveDate,
    quiet: bool,
) -> Result<Option<String>, AppError> {
    if notice_dismissed(store, today) {
        return Ok(None);
    }

    let body = match gateway.get_text(NOTICE_PATH) {
        Ok(body) => body,
        Err(e) => {
            if !quiet {
                eprintln!("Warning: {e}; no notice shown");
            }
            return Ok(None);
        }
    };
    let response = ApiResponse::<String>::parse(NOTICE_PATH, &body)?;
    if !response.success {
        if debug_enabled() {
            eprintln!(
                "[DEBUG] {NOTICE_PATH} declined: {}",
                response.message.as_deref().unwrap_or("")
            );
        }
        return Ok(None);
    }

    Ok(response.data.filter(|text| !text.trim().is_empty()))
}

/// Hide the notice for the rest of `today`.
pub(crate) fn dismiss_notice(store: &mut dyn Store, today: NaiveDate) -> Result<(), StoreError> {
    store.set(NOTICE_CLOSE_DATE_KEY, &date_key(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubGateway;
    use crate::store::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn shows_notice_when_not_dismissed() {
        let gateway = StubGateway::default()
            .with(NOTICE_PATH, r#"{"success":true,"data":"Maintenance tonight"}"#);
        let store = MemoryStore::default();

        let notice = pending_notice(&gateway, &store, day(18), true).unwrap();
        assert_eq!(notice.as_deref(), Some("Maintenance tonight"));
    }

    #[test]
    fn dismissed_today_skips_fetch() {
        let gateway = StubGateway::default()
            .with(NOTICE_PATH, r#"{"success":true,"data":"Maintenance tonight"}"#);
        let mut store = MemoryStore::default();
        dismiss_notice(&mut store, day(18)).unwrap();

        assert!(notice_dismissed(&store, day(18)));
        assert_eq!(pending_notice(&gateway, &store, day(18), true).unwrap(), None);
        assert!(gateway.requests.borrow().is_empty());
    }

    #[test]
    fn dismissal_expires_next_day() {
        let gateway = StubGateway::default()
            .with(NOTICE_PATH, r#"{"success":true,"data":"Maintenance tonight"}"#);
        let mut store = MemoryStore::default();
        dismiss_notice(&mut store, day(17)).unwrap();

        assert_eq!(store.get(NOTICE_CLOSE_DATE_KEY).as_deref(), Some("2026-10-17"));
        assert!(!notice_dismissed(&store, day(18)));
        assert!(pending_notice(&gateway, &store, day(18), true).unwrap().is_some());
    }

    #[test]
    fn blank_notice_is_not_shown() {
        let gateway =
            StubGateway::default().with(NOTICE_PATH, r#"{"success":true,"data":"  \n "}"#);
        let store = MemoryStore::default();
        assert_eq!(pending_notice(&gateway, &store, day(18), true).unwrap(), None);
    }

    #[test]
    fn declined_notice_is_not_an_error() {
        let gateway =
            StubGateway::default().with(NOTICE_PATH, r#"{"success":false,"message":"off"}"#);
        let store = MemoryStore::default();
        assert_eq!(pending_notice(&gateway, &store, day(18), true).unwrap(), None);
    }

    #[test]
    fn unreachable_gateway_shows_no_notice() {
        let gateway = StubGateway::default();
        let store = MemoryStore::default();
        assert_eq!(pending_notice(&gateway, &store, day(18), true).unwrap(), None);
        assert_eq!(*gateway.requests.borrow(), vec![NOTICE_PATH.to_string()]);
    }

    #[test]
    fn malformed_notice_is_an_error() {
        let gateway = StubGateway::default().with(NOTICE_PATH, "<html>");
        let store = MemoryStore::default();
        let err = pending_notice(&gateway, &store, day(18), true).unwrap_err();
        assert!(matches!(err, AppError::Payload { .. }));
    }
}
