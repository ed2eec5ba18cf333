use serde::Serialize;

use crate::error::AppError;
use crate::home::HomePage;
use crate::pricing::PricingSheet;

fn to_pretty<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(AppError::Encode)
}

pub(crate) fn output_pricing_json(sheet: &PricingSheet) -> Result<String, AppError> {
    to_pretty(sheet)
}

pub(crate) fn output_home_json(page: &HomePage) -> Result<String, AppError> {
    let mut value = serde_json::to_value(&page.content).map_err(AppError::Encode)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("cached".to_string(), serde_json::Value::Bool(page.cached));
    }
    to_pretty(&value)
}

pub(crate) fn output_notice_json(notice: Option<&str>) -> Result<String, AppError> {
    to_pretty(&serde_json::json!({ "notice": notice }))
}

pub(crate) fn output_endpoints_json(
    server_address: &str,
    paths: &[&str],
) -> Result<String, AppError> {
    let urls: Vec<String> = paths
        .iter()
        .map(|path| format!("{server_address}{path}"))
        .collect();
    to_pretty(&serde_json::json!({
        "server_address": server_address,
        "endpoints": urls,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::HomeContent;
    use crate::pricing::{PricePolicy, parse_pricing};

    #[test]
    fn pricing_json_keeps_raw_fields() {
        let sheet = parse_pricing(
            r#"{"success":true,"group_ratio":{"default":0.8},"data":[
                {"model_name":"mj_imagine","quota_type":1,"model_ratio":0,"model_price":"2.5","completion_ratio":0}
            ]}"#,
            PricePolicy::Strict,
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&output_pricing_json(&sheet).unwrap()).unwrap();
        assert_eq!(json["group_ratio"], 0.8);
        let row = &json["models"][0];
        assert_eq!(row["model_price"], "2.5");
        assert_eq!(row["quota_type"], 1);
        assert_eq!(
            row["formatted_price"],
            serde_json::json!({"type": "flat-rate", "price": "$2.000"})
        );
    }

    #[test]
    fn home_json_adds_cached_flag() {
        let page = HomePage {
            content: HomeContent::Markdown("# Hi".to_string()),
            cached: true,
        };
        let json: serde_json::Value = serde_json::from_str(&output_home_json(&page).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "markdown", "content": "# Hi", "cached": true})
        );
    }

    #[test]
    fn notice_json_null_when_absent() {
        let json: serde_json::Value = serde_json::from_str(&output_notice_json(None).unwrap()).unwrap();
        assert!(json["notice"].is_null());
    }

    #[test]
    fn endpoints_json_joins_server() {
        let json: serde_json::Value = serde_json::from_str(
            &output_endpoints_json("https://api.example.com", &["/v1/models"]).unwrap(),
        )
        .unwrap();
        assert_eq!(json["endpoints"][0], "https://api.example.com/v1/models");
    }
}
