//! Bridge WASM <-> JavaScript trung lập framework cho dữ liệu cột mốc.

use portfolio_core::{MilestoneList, PortfolioError};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Danh sách cột mốc dựng sẵn dưới dạng mảng JS.
#[wasm_bindgen]
pub fn milestones() -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    to_value(&MilestoneList::journey())
        .map_err(|err| JsValue::from_str(&format!("Không serialize danh sách: {err}")))
}

#[wasm_bindgen(js_name = lessonForRole)]
pub fn lesson_for_role(role: &str, milestones: Option<JsValue>) -> Result<String, JsValue> {
    let list = read_milestones(milestones)?;
    Ok(list.lesson_for_role(role).to_string())
}

/// Các dòng `"<role> -> <lesson>"` theo thứ tự danh sách.
#[wasm_bindgen(js_name = lessonSummary)]
pub fn lesson_summary(milestones: Option<JsValue>) -> Result<JsValue, JsValue> {
    let list = read_milestones(milestones)?;
    to_value(&list.lesson_summary())
        .map_err(|err| JsValue::from_str(&format!("Không serialize tóm tắt: {err}")))
}

/// Kiểm tra một danh sách do JS cung cấp và trả lại bản đã chuẩn hóa.
#[wasm_bindgen(js_name = validateMilestones)]
pub fn validate_milestones(input: JsValue) -> Result<JsValue, JsValue> {
    let list = read_milestones(Some(input))?;
    to_value(&list).map_err(|err| JsValue::from_str(&format!("Không serialize danh sách: {err}")))
}

fn read_milestones(input: Option<JsValue>) -> Result<MilestoneList, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let value = match input {
        Some(js_value) if !js_value.is_undefined() && !js_value.is_null() => Some(
            from_value::<serde_json::Value>(js_value)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON: {err}")))?,
        ),
        _ => None,
    };

    parse_milestones(value).map_err(|err| JsValue::from_str(&format_portfolio_error(err)))
}

fn parse_milestones(value: Option<serde_json::Value>) -> Result<MilestoneList, PortfolioError> {
    match value {
        Some(value) => MilestoneList::from_json_value(value),
        None => Ok(MilestoneList::journey()),
    }
}

fn format_portfolio_error(err: PortfolioError) -> String {
    format!("Portfolio error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_input_uses_the_journey() {
        assert_eq!(parse_milestones(None), Ok(MilestoneList::journey()));
    }

    #[test]
    fn custom_list_is_validated() {
        let value = json!([
            { "role": "Intern", "imageUrl": "a.png", "summary": "s", "lesson": "l" },
            { "role": "Intern", "imageUrl": "b.png", "summary": "s", "lesson": "l" }
        ]);
        let err = parse_milestones(Some(value)).unwrap_err();
        assert_eq!(
            format_portfolio_error(err),
            "Portfolio error: Vai trò bị trùng lặp: Intern"
        );
    }
}
