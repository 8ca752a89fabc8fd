use std::collections::HashMap;

use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use voyager::mcp::{VoyagerMcpServer, types::TranslateParams};

use crate::{McpTestFixture, extract_tool_result_json};

fn translate_params(
    fixture: &McpTestFixture,
    key: &str,
    locale: &str,
    params: &[(&str, &str)],
) -> Parameters<TranslateParams> {
    Parameters(TranslateParams {
        project_root_path: fixture.root(),
        key: key.to_string(),
        params: params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
        locale: Some(locale.to_string()),
    })
}

// ============================================================================
// translate tests
// ============================================================================

#[tokio::test]
async fn test_translate_builtin() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VoyagerMcpServer::new();

    let params = translate_params(
        &fixture,
        "booking.stay",
        "es",
        &[("nights", "7"), ("guests", "2")],
    );
    let result = server.translate(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Noches: 7, viajeros: 2");
    assert_eq!(json_result["resolved"], true);
    assert_eq!(json_result["resolvedLocale"], "es");
    assert_eq!(json_result["missingParams"], json!([]));
}

#[tokio::test]
async fn test_translate_fallback_and_missing_params() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VoyagerMcpServer::new();

    let params = translate_params(&fixture, "payment.installment", "de", &[("number", "1")]);
    let result = server.translate(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Payment 1 of {count}");
    assert_eq!(json_result["currentLocale"], "de");
    assert_eq!(json_result["resolvedLocale"], "en");
    assert_eq!(json_result["missingParams"], json!(["count"]));
}

#[tokio::test]
async fn test_translate_unknown_key() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VoyagerMcpServer::new();

    let params = translate_params(&fixture, "does.not.exist", "en", &[]);
    let result = server.translate(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "does.not.exist");
    assert_eq!(json_result["resolved"], false);
    assert!(json_result["resolvedLocale"].is_null());
}

#[tokio::test]
async fn test_translate_custom_catalog() {
    let fixture = McpTestFixture::with_messages(vec![
        ("en", json!({"greeting": "Hello {name}", "empty": ""})),
        ("es", json!({"greeting": "Hola {name}"})),
    ])
    .unwrap();
    let server = VoyagerMcpServer::new();

    let params = translate_params(&fixture, "greeting", "es", &[("name", "Ana")]);
    let result = server.translate(params).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "Hola Ana");

    let params = translate_params(&fixture, "empty", "en", &[]);
    let result = server.translate(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["text"], "empty");
    assert_eq!(json_result["resolved"], false);
}
