use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use voyager::mcp::{VoyagerMcpServer, types::ListLocalesParams};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// list_locales tests
// ============================================================================

#[tokio::test]
async fn test_list_locales_builtin() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VoyagerMcpServer::new();

    let params = Parameters(ListLocalesParams {
        project_root_path: fixture.root(),
        locale: Some("ja".to_string()),
    });

    let result = server.list_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["source"], "builtin");
    assert_eq!(json_result["currentLocale"], "ja");
    assert_eq!(json_result["fallbackLocale"], "en");

    let locales = json_result["locales"].as_array().unwrap();
    let codes: Vec<&str> = locales.iter().map(|l| l["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["de", "en", "es", "fr", "it", "ja", "pt", "zh"]);

    let ja = locales.iter().find(|l| l["code"] == "ja").unwrap();
    assert_eq!(ja["name"], "日本語");
    assert_eq!(ja["keyCount"], 20);
}

#[tokio::test]
async fn test_list_locales_from_directory() {
    let fixture = McpTestFixture::with_messages(vec![
        ("en", json!({"a": "1", "b": {"c": "2"}})),
        ("es", json!({"a": "uno"})),
    ])
    .unwrap();
    fixture
        .write_locale_file("broken", &json!(["not", "an", "object"]))
        .unwrap();

    let server = VoyagerMcpServer::new();
    let params = Parameters(ListLocalesParams {
        project_root_path: fixture.root(),
        locale: Some("es".to_string()),
    });

    let result = server.list_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["source"].as_str().unwrap().ends_with("messages"));
    assert_eq!(json_result["currentLocale"], "es");

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 2);
    let en = locales.iter().find(|l| l["code"] == "en").unwrap();
    assert_eq!(en["keyCount"], 2);

    let warnings = json_result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("broken.json"));
}

#[tokio::test]
async fn test_list_locales_reports_non_string_values() {
    let fixture = McpTestFixture::with_messages(vec![(
        "en",
        json!({"hello": "Hello", "limits": {"guests": 8}}),
    )])
    .unwrap();

    let server = VoyagerMcpServer::new();
    let params = Parameters(ListLocalesParams {
        project_root_path: fixture.root(),
        locale: None,
    });

    let result = server.list_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let warnings = json_result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    let warning = warnings[0].as_str().unwrap();
    assert!(warning.ends_with("en.json: ignored non-string value at \"limits.guests\""));
}

#[tokio::test]
async fn test_list_locales_missing_project() {
    let server = VoyagerMcpServer::new();
    let params = Parameters(ListLocalesParams {
        project_root_path: "/definitely/not/a/project".to_string(),
        locale: None,
    });

    assert!(server.list_locales(params).await.is_err());
}
