use rmcp::handler::server::wrapper::Parameters;
use voyager::mcp::{
    VoyagerMcpServer,
    types::{ExtraParam, QuotePriceParams},
};

use crate::{McpTestFixture, extract_tool_result_json};

fn quote_params(fixture: &McpTestFixture, base_price: &str) -> QuotePriceParams {
    QuotePriceParams {
        project_root_path: fixture.root(),
        base_price: base_price.to_string(),
        nights: 1,
        guests: 1,
        extras: Vec::new(),
        tax_rate: None,
        service_fee_rate: None,
        installments: None,
        first_due_date: None,
        locale: Some("en".to_string()),
        currency: None,
    }
}

// ============================================================================
// quote_price tests
// ============================================================================

#[tokio::test]
async fn test_quote_price_reference_booking() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VoyagerMcpServer::new();

    let mut params = quote_params(&fixture, "2450");
    params.extras = vec![
        ExtraParam {
            name: "insurance".to_string(),
            price: None,
        },
        ExtraParam {
            name: "flights".to_string(),
            price: Some("850".to_string()),
        },
    ];

    let result = server.quote_price(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["formattedTotal"], "$3,933.00");
    assert_eq!(json_result["currency"], "USD");
    assert_eq!(json_result["extrasTotal"], "970");

    let breakdown = json_result["breakdown"].as_array().unwrap();
    let categories: Vec<&str> = breakdown
        .iter()
        .map(|item| item["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec!["Accommodation", "Extras", "Service Fee", "Taxes"]
    );
    assert_eq!(breakdown[2]["formatted"], "$171.00");
    assert_eq!(breakdown[3]["label"], "Taxes");
    assert!(json_result["installments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_quote_price_installments() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VoyagerMcpServer::new();

    let mut params = quote_params(&fixture, "100");
    params.tax_rate = Some("0".to_string());
    params.service_fee_rate = Some("0".to_string());
    params.installments = Some(3);
    params.first_due_date = Some("2026-01-01".to_string());
    params.locale = Some("es".to_string());
    params.currency = Some("EUR".to_string());

    let result = server.quote_price(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locale"], "es");
    assert_eq!(json_result["breakdown"][0]["label"], "Alojamiento");

    let installments = json_result["installments"].as_array().unwrap();
    assert_eq!(installments.len(), 3);
    assert_eq!(installments[0]["amount"], "33.33");
    assert_eq!(installments[2]["amount"], "33.34");
    assert_eq!(installments[2]["formatted"], "33,34\u{a0}€");
    assert_eq!(installments[1]["dueDate"], "2026-01-31");
    assert_eq!(installments[2]["status"], "pending");
}

#[tokio::test]
async fn test_quote_price_invalid_input() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VoyagerMcpServer::new();

    let mut params = quote_params(&fixture, "100");
    params.guests = 0;
    assert!(server.quote_price(Parameters(params)).await.is_err());

    let params = quote_params(&fixture, "a lot");
    assert!(server.quote_price(Parameters(params)).await.is_err());

    let mut params = quote_params(&fixture, "100");
    params.extras = vec![ExtraParam {
        name: "yacht".to_string(),
        price: None,
    }];
    assert!(server.quote_price(Parameters(params)).await.is_err());
}
