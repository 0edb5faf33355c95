use polygon_gateway::ApiDoc;
use serde_json::Value;
use utoipa::OpenApi;

#[test]
fn test_openapi_spec_documents_gateway_routes() {
    let generated_spec_json = ApiDoc::openapi().to_pretty_json().unwrap();
    let spec: Value = serde_json::from_str(&generated_spec_json).unwrap();

    assert_eq!(spec["info"]["title"], "Polygon Blockchain Client");
    assert!(spec["paths"]["/health"]["get"].is_object());
    assert!(spec["paths"]["/block/number"]["get"].is_object());
    assert!(spec["paths"]["/block/by-number"]["post"].is_object());
}

#[test]
fn test_openapi_spec_documents_block_not_found() {
    let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();

    let responses = &spec["paths"]["/block/by-number"]["post"]["responses"];
    assert!(responses["200"].is_object());
    assert!(responses["404"].is_object());
    assert!(responses["500"].is_object());
    assert!(spec["components"]["schemas"]["GetBlockByNumberRequest"].is_object());
}
