use polygon_gateway::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), anyhow::Error> {
    let openapi_spec = ApiDoc::openapi().to_pretty_json()?;
    let output_path = "openapi.json";
    std::fs::write(output_path, openapi_spec)?;

    println!("OpenAPI spec written to {}", output_path);
    Ok(())
}
