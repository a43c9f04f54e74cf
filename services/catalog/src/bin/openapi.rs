//! services/catalog/src/bin/openapi.rs
//!
//! Generates the OpenAPI 3.0 specification for the catalog API and saves it to
//! `openapi.json`.

use catalog_service::web::ApiDoc;
use storefront_http::write_openapi;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = "openapi.json";
    write_openapi(ApiDoc::openapi(), path)?;
    println!("OpenAPI specification generated at {}", path);
    Ok(())
}
