//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI 3.0 description of the mood endpoints to disk.
//! The output path is the first argument and defaults to `openapi.json`.

use api_lib::{error::ApiError, web::rest::ApiDoc};
use utoipa::OpenApi;

fn generate_spec(api_doc: utoipa::openapi::OpenApi, path: &str) -> Result<(), ApiError> {
    let spec_json = api_doc
        .to_pretty_json()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI document: {}", e)))?;
    std::fs::write(path, spec_json)?;
    println!("OpenAPI specification generated at {}", path);
    Ok(())
}

fn main() -> Result<(), ApiError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());
    generate_spec(ApiDoc::openapi(), &path)
}
