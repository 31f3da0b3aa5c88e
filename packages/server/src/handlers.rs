//! HTTP handler functions for the bloom data API.

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use bloom_data_generator::generate_with_entropy;
use bloom_data_server_models::{ApiError, ApiHealth, BloomDataQueryParams};
use geojson::FeatureCollection;

use crate::query::{BloomQueryError, parse_query};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/bloom-data`
///
/// Synthesizes a `GeoJSON` feature collection of bloom observations around
/// the requested point and within the requested date range.
pub async fn bloom_data(params: web::Query<BloomDataQueryParams>) -> HttpResponse {
    let request = match parse_query(&params) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Rejected bloom data query {params:?}: {e}");
            return HttpResponse::BadRequest().json(ApiError::new(e.to_string()));
        }
    };

    let collection = generate_with_entropy(&request);
    log::debug!(
        "Serving {} observations for ({}, {})",
        collection.len(),
        request.latitude,
        request.longitude
    );

    HttpResponse::Ok().json(FeatureCollection::from(&collection))
}

/// Answers query strings that fail to decode with the same JSON error body
/// as every other rejected query.
pub fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let e = BloomQueryError::MalformedQuery(err.to_string());
    log::warn!("Rejected query string {:?}: {e}", req.query_string());

    let response = HttpResponse::BadRequest().json(ApiError::new(e.to_string()));
    InternalError::from_response(err, response).into()
}
