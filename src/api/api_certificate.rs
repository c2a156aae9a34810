use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use log::{debug, error};
use serde_json::json;
use crate::api::api::api_validate_ip;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::ca::enums::ca_error::CaError;
use crate::ca::enums::certificate_response::CertificateResponse;
use crate::ca::structs::caller_identity::CallerIdentity;

#[tracing::instrument(level = "debug", skip(body))]
pub async fn api_service_certificate_post(request: HttpRequest, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let ip = match api_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(response) => { return response; }
    };
    debug!("[API] Certificate request from {}", ip);

    let handler = Arc::clone(&data.ca_handler);
    let caller = CallerIdentity::from(ip);
    let result = web::block(move || handler.get_cert(&body, Some(&caller))).await;

    match result {
        Ok(Ok(response)) => api_service_certificate_response(&response),
        Ok(Err(e)) => api_service_certificate_error(&e),
        Err(e) => {
            error!("[API] Certificate request from {} was not handled: {}", ip, e);
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
                "status": "internal_error"
            }))
        }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_ca_certificate_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Err(response) = api_validate_ip(&request, &data) { return response; }

    match data.ca_handler.ca_certificate() {
        Some(certificate) => HttpResponse::Ok()
            .content_type("application/x-pem-file")
            .body(certificate),
        None => HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
            "status": "not_ca"
        })),
    }
}

pub fn api_service_certificate_response(response: &CertificateResponse) -> HttpResponse
{
    let (certificate, ca_certificate) = response.to_pair();
    let mut builder = match response {
        CertificateResponse::Pending => HttpResponse::Accepted(),
        _ => HttpResponse::Ok(),
    };
    builder.content_type(ContentType::json()).json(json!({
        "status": response.status(),
        "certificate": certificate,
        "ca_certificate": ca_certificate
    }))
}

pub fn api_service_certificate_error(error: &CaError) -> HttpResponse
{
    let status = match error {
        CaError::MalformedRequest(_) | CaError::MissingHostname => StatusCode::BAD_REQUEST,
        CaError::KeyMismatch { .. } => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponseBuilder::new(status).content_type(ContentType::json()).json(json!({
        "status": error.kind(),
        "error": error.to_string()
    }))
}
