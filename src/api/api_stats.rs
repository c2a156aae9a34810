use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::{api_service_token, api_validate_ip};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;

#[tracing::instrument(level = "debug")]
pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Err(response) = api_validate_ip(&request, &data) { return response; }

    let token = web::Query::<QueryToken>::from_query(request.query_string())
        .ok()
        .and_then(|params| params.into_inner().token);
    if let Some(response) = api_service_token(token, &data.api_key) { return response; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.ca_handler.get_stats())
}
