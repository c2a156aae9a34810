use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api_certificate::{api_service_ca_certificate_get, api_service_certificate_post};
use crate::api::api_stats::api_service_stats_get;
use crate::api::structs::api_service_data::ApiServiceData;

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(Arc::clone(&data)));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("certificate").route(web::post().to(api_service_certificate_post)));
        cfg.service(web::resource("certificate/ca").route(web::get().to(api_service_ca_certificate_get)));
        cfg.service(web::resource("stats").route(web::get().to(api_service_stats_get)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
) -> std::io::Result<(ServerHandle, Server)>
{
    let config = Arc::clone(&data.api_server_config);
    let server = HttpServer::new(move || {
        App::new().configure(api_service_routes(Arc::clone(&data)))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize);

    let server = if config.ssl {
        info!("[API] Starting server listener with SSL on {}", addr);
        server.bind_rustls_0_23((addr.ip(), addr.port()), api_service_tls_config(&config.ssl_cert, &config.ssl_key)?)?
    } else {
        info!("[API] Starting server listener on {}", addr);
        server.bind((addr.ip(), addr.port()))?
    };

    let server = server.disable_signals().run();
    Ok((server.handle(), server))
}

pub fn api_service_tls_config(cert_path: &str, key_path: &str) -> std::io::Result<rustls::ServerConfig>
{
    let certs_file = &mut BufReader::new(File::open(cert_path)?);
    let key_file = &mut BufReader::new(File::open(key_path)?);

    let tls_certs = rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>()?;
    let tls_key = rustls_pemfile::private_key(key_file)?.ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, format!("no private key found in {key_path}"))
    })?;

    rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(std::io::Error::other)?
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(std::io::Error::other)
}

pub fn api_service_token(token: Option<String>, api_key: &str) -> Option<HttpResponse>
{
    match token {
        None => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if token_code != api_key {
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}

pub fn api_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Result<IpAddr, ()>
{
    let origin_ip = match request.peer_addr() {
        None => {
            return Err(());
        }
        Some(ip) => {
            ip.ip()
        }
    };
    if real_ip.is_empty() {
        return Ok(origin_ip);
    }
    match request.headers().get(real_ip) {
        Some(header) => {
            match header.to_str() {
                Ok(value) => IpAddr::from_str(value.trim()).map_err(|_| ()),
                Err(_) => Err(()),
            }
        }
        None => {
            Ok(origin_ip)
        }
    }
}

pub fn api_validate_ip(request: &HttpRequest, data: &ApiServiceData) -> Result<IpAddr, HttpResponse>
{
    api_service_retrieve_remote_ip(request, &data.api_server_config.real_ip).map_err(|_| {
        HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
            "status": "invalid ip"
        }))
    })
}

pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Err(response) = api_validate_ip(&request, &data) {
        return response;
    }

    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
