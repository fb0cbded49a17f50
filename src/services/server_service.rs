// ============================================================================
// SERVER SERVICE - SOLO COMUNICACIÓN HTTP (stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el manager
// ============================================================================

use gloo_net::http::Request;

use crate::models::{DeleteServerResponse, ServerInfo, ServerSummary, UpdateServerRequest};
use crate::utils::constants::BACKEND_URL;

fn api_url(path: &str) -> String {
    format!("{}/api/servers{}", BACKEND_URL, path)
}

/// Listar servidores
pub async fn fetch_servers() -> Result<Vec<ServerSummary>, String> {
    let response = Request::get(&api_url(""))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<ServerSummary>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Obtener el estado actual de un servidor
pub async fn fetch_server(server_id: &str) -> Result<ServerInfo, String> {
    let response = Request::get(&api_url(&format!("/{}", server_id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<ServerInfo>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Crear un servidor nuevo; devuelve el id asignado por el manager
pub async fn create_server() -> Result<String, String> {
    let response = Request::post(&api_url("/create"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<String>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Actualizar hostname/puerto de un servidor
///
/// El manager responde con cadena vacía cuando todo fue bien, o con un
/// mensaje de error en el body.
pub async fn update_server(
    server_id: &str,
    request: &UpdateServerRequest,
) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/{}", server_id)))
        .json(request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    // "" (o "\"\"" si viene serializado como JSON) significa éxito
    if body.is_empty() || body == "\"\"" {
        Ok(())
    } else {
        Err(body)
    }
}

/// Borrar un servidor
pub async fn delete_server(server_id: &str) -> Result<DeleteServerResponse, String> {
    let response = Request::delete(&api_url(&format!("/{}", server_id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<DeleteServerResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
