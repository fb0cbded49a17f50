use serde::{Deserialize, Serialize};

// ============================================================================
// MODELOS DE SERVIDOR - espejo del API del manager
// ============================================================================

/// Estado completo de un servidor (read-model)
///
/// Se reemplaza ENTERO en cada poll exitoso; nunca se fusiona parcialmente
/// con un valor anterior.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Timestamp (ms epoch) del último ping exitoso, null si nunca hubo uno
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<i64>,
    pub hostname: String,
    pub port: u16,
    #[serde(rename = "sessionInfo")]
    pub session_info: SessionInfo,
}

/// Datos de la sesión que reporta el servidor (claves kebab-case en el wire)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionInfo {
    pub version: String,
    pub protocol: i32,
    pub players: i32,
    #[serde(rename = "max-players")]
    pub max_players: i32,
    /// MOTD línea 1
    #[serde(rename = "host-name")]
    pub host_name: String,
    /// MOTD línea 2
    #[serde(rename = "world-name")]
    pub world_name: String,
}

/// Entrada del listado de servidores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSummary {
    pub id: String,
    pub hostname: String,
    pub port: u16,
}

/// Body del POST de actualización (hostname/puerto editables)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateServerRequest {
    pub hostname: String,
    pub port: u16,
}

/// Respuesta del DELETE: `{}` en éxito, `{"error": "..."}` si falló
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteServerResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manager_payload() {
        let json = r#"{
            "lastUpdated": 1700000000000,
            "hostname": "mc.example.com",
            "port": 19132,
            "sessionInfo": {
                "version": "1.21.0",
                "protocol": 686,
                "players": 3,
                "max-players": 10,
                "host-name": "Welcome",
                "world-name": "Survival"
            }
        }"#;

        let info: ServerInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.last_updated, Some(1_700_000_000_000));
        assert_eq!(info.hostname, "mc.example.com");
        assert_eq!(info.port, 19132);
        assert_eq!(info.session_info.version, "1.21.0");
        assert_eq!(info.session_info.protocol, 686);
        assert_eq!(info.session_info.players, 3);
        assert_eq!(info.session_info.max_players, 10);
        assert_eq!(info.session_info.host_name, "Welcome");
        assert_eq!(info.session_info.world_name, "Survival");
    }

    #[test]
    fn last_updated_may_be_null() {
        let json = r#"{
            "lastUpdated": null,
            "hostname": "",
            "port": 0,
            "sessionInfo": {
                "version": "",
                "protocol": 0,
                "players": 0,
                "max-players": 0,
                "host-name": "",
                "world-name": ""
            }
        }"#;

        let info: ServerInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.last_updated, None);
        assert_eq!(info, ServerInfo::default());
    }

    #[test]
    fn delete_response_error_is_optional() {
        let ok: DeleteServerResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ok.error, None);

        let failed: DeleteServerResponse =
            serde_json::from_str(r#"{"error": "Server is in use"}"#).unwrap();
        assert_eq!(failed.error.as_deref(), Some("Server is in use"));
    }
}
