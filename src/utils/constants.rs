/// URL base del backend del manager
/// Configurada en tiempo de compilación:
/// - Desarrollo: mismo origen (cadena vacía, rutas relativas /api/...)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Intervalo de polling del estado del servidor (el manager refresca cada 2.5s)
pub const POLL_INTERVAL_MS: u32 = 2500;

/// Tiempo que una notificación permanece visible antes de autodescartarse
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;
