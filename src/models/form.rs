use crate::models::ServerInfo;

/// Buffer editable del formulario de configuración (write-model)
///
/// Ciclo de vida independiente del read-model: se siembra UNA sola vez desde
/// `ServerInfo` (mientras sigue prístino) y a partir de ahí solo lo muta el
/// usuario; los polls de fondo nunca lo pisan.
///
/// Caso borde conocido: un servidor cuya config real es hostname vacío y
/// puerto 0 es indistinguible de "todavía sin sembrar". Se mantiene así a
/// propósito, el sentinela ES el contrato.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerFormData {
    pub hostname: String,
    pub port: u16,
}

impl ServerFormData {
    /// ¿Sigue en su estado inicial (elegible para sembrado)?
    pub fn is_pristine(&self) -> bool {
        self.hostname.is_empty() && self.port == 0
    }

    /// Copia hostname/puerto desde el estado reportado por el servidor
    pub fn seeded_from(info: &ServerInfo) -> Self {
        Self {
            hostname: info.hostname.clone(),
            port: info.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServerInfo, SessionInfo};

    fn status(hostname: &str, port: u16) -> ServerInfo {
        ServerInfo {
            last_updated: Some(1_700_000_000_000),
            hostname: hostname.to_string(),
            port,
            session_info: SessionInfo::default(),
        }
    }

    // Misma decisión que toma el efecto de la página en cada refresh
    fn reconcile(form: &mut ServerFormData, info: &ServerInfo) {
        if form.is_pristine() {
            *form = ServerFormData::seeded_from(info);
        }
    }

    #[test]
    fn seeds_once_while_pristine() {
        let mut form = ServerFormData::default();
        assert!(form.is_pristine());

        reconcile(&mut form, &status("a.com", 25565));
        assert_eq!(form.hostname, "a.com");
        assert_eq!(form.port, 25565);
        assert!(!form.is_pristine());
    }

    #[test]
    fn user_edits_survive_refreshes() {
        let mut form = ServerFormData::default();
        reconcile(&mut form, &status("a.com", 25565));

        // El usuario escribe otro hostname...
        form.hostname = "b.com".to_string();

        // ...y diez polls después el buffer sigue intacto
        for _ in 0..10 {
            reconcile(&mut form, &status("a.com", 25565));
        }
        assert_eq!(form.hostname, "b.com");
        assert_eq!(form.port, 25565);
    }

    #[test]
    fn seed_fires_at_most_once() {
        let mut form = ServerFormData::default();
        let mut seeds = 0;

        for i in 0..5 {
            let info = status("a.com", 20000 + i);
            if form.is_pristine() {
                form = ServerFormData::seeded_from(&info);
                seeds += 1;
            }
        }
        assert_eq!(seeds, 1);
        assert_eq!(form.port, 20000);
    }

    #[test]
    fn empty_config_counts_as_pristine() {
        // Caso borde documentado: config real "" / 0 se re-sembraría
        let form = ServerFormData::seeded_from(&status("", 0));
        assert!(form.is_pristine());
    }
}
