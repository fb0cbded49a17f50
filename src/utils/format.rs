use chrono::{TimeZone, Utc};

/// Timestamp formateado para la UI
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTimestamp {
    /// Fecha/hora absoluta (para el tooltip)
    pub timestamp: String,
    /// Relativo tipo "5 seconds ago" (para mostrar)
    pub timestamp_ago: String,
}

/// Formatea un timestamp en ms epoch; `None` se muestra como "Never"
pub fn format_timestamp(ts: Option<i64>) -> FormattedTimestamp {
    let Some(ms) = ts else {
        return FormattedTimestamp {
            timestamp: "Never".to_string(),
            timestamp_ago: "Never".to_string(),
        };
    };

    match Utc.timestamp_millis_opt(ms).single() {
        Some(dt) => FormattedTimestamp {
            timestamp: dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            timestamp_ago: ago_string(Utc::now().signed_duration_since(dt).num_seconds()),
        },
        None => FormattedTimestamp {
            timestamp: "Invalid date".to_string(),
            timestamp_ago: "Invalid date".to_string(),
        },
    }
}

/// Convierte una diferencia en segundos a texto relativo
pub fn ago_string(delta_secs: i64) -> String {
    if delta_secs < 5 {
        return "just now".to_string();
    }
    if delta_secs < 60 {
        return unit_ago(delta_secs, "second");
    }
    let minutes = delta_secs / 60;
    if minutes < 60 {
        return unit_ago(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return unit_ago(hours, "hour");
    }
    unit_ago(hours / 24, "day")
}

fn unit_ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_timestamp_is_never() {
        let formatted = format_timestamp(None);
        assert_eq!(formatted.timestamp, "Never");
        assert_eq!(formatted.timestamp_ago, "Never");
    }

    #[test]
    fn absolute_format_is_utc() {
        let formatted = format_timestamp(Some(0));
        assert_eq!(formatted.timestamp, "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn ago_buckets() {
        assert_eq!(ago_string(2), "just now");
        assert_eq!(ago_string(45), "45 seconds ago");
        assert_eq!(ago_string(60), "1 minute ago");
        assert_eq!(ago_string(120), "2 minutes ago");
        assert_eq!(ago_string(7200), "2 hours ago");
        assert_eq!(ago_string(200_000), "2 days ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        // El reloj del backend puede ir ligeramente adelantado
        assert_eq!(ago_string(-30), "just now");
    }
}
