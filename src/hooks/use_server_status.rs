use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::models::ServerInfo;
use crate::services::fetch_server;
use crate::state::PollGuard;
use crate::utils::constants::POLL_INTERVAL_MS;

/// Handle del hook de estado del servidor
pub struct UseServerStatusHandle {
    /// Read-model: último estado conocido, reemplazado entero en cada poll
    pub info: UseStateHandle<ServerInfo>,
    /// Fuerza un fetch inmediato (p.ej. justo después de guardar cambios)
    pub refresh: Callback<()>,
}

/// Polling del estado de un servidor: fetch inmediato al montar y después
/// cada `POLL_INTERVAL_MS`. Cada éxito reemplaza el read-model ENTERO; cada
/// fallo se emite por `on_error` (la vista decide notificar/navegar). El
/// handle del `Interval` vive dentro del efecto y se suelta en el cleanup,
/// así nada sigue disparando fetches contra una vista desmontada.
#[hook]
pub fn use_server_status(server_id: String, on_error: Callback<String>) -> UseServerStatusHandle {
    let info = use_state(ServerInfo::default);
    let guard = use_mut_ref(PollGuard::new);

    let fetch_fn = {
        let info = info.clone();
        let guard = guard.clone();
        let server_id = server_id.clone();

        Callback::from(move |_| {
            let info = info.clone();
            let guard = guard.clone();
            let on_error = on_error.clone();
            let server_id = server_id.clone();

            let seq = guard.borrow_mut().begin();

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_server(&server_id).await {
                    Ok(data) => {
                        // Descartar respuestas viejas que llegan fuera de orden
                        if guard.borrow_mut().accept(seq) {
                            info.set(data);
                        } else {
                            log::warn!("⏭️ Respuesta de poll obsoleta (seq {}), descartada", seq);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error obteniendo servidor {}: {}", server_id, e);
                        on_error.emit(e);
                    }
                }
            });
        })
    };

    {
        let fetch_fn = fetch_fn.clone();
        use_effect_with(server_id, move |_| {
            fetch_fn.emit(());

            let interval = {
                let fetch_fn = fetch_fn.clone();
                Interval::new(POLL_INTERVAL_MS, move || fetch_fn.emit(()))
            };

            // Cleanup: cancelar el timer al desmontar la vista
            move || drop(interval)
        });
    }

    UseServerStatusHandle {
        info,
        refresh: fetch_fn,
    }
}
