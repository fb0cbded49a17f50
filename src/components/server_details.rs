use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::app::Route;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::notification::NotificationColor;
use crate::hooks::use_server_status;
use crate::models::{ServerFormData, UpdateServerRequest};
use crate::services::{delete_server, update_server};
use crate::state::ConfirmFlow;
use crate::utils::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct ServerDetailsPageProps {
    pub server_id: String,
    pub on_navigate: Callback<Route>,
    pub on_notify: Callback<(String, NotificationColor)>,
}

/// Vista de detalle/administración de un servidor
///
/// El read-model (estado del servidor) se refresca solo vía polling; el
/// write-model (formulario) se siembra una única vez y después pertenece al
/// usuario hasta que guarda.
#[function_component(ServerDetailsPage)]
pub fn server_details_page(props: &ServerDetailsPageProps) -> Html {
    // Fallo de poll: el servidor ya no está accesible, avisar y volver al
    // listado (sin reintentos)
    let on_poll_error = {
        let on_navigate = props.on_navigate.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: String| {
            on_notify.emit((format!("Error loading server: {}", e), NotificationColor::Red));
            on_navigate.emit(Route::Servers);
        })
    };

    let status = use_server_status(props.server_id.clone(), on_poll_error);
    let form = use_state(ServerFormData::default);
    let delete_open = use_state(|| false);
    let delete_flow = use_mut_ref(ConfirmFlow::new);

    // Sembrar el formulario desde el estado UNA sola vez (mientras siga
    // prístino); los refrescos de fondo nunca pisan lo que escribió el usuario
    {
        let form = form.clone();
        use_effect_with((*status.info).clone(), move |info| {
            if form.is_pristine() {
                form.set(ServerFormData::seeded_from(info));
            }
        });
    }

    let on_hostname_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut data = (*form).clone();
                data.hostname = input.value();
                form.set(data);
            }
        })
    };

    let on_port_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut data = (*form).clone();
                data.port = input.value().parse().unwrap_or(0);
                form.set(data);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let refresh = status.refresh.clone();
        let server_id = props.server_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = UpdateServerRequest {
                hostname: form.hostname.clone(),
                port: form.port,
            };
            let refresh = refresh.clone();
            let server_id = server_id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match update_server(&server_id, &request).await {
                    // Con el cambio aplicado, refrescar el read-model ya mismo
                    // en vez de esperar al siguiente tick del timer
                    Ok(()) => refresh.emit(()),
                    Err(e) => log::error!("❌ Error actualizando servidor {}: {}", server_id, e),
                }
            });
        })
    };

    let on_delete_click = {
        let delete_flow = delete_flow.clone();
        let delete_open = delete_open.clone();
        let server_id = props.server_id.clone();
        let on_navigate = props.on_navigate.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |_: MouseEvent| {
            let server_id = server_id.clone();
            let on_navigate = on_navigate.clone();
            let on_notify = on_notify.clone();

            // Registrar la acción pendiente (reemplaza cualquier anterior) y
            // abrir el modal; el DELETE solo sale si el usuario confirma
            delete_flow.borrow_mut().request(move |confirmed| {
                if !confirmed {
                    return;
                }

                wasm_bindgen_futures::spawn_local(async move {
                    match delete_server(&server_id).await {
                        Ok(response) => match response.error {
                            Some(error) => {
                                log::error!("❌ Error borrando servidor {}: {}", server_id, error);
                                on_notify.emit((
                                    format!("Failed to delete server: {}", error),
                                    NotificationColor::Red,
                                ));
                            }
                            None => {
                                on_notify.emit(("Deleted server".to_string(), NotificationColor::Green));
                                on_navigate.emit(Route::Servers);
                            }
                        },
                        Err(e) => {
                            log::error!("❌ Error borrando servidor {}: {}", server_id, e);
                            on_notify.emit((
                                format!("Failed to delete server: {}", e),
                                NotificationColor::Red,
                            ));
                        }
                    }
                });
            });

            delete_open.set(true);
        })
    };

    let on_modal_close = {
        let delete_flow = delete_flow.clone();
        let delete_open = delete_open.clone();

        Callback::from(move |confirmed: bool| {
            delete_open.set(false);
            delete_flow.borrow_mut().resolve(confirmed);
        })
    };

    let info = &*status.info;
    let formatted = format_timestamp(info.last_updated);

    html! {
        <>
            <ConfirmModal
                title="Delete server"
                message="Are you sure you want to delete this server? This action cannot be undone."
                confirm_text="Delete"
                open={*delete_open}
                on_close={on_modal_close}
            />
            <div class="page server-details">
                <div class="card">
                    <h3>{"Logs"}</h3>
                    <div class="info-row">
                        <div class="info-label">{"Last Updated:"}</div>
                        <div title={formatted.timestamp.clone()}>{ formatted.timestamp_ago.clone() }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"MOTD 1:"}</div>
                        <div>{ &info.session_info.host_name }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"MOTD 2:"}</div>
                        <div>{ &info.session_info.world_name }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"Players:"}</div>
                        <div>{ format!("{}/{}", info.session_info.players, info.session_info.max_players) }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"Version:"}</div>
                        <div>{ format!("{} ({})", info.session_info.version, info.session_info.protocol) }</div>
                    </div>
                </div>
                <div class="card">
                    <h3>{"Settings"}</h3>
                    <form class="settings-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="hostname">{"Hostname"}</label>
                            <input
                                type="text"
                                id="hostname"
                                name="hostname"
                                placeholder="test.example.com"
                                required=true
                                value={form.hostname.clone()}
                                oninput={on_hostname_input}
                            />
                        </div>
                        <div class="form-group">
                            <label for="port">{"Port"}</label>
                            <input
                                type="number"
                                id="port"
                                name="port"
                                placeholder="19132"
                                min="1"
                                max="65535"
                                required=true
                                value={form.port.to_string()}
                                oninput={on_port_input}
                            />
                        </div>
                        <button class="btn-success" type="submit">{"Save"}</button>
                        <button class="btn-danger" type="button" onclick={on_delete_click}>{"Delete"}</button>
                    </form>
                </div>
            </div>
        </>
    }
}
