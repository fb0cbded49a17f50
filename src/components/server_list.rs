use yew::prelude::*;

use crate::components::app::Route;
use crate::components::notification::NotificationColor;
use crate::models::ServerSummary;
use crate::services::{create_server, fetch_servers};

#[derive(Properties, PartialEq)]
pub struct ServersPageProps {
    pub on_navigate: Callback<Route>,
    pub on_notify: Callback<(String, NotificationColor)>,
}

/// Listado de servidores (vista de colección)
#[function_component(ServersPage)]
pub fn servers_page(props: &ServersPageProps) -> Html {
    let servers = use_state(Vec::<ServerSummary>::new);
    let loading = use_state(|| true);

    // Cargar el listado al montar
    {
        let servers = servers.clone();
        let loading = loading.clone();
        let on_notify = props.on_notify.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_servers().await {
                    Ok(list) => {
                        log::info!("🖥️ {} servidores cargados", list.len());
                        servers.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando servidores: {}", e);
                        on_notify.emit((
                            format!("Error loading servers: {}", e),
                            NotificationColor::Red,
                        ));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_create = {
        let on_navigate = props.on_navigate.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |_: MouseEvent| {
            let on_navigate = on_navigate.clone();
            let on_notify = on_notify.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match create_server().await {
                    // Ir directo a la vista del servidor recién creado
                    Ok(id) => on_navigate.emit(Route::ServerDetails(id)),
                    Err(e) => {
                        log::error!("❌ Error creando servidor: {}", e);
                        on_notify.emit((
                            format!("Error creating server: {}", e),
                            NotificationColor::Red,
                        ));
                    }
                }
            });
        })
    };

    let body = if *loading {
        html! { <div class="loading">{"Loading..."}</div> }
    } else if servers.is_empty() {
        html! { <div class="empty">{"No servers yet"}</div> }
    } else {
        html! {
            <div class="server-cards">
                { for servers.iter().map(|server| {
                    let on_navigate = props.on_navigate.clone();
                    let id = server.id.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        on_navigate.emit(Route::ServerDetails(id.clone()));
                    });

                    html! {
                        <div key={server.id.clone()} class="server-card" onclick={onclick}>
                            <div class="server-address">
                                { format!("{}:{}", server.hostname, server.port) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="page server-list">
            <div class="page-header">
                <h2>{"Servers"}</h2>
                <button class="btn-success" onclick={on_create}>{"Create"}</button>
            </div>
            { body }
        </div>
    }
}
