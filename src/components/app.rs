use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::notification::{
    Notification, NotificationAction, NotificationColor, NotificationContainer, NotificationList,
};
use crate::components::{ServerDetailsPage, ServersPage};
use crate::utils::constants::NOTIFICATION_TIMEOUT_MS;

/// Vistas de la aplicación (navegación por estado, sin router)
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Servers,
    ServerDetails(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::Servers);
    let notifications = use_reducer(NotificationList::default);
    let next_notification_id = use_mut_ref(|| 0u32);

    let navigate = {
        let route = route.clone();
        Callback::from(move |r: Route| route.set(r))
    };

    // notify(mensaje, severidad): añade la notificación y programa su
    // autodescarte
    let notify = {
        let notifications = notifications.clone();
        let next_notification_id = next_notification_id.clone();

        Callback::from(move |(message, color): (String, NotificationColor)| {
            let id = {
                let mut next = next_notification_id.borrow_mut();
                *next += 1;
                *next
            };

            log::info!("🔔 {}", message);
            notifications.dispatch(NotificationAction::Add(Notification { id, message, color }));

            let notifications = notifications.clone();
            Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                notifications.dispatch(NotificationAction::Dismiss(id));
            })
            .forget();
        })
    };

    // Cambiar de ruta desmonta la vista anterior (y con ella su timer de
    // polling)
    let view = match (*route).clone() {
        Route::Servers => html! {
            <ServersPage on_navigate={navigate.clone()} on_notify={notify.clone()} />
        },
        Route::ServerDetails(server_id) => html! {
            <ServerDetailsPage
                server_id={server_id}
                on_navigate={navigate.clone()}
                on_notify={notify.clone()}
            />
        },
    };

    html! {
        <>
            <NotificationContainer notifications={notifications.items.clone()} />
            <div class="app-container">
                { view }
            </div>
        </>
    }
}
