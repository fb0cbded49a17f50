use std::rc::Rc;

use yew::prelude::*;

/// Severidad de una notificación (los colores que usa el manager)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationColor {
    Red,
    Green,
}

impl NotificationColor {
    fn class(self) -> &'static str {
        match self {
            Self::Red => "notification red",
            Self::Green => "notification green",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub color: NotificationColor,
}

/// Lista de notificaciones activas (reducer para poder despachar el
/// autodescarte desde un Timeout sin snapshots obsoletos)
#[derive(Default, PartialEq)]
pub struct NotificationList {
    pub items: Vec<Notification>,
}

pub enum NotificationAction {
    Add(Notification),
    Dismiss(u32),
}

impl Reducible for NotificationList {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            NotificationAction::Add(notification) => items.push(notification),
            NotificationAction::Dismiss(id) => items.retain(|n| n.id != id),
        }
        Rc::new(Self { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationContainerProps {
    pub notifications: Vec<Notification>,
}

/// Contenedor de notificaciones (fire-and-forget, el App las autodescarta)
#[function_component(NotificationContainer)]
pub fn notification_container(props: &NotificationContainerProps) -> Html {
    html! {
        <div class="notification-container">
            { for props.notifications.iter().map(|n| html! {
                <div key={n.id} class={n.color.class()}>{ &n.message }</div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u32) -> Notification {
        Notification {
            id,
            message: format!("note {}", id),
            color: NotificationColor::Green,
        }
    }

    #[test]
    fn dismiss_removes_only_the_expired_notification() {
        let list = Rc::new(NotificationList::default());
        let list = list.reduce(NotificationAction::Add(note(1)));
        let list = list.reduce(NotificationAction::Add(note(2)));

        let list = list.reduce(NotificationAction::Dismiss(1));
        let ids: Vec<u32> = list.items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn dismissing_unknown_id_is_noop() {
        let list = Rc::new(NotificationList::default());
        let list = list.reduce(NotificationAction::Add(note(7)));
        let list = list.reduce(NotificationAction::Dismiss(99));
        assert_eq!(list.items.len(), 1);
    }
}
