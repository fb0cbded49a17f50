/// Flujo de confirmación para acciones destructivas
///
/// Mantiene COMO MÁXIMO una decisión pendiente. `request` registra la acción
/// a ejecutar (reemplazando cualquier pendiente anterior, nunca encolando) y
/// `resolve` la consume exactamente una vez con la decisión del usuario. La
/// acción destructiva solo puede salir pasando por aquí.
#[derive(Default)]
pub struct ConfirmFlow {
    pending: Option<Box<dyn FnOnce(bool)>>,
}

impl ConfirmFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra la acción pendiente; un segundo click antes de resolver el
    /// modal la reemplaza, no la duplica
    pub fn request(&mut self, action: impl FnOnce(bool) + 'static) {
        self.pending = Some(Box::new(action));
    }

    /// Consume la decisión pendiente (no-op si ya fue consumida)
    pub fn resolve(&mut self, confirmed: bool) {
        if let Some(action) = self.pending.take() {
            action(confirmed);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_action(fired: &Rc<Cell<u32>>) -> impl FnOnce(bool) + 'static {
        let fired = fired.clone();
        move |confirmed| {
            if confirmed {
                fired.set(fired.get() + 1);
            }
        }
    }

    #[test]
    fn cancel_never_fires_the_action() {
        let fired = Rc::new(Cell::new(0));
        let mut flow = ConfirmFlow::new();

        flow.request(counting_action(&fired));
        flow.resolve(false);

        assert_eq!(fired.get(), 0);
        assert!(!flow.is_pending());
    }

    #[test]
    fn confirm_fires_the_action_once() {
        let fired = Rc::new(Cell::new(0));
        let mut flow = ConfirmFlow::new();

        flow.request(counting_action(&fired));
        flow.resolve(true);
        // Una segunda resolución no debe re-disparar nada
        flow.resolve(true);

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn second_request_replaces_pending_not_queues() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut flow = ConfirmFlow::new();

        flow.request(counting_action(&first));
        flow.request(counting_action(&second));
        flow.resolve(true);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert!(!flow.is_pending());
    }

    #[test]
    fn resolve_without_request_is_noop() {
        let mut flow = ConfirmFlow::new();
        flow.resolve(true);
        assert!(!flow.is_pending());
    }
}
