/// Guardia de ordenamiento para respuestas de polling
///
/// Cada request saliente recibe un número de secuencia; una respuesta solo se
/// aplica si ninguna respuesta emitida después fue aplicada ya. Así una
/// respuesta vieja que llega tarde no pisa datos más nuevos.
#[derive(Debug, Default)]
pub struct PollGuard {
    next_seq: u64,
    // 0 = ninguna respuesta aplicada todavía
    last_applied: u64,
}

impl PollGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un request saliente y devuelve su número de secuencia
    pub fn begin(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// ¿Se debe aplicar la respuesta `seq`? La marca como aplicada si procede.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq > self.last_applied {
            self.last_applied = seq;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_responses_in_order() {
        let mut guard = PollGuard::new();
        let a = guard.begin();
        assert!(guard.accept(a));
        let b = guard.begin();
        assert!(guard.accept(b));
    }

    #[test]
    fn discards_stale_response_after_newer_applied() {
        let mut guard = PollGuard::new();
        let a = guard.begin();
        let b = guard.begin();

        // La respuesta de b llega primero, la de a (más vieja) después
        assert!(guard.accept(b));
        assert!(!guard.accept(a));
    }

    #[test]
    fn earlier_response_applies_if_nothing_newer_arrived() {
        let mut guard = PollGuard::new();
        let a = guard.begin();
        let _b = guard.begin();

        // b está en vuelo pero no ha llegado; a sigue siendo lo más nuevo
        assert!(guard.accept(a));
    }
}
