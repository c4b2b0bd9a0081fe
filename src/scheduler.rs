// src/scheduler.rs
//
// Completaciones diferidas guiadas por un reloj explícito (segundos).
// En la app el reloj es `ctx.input(|i| i.time)`; en los tests se avanza a mano.

use std::collections::VecDeque;

/// Valor que queda disponible cuando el reloj alcanza `due`.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    value: Option<T>,
    due: f64,
}

impl<T> Deferred<T> {
    pub fn new(value: T, now: f64, delay: f64) -> Self {
        Self {
            value: Some(value),
            due: now + delay.max(0.0),
        }
    }

    pub fn due(&self) -> f64 {
        self.due
    }

    pub fn is_ready(&self, now: f64) -> bool {
        self.value.is_some() && now >= self.due
    }

    /// Entrega el valor una única vez; después devuelve siempre `None`.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        if self.is_ready(now) {
            self.value.take()
        } else {
            None
        }
    }
}

/// Cola FIFO de diferidos: se entregan en orden de envío.
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    pending: VecDeque<Deferred<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn push(&mut self, value: T, now: f64, delay: f64) {
        self.pending.push_back(Deferred::new(value, now, delay));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Próximo instante en el que algo estará listo (para pedir repaint)
    pub fn next_due(&self) -> Option<f64> {
        self.pending.front().map(Deferred::due)
    }

    /// Saca todo lo que esté listo, respetando el orden. Un elemento que aún
    /// no vence bloquea a los de detrás.
    pub fn drain_ready(&mut self, now: f64) -> Vec<T> {
        let mut ready = Vec::new();
        while let Some(front) = self.pending.front_mut() {
            match front.poll(now) {
                Some(v) => {
                    ready.push(v);
                    self.pending.pop_front();
                }
                None => break,
            }
        }
        ready
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_resolves_once_after_delay() {
        let mut d = Deferred::new("listo", 0.0, 1.0);
        assert_eq!(d.poll(0.5), None);
        assert_eq!(d.poll(1.0), Some("listo"));
        assert_eq!(d.poll(2.0), None);
    }

    #[test]
    fn queue_delivers_in_submission_order() {
        let mut q = DeferredQueue::default();
        q.push(1, 0.0, 1.0);
        q.push(2, 0.2, 1.0);
        q.push(3, 0.4, 1.0);

        assert!(q.drain_ready(0.9).is_empty());
        assert_eq!(q.drain_ready(1.3), vec![1, 2]);
        assert_eq!(q.next_due(), Some(1.4));
        assert_eq!(q.drain_ready(5.0), vec![3]);
        assert!(q.is_empty());
    }
}
