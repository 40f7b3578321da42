//! Stop latch placed on every consumer that crosses a combinator boundary.
//!
//! A producer is supposed to stop once its consumer answers `false`, but a
//! misbehaving producer may keep calling. [`Latch`] remembers the first `false`
//! and refuses every later element without forwarding it downstream.

/// Wraps a downstream consumer and permanently records a stop decision.
///
/// ```rust
/// use lazyseq::Latch;
///
/// let mut seen = Vec::new();
/// let mut downstream = |x: i32| {
///     seen.push(x);
///     x < 2
/// };
/// let mut latch = Latch::new(&mut downstream);
/// assert!(latch.push(1));
/// assert!(!latch.push(2));
/// assert!(!latch.push(3)); // never reaches `downstream`
/// drop(latch);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub struct Latch<'a, T> {
    consumer: &'a mut dyn FnMut(T) -> bool,
    open: bool,
}

impl<'a, T> Latch<'a, T> {
    /// Wrap `consumer`, initially open.
    pub fn new(consumer: &'a mut dyn FnMut(T) -> bool) -> Self {
        Self {
            consumer,
            open: true,
        }
    }

    /// Returns `true` until the downstream consumer has refused an element.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Forward `item` if still open. Returns whether more elements are wanted.
    #[inline]
    pub fn push(&mut self, item: T) -> bool {
        if self.open {
            self.open = (self.consumer)(item);
        }
        self.open
    }

    /// Like [`push`](Self::push), but only builds the element when it will be delivered.
    #[inline]
    pub fn push_with<F>(&mut self, make: F) -> bool
    where
        F: FnOnce() -> T,
    {
        if self.open {
            self.open = (self.consumer)(make());
        }
        self.open
    }

    /// Stop forwarding without consulting the downstream consumer.
    #[inline]
    pub fn close(&mut self) {
        self.open = false;
    }
}
