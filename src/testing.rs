//! Helpers shared by the unit tests.

use std::sync::{Arc, Mutex};

use crate::{Sequence, build::from_fn};

/// Install a test-writer subscriber so bridge lifecycle events show up on failure.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Collect elements until `n` have been seen, without going through `take`.
pub(crate) fn take_n<S>(seq: &S, n: usize) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
{
    let mut result = Vec::new();
    if n == 0 {
        return result;
    }
    seq.drive(&mut |x| {
        result.push(x);
        result.len() != n
    });
    result
}

/// A sequence over `items` that zeroes each element once its consumer accepted it.
pub(crate) fn tracked(items: Vec<i32>) -> (Arc<Mutex<Vec<i32>>>, impl Sequence<Item = i32> + Sync) {
    let cells = Arc::new(Mutex::new(items));
    let shared = Arc::clone(&cells);
    let seq = from_fn(move |consumer| {
        let len = shared.lock().unwrap().len();
        for i in 0..len {
            let value = shared.lock().unwrap()[i];
            if !consumer(value) {
                break;
            }
            shared.lock().unwrap()[i] = 0;
        }
    });
    (cells, seq)
}

/// A sequence over `items` that never checks what its consumer answers.
pub(crate) fn misbehaved<T>(items: Vec<T>) -> impl Sequence<Item = T> + Sync
where
    T: Clone + Sync,
{
    from_fn(move |consumer| {
        for item in &items {
            consumer(item.clone());
        }
    })
}
