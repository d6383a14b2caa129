//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The only thing it holds is the random source. Handlers borrow it for the
//! duration of a synchronous sampling call and never across an `.await`.

use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the RNG is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Seed from `seed` when given, otherwise from the OS.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng: Arc::new(Mutex::new(rng)) }
    }

    /// Run `f` with exclusive access to the random source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}
