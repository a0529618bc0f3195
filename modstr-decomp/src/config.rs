use core::sync::atomic::{AtomicBool, Ordering};

static MULTITHREAD_ENABLED: AtomicBool = AtomicBool::new(true);

/// Whether independent decompositions may run on the rayon pool.
/// Has no effect without the `multithread` feature.
pub fn is_multithread_enabled() -> bool {
    MULTITHREAD_ENABLED.load(Ordering::Relaxed)
}

pub fn set_multithread_enabled(val: bool) {
    MULTITHREAD_ENABLED.store(val, Ordering::Relaxed)
}
