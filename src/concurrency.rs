pub trait Execute {
    fn execute<F>(&self, f: F) where F: FnOnce() + Send + 'static;
}

/// Runs every task inline on the calling thread. Panics in a task reach the
/// caller unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl Execute for Sequential {
    fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        f();
    }
}

pub mod thread_pool;
