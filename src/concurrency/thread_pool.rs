use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use crate::concurrency::Execute;
use crate::error::{EvolutionError, Result};

type Task = Box<dyn FnOnce() + Send + 'static>;

struct Worker {
    _id: usize,
    _thread: thread::JoinHandle<()>,
}

impl Worker {
    fn new(id: usize, receiver: Arc<Mutex<Receiver<Task>>>) -> Result<Self> {
        let thread_name = format!("evaluator-{}", id);
        let _thread = thread::Builder::new()
            .name(thread_name)
            .spawn(move || loop {

                // the lock is released before the task runs
                let next = receiver.lock().unwrap().recv();
                let task = match next {
                    Ok(task) => task,
                    // pool dropped
                    Err(_) => break,
                };

                // a panicking objective drops its result sender; the updater
                // notices the missing result, the worker keeps going
                if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                    log::warn!("task panicked on evaluator-{}", id);
                }
            })?;
        Ok(Self { _id: id, _thread })
    }
}

/// Fixed number of worker threads pulling boxed tasks off a shared queue.
pub struct ThreadPool {
    _workers: Vec<Worker>,
    task_sender: Sender<Task>,
}

impl ThreadPool {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(EvolutionError::InvalidArgument(
                "thread pool needs at least one worker".to_string(),
            ));
        }
        let (task_sender, task_receiver) = channel();
        let task_receiver = Arc::new(Mutex::new(task_receiver));
        let mut _workers = Vec::with_capacity(size);
        for id in 0..size {
            _workers.push(Worker::new(id, Arc::clone(&task_receiver))?);
        }
        log::debug!("started thread pool with {} workers", size);
        Ok(Self {
            _workers,
            task_sender,
        })
    }

    pub fn size(&self) -> usize {
        self._workers.len()
    }
}

impl Execute for ThreadPool {
    fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // workers only exit once this sender is gone
        if self.task_sender.send(Box::new(f)).is_err() {
            log::error!("thread pool queue closed, task dropped");
        }
    }
}
