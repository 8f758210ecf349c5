use std::{
    sync::mpsc::{self, Sender},
    thread::{self, JoinHandle},
};

use super::{CollectionRecords, Result, StorageBackend};

/// Background writer that drains queued collection saves one at a time.
///
/// Mutations enqueue a full copy of the changed collection and return
/// immediately; the single worker thread serializes all writes, so two saves
/// of the same collection can never interleave and the last one wins. A
/// failed write is logged and dropped, never retried: the in-memory ledger
/// stays authoritative.
pub struct PersistenceWorker {
    tx: Option<Sender<CollectionRecords>>,
    handle: Option<JoinHandle<()>>,
}

impl PersistenceWorker {
    pub fn spawn(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<CollectionRecords>();
        let handle = thread::Builder::new()
            .name("billbuddy-persistence".into())
            .spawn(move || {
                for records in rx {
                    if let Err(err) = backend.save_collection(&records) {
                        tracing::warn!(
                            collection = records.collection().store_name(),
                            %err,
                            "persistence write failed"
                        );
                    }
                }
            })?;
        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    /// Queues a save and returns without waiting for the write.
    pub fn dispatch(&self, records: CollectionRecords) {
        if let Some(tx) = &self.tx {
            // Send only fails after shutdown; the write is then skipped.
            let _ = tx.send(records);
        }
    }

    /// Stops the worker after draining every queued write.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("persistence worker exited abnormally");
            }
        }
    }
}

impl Drop for PersistenceWorker {
    fn drop(&mut self) {
        self.close();
    }
}
