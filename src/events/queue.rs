use tokio::sync::mpsc;

use crate::handlers::form::FormEvent;

#[derive(Clone)]
pub struct EventBus {
    tx: mpsc::Sender<FormEvent>,
}

impl EventBus {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<FormEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    pub async fn emit(&self, event: FormEvent) {
        let _ = self.tx.send(event).await;
    }
}
