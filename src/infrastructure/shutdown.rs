use tokio::sync::watch;

/// Broadcasts a one-way stop request to every listener.
#[derive(Clone)]
pub struct Shutdown {
    sender: watch::Sender<bool>,
}

#[derive(Clone)]
pub struct ShutdownListener {
    receiver: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> (Self, ShutdownListener) {
        let (sender, receiver) = watch::channel(false);
        (Self { sender }, ShutdownListener { receiver })
    }

    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn trigger(&self) {
        if !*self.sender.borrow() {
            tracing::info!(target: "lifecycle", "shutdown requested");
        }
        self.sender.send_replace(true);
    }
}

impl ShutdownListener {
    /// Resolves once shutdown is triggered or the last `Shutdown` is dropped.
    pub async fn notified(&mut self) {
        if self.is_triggered() {
            return;
        }
        let _ = self.receiver.wait_for(|stop| *stop).await;
    }

    pub fn is_triggered(&self) -> bool {
        *self.receiver.borrow()
    }
}

/// Triggers `shutdown` on Ctrl-C, and on SIGTERM where available.
pub fn install_signal_handlers(shutdown: Shutdown) {
    let on_ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.trigger();
        }
    });

    #[cfg(unix)]
    tokio::spawn(async move {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut term) = signal(SignalKind::terminate()) {
            term.recv().await;
            shutdown.trigger();
        }
    });
}
