use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Error(String),
}

/// Forwards terminal key events and periodic ticks over a channel so the
/// main loop can select on them alongside fetch results.
///
/// Input is read on a blocking task (crossterm's poll/read are blocking);
/// ticks come from a tokio interval. Both stop once the receiver is gone.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _input_task: tokio::task::JoinHandle<()>,
    _tick_task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let input_tx = tx.clone();
        let _input_task = tokio::task::spawn_blocking(move || loop {
            match event::poll(Duration::from_millis(50)) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if input_tx.send(Event::Key(key)).is_err() {
                            debug!("Event channel closed, stopping input reader");
                            break;
                        }
                    }
                    Ok(_) => {
                        // Ignore mouse/resize events
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        let _ = input_tx.send(Event::Error(format!("Terminal read error: {}", e)));
                    }
                },
                Ok(false) => {
                    if input_tx.is_closed() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
        });

        let _tick_task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if tx.send(Event::Tick).is_err() {
                    debug!("Event channel closed, stopping tick handler");
                    break;
                }
            }
        });

        Self {
            rx,
            _input_task,
            _tick_task,
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
