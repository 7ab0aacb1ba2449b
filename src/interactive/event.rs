use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Input reader on a dedicated thread. Key presses and ticks arrive on the
/// same channel; ticks drive the save-confirmation countdown.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || loop {
            if let Ok(true) = event::poll(tick_rate) {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && sender.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
            }
            if sender.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
