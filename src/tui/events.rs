//! Input pump for the dashboard.
//!
//! A background thread forwards key presses and resizes and emits a
//! `Tick` at a fixed cadence. Ticks carry real semantics here: the app
//! re-checks the local date on every tick, so a dashboard left open
//! overnight rolls to the new day without any input.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);
        thread::spawn(move || pump(tx, tick_rate));
        Self { rx }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Runs until the receiver is dropped or the terminal input breaks.
fn pump(tx: mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let forwarded = if event::poll(timeout).unwrap_or(false) {
            match event::read() {
                Ok(CEvent::Key(key)) => Some(Event::Key(key)),
                Ok(CEvent::Resize(_, _)) => Some(Event::Resize),
                Ok(_) => None,
                Err(_) => return,
            }
        } else {
            None
        };
        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
