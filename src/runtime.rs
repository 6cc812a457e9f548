use std::io;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum HistoryEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait HistoryEventSource {
    /// Wait up to `timeout` for an event. `Ok(None)` means nothing arrived.
    fn recv_timeout(&self, timeout: Duration) -> io::Result<Option<HistoryEvent>>;
}

/// Production event source. Polls crossterm on the calling thread.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl HistoryEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> io::Result<Option<HistoryEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(match event::read()? {
            // Windows reports both press and release
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => Some(HistoryEvent::Key(key)),
            CtEvent::Resize(_, _) => Some(HistoryEvent::Resize),
            _ => None,
        })
    }
}

/// Configurable ticker interface
pub trait Ticker {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source fed from a channel
pub struct TestEventSource {
    rx: Receiver<HistoryEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<HistoryEvent>) -> Self {
        Self { rx }
    }
}

impl HistoryEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> io::Result<Option<HistoryEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(ev) => Ok(Some(ev)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => Ok(None),
        }
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: HistoryEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: HistoryEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to tick interval and returns the next event, or Tick on timeout
    pub fn step(&self) -> io::Result<HistoryEvent> {
        Ok(self
            .event_source
            .recv_timeout(self.ticker.interval())?
            .unwrap_or(HistoryEvent::Tick))
    }
}
