use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// What the main loop reacts to between redraws
#[derive(Clone, Debug)]
pub enum DuelEvent {
    Key(KeyEvent),
    Resize,
    /// No input within one tick; time still moves
    Tick,
    /// The input thread is gone; nothing more will arrive
    Closed,
}

/// Anything the loop can wait on for key presses and resizes
pub trait DuelEventSource: Send + 'static {
    fn recv_timeout(&self, timeout: Duration) -> Result<DuelEvent, RecvTimeoutError>;
}

/// Events delivered over a channel. The terminal feeds one from a reader
/// thread; headless runs feed one by hand.
pub struct ChannelEventSource {
    rx: Receiver<DuelEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<DuelEvent>) -> Self {
        Self { rx }
    }

    /// Read the real terminal on a background thread
    pub fn crossterm() -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || read_terminal(tx));
        Self::new(rx)
    }
}

impl DuelEventSource for ChannelEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<DuelEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn read_terminal(tx: Sender<DuelEvent>) {
    loop {
        let forwarded = match event::read() {
            // two players hammer the same keyboard; only count presses
            Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                tx.send(DuelEvent::Key(key))
            }
            Ok(CtEvent::Resize(_, _)) => tx.send(DuelEvent::Resize),
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("terminal event reader stopped: {e}");
                return;
            }
        };
        if forwarded.is_err() {
            return;
        }
    }
}

/// How long the loop waits for input before letting the clock move
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

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

/// Pulls one event per call for the duel loop
pub struct Runner<E: DuelEventSource, T: Ticker> {
    source: E,
    ticker: T,
}

impl<E: DuelEventSource, T: Ticker> Runner<E, T> {
    pub fn new(source: E, ticker: T) -> Self {
        Self { source, ticker }
    }

    /// Blocks up to one tick interval. Timeouts become `Tick`; a hung-up
    /// source becomes `Closed` so the loop cannot spin on it.
    pub fn step(&self) -> DuelEvent {
        match self.source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => DuelEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => DuelEvent::Closed,
        }
    }
}
