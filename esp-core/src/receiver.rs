//! Zeilen-Empfänger: serielle Bytes → vollständige Kommando-Zeilen
//!
//! Der Empfänger wird einmal pro Scheduler-Tick mit höchstens einem Byte
//! gefüttert. Zustände:
//!
//! - **Idle**: Puffer leer
//! - **Accumulating**: Teil-Zeile im Puffer
//! - **Discarding**: Zeile war zu lang, Rest bis zum Terminator wird verworfen
//!
//! Eine Teil-Zeile ohne Byte für mehr als [`STALE_TIMEOUT_MS`] wird verworfen
//! und genau einmal pro Episode als Fehler gemeldet.

use heapless::Vec;

use crate::logic::is_terminator;
use crate::types::Response;

/// Kapazität des Zeilen-Puffers in Bytes
pub const LINE_BUFFER_CAPACITY: usize = 255;

/// Zeit ohne Byte nach der eine Teil-Zeile verworfen wird
pub const STALE_TIMEOUT_MS: u64 = 1000;

/// Behandelte Empfangsfehler (werden beide als `"error"` gemeldet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiveError {
    /// Teil-Zeile lag länger als das Timeout-Fenster
    StaleInput,
    /// Zeile länger als der Puffer
    Overflow,
}

/// Empfänger der vollständigen Zeilen und Fehler
///
/// Wird vom [`CommandDispatcher`](crate::CommandDispatcher) implementiert,
/// in Tests auch von einfachen Recordern.
pub trait LineHandler {
    /// Verarbeitet eine vollständige Zeile ohne Terminator
    fn dispatch(&mut self, line: &[u8]) -> Response;

    /// Meldet einen behandelten Empfangsfehler
    fn report(&mut self, error: ReceiveError);
}

/// Ergebnis eines einzelnen Ticks (für Logging und Tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollEvent {
    /// Kein Byte, nichts zu tun
    Idle,
    /// Byte an den Puffer angehängt
    Buffered,
    /// Zeile abgeschlossen und verarbeitet
    Dispatched(Response),
    /// Teil-Zeile verworfen; `reported` ist false wenn die Episode schon gemeldet war
    TimedOut { reported: bool },
    /// Puffer voll, Zeile verworfen und gemeldet
    Overflow,
    /// Byte einer übergelaufenen Zeile ignoriert
    Discarded,
}

/// Aktueller Zustand des Empfängers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverState {
    Idle,
    Accumulating,
    Discarding,
}

/// Zeilen-Empfänger mit festem Puffer
///
/// Besitzt Puffer, Cursor (= Pufferlänge), Zeitstempel der letzten
/// Aktivität und das Stale-Reported Flag. Einziger Schreiber ist der Task
/// der `poll_once()` aufruft.
pub struct LineReceiver<const N: usize = LINE_BUFFER_CAPACITY> {
    buffer: Vec<u8, N>,
    last_activity_ms: u64,
    stale_reported: bool,
    discarding: bool,
}

impl<const N: usize> LineReceiver<N> {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            last_activity_ms: 0,
            stale_reported: false,
            discarding: false,
        }
    }

    /// Ein Scheduler-Tick
    ///
    /// # Parameter
    /// - `now_ms`: aktuelle Uptime in Millisekunden
    /// - `byte`: höchstens ein empfangenes Byte
    /// - `handler`: bekommt vollständige Zeilen und Fehler-Meldungen
    pub fn poll_once<H: LineHandler>(
        &mut self,
        now_ms: u64,
        byte: Option<u8>,
        handler: &mut H,
    ) -> PollEvent {
        match byte {
            Some(byte) => self.receive(now_ms, byte, handler),
            None => self.check_stale(now_ms, handler),
        }
    }

    fn receive<H: LineHandler>(&mut self, now_ms: u64, byte: u8, handler: &mut H) -> PollEvent {
        self.last_activity_ms = now_ms;
        self.stale_reported = false;

        if is_terminator(byte) {
            if self.discarding {
                self.reset();
                return PollEvent::Discarded;
            }
            let response = handler.dispatch(&self.buffer);
            self.reset();
            return PollEvent::Dispatched(response);
        }

        if self.discarding {
            return PollEvent::Discarded;
        }

        if self.buffer.push(byte).is_err() {
            // Rest der Zeile bis zum nächsten Terminator ignorieren
            self.reset();
            self.discarding = true;
            self.stale_reported = true;
            handler.report(ReceiveError::Overflow);
            return PollEvent::Overflow;
        }

        PollEvent::Buffered
    }

    fn check_stale<H: LineHandler>(&mut self, now_ms: u64, handler: &mut H) -> PollEvent {
        if self.state() == ReceiverState::Idle {
            return PollEvent::Idle;
        }
        if now_ms.saturating_sub(self.last_activity_ms) <= STALE_TIMEOUT_MS {
            return PollEvent::Idle;
        }

        // Überlauf ist bereits gemeldet, nur zurück nach Idle
        let overflowed = self.discarding;
        self.reset();
        if overflowed || self.stale_reported {
            return PollEvent::TimedOut { reported: false };
        }

        self.stale_reported = true;
        handler.report(ReceiveError::StaleInput);
        PollEvent::TimedOut { reported: true }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    pub fn state(&self) -> ReceiverState {
        if self.discarding {
            ReceiverState::Discarding
        } else if self.buffer.is_empty() {
            ReceiverState::Idle
        } else {
            ReceiverState::Accumulating
        }
    }

    /// Cursor: Anzahl gepufferter Bytes
    pub fn cursor(&self) -> usize {
        self.buffer.len()
    }

    /// Bisher empfangene Teil-Zeile
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for LineReceiver<N> {
    fn default() -> Self {
        Self::new()
    }
}
