//! Kommando-Dispatcher
//!
//! Löst vollständige Zeilen gegen die Kommando-Tabelle auf und ruft die
//! externen Kollaborateure (Strip, Indikator, Antwort-Leitung) auf.

use crate::receiver::{LineHandler, ReceiveError};
use crate::traits::{IndicatorPin, LedError, LinkError, ResponseWriter, SmartLedWriter};
use crate::types::{Response, StripCommand, StripState};

/// Fehler eines Kollaborateurs während Dispatch (nicht fatal, nur Logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchFault {
    Strip(LedError),
    Link(LinkError),
}

/// Dispatcher mit Strip, Indikator und Antwort-Ausgabe
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (RMT, GPIO, UART) im Production-Code
/// - Mock Implementierungen in Tests
pub struct CommandDispatcher<S, I, W> {
    strip: S,
    indicator: I,
    writer: W,
    state: StripState,
    fault: Option<DispatchFault>,
}

impl<S, I, W> CommandDispatcher<S, I, W>
where
    S: SmartLedWriter,
    I: IndicatorPin,
    W: ResponseWriter,
{
    pub fn new(strip: S, indicator: I, writer: W) -> Self {
        Self {
            strip,
            indicator,
            writer,
            state: StripState::default(),
            fault: None,
        }
    }

    /// Führt ein Kommando auf Strip und Indikator aus
    fn apply(&mut self, command: StripCommand) {
        let effect = command.effect();

        self.strip.fill(effect.color);
        match self.strip.show() {
            Ok(()) => self.state.color = effect.color,
            Err(e) => self.fault = Some(DispatchFault::Strip(e)),
        }

        if let Some(active) = effect.indicator {
            self.indicator.set_active(active);
            self.state.indicator_active = active;
        }
    }

    fn respond(&mut self, response: Response) {
        if let Err(e) = self.writer.write_response(response) {
            self.fault = Some(DispatchFault::Link(e));
        }
    }

    /// Zuletzt erfolgreich geschriebener Zustand
    pub fn state(&self) -> StripState {
        self.state
    }

    /// Holt (und löscht) den letzten Kollaborateur-Fehler
    pub fn take_fault(&mut self) -> Option<DispatchFault> {
        self.fault.take()
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<S, I, W> LineHandler for CommandDispatcher<S, I, W>
where
    S: SmartLedWriter,
    I: IndicatorPin,
    W: ResponseWriter,
{
    fn dispatch(&mut self, line: &[u8]) -> Response {
        let Some(command) = StripCommand::from_line(line) else {
            self.respond(Response::Failed);
            return Response::Failed;
        };

        // Bestätigung geht vor dem Strip-Update raus
        let response = Response::Ok(command);
        self.respond(response);
        self.apply(command);
        response
    }

    fn report(&mut self, _error: ReceiveError) {
        self.respond(Response::Error);
    }
}
