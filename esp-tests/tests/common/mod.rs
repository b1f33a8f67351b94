//! Mock-Kollaborateure für die Host-Tests
#![allow(dead_code)]

use esp_core::{
    CommandDispatcher, IndicatorPin, LedError, LineReceiver, LinkError, PollEvent, Response,
    ResponseWriter, SmartLedWriter,
};
use rgb::RGB8;

/// Anzahl Pixel wie auf der echten Hardware
pub const PIXEL_COUNT: usize = 9;

// ============================================================================
// Mock Strip Writer
// ============================================================================

pub struct MockStripWriter {
    /// Gepufferte Pixel (noch nicht übertragen)
    pub pending: [RGB8; PIXEL_COUNT],
    /// Zuletzt übertragene Pixel
    pub shown: [RGB8; PIXEL_COUNT],
    pub fill_count: usize,
    pub show_count: usize,
    /// Simuliere Fehler beim nächsten show()
    pub fail_next_show: bool,
}

impl Default for MockStripWriter {
    fn default() -> Self {
        Self {
            pending: [RGB8::default(); PIXEL_COUNT],
            shown: [RGB8::default(); PIXEL_COUNT],
            fill_count: 0,
            show_count: 0,
            fail_next_show: false,
        }
    }
}

impl MockStripWriter {
    /// Prüft ob alle übertragenen Pixel dieselbe Farbe haben
    pub fn all_shown(&self, color: RGB8) -> bool {
        self.shown.iter().all(|pixel| *pixel == color)
    }
}

impl SmartLedWriter for MockStripWriter {
    fn fill(&mut self, color: RGB8) {
        self.pending = [color; PIXEL_COUNT];
        self.fill_count += 1;
    }

    fn show(&mut self) -> Result<(), LedError> {
        if self.fail_next_show {
            self.fail_next_show = false;
            return Err(LedError::WriteFailed);
        }

        self.shown = self.pending;
        self.show_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Indicator
// ============================================================================

#[derive(Default)]
pub struct MockIndicator {
    pub active: bool,
    pub set_count: usize,
}

impl IndicatorPin for MockIndicator {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.set_count += 1;
    }
}

// ============================================================================
// Mock Response Writer
// ============================================================================

#[derive(Default)]
pub struct MockResponseWriter {
    /// Geschriebene Zeilen ohne Zeilenende
    pub lines: Vec<String>,
    pub fail_next_write: bool,
}

impl MockResponseWriter {
    /// Gibt die bisherigen Zeilen zurück und leert den Puffer
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl ResponseWriter for MockResponseWriter {
    fn write_response(&mut self, response: Response) -> Result<(), LinkError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LinkError::WriteFailed);
        }

        self.lines.push(response.to_string());
        Ok(())
    }
}

// ============================================================================
// Test-Fixture
// ============================================================================

pub type MockDispatcher = CommandDispatcher<MockStripWriter, MockIndicator, MockResponseWriter>;

pub fn dispatcher() -> MockDispatcher {
    CommandDispatcher::new(
        MockStripWriter::default(),
        MockIndicator::default(),
        MockResponseWriter::default(),
    )
}

/// Receiver + Dispatcher mit simulierter Uhr (1 ms pro Tick)
pub struct Harness {
    pub receiver: LineReceiver,
    pub dispatcher: MockDispatcher,
    pub now_ms: u64,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            receiver: LineReceiver::new(),
            dispatcher: dispatcher(),
            now_ms: 0,
        }
    }

    /// Ein Tick mit optionalem Byte, danach läuft die Uhr 1 ms weiter
    pub fn tick(&mut self, byte: Option<u8>) -> PollEvent {
        let event = self
            .receiver
            .poll_once(self.now_ms, byte, &mut self.dispatcher);
        self.now_ms += 1;
        event
    }

    /// Jedes Byte in einem eigenen Tick
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<PollEvent> {
        bytes.iter().map(|byte| self.tick(Some(*byte))).collect()
    }

    /// Leere Ticks bis `ms` Millisekunden vergangen sind
    pub fn idle_for(&mut self, ms: u64) -> Vec<PollEvent> {
        let until = self.now_ms + ms;
        let mut events = Vec::new();
        while self.now_ms < until {
            events.push(self.tick(None));
        }
        events
    }

    pub fn output(&mut self) -> Vec<String> {
        self.dispatcher.writer_mut().drain()
    }
}
