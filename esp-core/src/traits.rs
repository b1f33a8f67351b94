//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::Response;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für die serielle Antwort-Leitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    WriteFailed,
}

/// Trait für SmartLED Strip Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LED Strips (WS2812/Neopixel).
/// Farben werden erst gepuffert und mit `show()` übertragen.
///
/// # Implementierungen
/// - **Production:** RmtStripWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStripWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Setzt alle Pixel im Puffer auf eine Farbe
    fn fill(&mut self, color: RGB8);

    /// Überträgt den Puffer auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn show(&mut self) -> Result<(), LedError>;
}

/// Zwei-Zustands-Ausgang für den "aktiv" Indikator
pub trait IndicatorPin {
    fn set_active(&mut self, active: bool);
}

/// Zeilenorientierte Antwort-Ausgabe (z.B. UART TX)
pub trait ResponseWriter {
    /// Schreibt eine Antwort-Zeile inklusive Zeilenende
    fn write_response(&mut self, response: Response) -> Result<(), LinkError>;
}

/// Nicht-blockierende Byte-Quelle (z.B. UART RX)
pub trait ByteSource {
    /// Liefert höchstens ein Byte, `None` wenn nichts anliegt
    fn poll_byte(&mut self) -> Option<u8>;
}
