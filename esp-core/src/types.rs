//! Core Types für die Strip-Steuerung
//!
//! Kommando-Tabelle, Antwort-Texte und Strip-Zustand ohne Hardware-Dependencies

use core::fmt;

use rgb::RGB8;

/// Volle Helligkeit pro Kanal
const FULL: u8 = 255;

/// Kommandos die über die serielle Schnittstelle erkannt werden
///
/// Die Tabelle ist statisch und wird zur Laufzeit nie verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripCommand {
    /// Alle Pixel weiß, Indikator an
    On,
    Red,
    Green,
    Blue,
    /// Alle Pixel aus, Indikator aus
    Off,
}

impl StripCommand {
    /// Kommando-Tabelle in Prüf-Reihenfolge (erster Treffer gewinnt)
    pub const TABLE: [StripCommand; 5] = [
        StripCommand::On,
        StripCommand::Red,
        StripCommand::Green,
        StripCommand::Blue,
        StripCommand::Off,
    ];

    /// Kommando-Text wie er auf der Leitung steht
    pub const fn name(self) -> &'static str {
        match self {
            StripCommand::On => "on",
            StripCommand::Red => "red",
            StripCommand::Green => "green",
            StripCommand::Blue => "blue",
            StripCommand::Off => "off",
        }
    }

    /// Wirkung des Kommandos auf Strip und Indikator
    pub const fn effect(self) -> StripEffect {
        match self {
            StripCommand::On => StripEffect {
                color: RGB8 {
                    r: FULL,
                    g: FULL,
                    b: FULL,
                },
                indicator: Some(true),
            },
            StripCommand::Red => StripEffect {
                color: RGB8 { r: FULL, g: 0, b: 0 },
                indicator: None,
            },
            StripCommand::Green => StripEffect {
                color: RGB8 { r: 0, g: FULL, b: 0 },
                indicator: None,
            },
            StripCommand::Blue => StripEffect {
                color: RGB8 { r: 0, g: 0, b: FULL },
                indicator: None,
            },
            StripCommand::Off => StripEffect {
                color: RGB8 { r: 0, g: 0, b: 0 },
                indicator: Some(false),
            },
        }
    }

    /// Löst eine empfangene Zeile (ohne Terminator) gegen die Tabelle auf
    ///
    /// Exakter, case-sensitiver Vergleich. Ungültiges UTF-8 ergibt `None`.
    ///
    /// ```
    /// # use esp_core::StripCommand;
    /// assert_eq!(StripCommand::from_line(b"green"), Some(StripCommand::Green));
    /// assert_eq!(StripCommand::from_line(b"Green"), None);
    /// ```
    pub fn from_line(line: &[u8]) -> Option<Self> {
        let text = core::str::from_utf8(line).ok()?;
        Self::try_from(text).ok()
    }
}

impl core::convert::TryFrom<&str> for StripCommand {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        StripCommand::TABLE
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or(())
    }
}

/// Effekt eines Kommandos: Füllfarbe plus optionale Indikator-Änderung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripEffect {
    pub color: RGB8,
    /// `None` lässt den Indikator unverändert
    pub indicator: Option<bool>,
}

/// Antwort-Zeilen an den seriellen Client
///
/// `Display` liefert exakt den Text ohne Zeilenende.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Kommando erkannt und ausgeführt
    Ok(StripCommand),
    /// Zeile passt zu keinem Kommando
    Failed,
    /// Unvollständige Zeile verworfen (Timeout oder Überlauf)
    Error,
}

impl Response {
    pub const fn as_str(self) -> &'static str {
        match self {
            Response::Ok(StripCommand::On) => "ok (on)",
            Response::Ok(StripCommand::Red) => "ok (red)",
            Response::Ok(StripCommand::Green) => "ok (green)",
            Response::Ok(StripCommand::Blue) => "ok (blue)",
            Response::Ok(StripCommand::Off) => "ok (off)",
            Response::Failed => "failed",
            Response::Error => "error",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zuletzt an die Hardware übergebener Zustand
///
/// Startzustand: alle Pixel schwarz, Indikator aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripState {
    pub color: RGB8,
    pub indicator_active: bool,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for StripCommand {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Response {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StripState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StripState {{ rgb: ({}, {}, {}), indicator: {} }}",
            self.color.r,
            self.color.g,
            self.color.b,
            self.indicator_active
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StripEffect {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StripEffect {{ rgb: ({}, {}, {}), indicator: {} }}",
            self.color.r,
            self.color.g,
            self.color.b,
            self.indicator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let names: [&str; 5] = StripCommand::TABLE.map(StripCommand::name);
        assert_eq!(names, ["on", "red", "green", "blue", "off"]);
    }

    #[test]
    fn test_from_line_rejects_invalid_utf8() {
        assert_eq!(StripCommand::from_line(&[0xff, 0xfe]), None);
    }

    #[test]
    fn test_off_effect_clears_indicator() {
        let effect = StripCommand::Off.effect();
        assert_eq!(effect.color, RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(effect.indicator, Some(false));
    }
}
