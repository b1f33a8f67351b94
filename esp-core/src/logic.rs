//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Prüft ob ein Byte eine Zeile abschließt (`\n` oder `\r`)
pub const fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Skaliert eine Farbe mit globaler Helligkeit (0-255)
///
/// 255 lässt die Farbe unverändert, 0 ergibt schwarz.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::scale_brightness;
/// let white = RGB8 { r: 255, g: 255, b: 255 };
/// assert_eq!(scale_brightness(white, 255), white);
/// assert_eq!(scale_brightness(white, 127), RGB8 { r: 127, g: 127, b: 127 });
/// ```
pub fn scale_brightness(color: RGB8, brightness: u8) -> RGB8 {
    let scale = |channel: u8| (channel as u16 * (brightness as u16 + 1) / 256) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Dauer eines UART Zeichens (8N1: Start + 8 Daten + Stop) in Mikrosekunden
///
/// Ein Poll-Loop mit einem Byte pro Tick muss schneller ticken, sonst
/// läuft der RX FIFO bei längeren Bursts voll.
pub const fn byte_period_us(baudrate: u32) -> u64 {
    10 * 1_000_000 / baudrate as u64
}

/// Parst eine Dezimalzahl zur Compile-Zeit (für `option_env!` Overrides)
///
/// Leere Strings, Nicht-Ziffern und Überlauf ergeben `None`.
pub const fn parse_decimal(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return None;
        }
        result = match result.checked_mul(10) {
            Some(value) => match value.checked_add((digit - b'0') as usize) {
                Some(value) => value,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    Some(result)
}
