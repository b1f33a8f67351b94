// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use esp_core::{byte_period_us, parse_decimal};

// ============================================================================
// LED Strip Konfiguration
// ============================================================================

/// GPIO-Pin für die Strip-Datenleitung (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Standard-Anzahl Pixel im Strip
const DEFAULT_STRIP_LED_COUNT: usize = 9;

/// Anzahl der LEDs im Strip
/// Kann zur Build-Zeit mit STRIP_LED_COUNT überschrieben werden (.env oder Environment)
pub const STRIP_LED_COUNT: usize = match option_env!("STRIP_LED_COUNT") {
    Some(value) => match parse_decimal(value) {
        Some(count) if count > 0 => count,
        _ => DEFAULT_STRIP_LED_COUNT,
    },
    None => DEFAULT_STRIP_LED_COUNT,
};

/// Helligkeits-Level für den Strip (0-255)
/// Standard: volle Helligkeit, überschreibbar mit LED_BRIGHTNESS
pub const LED_BRIGHTNESS: u8 = match option_env!("LED_BRIGHTNESS") {
    Some(value) => match parse_decimal(value) {
        Some(level) if level <= u8::MAX as usize => level as u8,
        _ => u8::MAX,
    },
    None => u8::MAX,
};

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT Puffer-Größe: 24 Pulse pro Pixel (3 Farben * 8 Bits) + 1 Reset
pub const RMT_BUFFER_SIZE: usize = STRIP_LED_COUNT * 24 + 1;

// ============================================================================
// Indikator Konfiguration
// ============================================================================

/// GPIO-Pin für den "aktiv" Indikator (User-LED)
pub const INDICATOR_GPIO_PIN: u8 = 15;

// ============================================================================
// Serial Konfiguration
// ============================================================================

/// UART Baudrate für Kommandos und Antworten
pub const UART_BAUDRATE: u32 = 115_200;

/// UART TX Pin
pub const UART_TX_GPIO_PIN: u8 = 16;

/// UART RX Pin
pub const UART_RX_GPIO_PIN: u8 = 17;

/// Abstand zwischen zwei Poll-Ticks in Mikrosekunden
/// Pro Tick wird höchstens ein Byte gelesen, daher muss der Tick kürzer sein
/// als ein Zeichen auf der Leitung (115200 Baud: ca. 86 µs)
pub const POLL_INTERVAL_US: u64 = 50;

// Poll-Loop muss schneller leeren als der UART füllt (128 Byte RX FIFO)
const _: () = assert!(POLL_INTERVAL_US < byte_period_us(UART_BAUDRATE));
