// SmartLED Strip Writer für das RMT Peripheral
//
// Implementiert den SmartLedWriter Trait aus esp-core für einen
// WS2812 Strip mit STRIP_LED_COUNT Pixeln.

use esp_core::{LedError, SmartLedWriter, scale_brightness};
use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::{RMT_BUFFER_SIZE, STRIP_LED_COUNT};

/// Real Hardware Strip Writer
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
/// `fill()` ändert nur den Pixel-Puffer, `show()` überträgt ihn.
///
/// Hinweis: Der RMT-Buffer muss länger leben als der Writer, daher wird er
/// im Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtStripWriter<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
    pixels: [RGB8; STRIP_LED_COUNT],
    brightness: u8,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die Strip-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `brightness`: globale Helligkeit (0-255)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        brightness: u8,
        buffer: &'a mut [PulseCode; RMT_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self {
            led,
            pixels: [RGB8::default(); STRIP_LED_COUNT],
            brightness,
        })
    }
}

impl<'a> SmartLedWriter for RmtStripWriter<'a> {
    fn fill(&mut self, color: RGB8) {
        self.pixels = [color; STRIP_LED_COUNT];
    }

    fn show(&mut self) -> Result<(), LedError> {
        let brightness = self.brightness;
        self.led
            .write(
                self.pixels
                    .iter()
                    .map(|pixel| scale_brightness(*pixel, brightness)),
            )
            .map_err(|_| LedError::WriteFailed)
    }
}
