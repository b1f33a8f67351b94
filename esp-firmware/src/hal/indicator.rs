// GPIO Indikator: "aktiv" Signal für das `on` Kommando

use esp_core::IndicatorPin;
use esp_hal::gpio::{Level, Output, OutputConfig};

/// Indikator-LED an einem GPIO Ausgang (active high)
pub struct GpioIndicator<'a> {
    pin: Output<'a>,
}

impl<'a> GpioIndicator<'a> {
    /// Konfiguriert den Pin als Ausgang, Startzustand aus
    pub fn new(pin: impl esp_hal::gpio::OutputPin + 'a) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl<'a> IndicatorPin for GpioIndicator<'a> {
    fn set_active(&mut self, active: bool) {
        self.pin.set_level(Level::from(active));
    }
}
