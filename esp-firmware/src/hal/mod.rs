// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die ESP32-C6 Peripherie:
// RMT (Strip), GPIO (Indikator) und UART (Kommandos/Antworten).

pub mod indicator;
pub mod led_writer;
pub mod serial;

pub use indicator::GpioIndicator;
pub use led_writer::RmtStripWriter;
pub use serial::{UartByteSource, UartResponseWriter};
