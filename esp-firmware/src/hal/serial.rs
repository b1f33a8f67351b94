// UART Anbindung: Byte-Quelle (RX) und Antwort-Ausgabe (TX)

use defmt::{Debug2Format, warn};
use esp_core::{ByteSource, LinkError, Response, ResponseWriter};
use esp_hal::Blocking;
use esp_hal::uart::{UartRx, UartTx};

/// Zeilenende auf der Leitung
const LINE_ENDING: &[u8] = b"\r\n";

/// Nicht-blockierender UART Empfänger
///
/// Liest pro Aufruf höchstens ein Byte aus dem RX FIFO.
pub struct UartByteSource<'a> {
    rx: UartRx<'a, Blocking>,
}

impl<'a> UartByteSource<'a> {
    pub fn new(rx: UartRx<'a, Blocking>) -> Self {
        Self { rx }
    }
}

impl<'a> ByteSource for UartByteSource<'a> {
    fn poll_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.rx.read_buffered(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(e) => {
                // Framing/Parity/Overflow: Byte verloren, Empfänger läuft weiter
                warn!("UART RX error: {}", Debug2Format(&e));
                None
            }
        }
    }
}

/// Blockierende UART Antwort-Ausgabe
pub struct UartResponseWriter<'a> {
    tx: UartTx<'a, Blocking>,
}

impl<'a> UartResponseWriter<'a> {
    pub fn new(tx: UartTx<'a, Blocking>) -> Self {
        Self { tx }
    }

    fn write_all(&mut self, mut data: &[u8]) -> Result<(), LinkError> {
        while !data.is_empty() {
            let written = self.tx.write(data).map_err(|_| LinkError::WriteFailed)?;
            data = &data[written..];
        }
        Ok(())
    }
}

impl<'a> ResponseWriter for UartResponseWriter<'a> {
    fn write_response(&mut self, response: Response) -> Result<(), LinkError> {
        self.write_all(response.as_str().as_bytes())?;
        self.write_all(LINE_ENDING)?;
        self.tx.flush().map_err(|_| LinkError::WriteFailed)
    }
}
