//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Kommando-Tabelle und den Zeilen-Empfänger
//! für die serielle Strip-Steuerung.

#![no_std]

pub mod dispatcher;
pub mod logic;
pub mod receiver;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use dispatcher::{CommandDispatcher, DispatchFault};
pub use logic::{byte_period_us, is_terminator, parse_decimal, scale_brightness};
pub use receiver::{
    LINE_BUFFER_CAPACITY, LineHandler, LineReceiver, PollEvent, ReceiveError, ReceiverState,
    STALE_TIMEOUT_MS,
};
pub use traits::{ByteSource, IndicatorPin, LedError, LinkError, ResponseWriter, SmartLedWriter};
pub use types::{Response, StripCommand, StripEffect, StripState};
