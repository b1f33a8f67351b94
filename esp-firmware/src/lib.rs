// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    ByteSource, CommandDispatcher, DispatchFault, IndicatorPin, LedError, LineReceiver, LinkError,
    PollEvent, Response, ResponseWriter, SmartLedWriter, StripCommand, StripState,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal,
// esp-rtos). Die komplette Kommando-Logik liegt daher in esp-core:
//
// - LineReceiver: Puffer, Cursor, Timeout, Überlauf
// - CommandDispatcher: Kommando-Tabelle → Strip/Indikator/Antwort
//
// Hier bleibt nur die Hardware-Anbindung (hal/) und der Poll-Loop (tasks/).
// Getestet wird auf dem Host im esp-tests Crate mit Mock-Kollaborateuren.
