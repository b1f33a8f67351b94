// Task-Modul: Enthält alle Embassy Tasks
//
// Es gibt genau einen Task: er besitzt Zeilen-Puffer, Dispatcher und UART.
// Keine Channels, keine geteilten Zustände.

pub mod serial_command;

// Re-export Tasks für einfachen Import
pub use serial_command::{serial_command_logic, serial_command_task};
