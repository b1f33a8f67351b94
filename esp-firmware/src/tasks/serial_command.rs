// Serial Command Task - Empfängt Text-Kommandos und steuert den Strip
use defmt::{debug, error, info, warn};
use embassy_time::{Duration, Instant, Timer};
use esp_hal::uart::{Config as UartConfig, Uart};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{
    INDICATOR_GPIO_PIN, LED_BRIGHTNESS, LED_GPIO_PIN, POLL_INTERVAL_US, RMT_CLOCK_MHZ,
    STRIP_LED_COUNT, UART_BAUDRATE, UART_RX_GPIO_PIN, UART_TX_GPIO_PIN,
};
use crate::hal::{GpioIndicator, RmtStripWriter, UartByteSource, UartResponseWriter};
use crate::{
    ByteSource, CommandDispatcher, IndicatorPin, LineReceiver, PollEvent, ResponseWriter,
    SmartLedWriter,
};

/// Poll-Loop - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Pro Tick:
/// - höchstens ein Byte von der Quelle lesen
/// - `LineReceiver::poll_once()` mit aktueller Uptime aufrufen
/// - Ergebnis loggen, dann `POLL_INTERVAL_US` schlafen
///
/// Receiver und Dispatcher gehören exklusiv diesem Loop (einziger Schreiber).
///
/// # Parameter
/// - `source`: Byte-Quelle (UART RX oder Mock)
/// - `dispatcher`: Dispatcher mit Strip, Indikator und Antwort-Ausgabe
pub async fn serial_command_logic<B, S, I, W>(
    mut source: B,
    mut dispatcher: CommandDispatcher<S, I, W>,
) -> !
where
    B: ByteSource,
    S: SmartLedWriter,
    I: IndicatorPin,
    W: ResponseWriter,
{
    let mut receiver: LineReceiver = LineReceiver::new();

    loop {
        let byte = source.poll_byte();
        let now_ms = Instant::now().as_millis();

        match receiver.poll_once(now_ms, byte, &mut dispatcher) {
            PollEvent::Idle => {}
            PollEvent::Buffered => debug!("Buffered byte ({} pending)", receiver.cursor()),
            PollEvent::Dispatched(response) => {
                info!("Line dispatched: {} -> {}", response, dispatcher.state());
            }
            PollEvent::TimedOut { reported } => {
                warn!("Partial command timed out (reported: {})", reported);
            }
            PollEvent::Overflow => warn!("Line exceeds {} bytes, discarding", receiver.capacity()),
            PollEvent::Discarded => debug!("Discarded byte of overlong line"),
        }

        if let Some(fault) = dispatcher.take_fault() {
            error!("Dispatch fault: {}", fault);
        }

        // Async Delay: kein Warten auf Input, nur Poll-Intervall
        Timer::after(Duration::from_micros(POLL_INTERVAL_US)).await;
    }
}

/// Serial Command Task - Embassy Task
///
/// Übernimmt die Hardware-Initialisierung (UART, RMT, Indikator) und ruft
/// dann die testbare `serial_command_logic()` Funktion auf.
///
/// # Parameter
/// - `uart0`: UART0 Peripheral für Kommandos und Antworten
/// - `tx_pin` / `rx_pin`: UART Pins (GPIO16 / GPIO17)
/// - `gpio8`: GPIO8 Peripheral für die Strip-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `indicator_pin`: GPIO15 für den "aktiv" Indikator
#[embassy_executor::task]
pub async fn serial_command_task(
    uart0: esp_hal::peripherals::UART0<'static>,
    tx_pin: esp_hal::peripherals::GPIO16<'static>,
    rx_pin: esp_hal::peripherals::GPIO17<'static>,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    indicator_pin: esp_hal::peripherals::GPIO15<'static>,
) {
    // Buffer für SmartLED Daten erstellen (STRIP_LED_COUNT Pixel)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(STRIP_LED_COUNT);

    let mut strip = match RmtStripWriter::new(
        gpio8,
        rmt_peripheral,
        RMT_CLOCK_MHZ,
        LED_BRIGHTNESS,
        &mut rmt_buffer,
    ) {
        Ok(strip) => strip,
        Err(e) => {
            error!("RMT init failed: {}", e);
            return;
        }
    };

    // Strip beim Start ausschalten
    strip.fill(rgb::RGB8::default());
    if let Err(e) = strip.show() {
        error!("Initial strip clear failed: {}", e);
    }
    info!(
        "Strip ready: {} LEDs on GPIO{}, brightness {}",
        STRIP_LED_COUNT, LED_GPIO_PIN, LED_BRIGHTNESS
    );

    let indicator = GpioIndicator::new(indicator_pin);
    info!("Indicator on GPIO{}", INDICATOR_GPIO_PIN);

    let uart_config = UartConfig::default().with_baudrate(UART_BAUDRATE);
    let uart = match Uart::new(uart0, uart_config) {
        Ok(uart) => uart.with_tx(tx_pin).with_rx(rx_pin),
        Err(e) => {
            error!("UART init failed: {}", defmt::Debug2Format(&e));
            return;
        }
    };
    let (rx, tx) = uart.split();
    info!(
        "UART0 ready: {} baud, TX=GPIO{} RX=GPIO{}",
        UART_BAUDRATE, UART_TX_GPIO_PIN, UART_RX_GPIO_PIN
    );

    let dispatcher = CommandDispatcher::new(strip, indicator, UartResponseWriter::new(tx));

    // Business Logic aufrufen (läuft endlos)
    serial_command_logic(UartByteSource::new(rx), dispatcher).await
}
