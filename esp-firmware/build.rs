// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

/// Optionale Strip-Overrides aus Environment oder .env
const STRIP_OVERRIDES: [&str; 2] = ["STRIP_LED_COUNT", "LED_BRIGHTNESS"];

fn main() {
    // Lade .env file für Strip-Overrides
    // Fehlt die Datei, gelten die Defaults aus config.rs
    if dotenvy::dotenv().is_err() {
        println!("cargo:warning=.env nicht gefunden, nutze Defaults für Strip-Konfiguration");
    }

    // Gebe Overrides an Rust-Compiler weiter (option_env! in config.rs)
    for key in STRIP_OVERRIDES {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        if kind == "undefined-symbol" {
            if what.starts_with("_defmt_") {
                eprintln!();
                eprintln!("💡 `defmt` not found - make sure `defmt.x` is added as a linker script");
                eprintln!();
            } else if what == "_stack_start" {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            } else if what.starts_with("esp_rtos_") {
                eprintln!();
                eprintln!("💡 `esp-rtos` not started - call `esp_rtos::start()` before spawning tasks");
                eprintln!();
            }
            std::process::exit(0);
        }

        std::process::exit(1);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
