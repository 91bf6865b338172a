//! Smoke-test binary for thaitok-rs.
//!
//! Runs the six-sample tokenization report against the configured engine and
//! prints it to stdout. Takes no command-line arguments.
//!
//! With the `python` feature enabled, the real `thai_tokenizer` Python module
//! is installed as the default engine before the report runs; otherwise the
//! whitespace fallback engine is used.

use std::io;

use thaitok_rs::{harness, Tokenizer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(feature = "python")]
    {
        use std::sync::Arc;
        match thaitok_rs::PyThaiEngine::new() {
            Ok(engine) => thaitok_rs::install_default_engine(Arc::new(engine)),
            Err(e) => {
                // Mirror the plugin's degraded mode: keep the whitespace
                // engine and continue
                log::warn!("could not initialize thai_tokenizer, using fallback: {e}");
            }
        }
    }

    let tokenizer = Tokenizer::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = harness::write_report(&tokenizer, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
