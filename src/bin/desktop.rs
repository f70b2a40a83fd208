use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use debug_assistant::banner;
use debug_assistant::config::AppConfig;
use debug_assistant::desktop::terminal::{TerminalView, input_loop};
use debug_assistant::desktop::DesktopShell;
use debug_assistant::providers::ollama::OllamaProvider;

fn main() {
    banner::print_banner("desktop");

    let _ = dotenvy::dotenv();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let model = config.ollama.model.clone();
    let provider = Arc::new(OllamaProvider::new(reqwest::Client::new(), config.ollama));

    let (events_tx, events_rx) = mpsc::channel();
    let (ready_tx, ready_rx) = mpsc::channel();

    let shell = DesktopShell::new(provider, model, TerminalView::new(ready_tx), events_tx.clone());

    // input_loop closes the UI loop on every exit path, panics included.
    let input_tx = events_tx.clone();
    let input = thread::Builder::new().name("input".to_string()).spawn(move || {
        if let Err(e) = input_loop(input_tx, ready_rx) {
            log::error!("Input closed: {}", e);
        }
    });
    if let Err(e) = input {
        eprintln!("❌ Could not start the input thread: {}", e);
        std::process::exit(1);
    }
    drop(events_tx);

    // The UI thread: every widget update happens here.
    shell.run(events_rx);
    println!("👋 Bye.");
}
