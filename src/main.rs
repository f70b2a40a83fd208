use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use debug_assistant::api::{AppState, configure_routes};
use debug_assistant::banner;
use debug_assistant::config::AppConfig;
use debug_assistant::providers::ollama::OllamaProvider;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner("web");

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("ℹ️  No .env file loaded ({}); using the process environment", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let bind = (app_config.web.host.clone(), app_config.web.port);
    log::info!(
        "Using Ollama at {} with model '{}'",
        app_config.ollama.api_base,
        app_config.ollama.model
    );

    let state = AppState::new(app_config);

    println!("🚀 Starting server...");
    println!("📊 Frontend available at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes::<OllamaProvider>)
    })
    .bind(bind)?
    .run()
    .await
}
