use clap::{Parser, Subcommand};
use mock_db_service::api::routes::routes;
use mock_db_service::api::server_state::ServerState;
use mock_db_service::application::configuration::composed::Configuration;
use mock_db_service::application::configuration::database::EnvNames as DatabaseEnvNames;
use mock_db_service::cli::check_user::check_user_exists;
use mock_db_service::domain::user::TEST_USER_EMAIL;
use mock_db_service::infrastructure::in_memory_mock_database::InMemoryMockDatabase;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::signal;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "🚀 Start the server")]
    Start,
    #[command(about = "Check whether the test user exists in the configured database")]
    CheckUser {
        #[arg(short, long, default_value = TEST_USER_EMAIL)]
        email: String,
    },
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let config = Configuration::default();
    let cli = Cli::parse();

    setup_logging(&config);

    debug_config(&config);

    match &cli.command {
        Some(Commands::Start) | None => start_server(&config).await,
        Some(Commands::CheckUser { email }) => match check_user_exists(config.db(), email).await
        {
            Ok(exists) => {
                println!("User exists: {}", exists);

                if exists {
                    println!("Test user {} found in database", email);
                }

                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to check user {}: {}", email, e);
                eprintln!("Error checking user: {}", e);

                ExitCode::FAILURE
            }
        },
    }
}

async fn start_server(config: &Configuration) -> ExitCode {
    let port = config.app().port();
    let host = config.app().host();
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await;

    let state = ServerState::new(
        config.app().clone(),
        Arc::new(InMemoryMockDatabase::new()),
    );

    match listener {
        Ok(listener) => {
            tracing::info!("Server started at {}", &addr);

            if let Err(e) = axum::serve(listener, routes(state))
                .with_graceful_shutdown(shutdown_signal())
                .await
            {
                tracing::error!("Server error: {}", e);

                return ExitCode::FAILURE;
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to bind to port {}: {}", port, e);

            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, starting graceful shutdown"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, starting graceful shutdown");
            }
            Err(e) => {
                tracing::error!("Failed to listen for terminate signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn setup_logging(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_max_level(config.app().log_level())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting mock db service");
}

fn debug_config(config: &Configuration) {
    let message = "Configuration loaded successfully";
    for (name, value) in config.envs() {
        match name.as_str() {
            DatabaseEnvNames::DATABASE_URL => {
                tracing::debug!(message, env = name, value = "****");
            }
            _ => {
                tracing::debug!(message, env = name, value = %value);
            }
        }
    }
}
