use anyhow::Result;
use campus_server::server;
use clap::Parser;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about = "GraphQL backend for clients, projects and study groups")]
struct ServerArgs {
    #[clap(short, long, env = "CAMPUS_LOG_LEVEL")]
    log_level: Option<String>,
    #[clap(short, long, env = "CAMPUS_PORT", default_value = "42069")]
    port: u16,
    /// SQLite file path, or `:memory:`
    #[clap(short, long, env = "CAMPUS_DATABASE", default_value = "campus.db")]
    database: String,
    #[clap(long, env = "CAMPUS_CORS_ORIGIN")]
    cors_origin: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    setup_logging(args.log_level.as_deref());

    info!("Starting server on port {}", args.port);
    server::start_server(args.port, &args.database, args.cors_origin.as_deref()).await?;

    Ok(())
}

fn setup_logging(log_level: Option<&str>) {
    let log_level = match log_level.unwrap_or("info").to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::database::connection::{get_database_url, MEMORY_DATABASE};

    const ENV_VARS: [&str; 4] = [
        "CAMPUS_PORT",
        "CAMPUS_DATABASE",
        "CAMPUS_CORS_ORIGIN",
        "CAMPUS_LOG_LEVEL",
    ];

    // Defaults and environment fallbacks share process env, so they run in one test.
    #[test]
    fn defaults_and_environment_fallbacks() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }

        let args = ServerArgs::try_parse_from(["campus-server"]).unwrap();
        assert_eq!(args.port, 42069);
        assert_eq!(args.database, "campus.db");
        assert!(args.cors_origin.is_none());
        assert!(args.log_level.is_none());

        std::env::set_var("CAMPUS_PORT", "8080");
        std::env::set_var("CAMPUS_DATABASE", "/var/lib/campus/campus.db");
        std::env::set_var("CAMPUS_CORS_ORIGIN", "http://localhost:3000");
        std::env::set_var("CAMPUS_LOG_LEVEL", "debug");

        let from_env = ServerArgs::try_parse_from(["campus-server"]).unwrap();
        let flags_win = ServerArgs::try_parse_from(["campus-server", "--port", "9000"]).unwrap();

        for var in ENV_VARS {
            std::env::remove_var(var);
        }

        assert_eq!(from_env.port, 8080);
        assert_eq!(from_env.database, "/var/lib/campus/campus.db");
        assert_eq!(from_env.cors_origin.as_deref(), Some("http://localhost:3000"));
        assert_eq!(from_env.log_level.as_deref(), Some("debug"));
        assert_eq!(flags_win.port, 9000);
    }

    #[test]
    fn memory_database_flag_selects_in_memory_url() {
        let args = ServerArgs::try_parse_from(["campus-server", "--database", ":memory:"]).unwrap();
        assert_eq!(args.database, ":memory:");
        assert_eq!(get_database_url(Some(&args.database)), MEMORY_DATABASE);
    }
}
