//! Application state wiring all services together.
//!
//! AppState holds the concrete ticket service used by both CLI commands and
//! REST API handlers. The service is generic over repository/provider
//! traits, but AppState pins it to the concrete infra implementations.

use std::sync::Arc;

use assistiq_core::ticket::service::TicketService;
use assistiq_infra::llm::openai::OpenAiProvider;
use assistiq_infra::sqlite::pool::DatabasePool;
use assistiq_infra::sqlite::ticket::SqliteTicketRepository;

/// Default completion model, overridable via `ASSISTIQ_MODEL`.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteTicketService = TicketService<SqliteTicketRepository, OpenAiProvider>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub ticket_service: Arc<ConcreteTicketService>,
}

impl AppState {
    /// Initialize the application state from the environment: resolve the
    /// database URL, connect, and wire the ticket service.
    ///
    /// - `ASSISTIQ_DATABASE_URL` overrides the SQLite connection string.
    /// - Otherwise the database lives under `ASSISTIQ_DATA_DIR` (default
    ///   `~/.assistiq`), created on first run.
    /// - The OpenAI credential comes from `OPENAI_API_KEY`; a missing key
    ///   degrades every reply to the fallback message rather than failing
    ///   startup.
    pub async fn init() -> anyhow::Result<Self> {
        let db_url = match std::env::var("ASSISTIQ_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let data_dir = std::env::var("ASSISTIQ_DATA_DIR").unwrap_or_else(|_| {
                    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                    format!("{home}/.assistiq")
                });
                tokio::fs::create_dir_all(&data_dir).await?;
                format!("sqlite://{data_dir}/assistiq.db?mode=rwc")
            }
        };

        let model =
            std::env::var("ASSISTIQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let pool = DatabasePool::new(&db_url).await?;
        let provider = OpenAiProvider::from_env(model.clone());

        Ok(Self::from_parts(pool, provider, model))
    }

    /// Wire the state from explicit parts (used by tests).
    pub fn from_parts(pool: DatabasePool, provider: OpenAiProvider, model: String) -> Self {
        let repo = SqliteTicketRepository::new(pool);
        let ticket_service = TicketService::new(repo, provider, model);

        Self {
            ticket_service: Arc::new(ticket_service),
        }
    }
}
