//! Ticket service orchestrating intake and reply generation.
//!
//! TicketService coordinates between the TicketRepository and the
//! LlmProvider: persist the incoming request, attempt one completion call,
//! and substitute the fixed fallback reply when the call fails.

use assistiq_types::error::TicketError;
use assistiq_types::llm::{CompletionRequest, Message, MessageRole};
use assistiq_types::ticket::Ticket;
use tracing::{info, warn};

use crate::llm::provider::LlmProvider;
use crate::repository::ticket::TicketRepository;

/// System prompt sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful customer-support assistant.";

/// Reply returned when the completion call cannot be completed.
pub const FALLBACK_REPLY: &str =
    "Thanks for your message! Our support team has received your ticket and will respond shortly.";

/// Output token cap for the single reply.
const MAX_REPLY_TOKENS: u32 = 1024;

/// Result of a successful intake: the stored ticket and the reply text.
#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    pub ticket: Ticket,
    pub reply: String,
}

/// Orchestrates ticket persistence and reply generation.
///
/// Generic over `TicketRepository` and `LlmProvider` to maintain clean
/// architecture (assistiq-core never depends on assistiq-infra).
pub struct TicketService<R: TicketRepository, P: LlmProvider> {
    repo: R,
    provider: P,
    model: String,
}

impl<R: TicketRepository, P: LlmProvider> TicketService<R, P> {
    /// Create a new ticket service with the given repository and provider.
    pub fn new(repo: R, provider: P, model: String) -> Self {
        Self {
            repo,
            provider,
            model,
        }
    }

    /// Access the ticket repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Store an incoming support request and produce a reply.
    ///
    /// Persistence failure fails the whole operation. A failed completion
    /// call does not: the fixed fallback reply is substituted and the
    /// intake still succeeds. The returned reply is never empty.
    pub async fn open_ticket(
        &self,
        name: Option<String>,
        message: Option<String>,
    ) -> Result<IntakeOutcome, TicketError> {
        let ticket = Ticket::new(name, message);
        let ticket = self.repo.create(&ticket).await.map_err(TicketError::Save)?;

        let reply = match self.provider.complete(&self.build_request(&ticket)).await {
            Ok(response) if !response.content.is_empty() => {
                info!(
                    ticket_id = %ticket.id,
                    provider = self.provider.name(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Reply generated"
                );
                response.content
            }
            Ok(_) => {
                warn!(ticket_id = %ticket.id, "Provider returned empty reply, using fallback");
                FALLBACK_REPLY.to_string()
            }
            Err(e) => {
                warn!(ticket_id = %ticket.id, error = %e, "Completion failed, using fallback");
                FALLBACK_REPLY.to_string()
            }
        };

        Ok(IntakeOutcome { ticket, reply })
    }

    /// List all stored tickets, newest first.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, TicketError> {
        self.repo.list().await.map_err(TicketError::Fetch)
    }

    /// Count stored tickets.
    pub async fn count_tickets(&self) -> Result<u64, TicketError> {
        self.repo.count().await.map_err(TicketError::Fetch)
    }

    fn build_request(&self, ticket: &Ticket) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: ticket.message.clone(),
            }],
            system: Some(SYSTEM_PROMPT.to_string()),
            max_tokens: MAX_REPLY_TOKENS,
            temperature: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistiq_types::error::RepositoryError;
    use assistiq_types::llm::{CompletionResponse, LlmError, Usage};
    use assistiq_types::ticket::{DEFAULT_MESSAGE, DEFAULT_NAME};
    use std::sync::Mutex;
    use uuid::Uuid;

    /// In-memory repository for service tests.
    #[derive(Default)]
    struct MemTicketRepository {
        tickets: Mutex<Vec<Ticket>>,
        fail: bool,
    }

    impl MemTicketRepository {
        fn failing() -> Self {
            Self {
                tickets: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl TicketRepository for MemTicketRepository {
        async fn create(&self, ticket: &Ticket) -> Result<Ticket, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Connection);
            }
            self.tickets.lock().unwrap().push(ticket.clone());
            Ok(ticket.clone())
        }

        async fn get(&self, id: &Uuid) -> Result<Option<Ticket>, RepositoryError> {
            Ok(self
                .tickets
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == *id)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<Ticket>, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Connection);
            }
            let mut tickets = self.tickets.lock().unwrap().clone();
            tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(tickets)
        }

        async fn count(&self) -> Result<u64, RepositoryError> {
            Ok(self.tickets.lock().unwrap().len() as u64)
        }
    }

    /// Provider that echoes the user message back.
    struct EchoProvider;

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                id: "cmpl-test".to_string(),
                content: format!("re: {}", request.messages[0].content),
                model: request.model.clone(),
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 5,
                },
            })
        }
    }

    /// Provider that always fails.
    struct BrokenProvider;

    impl LlmProvider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::RateLimited {
                retry_after_ms: None,
            })
        }
    }

    /// Provider that succeeds with empty content.
    struct SilentProvider;

    impl LlmProvider for SilentProvider {
        fn name(&self) -> &str {
            "silent"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                id: "cmpl-empty".to_string(),
                content: String::new(),
                model: request.model.clone(),
                usage: Usage::default(),
            })
        }
    }

    fn service<P: LlmProvider>(provider: P) -> TicketService<MemTicketRepository, P> {
        TicketService::new(
            MemTicketRepository::default(),
            provider,
            "gpt-3.5-turbo".to_string(),
        )
    }

    #[tokio::test]
    async fn test_open_ticket_returns_reply() {
        let svc = service(EchoProvider);
        let outcome = svc
            .open_ticket(Some("Ada".to_string()), Some("Help!".to_string()))
            .await
            .unwrap();

        assert_eq!(outcome.ticket.name, "Ada");
        assert_eq!(outcome.reply, "re: Help!");
        assert_eq!(svc.count_tickets().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_ticket_substitutes_defaults() {
        let svc = service(EchoProvider);
        let outcome = svc.open_ticket(None, None).await.unwrap();

        assert_eq!(outcome.ticket.name, DEFAULT_NAME);
        assert_eq!(outcome.ticket.message, DEFAULT_MESSAGE);
    }

    #[tokio::test]
    async fn test_failed_completion_uses_fallback_verbatim() {
        let svc = service(BrokenProvider);
        let outcome = svc
            .open_ticket(Some("Ada".to_string()), Some("Help!".to_string()))
            .await
            .unwrap();

        assert_eq!(outcome.reply, FALLBACK_REPLY);
        // The ticket is still persisted despite the provider failure.
        assert_eq!(svc.count_tickets().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_completion_uses_fallback() {
        let svc = service(SilentProvider);
        let outcome = svc.open_ticket(None, Some("hello".to_string())).await.unwrap();
        assert_eq!(outcome.reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_persistence_failure_fails_intake() {
        let svc = TicketService::new(
            MemTicketRepository::failing(),
            EchoProvider,
            "gpt-3.5-turbo".to_string(),
        );
        let result = svc.open_ticket(None, None).await;
        assert!(matches!(result, Err(TicketError::Save(_))));
    }

    #[tokio::test]
    async fn test_list_tickets_newest_first() {
        let svc = service(EchoProvider);
        svc.open_ticket(Some("first".to_string()), None).await.unwrap();
        svc.open_ticket(Some("second".to_string()), None).await.unwrap();
        svc.open_ticket(Some("third".to_string()), None).await.unwrap();

        let tickets = svc.list_tickets().await.unwrap();
        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets[0].name, "third");
        assert_eq!(tickets[2].name, "first");
    }

    #[tokio::test]
    async fn test_completion_request_carries_system_prompt() {
        // The request shape is observable through the echo provider only
        // indirectly; assert it directly via build_request.
        let svc = service(EchoProvider);
        let ticket = Ticket::new(None, Some("printer on fire".to_string()));
        let request = svc.build_request(&ticket);

        assert_eq!(request.system.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[0].content, "printer on fire");
        assert_eq!(request.model, "gpt-3.5-turbo");
    }
}
