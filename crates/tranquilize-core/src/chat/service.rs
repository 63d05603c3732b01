//! ChatService -- turns user input into conversation turns.
//!
//! The service owns the support client and the loading flag. The
//! conversation itself is owned by the caller and passed in on every send.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info, info_span, Instrument};

use tranquilize_types::chat::{ChatTurn, DetectRequest};

use super::conversation::Conversation;
use crate::client::support::SupportClient;

/// What happened to one send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty or whitespace; nothing was sent.
    Skipped,
    /// A request was already in flight; nothing was sent.
    Busy,
    /// The endpoint answered and the turn was appended at `index`.
    Appended { index: usize },
    /// The request failed; no turn was appended.
    Dropped,
}

/// Sends chat messages through a [`SupportClient`], one at a time.
pub struct ChatService<C> {
    client: C,
    loading: AtomicBool,
}

/// Holds the loading flag for the duration of a request.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<C: SupportClient> ChatService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            loading: AtomicBool::new(false),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Send `input` to the support endpoint and append the resulting turn.
    ///
    /// Whitespace-only input never reaches the network. Request failures
    /// are logged and swallowed: the turn is dropped and the loading flag
    /// is cleared either way.
    pub async fn send(&self, conversation: &mut Conversation, input: &str) -> SendOutcome {
        if input.trim().is_empty() {
            debug!("Ignoring empty message");
            return SendOutcome::Skipped;
        }

        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            debug!("Request already in flight, ignoring send");
            return SendOutcome::Busy;
        };

        let request = DetectRequest::new(input);
        let span = info_span!(
            "detect",
            client = self.client.name(),
            endpoint = self.client.endpoint(),
        );

        match self.client.detect(&request).instrument(span).await {
            Ok(raw) => {
                let kind = raw.kind();
                let index = conversation.push(ChatTurn::new(input, raw));
                info!(turn = index, kind, "Support reply received");
                SendOutcome::Appended { index }
            }
            Err(e) => {
                error!(error = %e, endpoint = self.client.endpoint(), "Failed to send message, dropping turn");
                SendOutcome::Dropped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    use tokio::sync::Notify;
    use tranquilize_types::error::ClientError;
    use tranquilize_types::reply::RawResponse;

    use crate::reply::normalize;

    /// Replays scripted results and records every request it sees.
    struct MockClient {
        script: Mutex<VecDeque<Result<RawResponse, ClientError>>>,
        requests: Mutex<Vec<DetectRequest>>,
        calls: AtomicUsize,
        gate: Option<Notify>,
    }

    impl MockClient {
        fn new(script: Vec<Result<RawResponse, ClientError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn gated(script: Vec<Result<RawResponse, ClientError>>) -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::new(script)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SupportClient for MockClient {
        fn name(&self) -> &str {
            "mock"
        }

        fn endpoint(&self) -> &str {
            "memory://mock"
        }

        async fn detect(&self, request: &DetectRequest) -> Result<RawResponse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Request("script exhausted".to_string())))
        }
    }

    fn text(s: &str) -> RawResponse {
        RawResponse::Text(s.to_string())
    }

    #[tokio::test]
    async fn test_send_appends_turn_with_raw_response() {
        let body = r#"{"resposta":"Respire fundo","exercicio":"4-7-8"}"#;
        let service = ChatService::new(MockClient::new(vec![Ok(text(body))]));
        let mut conversation = Conversation::new();

        let outcome = service.send(&mut conversation, "estou ansioso").await;

        assert_eq!(outcome, SendOutcome::Appended { index: 0 });
        assert_eq!(conversation.len(), 1);
        let turn = &conversation.turns()[0];
        assert_eq!(turn.user_text, "estou ansioso");
        assert_eq!(turn.raw_response, text(body));

        let reply = normalize(&turn.raw_response);
        assert_eq!(reply.resposta, "Respire fundo");
        assert_eq!(reply.exercicio.as_deref(), Some("4-7-8"));

        let requests = service.client().requests.lock().unwrap();
        assert_eq!(requests.as_slice(), [DetectRequest::new("estou ansioso")]);
    }

    #[tokio::test]
    async fn test_input_is_sent_as_typed() {
        let service = ChatService::new(MockClient::new(vec![Ok(text("Estou aqui"))]));
        let mut conversation = Conversation::new();
        let typed = "  estou ansioso \n";

        assert_eq!(
            service.send(&mut conversation, typed).await,
            SendOutcome::Appended { index: 0 }
        );
        assert_eq!(conversation.turns()[0].user_text, typed);

        let requests = service.client().requests.lock().unwrap();
        assert_eq!(requests.as_slice(), [DetectRequest::new(typed)]);
        assert_eq!(requests[0].text, typed);
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_call() {
        let service = ChatService::new(MockClient::new(vec![Ok(text("nunca"))]));
        let mut conversation = Conversation::new();

        for input in ["", "   ", "\n\t  \n"] {
            assert_eq!(service.send(&mut conversation, input).await, SendOutcome::Skipped);
        }

        assert_eq!(service.client().calls(), 0);
        assert!(conversation.is_empty());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn test_request_failure_drops_turn_and_resets_loading() {
        let service = ChatService::new(MockClient::new(vec![
            Err(ClientError::Request("connection refused".to_string())),
            Ok(text("Estou aqui")),
        ]));
        let mut conversation = Conversation::new();

        assert_eq!(service.send(&mut conversation, "oi").await, SendOutcome::Dropped);
        assert!(conversation.is_empty());
        assert!(!service.is_loading());

        assert_eq!(
            service.send(&mut conversation, "oi de novo").await,
            SendOutcome::Appended { index: 0 }
        );
        assert_eq!(conversation.turns()[0].user_text, "oi de novo");
    }

    #[tokio::test]
    async fn test_turns_keep_send_order() {
        let service = ChatService::new(MockClient::new(vec![
            Ok(text("um")),
            Ok(text("dois")),
            Ok(text("três")),
        ]));
        let mut conversation = Conversation::new();

        for input in ["a", "b", "c"] {
            service.send(&mut conversation, input).await;
        }

        let pairs: Vec<(String, String)> = conversation
            .replies()
            .map(|(turn, reply)| (turn.user_text.clone(), reply.resposta))
            .collect();
        assert_eq!(
            pairs,
            [
                ("a".to_string(), "um".to_string()),
                ("b".to_string(), "dois".to_string()),
                ("c".to_string(), "três".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_second_send_while_loading_is_busy() {
        let service = ChatService::new(MockClient::gated(vec![Ok(text("primeira"))]));
        let mut first = Conversation::new();
        let mut second = Conversation::new();

        let (a, b, ()) = tokio::join!(
            service.send(&mut first, "primeira"),
            service.send(&mut second, "segunda"),
            async {
                while !service.is_loading() {
                    tokio::task::yield_now().await;
                }
                service.client().gate.as_ref().unwrap().notify_one();
            },
        );

        // Whichever send reached the client first wins; the other is rejected.
        let mut outcomes = [a, b];
        outcomes.sort_by_key(|o| matches!(o, SendOutcome::Busy));
        assert_eq!(outcomes, [SendOutcome::Appended { index: 0 }, SendOutcome::Busy]);
        assert_eq!(first.len() + second.len(), 1);
        assert_eq!(service.client().calls(), 1);
        assert!(!service.is_loading());
    }
}
