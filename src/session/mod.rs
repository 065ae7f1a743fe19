//! Chat session state machine
//!
//! An explicit finite-state object with pure transition methods. The session
//! owns the message list, the draft, the connectivity flag, and the single
//! in-flight turn token. It performs no I/O: event handlers call the
//! transitions and drive the transport separately, so the machine is fully
//! testable without a backend or a UI.
//!
//! Every accepted transition bumps a revision counter; a view adapter that
//! re-renders per revision observes states in exactly the transition order.

use crate::types::message::{Message, Role};

/// Greeting shown when a session starts
pub const GREETING: &str = "Hello! I'm your AI assistant. I can help you with user database queries, financial questions, and general knowledge. How can I assist you today?";

/// Greeting shown after the chat is cleared
pub const CLEARED_GREETING: &str = "Chat cleared! How can I help you today?";

/// Failure notice appended when a chat turn settles as failed
pub const OFFLINE_WARNING: &str = "⚠️ Server not reachable. Please check API.";

/// Notice appended when a health probe brings the connection back
pub const CONNECTION_RESTORED: &str = "✅ Connection restored!";

/// Canned prompts offered while the chat only holds the greeting
pub const QUICK_ACTIONS: &[&str] = &[
    "Find user with PAN ABGPA5303H",
    "What is SIP?",
    "Calculate AUM for client 11181",
    "Explain mutual funds",
    "Get transaction history",
];

/// What the session is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Connected, nothing in flight
    Idle,
    /// A chat turn or health probe is in flight
    Awaiting,
    /// The last turn failed, nothing in flight
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlightKind {
    Chat,
    Probe,
}

/// Token for the single outstanding request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flight {
    turn: u64,
    kind: FlightKind,
}

/// An accepted submission, ready to be sent over the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    /// Turn token. Settlements must present it back.
    pub turn: u64,
    /// The trimmed user text
    pub text: String,
}

/// How a chat turn settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The backend answered; the text becomes the assistant message
    Reply(String),
    /// The request failed; the session appends the offline warning
    Failed,
}

/// The chat session. At least one message always exists.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    draft: String,
    connected: bool,
    in_flight: Option<Flight>,
    next_id: u64,
    revision: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            draft: String::new(),
            connected: true,
            in_flight: None,
            next_id: 1,
            revision: 0,
        };
        session.push_message(Role::Assistant, GREETING);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Awaiting
        } else if self.connected {
            Phase::Idle
        } else {
            Phase::Disconnected
        }
    }

    /// Counter bumped once per accepted transition. Rejected input leaves it
    /// unchanged, so a view adapter can diff against it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.draft {
            self.draft = text;
            self.revision += 1;
        }
    }

    /// Submit the current draft as a chat turn.
    ///
    /// Guarded: the session must be connected and not busy, and the draft
    /// must contain something other than whitespace. On acceptance the
    /// trimmed text is appended as a user message, the draft is cleared, and
    /// the returned [`Outbound`] carries the turn token the settlement must
    /// present back. Rejected submissions change nothing and return `None`.
    pub fn submit(&mut self) -> Option<Outbound> {
        if self.in_flight.is_some() || !self.connected {
            tracing::debug!("submit rejected: busy or disconnected");
            return None;
        }
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let turn = self.push_message(Role::User, text.clone());
        self.draft.clear();
        self.in_flight = Some(Flight {
            turn,
            kind: FlightKind::Chat,
        });
        self.revision += 1;
        tracing::debug!("chat turn {} accepted", turn);
        Some(Outbound { turn, text })
    }

    /// Settle the in-flight chat turn.
    ///
    /// A settlement whose token does not match the current flight (it raced
    /// with `clear`, or was delivered twice) is dropped without any state
    /// change, keeping "at most one outstanding request" true even though
    /// requests cannot be cancelled.
    pub fn settle(&mut self, turn: u64, outcome: TurnOutcome) {
        match self.in_flight {
            Some(Flight {
                turn: current,
                kind: FlightKind::Chat,
            }) if current == turn => {}
            _ => {
                tracing::debug!("dropping stale settlement for turn {}", turn);
                return;
            }
        }

        self.in_flight = None;
        match outcome {
            TurnOutcome::Reply(text) => {
                self.push_message(Role::Assistant, text);
                self.connected = true;
            }
            TurnOutcome::Failed => {
                self.push_message(Role::Assistant, OFFLINE_WARNING);
                self.connected = false;
            }
        }
        self.revision += 1;
    }

    /// Start a manual health probe. Only meaningful while disconnected and
    /// not busy; returns the probe's turn token on acceptance.
    pub fn begin_retry(&mut self) -> Option<u64> {
        if self.connected || self.in_flight.is_some() {
            tracing::debug!("retry rejected: connected or busy");
            return None;
        }
        let turn = self.alloc_id();
        self.in_flight = Some(Flight {
            turn,
            kind: FlightKind::Probe,
        });
        self.revision += 1;
        tracing::debug!("health probe {} started", turn);
        Some(turn)
    }

    /// Settle the in-flight health probe. On success a restoration notice is
    /// appended and the connection flag comes back without consuming a user
    /// turn; the draft is untouched either way. Stale tokens are dropped.
    pub fn probe_settled(&mut self, turn: u64, ok: bool) {
        match self.in_flight {
            Some(Flight {
                turn: current,
                kind: FlightKind::Probe,
            }) if current == turn => {}
            _ => {
                tracing::debug!("dropping stale probe settlement for turn {}", turn);
                return;
            }
        }

        self.in_flight = None;
        if ok {
            self.push_message(Role::Assistant, CONNECTION_RESTORED);
            self.connected = true;
        }
        self.revision += 1;
    }

    /// Replace the message list with a single fresh greeting.
    ///
    /// Allowed in any phase. Connectivity and the draft are untouched; an
    /// in-flight token is dropped so a late settlement cannot resurrect a
    /// turn whose user message no longer exists.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.push_message(Role::Assistant, CLEARED_GREETING);
        self.in_flight = None;
        self.revision += 1;
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_message(&mut self, role: Role, text: impl Into<String>) -> u64 {
        let id = self.alloc_id();
        self.messages.push(Message::new(id, role, text));
        id
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
