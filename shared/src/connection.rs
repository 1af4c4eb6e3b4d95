use derive_more::Display;

use crate::{
    controller::{Dashboard, Ingested},
    error::Result,
    message::{Inbound, Outbound},
    view::ViewRenderer,
};

/// Lifecycle of one connection. `Closed` and `Errored` are terminal.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Closed,
    Errored,
}

/// Transport notifications that drive [`ConnectionState`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ConnectionEvent {
    Connect,
    Open,
    Error,
    Close,
}

impl ConnectionState {
    /// The state reached on `event`, or `None` if the event is not valid
    /// here.
    pub fn next(self, event: ConnectionEvent) -> Option<ConnectionState> {
        use ConnectionEvent as E;
        use ConnectionState as S;

        match (self, event) {
            (S::Disconnected, E::Connect) => Some(S::Connecting),
            (S::Connecting, E::Open) => Some(S::Connected),
            (S::Connecting | S::Connected, E::Error) => Some(S::Errored),
            (S::Connecting | S::Connected, E::Close) => Some(S::Closed),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ConnectionState::Closed | ConnectionState::Errored)
    }
}

/// Outgoing half of a live connection.
pub trait Transport {
    fn send(&mut self, text: &str) -> Result<()>;
}

/// One connection to the telemetry endpoint.
///
/// The client owns the state machine and the outgoing side. Incoming
/// transport events are fed in through the `on_*` methods, which update the
/// [`Dashboard`] passed alongside. A client is never reused after it reaches
/// a terminal state; logging in again builds a new one.
pub struct ConnectionClient<T> {
    user_id: String,
    state: ConnectionState,
    transport: T,
}

impl<T: Transport> ConnectionClient<T> {
    /// Wraps a transport that is being opened.
    pub fn connect(user_id: impl Into<String>, transport: T) -> Self {
        let mut client = Self {
            user_id: user_id.into(),
            state: ConnectionState::Disconnected,
            transport,
        };
        client.advance(ConnectionEvent::Connect);
        client
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn on_open<V: ViewRenderer>(&mut self, dashboard: &mut Dashboard<V>) {
        if !self.advance(ConnectionEvent::Open) {
            return;
        }
        self.send(Outbound::GetData {
            user_id: self.user_id.clone(),
        });
        dashboard.connection_changed(self.state);
    }

    pub fn on_message<V: ViewRenderer>(&mut self, text: &str, dashboard: &mut Dashboard<V>) {
        if self.state.is_terminal() {
            log::warn!("Ignoring message while {}", self.state);
            return;
        }
        log::debug!("Message received: {text}");

        let inbound = match Inbound::decode(text) {
            Ok(inbound) => inbound,
            Err(e) => {
                log::error!("Error processing message: {e}");
                return;
            }
        };

        if let Ingested::Acknowledged = dashboard.ingest(inbound) {
            self.send(Outbound::GetHistory {
                user_id: self.user_id.clone(),
            });
        }
    }

    pub fn on_error<V: ViewRenderer>(&mut self, dashboard: &mut Dashboard<V>) {
        if self.advance(ConnectionEvent::Error) {
            dashboard.connection_changed(self.state);
        }
    }

    pub fn on_close<V: ViewRenderer>(&mut self, dashboard: &mut Dashboard<V>) {
        if self.advance(ConnectionEvent::Close) {
            dashboard.connection_changed(self.state);
        }
    }

    fn advance(&mut self, event: ConnectionEvent) -> bool {
        match self.state.next(event) {
            Some(next) => {
                log::info!("Connection {}: {} -> {}", self.user_id, self.state, next);
                self.state = next;
                true
            }
            None => {
                log::warn!("Ignoring {event} while {}", self.state);
                false
            }
        }
    }

    fn send(&mut self, request: Outbound) {
        let sent = request
            .encode()
            .and_then(|text| self.transport.send(&text));
        if let Err(e) = sent {
            log::warn!("Failed to send {request:?}: {e}");
        }
    }
}
