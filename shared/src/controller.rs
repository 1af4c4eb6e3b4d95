use crate::{
    connection::ConnectionState,
    error::{DashboardError, Result},
    message::Inbound,
    reading::Reading,
    store::{DataSet, DataStore},
    view::ViewRenderer,
};

pub const LOGIN_FAILED: &str = "Login failed, check the user id and try again";

/// What an inbound message did to the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ingested {
    /// A batch was stored in history and the view switched to it.
    History,
    /// A live reading was stored in the session set.
    Session,
    /// Not a reading; the server acknowledged the login.
    Acknowledged,
}

/// Application context: the readings, the current selection and the view
/// that mirrors it.
///
/// Outlives any single connection. Every connection created by a login
/// feeds the same store.
pub struct Dashboard<V> {
    store: DataStore,
    selection: DataSet,
    view: V,
}

impl<V: ViewRenderer> Dashboard<V> {
    pub fn new(view: V, selection: DataSet) -> Self {
        Self {
            store: DataStore::new(),
            selection,
            view,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn selection(&self) -> DataSet {
        self.selection
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Makes `set` current and redraws the view from the store.
    pub fn switch_to(&mut self, set: DataSet) {
        log::info!("Switching view to {set}");
        self.selection = set;
        self.view.clear();
        self.view.append_rows(self.store.all(set));
        match self.store.latest(set) {
            Some(latest) => self.view.show_latest(latest),
            None => self.view.show_latest(&Reading::placeholder()),
        }
    }

    /// Blanks the view. Stored readings are kept.
    pub fn clear_session(&mut self) {
        self.view.clear();
        self.view.show_latest(&Reading::placeholder());
    }

    /// Validates the id typed into the login form.
    pub fn login(&mut self, input: &str) -> Result<String> {
        let user_id = input.trim();
        if user_id.is_empty() {
            self.view.show_login_error(&DashboardError::EmptyUserId.to_string());
            return Err(DashboardError::EmptyUserId);
        }
        self.view.show_login_error("");
        Ok(user_id.to_string())
    }

    /// Reflects a connection state change in the login surface.
    pub fn connection_changed(&mut self, state: ConnectionState) {
        self.view.show_connection(state);
        match state {
            ConnectionState::Connected => {
                self.view.show_login_error("");
                self.view.set_login_visible(false);
            }
            ConnectionState::Errored => {
                self.view.show_login_error(LOGIN_FAILED);
                self.view.set_login_visible(true);
            }
            _ => {}
        }
    }

    /// Stores the readings carried by `inbound` and updates the view.
    pub fn ingest(&mut self, inbound: Inbound) -> Ingested {
        match inbound {
            Inbound::Batch(raw) => {
                let count = raw.len();
                log::info!("Received {count} history readings");
                for reading in raw {
                    self.store.append(DataSet::History, reading.into());
                }
                self.switch_to(DataSet::History);
                Ingested::History
            }
            Inbound::Single(raw) => {
                let reading = Reading::from(raw);
                if self.selection == DataSet::Session {
                    self.view.show_latest(&reading);
                    self.view.append_rows(std::slice::from_ref(&reading));
                }
                self.store.append(DataSet::Session, reading);
                Ingested::Session
            }
            Inbound::Acknowledgement(payload) => {
                log::info!("Acknowledged: {payload}");
                Ingested::Acknowledged
            }
        }
    }
}
