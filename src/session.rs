//! Session teardown and the navigation boundary
//!
//! `SessionController` owns the operations that cross out of the terminal
//! core: logout is a pure redirect signal; removal wipes persisted identity
//! state, resets the history log, and closes the hosting window. Navigation
//! and the window are injected capabilities so the core never renders a
//! destination or owns any chrome.

use crate::history::HistoryLog;
use crate::storage::{self, keys, SharedStore};

/// Navigation destinations at the session boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Login screen
    Login,
    /// User-data-not-found screen
    UserDataNotFound,
}

impl Destination {
    /// Route identifier handed to the navigator
    pub fn route(self) -> &'static str {
        match self {
            Self::Login => "/Login",
            Self::UserDataNotFound => "/userDataNotFound",
        }
    }
}

/// Boundary-transition capability
pub trait Navigator: Send {
    /// Perform the transition to the given destination
    fn navigate(&mut self, destination: Destination);
}

/// Closable container hosting the terminal
pub trait WindowHost: Send {
    /// Close the hosting window
    fn close(&mut self);
}

/// Owner of logout and destructive removal operations
pub struct SessionController {
    store: SharedStore,
    navigator: Box<dyn Navigator>,
    window: Box<dyn WindowHost>,
}

impl SessionController {
    /// Create a controller over the given capabilities
    pub fn new(
        store: SharedStore,
        navigator: Box<dyn Navigator>,
        window: Box<dyn WindowHost>,
    ) -> Self {
        Self {
            store,
            navigator,
            window,
        }
    }

    /// Identity currently present in the store
    pub fn current_user(&self) -> Option<String> {
        storage::lock(&self.store).get(keys::USER)
    }

    /// Redirect to the login boundary. Clears nothing.
    pub fn logout(&mut self) {
        info!("logging out, redirecting to {}", Destination::Login.route());
        self.navigator.navigate(Destination::Login);
    }

    /// Wipe persisted identity state, reset history, and close the window.
    ///
    /// The identity check for the not-found branch reads the state from
    /// before the deletion, since the same call deletes it.
    pub fn remove_user_data(&mut self, history: &mut HistoryLog) {
        let had_identity = self.current_user().is_some();
        {
            let mut store = storage::lock(&self.store);
            for key in [keys::FORGOT_QUESTION, keys::USER, keys::PASSWORD] {
                if let Err(err) = store.remove(key) {
                    warn!("failed to remove {:?} during teardown: {}", key, err);
                }
            }
        }
        history.clear();
        self.window.close();
        if !had_identity {
            self.navigator.navigate(Destination::UserDataNotFound);
        }
        info!("user data removed (identity was present: {})", had_identity);
    }

    /// Persist the installed OS-version marker. Attempt-once.
    pub fn install_update(&mut self, os_version: &str) {
        if let Err(err) = storage::lock(&self.store).set(keys::OS_VERSION, os_version) {
            warn!("failed to persist OS version {:?}: {}", os_version, err);
        }
    }
}
