//! Application state and dependency injection.

use ladle_postgres::{PgClient, PgResult};

use crate::service::{ServiceConfig, SessionStore};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). The session
/// store lives here for the whole process lifetime; it is created exactly
/// once and shared by every clone of the state.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    postgres: PgClient,
    sessions: SessionStore,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(config: &ServiceConfig) -> PgResult<Self> {
        let service_state = Self {
            postgres: config.connect_postgres()?,
            sessions: SessionStore::new(),
        };

        Ok(service_state)
    }

    /// Returns the database client.
    pub fn postgres(&self) -> &PgClient {
        &self.postgres
    }

    /// Returns the session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+ $(,)?) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(postgres: PgClient);
impl_di!(sessions: SessionStore);
