use log::{info, warn};

use crate::client::HostClient;
use crate::config::Credentials;
use crate::error::Result;

/// what a disconnect call ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disconnect {
    Closed,
    NoConnection,
}

/// owns the client and at most one live session on it
pub struct Connection<C: HostClient> {
    client: C,
    session: Option<C::Session>,
}

impl<C: HostClient> Connection<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            session: None,
        }
    }

    /// open a session, replacing (and closing) any previous one
    pub fn connect(&mut self, credentials: &Credentials, secure: bool) -> Result<&C::Session> {
        if self.session.is_some() {
            self.disconnect()?;
        }

        info!(
            "connecting to {} as {} ({})",
            credentials.host,
            credentials.username,
            if secure { "ssl" } else { "no ssl" }
        );
        let session = self.client.connect(credentials, secure)?;
        let session = self.session.insert(session);
        Ok(&*session)
    }

    /// close the session if there is one. safe to call repeatedly
    pub fn disconnect(&mut self) -> Result<Disconnect> {
        match self.session.take() {
            None => {
                info!("no connection to close");
                Ok(Disconnect::NoConnection)
            }
            Some(session) => {
                info!("closing connection");
                self.client.disconnect(session)?;
                Ok(Disconnect::Closed)
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }
}

impl<C: HostClient> Drop for Connection<C> {
    fn drop(&mut self) {
        // only reached with a live session when the normal cleanup was skipped
        if let Some(session) = self.session.take() {
            if let Err(e) = self.client.disconnect(session) {
                warn!("disconnect on drop failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConnectFailure, EsxiError};
    use crate::testing::{RecordingClient, Tree, credentials};

    #[test]
    fn disconnect_twice_only_closes_once() {
        let client = RecordingClient::new(Tree::new());
        let calls = client.calls();
        let mut conn = Connection::new(client);

        conn.connect(&credentials(), true).unwrap();
        assert!(conn.is_connected());

        assert_eq!(conn.disconnect().unwrap(), Disconnect::Closed);
        assert_eq!(conn.disconnect().unwrap(), Disconnect::NoConnection);
        assert_eq!(calls.disconnects(), 1);
        assert!(!conn.is_connected());
    }

    #[test]
    fn disconnect_without_connect_is_a_noop() {
        let client = RecordingClient::new(Tree::new());
        let calls = client.calls();
        let mut conn = Connection::new(client);

        assert_eq!(conn.disconnect().unwrap(), Disconnect::NoConnection);
        assert_eq!(calls.disconnects(), 0);
    }

    #[test]
    fn failed_connect_leaves_no_session() {
        let client = RecordingClient::new(Tree::new()).refusing(ConnectFailure::Authentication);
        let calls = client.calls();
        let mut conn = Connection::new(client);

        let err = conn.connect(&credentials(), true).err().unwrap();
        assert!(matches!(
            err,
            EsxiError::Connection {
                reason: ConnectFailure::Authentication,
                ..
            }
        ));
        assert!(!conn.is_connected());
        assert_eq!(conn.disconnect().unwrap(), Disconnect::NoConnection);
        assert_eq!(calls.disconnects(), 0);
    }

    #[test]
    fn reconnect_closes_the_previous_session() {
        let client = RecordingClient::new(Tree::new());
        let calls = client.calls();
        let mut conn = Connection::new(client);

        conn.connect(&credentials(), true).unwrap();
        conn.connect(&credentials(), false).unwrap();
        assert_eq!(calls.connects(), 2);
        assert_eq!(calls.disconnects(), 1);
    }

    #[test]
    fn drop_closes_a_live_session() {
        let client = RecordingClient::new(Tree::new());
        let calls = client.calls();
        {
            let mut conn = Connection::new(client);
            conn.connect(&credentials(), true).unwrap();
        }
        assert_eq!(calls.disconnects(), 1);
    }

    #[test]
    fn drop_after_disconnect_does_not_close_again() {
        let client = RecordingClient::new(Tree::new());
        let calls = client.calls();
        {
            let mut conn = Connection::new(client);
            conn.connect(&credentials(), true).unwrap();
            conn.disconnect().unwrap();
        }
        assert_eq!(calls.disconnects(), 1);
    }
}
