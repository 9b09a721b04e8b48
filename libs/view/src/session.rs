use client::SessionApi;
use tracing::debug;

/// Whether the current browser session is signed in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionProbe {
    authenticated: bool,
}

impl SessionProbe {
    /// Asks `GET /user` once. Any failure just means signed out.
    pub async fn probe<A: SessionApi>(&mut self, api: &A) {
        self.authenticated = match api.probe_session().await {
            Ok(()) => true,
            Err(e) => {
                debug!(task = "probe session", err = e.to_string());
                false
            }
        };
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod test {
    use client::StatusCode;

    use super::*;
    use crate::mock::{Call, MockApi};

    #[tokio::test]
    async fn test_probe_ok() {
        let api = MockApi::default();
        api.push_session(Ok(()));
        let mut session = SessionProbe::default();

        session.probe(&api).await;

        assert!(session.is_authenticated());
        assert_eq!(api.calls(), vec![Call::ProbeSession]);
    }

    #[tokio::test]
    async fn test_probe_failure_is_signed_out() {
        let api = MockApi::default();
        api.push_session(Err(MockApi::status(StatusCode::UNAUTHORIZED)));
        api.push_session(Err(MockApi::transport()));
        let mut session = SessionProbe::default();

        session.probe(&api).await;
        assert!(!session.is_authenticated());

        session.probe(&api).await;
        assert!(!session.is_authenticated());
    }
}
