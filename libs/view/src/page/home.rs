use std::fmt;

use client::YapperApi;

use crate::{
    composer::{Composer, ComposerSignal},
    feed::FeedLoader,
    session::SessionProbe,
};

/// Global feed with a floating `+` that opens the composer overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    session: SessionProbe,
    feed: FeedLoader,
    overlay: Option<Composer>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            session: SessionProbe::default(),
            feed: FeedLoader::global(),
            overlay: None,
        }
    }

    /// Issues the session probe and the feed fetch together.
    pub async fn mount<A: YapperApi>(&mut self, api: &A) {
        let (session, feed) = (&mut self.session, &mut self.feed);
        futures::join!(session.probe(api), feed.load(api));
    }

    pub fn session(&self) -> &SessionProbe {
        &self.session
    }

    pub fn feed(&self) -> &FeedLoader {
        &self.feed
    }

    pub fn shows_create_button(&self) -> bool {
        self.session.is_authenticated() && self.overlay.is_none()
    }

    pub fn open_composer(&mut self) -> bool {
        if !self.shows_create_button() {
            return false;
        }

        self.overlay = Some(Composer::new().with_on_create().with_on_close());
        true
    }

    pub fn close_composer(&mut self) {
        self.overlay = None;
    }

    pub fn composer(&self) -> Option<&Composer> {
        self.overlay.as_ref()
    }

    pub fn composer_mut(&mut self) -> Option<&mut Composer> {
        self.overlay.as_mut()
    }

    /// Submits the overlay. A created post closes the overlay and refetches
    /// the feed.
    pub async fn submit<A: YapperApi>(
        &mut self,
        api: &A,
    ) -> Option<ComposerSignal> {
        let composer = self.overlay.as_mut()?;
        let signal = composer.submit(api).await;

        match &signal {
            Some(ComposerSignal::Created(_)) => {
                self.overlay = None;
                self.feed.refresh(api).await;
            }
            Some(ComposerSignal::Close) => self.overlay = None,
            None => {}
        }

        signal
    }
}

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.feed.view())?;

        if self.shows_create_button() {
            writeln!(f, "\n(+)")?;
        }
        if let Some(composer) = &self.overlay {
            writeln!(f)?;
            write!(f, "{}", composer.view())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use client::StatusCode;

    use super::*;
    use crate::mock::{post, Call, MockApi};

    #[tokio::test]
    async fn test_mount_signed_out_with_empty_feed() {
        // Arrange
        let api = MockApi::default();
        api.push_session(Err(MockApi::status(StatusCode::UNAUTHORIZED)));
        api.push_feed(Ok(vec![]));
        let mut home = HomePage::new();

        // Act
        home.mount(&api).await;

        // Assert
        let rendered = home.to_string();
        assert!(rendered.contains("No posts available."));
        assert!(!rendered.contains("(+)"));
        assert!(!home.shows_create_button());
        assert!(!home.open_composer());
    }

    #[tokio::test]
    async fn test_mount_signed_in_shows_posts_and_button() {
        let api = MockApi::default();
        api.push_session(Ok(()));
        api.push_feed(Ok(vec![post(1, "hello")]));
        let mut home = HomePage::new();

        home.mount(&api).await;

        let rendered = home.to_string();
        assert!(rendered.contains("hello"));
        assert!(rendered.contains("(+)"));

        let mut calls = api.calls();
        calls.sort_by_key(|call| format!("{:?}", call));
        assert_eq!(calls, vec![Call::ListPosts, Call::ProbeSession]);
    }

    #[tokio::test]
    async fn test_feed_failure_renders_error_page() {
        let api = MockApi::default();
        api.push_session(Ok(()));
        api.push_feed(Err(MockApi::status(StatusCode::INTERNAL_SERVER_ERROR)));
        let mut home = HomePage::new();

        home.mount(&api).await;

        let rendered = home.to_string();
        assert!(rendered.contains("There was an error fetching posts."));
    }

    #[tokio::test]
    async fn test_create_closes_overlay_and_refreshes() {
        let api = MockApi::default();
        api.push_session(Ok(()));
        api.push_feed(Ok(vec![post(1, "old")]));
        api.push_post(Ok(post(2, "new")));
        api.push_feed(Ok(vec![post(2, "new"), post(1, "old")]));
        let mut home = HomePage::new();
        home.mount(&api).await;

        assert!(home.open_composer());
        assert!(!home.shows_create_button());
        home.composer_mut().unwrap().set_content("  new ");
        let signal = home.submit(&api).await;

        assert_eq!(signal, Some(ComposerSignal::Created(post(2, "new"))));
        assert!(home.composer().is_none());
        assert_eq!(home.feed().posts().unwrap().len(), 2);
        assert_eq!(
            api.calls().iter().filter(|call| **call == Call::ListPosts).count(),
            2
        );
    }

    #[tokio::test]
    async fn test_failed_create_keeps_overlay() {
        let api = MockApi::default();
        api.push_session(Ok(()));
        api.push_feed(Ok(vec![]));
        api.push_post(Err(MockApi::status(StatusCode::UNAUTHORIZED)));
        let mut home = HomePage::new();
        home.mount(&api).await;
        home.open_composer();
        home.composer_mut().unwrap().set_content("hi");

        let signal = home.submit(&api).await;

        assert_eq!(signal, None);
        let rendered = home.to_string();
        assert!(rendered.contains("You must be logged in to create a post"));
        assert_eq!(
            api.calls().iter().filter(|call| **call == Call::ListPosts).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_cancel_overlay() {
        let api = MockApi::default();
        api.push_session(Ok(()));
        api.push_feed(Ok(vec![]));
        let mut home = HomePage::new();
        home.mount(&api).await;

        home.open_composer();
        home.close_composer();

        assert!(home.shows_create_button());
        assert_eq!(home.submit(&api).await, None);
    }
}
