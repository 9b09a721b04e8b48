use std::fmt;

use client::YapperApi;
use entity::prelude::*;
use tracing::error;

use crate::{
    editor::{EditorModal, EditorSignal, ModalEvent},
    feed::{self, FeedLoader, FeedView},
    status::RequestState,
};

pub static HEADING: &str = "Your posts";

/// The signed-in user's card, their posts, and the edit modal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfilePage {
    user: RequestState<User, String>,
    feed: Option<FeedLoader>,
    editor: EditorModal,
}

impl ProfilePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the current user, then their posts. Without a user there is
    /// nothing to list and the feed shows its error.
    pub async fn mount<A: YapperApi>(&mut self, api: &A) {
        self.user.start();

        let user = match api.current_user().await {
            Ok(user) => user,
            Err(e) => {
                error!(task = "load profile", err = e.to_string());
                self.user.fail(e.to_string());
                return;
            }
        };

        let mut feed = FeedLoader::for_user(user.id);
        self.user.finish(Ok(user));
        feed.load(api).await;
        self.feed = Some(feed);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.value()
    }

    pub fn feed(&self) -> Option<&FeedLoader> {
        self.feed.as_ref()
    }

    pub fn editor(&self) -> &EditorModal {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorModal {
        &mut self.editor
    }

    /// The `Update` action of one listed post.
    pub fn select(&mut self, id: PostId) -> bool {
        let Some(post) = self.feed.as_ref().and_then(|feed| feed.find(id))
        else {
            return false;
        };

        self.editor.open(post.clone());
        true
    }

    pub fn handle(&mut self, event: ModalEvent) -> Option<EditorSignal> {
        self.editor.handle(event)
    }

    pub async fn save<A: YapperApi>(
        &mut self,
        api: &A,
    ) -> Option<EditorSignal> {
        let signal = self.editor.save(api).await;
        self.apply(signal)
    }

    pub async fn delete<A: YapperApi>(
        &mut self,
        api: &A,
    ) -> Option<EditorSignal> {
        let signal = self.editor.delete(api).await;
        self.apply(signal)
    }

    fn apply(&mut self, signal: Option<EditorSignal>) -> Option<EditorSignal> {
        if let Some(feed) = self.feed.as_mut() {
            match &signal {
                Some(EditorSignal::PostUpdated(post)) => {
                    feed.replace(post.clone());
                }
                Some(EditorSignal::PostDeleted(id)) => {
                    feed.remove(*id);
                }
                Some(EditorSignal::Closed) | None => {}
            }
        }

        signal
    }

    pub fn feed_view(&self) -> FeedView<'_> {
        match (&self.user, &self.feed) {
            (RequestState::Failure(_), _) => FeedView::Error(feed::USER_ERROR),
            (_, Some(feed)) => feed.view(),
            (_, None) => FeedView::Loading,
        }
    }
}

impl fmt::Display for ProfilePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = self.user() {
            writeln!(f, "  {}", user.name())?;
            writeln!(f, "  {}", user.username())?;
            if !user.bio().is_empty() {
                writeln!(f, "  {}", user.bio())?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", HEADING)?;
        write!(f, "{}", self.feed_view())?;

        if let Some(editor) = self.editor.view() {
            writeln!(f)?;
            write!(f, "{}", editor)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use client::StatusCode;

    use super::*;
    use crate::mock::{post, user, Call, MockApi};

    async fn mounted(posts: Vec<Post>) -> (MockApi, ProfilePage) {
        let api = MockApi::default();
        api.push_user(Ok(user(9, "alice@example.com")));
        api.push_feed(Ok(posts));
        let mut page = ProfilePage::new();
        page.mount(&api).await;
        (api, page)
    }

    #[tokio::test]
    async fn test_user_failure_shows_feed_error() {
        // Arrange
        let api = MockApi::default();
        api.push_user(Err(MockApi::status(StatusCode::UNAUTHORIZED)));
        let mut page = ProfilePage::new();

        // Act
        page.mount(&api).await;

        // Assert
        assert_eq!(api.calls(), vec![Call::CurrentUser]);
        assert_eq!(page.feed_view(), FeedView::Error("Failed to load posts."));
        assert!(page.to_string().contains("Failed to load posts."));
    }

    #[tokio::test]
    async fn test_profile_card_and_empty_posts() {
        let api = MockApi::default();
        api.push_user(Ok(User {
            id: UserId(5),
            email: "john@example.com".to_string(),
            bio: Some("hello".to_string()),
        }));
        api.push_feed(Ok(vec![]));
        let mut page = ProfilePage::new();

        page.mount(&api).await;

        assert_eq!(
            api.calls(),
            vec![Call::CurrentUser, Call::ListUserPosts(UserId(5))]
        );
        let rendered = page.to_string();
        assert!(rendered.contains("  john\n"));
        assert!(rendered.contains("john@example.com"));
        assert!(rendered.contains("hello"));
        assert!(rendered.contains("No posts to display."));
    }

    #[tokio::test]
    async fn test_lists_posts_with_update_action() {
        let (_, page) = mounted(vec![post(42, "my post")]).await;

        let rendered = page.to_string();

        assert!(rendered.contains("Your posts"));
        assert!(rendered.contains("#42 my post  [Update]"));
    }

    #[tokio::test]
    async fn test_select_unknown_post() {
        let (_, mut page) = mounted(vec![post(42, "my post")]).await;

        assert!(!page.select(PostId(7)));
        assert!(!page.editor().is_visible());
    }

    #[tokio::test]
    async fn test_save_reconciles_in_place() {
        let (api, mut page) =
            mounted(vec![post(43, "newer"), post(42, "my post")]).await;
        api.push_post(Ok(post(42, "my edited post")));

        assert!(page.select(PostId(42)));
        assert_eq!(page.editor().buffer(), "my post");
        page.editor_mut().set_buffer("my edited post");
        let signal = page.save(&api).await;

        assert!(matches!(signal, Some(EditorSignal::PostUpdated(_))));
        assert!(!page.editor().is_visible());
        let contents: Vec<_> = page
            .feed()
            .unwrap()
            .posts()
            .unwrap()
            .iter()
            .map(|p| p.content.as_str())
            .collect();
        assert_eq!(contents, vec!["newer", "my edited post"]);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_feed_alone() {
        let (api, mut page) = mounted(vec![post(42, "my post")]).await;
        api.push_post(Err(MockApi::status(StatusCode::INTERNAL_SERVER_ERROR)));

        page.select(PostId(42));
        page.editor_mut().set_buffer("lost edit");
        let signal = page.save(&api).await;

        assert_eq!(signal, None);
        assert!(page.editor().is_visible());
        assert_eq!(page.feed().unwrap().posts().unwrap()[0].content, "my post");
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let (api, mut page) = mounted(vec![post(42, "bye")]).await;
        api.push_delete(Ok(()));

        page.select(PostId(42));
        let signal = page.delete(&api).await;

        assert_eq!(signal, Some(EditorSignal::PostDeleted(PostId(42))));
        assert_eq!(page.feed_view(), FeedView::Empty("No posts to display."));
    }

    #[tokio::test]
    async fn test_escape_closes_modal() {
        let (_, mut page) = mounted(vec![post(42, "my post")]).await;
        page.select(PostId(42));
        assert!(page.to_string().contains("Edit Post"));

        assert_eq!(page.handle(ModalEvent::Escape), Some(EditorSignal::Closed));
        assert!(!page.to_string().contains("Edit Post"));
    }
}
