pub mod composer;
pub mod editor;
pub mod feed;
pub mod page;
pub mod session;
pub mod shell;
pub mod status;

#[cfg(test)]
mod mock;

pub use composer::{Composer, ComposerSignal};
pub use editor::{EditorModal, EditorSignal, ModalEvent};
pub use feed::{FeedLoader, FeedScope, FeedView};
pub use session::SessionProbe;
pub use shell::{Navbar, Page, Route, Shell};
pub use status::RequestState;
