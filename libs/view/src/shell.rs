use std::fmt;

use client::{ClientError, YapperApi};
use url::Url;

use crate::{
    composer::Composer,
    page::{HomePage, ProfilePage},
    session::SessionProbe,
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Route {
    Home,
    Create,
    Profile,
    Login,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home(HomePage),
    Create(Composer),
    Profile(ProfilePage),
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home(home) => write!(f, "{}", home),
            Page::Create(composer) => write!(f, "{}", composer.view()),
            Page::Profile(profile) => write!(f, "{}", profile),
        }
    }
}

/// Session-aware navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navbar {
    pub authenticated: bool,
    pub active: Route,
}

impl Navbar {
    pub fn links(&self) -> Vec<Route> {
        if self.authenticated {
            vec![Route::Home, Route::Create, Route::Profile, Route::Logout]
        } else {
            vec![Route::Home, Route::Login]
        }
    }
}

impl fmt::Display for Navbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Yapper |")?;
        for route in self.links() {
            if route == self.active {
                write!(f, " [{}]", route)?;
            } else {
                write!(f, " {}", route)?;
            }
        }
        writeln!(f)
    }
}

/// Routes between pages. Every navigation mounts a fresh page.
pub struct Shell<A> {
    api: A,
    session: SessionProbe,
    route: Route,
    page: Page,
}

impl<A> Shell<A> {
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Splits the shell so a page can be driven with the shared client.
    pub fn parts(&mut self) -> (&A, &mut Page) {
        (&self.api, &mut self.page)
    }

    pub fn navbar(&self) -> Navbar {
        Navbar {
            authenticated: self.session.is_authenticated(),
            active: self.route,
        }
    }
}

impl<A: YapperApi> Shell<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: SessionProbe::default(),
            route: Route::Home,
            page: Page::Home(HomePage::new()),
        }
    }

    /// Mounts the page for `route`. Login and logout are delegated to the
    /// API's redirect endpoints and return the URL to open instead.
    pub async fn navigate(
        &mut self,
        route: Route,
    ) -> Result<Option<Url>, ClientError> {
        let page = match route {
            Route::Login => return self.api.login_url().map(Some),
            Route::Logout => return self.api.logout_url().map(Some),
            Route::Home => {
                let mut home = HomePage::new();
                home.mount(&self.api).await;
                self.session = *home.session();
                Page::Home(home)
            }
            Route::Create => {
                self.session.probe(&self.api).await;
                Page::Create(Composer::new())
            }
            Route::Profile => {
                let mut profile = ProfilePage::new();
                futures::join!(
                    self.session.probe(&self.api),
                    profile.mount(&self.api)
                );
                Page::Profile(profile)
            }
        };

        self.route = route;
        self.page = page;
        Ok(None)
    }

    /// Mounts the current route again.
    pub async fn reload(&mut self) -> Result<Option<Url>, ClientError> {
        self.navigate(self.route).await
    }
}

impl<A> fmt::Display for Shell<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.navbar())?;
        writeln!(f, "{}", "-".repeat(40))?;
        write!(f, "{}", self.page)
    }
}
