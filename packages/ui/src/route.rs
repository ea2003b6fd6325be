//! Where each page sends a visitor, given whether a session exists.
//!
//! Platform routers map [`Page`] onto their own `Route` enum and call
//! [`Page::redirect`] before rendering.

/// Top-level pages of the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Root,
    Login,
    Signup,
    Dashboard,
}

impl Page {
    /// The page to show instead of `self`, or `None` to render `self`.
    pub fn redirect(self, signed_in: bool) -> Option<Page> {
        match (self, signed_in) {
            (Page::Root, true) => Some(Page::Dashboard),
            (Page::Root, false) => Some(Page::Login),
            (Page::Login | Page::Signup, true) => Some(Page::Dashboard),
            (Page::Dashboard, false) => Some(Page::Login),
            (Page::Login | Page::Signup, false) | (Page::Dashboard, true) => None,
        }
    }
}
