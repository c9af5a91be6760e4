use std::time::Duration;

/// Settings for the HTTP client built by [`Client::with_options`](crate::Client::with_options).
/// Derives Default, so remember to ..Default::default() after you specify what you want.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Whole-request timeout. ViaCEP is queried without one unless set.
    pub timeout: Option<Duration>,
    /// Overrides the default `viacep/<version>` user agent.
    pub user_agent: Option<String>,
}

impl Options {
    pub(crate) fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Which optional lines [`render`](crate::render) produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the `DDD` line when ViaCEP sent an area code.
    pub area_code: bool,
}
