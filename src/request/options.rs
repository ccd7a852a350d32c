// request/options.rs

/// Wall-clock budget applied when `timeout_ms` is absent.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Per-request configuration. Immutable once built; a batch shares one
/// value by cloning, so concurrent requests never race on it.
///
/// No validation happens at construction. A proxy URL that cannot be
/// parsed surfaces as a `connection_error` outcome when the engine tries
/// to use it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    /// Bounds the whole request, redirect hops included. `None` means
    /// `DEFAULT_TIMEOUT_MS`.
    pub timeout_ms: Option<u64>,
    /// Optional proxy URL; credentials may be embedded as userinfo.
    pub proxy: Option<String>,
    /// When true the engine transparently follows 3xx responses.
    pub follow_redirects: bool,
    /// Hard cap on redirect hops. Ignored when `follow_redirects` is
    /// false.
    pub max_redirects: u32,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            proxy: None,
            follow_redirects: true,
            max_redirects: 10,
        }
    }
}

impl RequestOptions {
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn max_redirects(mut self, max: u32) -> Self {
        self.max_redirects = max;
        self
    }
}
