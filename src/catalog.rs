//! Field Catalogs
//!
//! Fixed sample values for every randomized field of an access or error line.
//! Selection is uniform over the listed entries, so an entry listed more than
//! once (the `200` status) is drawn proportionally more often.

use crate::source::RandomSource;

// ============================================================================
// nginx sample data
// ============================================================================

const REMOTE_ADDRS: &[&str] = &[
    "192.168.1.100",
    "10.0.0.50",
    "172.16.0.25",
    "203.0.113.45",
    "198.51.100.10",
    "192.0.2.100",
    "8.8.8.8",
    "1.1.1.1",
];

const ENDPOINTS: &[&str] = &[
    "/",
    "/api/users",
    "/api/products",
    "/api/orders",
    "/static/css/style.css",
    "/static/js/app.js",
    "/images/logo.png",
    "/health",
    "/metrics",
    "/api/v1/search",
    "/api/v1/checkout",
    "/admin/dashboard",
];

const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH"];

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
    "curl/7.68.0",
    "Python-urllib/3.9",
    "Go-http-client/1.1",
];

const REFERERS: &[&str] = &[
    "https://google.com",
    "https://github.com",
    "https://stackoverflow.com",
    "-",
    "https://example.com",
    "https://localhost:3000",
];

// 200 is listed three times on purpose: it skews sampling towards success.
const STATUS_CODES: &[u16] = &[
    200, 200, 200, 201, 204, 301, 302, 400, 401, 403, 404, 500, 502, 503,
];

const ERROR_LEVELS: &[&str] = &["error", "warn", "notice", "info", "crit"];

const ERROR_MESSAGES: &[&str] = &[
    "connect() failed (111: Connection refused) while connecting to upstream",
    "upstream timed out (110: Connection timed out) while reading response header from upstream",
    "client intended to send too large body",
    "SSL_do_handshake() failed",
    "no live upstreams while connecting to upstream",
    "recv() failed (104: Connection reset by peer)",
    "open() \"/var/www/html/favicon.ico\" failed (2: No such file or directory)",
    "access forbidden by rule",
];

/// Immutable set of sampling domains handed to the generator.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub remote_addrs: &'static [&'static str],
    pub endpoints: &'static [&'static str],
    pub methods: &'static [&'static str],
    pub user_agents: &'static [&'static str],
    pub referers: &'static [&'static str],
    pub status_codes: &'static [u16],
    pub error_levels: &'static [&'static str],
    pub error_messages: &'static [&'static str],
}

impl Catalog {
    /// Sample data modelled on a small nginx deployment.
    pub const fn nginx() -> Self {
        Self {
            remote_addrs: REMOTE_ADDRS,
            endpoints: ENDPOINTS,
            methods: HTTP_METHODS,
            user_agents: USER_AGENTS,
            referers: REFERERS,
            status_codes: STATUS_CODES,
            error_levels: ERROR_LEVELS,
            error_messages: ERROR_MESSAGES,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::nginx()
    }
}

/// Pick one entry uniformly.
///
/// Every catalog list is non-empty, so the index is always in bounds.
pub fn pick<T: Copy, S: RandomSource + ?Sized>(source: &mut S, items: &[T]) -> T {
    items[source.index(items.len())]
}
