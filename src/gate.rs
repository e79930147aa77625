//! Access gate for mutation affordances.
//!
//! A single boolean derived once at startup from the page's URL query
//! string. When closed, the surface exposes no draw tools and the app
//! rejects export/clear. This is a UI affordance gate only, not a security
//! boundary: there is no token and no server-side enforcement.

/// Query parameter that opens the gate.
const ADMIN_PARAM: &str = "admin";

/// Value the parameter must have to open the gate.
const ADMIN_VALUE: &str = "1";

/// Whether mutation affordances (draw tools, export, clear) are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGate {
    open: bool,
}

impl AccessGate {
    /// Derive the gate from a URL query string, with or without the leading
    /// `?`. The gate opens only for an exact `admin=1` pair.
    pub fn from_query(query: &str) -> Self {
        let open = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == ADMIN_PARAM && value == ADMIN_VALUE);
        Self { open }
    }

    /// A closed gate, the viewer default.
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// An open gate, for embedders that decide access elsewhere.
    pub fn open() -> Self {
        Self { open: true }
    }

    /// Whether mutation affordances are enabled.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_admin_flag() {
        assert!(AccessGate::from_query("admin=1").is_open());
        assert!(AccessGate::from_query("?admin=1").is_open());
        assert!(AccessGate::from_query("zoom=3&admin=1").is_open());
    }

    #[test]
    fn stays_closed_otherwise() {
        assert!(!AccessGate::from_query("").is_open());
        assert!(!AccessGate::from_query("admin=0").is_open());
        assert!(!AccessGate::from_query("admin").is_open());
        assert!(!AccessGate::from_query("admin=true").is_open());
        assert!(!AccessGate::from_query("ADMIN=1").is_open());
    }
}
