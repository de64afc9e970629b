//! Application state types.
//!
//! Does NOT handle:
//! - State mutations (in the App impl)
//! - Jobs list state (see `crate::jobs`)

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

/// Which component receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands
    #[default]
    Normal,
    /// Keys edit the jobs search box
    Search,
    /// Keys edit the ACL token field
    TokenEntry,
}

/// Connection details shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionContext {
    pub address: String,
    pub has_token: bool,
}
