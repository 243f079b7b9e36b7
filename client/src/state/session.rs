//! Socket session state shared across views.

/// Realtime channel status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Session-level state: one socket per page load, status only.
///
/// There is no reconnect policy; once disconnected, views keep their last
/// data and this stays `Disconnected` until the page is reloaded.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionState {
    pub connection_status: ConnectionStatus,
}
