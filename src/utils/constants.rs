/// localStorage key for the persisted session (auth token + cached user).
/// The session hook is the only reader/writer of this key.
pub const STORAGE_KEY_SESSION: &str = "consultBridge_session";

/// localStorage key for the cached seller directory (buyer dashboard).
pub const STORAGE_KEY_SELLERS_CACHE: &str = "consultBridge_sellersCache";
