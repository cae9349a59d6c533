use std::sync::Mutex;

/// Serializes tests that mutate process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());
