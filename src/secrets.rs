use tracing::warn;

/// Resolve a named secret to its value.
///
/// Secret names use kebab-case ("db-password"); the value is read from the
/// environment variable derived by replacing hyphens with underscores and
/// uppercasing ("DB_PASSWORD"). A missing or unreadable value yields `None`,
/// never an error, so callers apply their own fallback.
pub fn get_secret(name: &str) -> Option<String> {
    let key = name.replace('-', "_").to_uppercase();
    match std::env::var(&key) {
        Ok(value) => Some(value),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            warn!("Secret {} is set but not valid unicode", key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ENV_LOCK;

    #[test]
    fn maps_kebab_case_names_to_env_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("DB_PASSWORD", "hunter2");
        assert_eq!(get_secret("db-password").as_deref(), Some("hunter2"));
        std::env::remove_var("DB_PASSWORD");
    }

    #[test]
    fn missing_secret_is_none() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("NO_SUCH_SECRET_ANYWHERE");
        assert_eq!(get_secret("no-such-secret-anywhere"), None);
    }

    #[test]
    fn uppercases_mixed_case_names() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("JWT_SECRET_FOR_TEST", "abc");
        assert_eq!(get_secret("Jwt-Secret-For-Test").as_deref(), Some("abc"));
        std::env::remove_var("JWT_SECRET_FOR_TEST");
    }
}
