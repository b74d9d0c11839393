use std::sync::{Arc, PoisonError, RwLock};

/// Shared holder for the bearer token.
///
/// The session store writes it, the API client reads it when attaching the
/// `Authorization` header, so a cleared session is immediately visible to
/// every in-flight consumer. Clones share the same underlying slot.
#[derive(Clone, Debug, Default)]
pub struct TokenCell(Arc<RwLock<Option<String>>>);

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, token: Option<String>) {
        // An empty credential is no credential
        *self.0.write().unwrap_or_else(PoisonError::into_inner) =
            token.filter(|t| !t.is_empty());
    }

    /// True iff a token is currently present
    pub fn is_present(&self) -> bool {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let cell = TokenCell::new();
        let other = cell.clone();

        assert!(!cell.is_present());

        other.set(Some("abc".to_string()));
        assert!(cell.is_present());
        assert_eq!(cell.get().as_deref(), Some("abc"));

        cell.set(None);
        assert!(!other.is_present());
        assert_eq!(other.get(), None);
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let cell = TokenCell::new();
        cell.set(Some(String::new()));
        assert!(!cell.is_present());
        assert_eq!(cell.get(), None);
    }
}
