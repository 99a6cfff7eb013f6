use std::fmt::Display;

/// A resource that is fetched at most once and then kept for the session.
///
/// Only an `Idle` resource may start a load. A failure is terminal; nothing
/// retries it.
#[derive(Debug, Clone, PartialEq)]
pub enum LazyResource<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LazyResource<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LazyResource<T> {
    /// Moves `Idle` to `Loading` and reports whether the caller should fetch.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Stores the outcome of a fetch. Results arriving when no load is in
    /// flight are dropped.
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        if !matches!(self, Self::Loading) {
            tracing::debug!("ignoring late resource result");
            return;
        }
        *self = match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error.to_string()),
        };
    }

    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_only_once() {
        let mut resource: LazyResource<u8> = LazyResource::default();

        assert!(resource.begin());
        assert!(!resource.begin());
        resource.resolve::<String>(Ok(3));
        assert!(!resource.begin());
        assert_eq!(resource.ready(), Some(&3));
    }

    #[test]
    fn failure_is_terminal() {
        let mut resource: LazyResource<u8> = LazyResource::default();
        resource.begin();
        resource.resolve(Err("Failed to load country_analysis.json (500)"));

        assert_eq!(resource.error(), Some("Failed to load country_analysis.json (500)"));
        assert!(!resource.begin());
    }

    #[test]
    fn result_without_pending_load_is_ignored() {
        let mut resource: LazyResource<u8> = LazyResource::default();
        resource.resolve::<String>(Ok(1));

        assert_eq!(resource, LazyResource::Idle);
    }
}
