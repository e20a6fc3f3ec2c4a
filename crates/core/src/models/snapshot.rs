/// State of one remotely fetched resource.
///
/// The core only ever looks at completed results: anything other than
/// `Loaded` is read as "nothing there".
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// Not fetched yet, or a fetch is in flight
    Loading,
    Loaded(T),
    /// Last fetch failed; carries the error message
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Loadable::Failed(_))
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Loadable<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// The loaded items, or an empty slice when loading or failed.
    pub fn items(&self) -> &[T] {
        match self {
            Loadable::Loaded(items) => items.as_slice(),
            _ => &[],
        }
    }
}
