//! Error-first completion handlers.
//!
//! Field operations accept an optional handler that is invoked exactly once
//! with the same outcome the call returns.

use crate::error::{ClientError, ClientResult};

/// Handler receiving `Ok(&result)` or `Err(&error)`.
pub type OnComplete<'a, T> = Box<dyn FnOnce(Result<&T, &ClientError>) + Send + 'a>;

/// Boxes a closure as an [`OnComplete`] handler.
pub fn on_complete<'a, T, F>(handler: F) -> Option<OnComplete<'a, T>>
where
    F: FnOnce(Result<&T, &ClientError>) + Send + 'a,
{
    Some(Box::new(handler))
}

pub(crate) fn notify<T>(handler: Option<OnComplete<'_, T>>, result: ClientResult<T>) -> ClientResult<T> {
    if let Some(handler) = handler {
        handler(result.as_ref());
    }
    result
}
