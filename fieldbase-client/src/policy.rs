//! Outcome policies that turn a finished round trip into value, `None`, or
//! error.
//!
//! - lookup: any failure becomes `None`
//! - mutation: 404 or a marker-prefixed message becomes `None`, the rest
//!   propagates
//! - create and list: every failure propagates, so they need no helper
//!
//! Share outcomes are built in the database operations since they replace the
//! error with a report rather than filtering it.

use crate::error::{ClientResult, FailureKind, NotFoundMarker};
use tracing::debug;

pub(crate) fn lookup<T>(result: ClientResult<T>) -> ClientResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            debug!(error = %err, "lookup failed, reporting not found");
            Ok(None)
        }
    }
}

pub(crate) fn mutation<T>(
    result: ClientResult<T>,
    marker: NotFoundMarker,
) -> ClientResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.classify(marker) == Some(FailureKind::NotFound) => {
            debug!(error = %err, "mutation target not found");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
