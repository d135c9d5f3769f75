pub mod b3;

use crate::domain::error::FetchError;

/// Map a reqwest transport error onto the fetch taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.to_string())
    }
}
