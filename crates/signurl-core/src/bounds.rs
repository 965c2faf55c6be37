//! Batch size limits.

use crate::error::ActionError;

/// Largest number of URLs accepted in one invocation.
pub const MAX_URLS: usize = 50;

/// Rejects empty batches and batches larger than [`MAX_URLS`].
///
/// Runs before domain validation and resolution; nothing is probed when this fails.
pub fn check_batch_len(len: usize) -> Result<(), ActionError> {
    if len > MAX_URLS {
        return Err(ActionError::TooManyUrls { len, max: MAX_URLS });
    }
    if len < 1 {
        return Err(ActionError::NoUrls);
    }
    Ok(())
}
