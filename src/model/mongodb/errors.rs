//! For some reason, the mongodb crate doesn't provide error code constants.
//! This module fills in the gaps.

use mongodb::error::{Error as DbError, ErrorKind, WriteFailure};

const DUPLICATE_KEY: i32 = 11000;

/// Return true if the given error is a duplicate key write error.
fn is_duplicate_key_error(err: &DbError) -> bool {
    if let ErrorKind::Write(WriteFailure::WriteError(ref e)) = *err.kind {
        return e.code == DUPLICATE_KEY;
    }
    false
}

/// Return true if the given error is a bulk write in which every failure was
/// a duplicate key, i.e. all documents that were missing did get written.
pub fn is_only_duplicate_keys(err: &DbError) -> bool {
    if let ErrorKind::BulkWrite(ref failure) = *err.kind {
        return failure.write_concern_error.is_none()
            && failure
                .write_errors
                .as_ref()
                .map_or(false, |errors| {
                    errors.iter().all(|e| e.code == DUPLICATE_KEY)
                });
    }
    is_duplicate_key_error(err)
}
