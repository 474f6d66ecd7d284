//! Mutation gateway
//!
//! All create/update/delete operations live here. Each write follows the
//! same discipline: validate the form first (a validation failure never
//! touches storage), apply inside a transaction, commit. Any fault during
//! apply or commit rolls the transaction back on drop, and the connection
//! returns to the pool on every exit path.

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::{create_artist, update_artist};
pub use shows::create_show;
pub use venues::{create_venue, delete_venue, update_venue, DeleteOutcome};

use showbill_common::Error;

/// Turn a non-empty violation list into the gateway's validation error.
pub(crate) fn reject_if_invalid(violations: Vec<String>) -> Result<(), Error> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidInput(violations.join("; ")))
    }
}
