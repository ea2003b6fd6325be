//! Profile edits.

use store::{KeyValueStore, ProfileEdit, SessionStore, UserRecord};
use tracing::info;

use crate::error::ProfileError;

/// Merge the editable fields of `edit` into the current session record and persist it.
///
/// Email is never changed and the name may not be blank. Returns the record as saved.
pub async fn save_profile<S: KeyValueStore>(
    session: &SessionStore<S>,
    edit: &ProfileEdit,
) -> Result<UserRecord, ProfileError> {
    if edit.name.trim().is_empty() {
        return Err(ProfileError::MissingName);
    }
    let mut record = session.load().ok_or(ProfileError::NoSession)?;
    record.merge_profile(edit);
    session.save(&record)?;
    info!(email = %record.email, "profile saved");
    Ok(record)
}
