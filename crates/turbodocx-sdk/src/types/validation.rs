/*
[INPUT]:  Caller-supplied names and email addresses
[OUTPUT]: ValidationError on malformed input, before any request is sent
[POS]:    Data layer - construction-time checks shared by request types
[UPDATE]: When the backend tightens its input rules
*/

use crate::http::{Result, TurboDocxError};

pub const MAX_NAME_LENGTH: usize = 255;

/// Reject addresses that are obviously not `local@domain.tld`.
pub(crate) fn email(value: &str) -> Result<()> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(TurboDocxError::validation(format!("Invalid email address: {value}")))
    }
}

/// Name length in characters, not bytes
pub(crate) fn name(value: &str, subject: &str) -> Result<()> {
    let length = value.chars().count();
    if (1..=MAX_NAME_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(TurboDocxError::validation(format!(
            "{subject} name must be between 1 and {MAX_NAME_LENGTH} characters"
        )))
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || local.len() > 64
        || domain.contains('@')
        || value.chars().any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}
