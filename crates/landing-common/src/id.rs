use uuid::Uuid;

/// Length of an attempt id in hex characters.
pub const ATTEMPT_ID_LEN: usize = 8;

/// Short id stamped on every log line of one form submission attempt, so
/// the begin and settle halves of an attempt can be matched up in the logs
/// even when other events are handled in between.
pub fn new_attempt_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ATTEMPT_ID_LEN);
    id
}
