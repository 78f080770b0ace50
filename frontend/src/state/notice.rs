use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short-lived success/error message shown above a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Field-level lines from a validation response.
    pub details: Vec<String>,
    /// Distinguishes repeated identical messages so a stale timer never clears a newer one.
    pub serial: u64,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    current: Option<Notice>,
    next_serial: u64,
}

impl NoticeState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn set_success(&mut self, message: impl Into<String>) -> u64 {
        self.set(NoticeKind::Success, message.into(), Vec::new())
    }

    pub fn set_error(&mut self, message: impl Into<String>) -> u64 {
        self.set(NoticeKind::Error, message.into(), Vec::new())
    }

    pub fn set_api_error(&mut self, error: &ApiError) -> u64 {
        self.set(NoticeKind::Error, error.error.clone(), error.detail_messages())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clears only if the notice identified by `serial` is still showing.
    pub fn dismiss(&mut self, serial: u64) {
        if self.current.as_ref().map(|n| n.serial) == Some(serial) {
            self.current = None;
        }
    }

    fn set(&mut self, kind: NoticeKind, message: String, details: Vec<String>) -> u64 {
        self.next_serial = self.next_serial.wrapping_add(1);
        self.current = Some(Notice {
            kind,
            message,
            details,
            serial: self.next_serial,
        });
        self.next_serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_notice_replaces_older() {
        let mut state = NoticeState::default();
        state.set_error("NG");
        assert!(state.current().map(Notice::is_error).unwrap_or(false));

        state.set_success("OK");
        let current = state.current().expect("notice");
        assert_eq!(current.kind, NoticeKind::Success);
        assert_eq!(current.message, "OK");
    }

    #[test]
    fn stale_dismiss_keeps_newer_notice() {
        let mut state = NoticeState::default();
        let first = state.set_success("Saved");
        let second = state.set_success("Saved");
        state.dismiss(first);
        assert!(state.current().is_some());
        state.dismiss(second);
        assert!(state.current().is_none());
    }

    #[test]
    fn api_errors_use_their_message() {
        let mut state = NoticeState::default();
        state.set_api_error(&ApiError::request_failed("Request failed: offline"));
        assert_eq!(
            state.current().map(|n| n.message.as_str()),
            Some("Request failed: offline")
        );

        state.set_api_error(&ApiError {
            error: "Invalid".into(),
            code: "VALIDATION_ERROR".into(),
            details: Some(serde_json::json!(["Email is invalid"])),
        });
        assert_eq!(
            state.current().map(|n| n.details.clone()),
            Some(vec!["Email is invalid".to_string()])
        );
    }
}
