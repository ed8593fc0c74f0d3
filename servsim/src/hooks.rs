use chrono::{DateTime, Utc};
use std::fmt::{self, Debug, Display};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ActionType {
    RequestCaptured,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::RequestCaptured => "request captured",
        }
    }
}

impl Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub action_type: ActionType,
    pub message: String,
    pub time: DateTime<Utc>,
    pub data: Vec<u8>,
}

impl Entry {
    pub fn new<S: Into<String>>(action_type: ActionType, message: S, data: Vec<u8>) -> Self {
        Self {
            action_type,
            message: message.into(),
            time: Utc::now(),
            data,
        }
    }
}

/// Event sink notified about simulation changes. Errors are reported back but
/// callers only log them.
pub trait HookNotifier: Debug {
    fn fire(
        &self,
        action_type: ActionType,
        entry: &Entry,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl HookNotifier for NoHooks {
    fn fire(
        &self,
        _action_type: ActionType,
        _entry: &Entry,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}
