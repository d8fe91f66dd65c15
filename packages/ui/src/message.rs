#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// The status line under the signup form.
///
/// There is a single line shared by every action. Hiding does not look at which
/// message is showing, so an older hide timer can hide a newer message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageState {
    text: String,
    kind: Option<MessageKind>,
    hidden: bool,
}

impl Default for MessageState {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl MessageState {
    pub fn show(&mut self, message: Message) {
        self.text = message.text;
        self.kind = Some(message.kind);
        self.hidden = false;
    }

    /// Hides the line but keeps its text and kind.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    /// CSS class list, e.g. `"success"` or `"error hidden"`.
    pub fn class(&self) -> String {
        let mut classes: Vec<&str> = self.kind.map(MessageKind::class).into_iter().collect();
        if self.hidden {
            classes.push("hidden");
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let state = MessageState::default();
        assert!(state.is_hidden());
        assert_eq!(state.class(), "hidden");
    }

    #[test]
    fn test_show_then_hide_keeps_text() {
        let mut state = MessageState::default();
        state.show(Message::success("Signed up a@x.com for Chess Club"));
        assert_eq!(state.class(), "success");
        assert_eq!(state.text(), "Signed up a@x.com for Chess Club");

        state.hide();
        assert_eq!(state.class(), "success hidden");
        assert_eq!(state.text(), "Signed up a@x.com for Chess Club");
    }

    #[test]
    fn test_hide_affects_latest_message() {
        let mut state = MessageState::default();
        state.show(Message::success("first"));
        state.show(Message::error("second"));
        // the first message's timer fires
        state.hide();
        assert!(state.is_hidden());
        assert_eq!(state.text(), "second");
        assert_eq!(state.kind(), Some(MessageKind::Error));
    }
}
