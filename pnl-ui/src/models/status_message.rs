use gpui::{App, Hsla};
use gpui_component::ActiveTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// One-line feedback shown under the form after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    /// Shown when a selected project has nothing stored; the form keeps
    /// its current values.
    pub fn no_record(project: &str) -> Self {
        Self::info(format!("No saved figures for {project}; current values kept"))
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn color(
        &self,
        cx: &App,
    ) -> Hsla {
        let theme = cx.theme();
        match self.kind {
            MessageKind::Info => theme.muted_foreground,
            MessageKind::Success => theme.success,
            MessageKind::Error => theme.danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(StatusMessage::info("a").kind, MessageKind::Info);
        assert_eq!(StatusMessage::success("b").kind, MessageKind::Success);
        assert_eq!(StatusMessage::error("c").kind, MessageKind::Error);
        assert_eq!(StatusMessage::error("c").text, "c");
    }

    #[test]
    fn missing_record_is_informational() {
        let message = StatusMessage::no_record("Warehouse Compound");
        assert_eq!(message.kind, MessageKind::Info);
        assert_eq!(
            message.text,
            "No saved figures for Warehouse Compound; current values kept"
        );
    }
}
