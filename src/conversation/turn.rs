use std::fmt;

/// The speaker of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Capitalized role name used when flattening a transcript into a prompt.
    pub const fn prompt_label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }

    /// Short label used when rendering the transcript to the user.
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "AI",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt_label())
    }
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.prompt_label(), "User");
        assert_eq!(Role::Assistant.prompt_label(), "Assistant");
        assert_eq!(Role::User.display_label(), "You");
        assert_eq!(Role::Assistant.display_label(), "AI");
    }

    #[test]
    fn test_turn_constructors() {
        let turn = Turn::user("hi");
        assert_eq!(turn.role(), Role::User);
        assert_eq!(turn.content(), "hi");

        let turn = Turn::assistant(String::from("hello"));
        assert_eq!(turn.role(), Role::Assistant);
        assert_eq!(turn.content(), "hello");
    }
}
