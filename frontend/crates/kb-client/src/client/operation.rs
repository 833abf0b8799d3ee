use std::fmt;

/// Which gateway call an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Get,
}

impl Operation {
    /// Static, user-facing failure message for this call
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::List => "Failed to fetch projects",
            Self::Create => "Failed to create project",
            Self::Get => "Failed to fetch project",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Get => "get",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
