#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Blocking message shown over everything until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// Yes/no question awaiting the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    StartInterview { file_name: String },
}

impl Confirmation {
    pub fn prompt(&self) -> String {
        match self {
            Confirmation::StartInterview { file_name } => {
                format!("Start interview using \"{}\"?", file_name)
            }
        }
    }
}
