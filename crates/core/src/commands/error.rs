use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("This command is not enabled")]
    NotEnabled,
    #[error("You don't have permission to do this!")]
    NoPermission,
    #[error("Too few arguments!")]
    TooFewArguments,
    #[error("Arguments cannot exceed {max} characters!")]
    ArgumentTooLong { max: usize },
    #[error("Invalid argument: {argument}")]
    InvalidArgument { argument: String },
    #[error("{0}")]
    Message(String),
}

#[derive(Debug, Error)]
pub enum InternalError {
    #[error("Internal error: help node `{alias}` has no parent (tree construction bug)")]
    OrphanHelpNode { alias: String },
    #[error("Internal error: {0:#}")]
    Host(#[from] anyhow::Error),
    #[error("Internal error (bug): {message}")]
    Message { message: String },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl CommandError {
    pub fn runtime(message: impl Into<String>) -> Self {
        CommandError::Runtime(RuntimeError::Message(message.into()))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::Internal(InternalError::Message {
            message: message.into(),
        })
    }

    pub fn invalid_argument(argument: impl Into<String>) -> Self {
        CommandError::Runtime(RuntimeError::InvalidArgument {
            argument: argument.into(),
        })
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Failures while binding a tree to the host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no top-level command `{label}` was declared by the host")]
    Undeclared { label: String },
    #[error("command `{label}` is already bound to a tree")]
    AlreadyBound { label: String },
    #[error("node `{path}` has an empty alias")]
    EmptyAlias { path: String },
    #[error("node `{path}` has no description")]
    MissingDescription { path: String },
    #[error("`{path}` is registered more than once")]
    DuplicatePath { path: String },
}
