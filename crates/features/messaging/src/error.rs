use std::borrow::Cow;

/// Sender resolution failures. All of them are configuration errors raised while the
/// slice is being wired; none can occur while serving a request.
#[herald_derive::herald_error]
pub enum MessagingError {
    #[error("Unknown sender qualifier{}: '{name}' is not registered", format_context(.context))]
    UnknownQualifier { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("No primary sender{}: no registered sender is marked primary", format_context(.context))]
    NoPrimary { context: Option<Cow<'static, str>> },

    #[error("Ambiguous primary sender{}: {candidates} are all marked primary", format_context(.context))]
    AmbiguousPrimary { candidates: String, context: Option<Cow<'static, str>> },

    #[error("Duplicate sender name{}: '{name}' is registered twice", format_context(.context))]
    DuplicateName { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Messaging error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
