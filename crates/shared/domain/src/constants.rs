//! Wire-level constants shared by the server and the feature slices.

/// `OpenAPI` tag for infrastructure endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for message-sending endpoints.
pub const MESSAGING_TAG: &str = "Messaging";

/// Registered name of the email channel (the primary sender).
pub const EMAIL_SENDER: &str = "emailService";
/// Registered name of the SMS channel, selectable only by name.
pub const SMS_SENDER: &str = "sMSService";

/// Payload every send endpoint dispatches.
pub const GREETING: &str = "Hello!";
/// Body returned by every send endpoint.
pub const SEND_ACK: &str = "Message sent!";

/// Base name of the configuration file loaded at startup.
pub const CONFIG_FILE: &str = "server";
/// Environment prefix for configuration overrides (`HERALD__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "HERALD";
