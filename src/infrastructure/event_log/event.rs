//! Event log record and its categorical tags.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Errors raised before an event is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventLogError {
    #[error("Invalid {field}: '{value}'")]
    InvalidArgument { field: &'static str, value: String },
}

impl EventLogError {
    fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }
}

/// Generates a closed tag enum with its lowercase wire names.
macro_rules! log_tag {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = EventLogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(EventLogError::invalid($field, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

log_tag! {
    /// Side of the application that produced the event.
    Stack, "stack" {
        Backend => "backend",
        Frontend => "frontend",
    }
}

log_tag! {
    /// Severity of the event.
    Level, "level" {
        Debug => "debug",
        Info => "info",
        Warn => "warn",
        Error => "error",
        Fatal => "fatal",
    }
}

log_tag! {
    /// Subsystem that produced the event.
    Package, "package" {
        Cache => "cache",
        Controller => "controller",
        CronJob => "cron_job",
        Db => "db",
        Domain => "domain",
        Handler => "handler",
        Repository => "repository",
        Route => "route",
        Service => "service",
        Auth => "auth",
        Config => "config",
        Middleware => "middleware",
        Utils => "utils",
    }
}

/// A single event as sent to the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEvent {
    pub fn new(stack: Stack, level: Level, package: Package, message: impl Into<String>) -> Self {
        Self {
            stack,
            level,
            package,
            message: message.into(),
        }
    }

    /// Builds an event from untyped tags.
    ///
    /// Tags are checked in order stack, level, package; the first unknown one
    /// is reported.
    ///
    /// # Errors
    ///
    /// Returns [`EventLogError::InvalidArgument`] naming the rejected field.
    pub fn parse(
        stack: &str,
        level: &str,
        package: &str,
        message: impl Into<String>,
    ) -> Result<Self, EventLogError> {
        Ok(Self::new(
            stack.parse()?,
            level.parse()?,
            package.parse()?,
            message,
        ))
    }
}
