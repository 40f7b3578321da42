use std::{any::Any, fmt, io};

/// Which input of a pull bridge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left input of a [`Zip`](crate::Zip).
    First,
    /// Right input of a [`Zip`](crate::Zip).
    Second,
    /// The single input of [`pull`](crate::pull).
    Source,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
            Side::Source => write!(f, "source"),
        }
    }
}

/// Failures of the pull bridge infrastructure.
///
/// Sequence elements never carry errors; these only describe the worker
/// threads that back a [`Zip`](crate::Zip) or [`pull`](crate::pull).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The operating system refused to start a worker thread.
    #[error("failed to spawn the {side} pull worker")]
    Spawn {
        side: Side,
        #[source]
        source: io::Error,
    },
    /// A producer panicked on its worker; `payload` is the original panic value.
    #[error("the {side} producer panicked: {}", panic_message(&**.payload))]
    ProducerPanicked {
        side: Side,
        payload: Box<dyn Any + Send + 'static>,
    },
}

impl Error {
    /// The input whose worker failed.
    pub fn side(&self) -> Side {
        match self {
            Error::Spawn { side, .. } | Error::ProducerPanicked { side, .. } => *side,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payload_is_rendered() {
        let err = Error::ProducerPanicked {
            side: Side::Second,
            payload: Box::new("boom"),
        };
        assert_eq!(err.to_string(), "the second producer panicked: boom");
        assert_eq!(err.side(), Side::Second);

        let err = Error::ProducerPanicked {
            side: Side::First,
            payload: Box::new(String::from("owned boom")),
        };
        assert_eq!(err.to_string(), "the first producer panicked: owned boom");
    }

    #[test]
    fn test_non_string_payload_is_rendered_generically() {
        let err = Error::ProducerPanicked {
            side: Side::Source,
            payload: Box::new(42_u32),
        };
        assert_eq!(
            err.to_string(),
            "the source producer panicked: non-string panic payload"
        );
    }

    #[test]
    fn test_spawn_error_keeps_source() {
        let err = Error::Spawn {
            side: Side::Source,
            source: io::Error::other("no threads left"),
        };
        assert_eq!(err.to_string(), "failed to spawn the source pull worker");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("no threads left"));
    }
}
