//! Errores del core.
//!
//! Ninguno de estos errores cruza el borde del orquestador: se registran en
//! log o se convierten en el `error_message` del parámetro afectado.

use thiserror::Error;

/// Fallo de una capacidad concreta de un provider.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProviderError {
    #[error("provider evaluation failed: {0}")]
    Evaluation(String),
    #[error("provider panicked: {0}")]
    Panicked(String),
    #[error("invalid provider handle: {0}")]
    InvalidHandle(String),
}

impl ProviderError {
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

/// Mensaje legible de un payload de `catch_unwind`.
pub(crate) fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Fallo del locator al resolver el tipo bien conocido de la extensión.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LocateError {
    #[error("type not found: {0}")]
    TypeNotFound(String),
    #[error("extension lookup failed: {0}")]
    Lookup(String),
}

/// Fallos de la invocación completa (no de un candidato individual).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum InvokeError {
    #[error("provider timed out after {0}ms")]
    TimedOut(u128),
    #[error("provider worker aborted: {0}")]
    WorkerAborted(String),
}
