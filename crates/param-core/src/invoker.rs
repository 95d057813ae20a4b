//! Invocación de providers con cadena de fallback.
//!
//! Orden fijo de candidatos:
//! 1. `render_choices(values)`: el mismo render que haría el formulario.
//! 2. `choices_for_job(job, values)`: providers con estado de job.
//! 3. `legacy_choices(values)`: contrato antiguo.
//! 4. `default_choices()`: fallback estático.
//!
//! Gana el primer candidato soportado que no falla y cuya salida normalizada
//! no es vacía. Un candidato no soportado se salta; uno que falla (o hace
//! panic) se registra como evento recuperable y se prueba el siguiente.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, trace, warn};

use crate::errors::{panic_message, InvokeError, ProviderError};
use crate::model::{CurrentValues, JobContext};
use crate::normalize::{display_lossy, normalize, RawResult};
use crate::provider::{Capability, DynamicProvider};

type Candidate = fn(&dyn DynamicProvider, &JobContext, &CurrentValues) -> Capability<RawResult>;

fn render_choices(p: &dyn DynamicProvider, _job: &JobContext, values: &CurrentValues) -> Capability<RawResult> {
    p.render_choices(values)
}

fn choices_for_job(p: &dyn DynamicProvider, job: &JobContext, values: &CurrentValues) -> Capability<RawResult> {
    p.choices_for_job(job, values)
}

fn legacy_choices(p: &dyn DynamicProvider, _job: &JobContext, values: &CurrentValues) -> Capability<RawResult> {
    p.legacy_choices(values)
}

fn default_choices(p: &dyn DynamicProvider, _job: &JobContext, _values: &CurrentValues) -> Capability<RawResult> {
    p.default_choices()
}

const CANDIDATES: &[(&str, Candidate)] = &[("renderChoices", render_choices),
                                           ("choicesForJob", choices_for_job),
                                           ("legacyChoices", legacy_choices),
                                           ("defaultChoices", default_choices)];

/// Fallo recuperable de un candidato concreto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    pub candidate: &'static str,
    pub error: ProviderError,
}

/// Resultado de recorrer la cadena de candidatos.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub choices: Vec<String>,
    /// `true` si algún candidato produjo choices no vacías.
    pub ok: bool,
    /// Contenido libre (escalar u opaco) del candidato ganador.
    pub content: Option<String>,
    /// Candidatos soportados que se llegaron a ejecutar.
    pub attempted: usize,
    pub failures: Vec<CandidateFailure>,
}

impl Invocation {
    /// Todos los candidatos ejecutados fallaron (y hubo al menos uno).
    pub fn all_failed(&self) -> bool {
        !self.ok && self.attempted > 0 && self.failures.len() == self.attempted
    }

    pub fn last_failure(&self) -> Option<&CandidateFailure> {
        self.failures.last()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvokerOptions {
    /// Límite de tiempo para toda la cadena de un parámetro. `None` = sin límite.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct ProviderInvoker {
    options: InvokerOptions,
}

impl ProviderInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: InvokerOptions) -> Self {
        Self { options }
    }

    /// Recorre la cadena de candidatos. Nunca falla: el agotamiento se
    /// reporta como `ok = false` con choices vacías.
    pub fn invoke(&self, provider: &dyn DynamicProvider, job: &JobContext, values: &CurrentValues) -> Invocation {
        let mut out = Invocation::default();
        for (name, candidate) in CANDIDATES.iter() {
            // La normalización corre dentro del guard: un objeto opaco que
            // hace panic en su `Display` cuenta como candidato fallido.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| settle(candidate(provider, job, values))))
                .unwrap_or_else(|payload| Capability::Failed(ProviderError::Panicked(panic_message(payload))));
            match outcome {
                Capability::Unsupported => {
                    trace!("invoke:{} {name} unsupported", provider.provider_name());
                }
                Capability::Failed(error) => {
                    out.attempted += 1;
                    warn!("invoke:{} {name} failed (recoverable): {error}", provider.provider_name());
                    out.failures.push(CandidateFailure { candidate: *name, error });
                }
                Capability::Produced((choices, content)) => {
                    out.attempted += 1;
                    if choices.is_empty() {
                        debug!("invoke:{} {name} produced no choices", provider.provider_name());
                        continue;
                    }
                    debug!("invoke:{} {name} produced {} choices", provider.provider_name(), choices.len());
                    out.choices = choices;
                    out.content = content;
                    out.ok = true;
                    return out;
                }
            }
        }
        out
    }

    /// Igual que `invoke`, aplicando el timeout configurado. Con timeout la
    /// cadena corre en un hilo aparte; si vence, el hilo queda huérfano y su
    /// resultado se descarta.
    pub fn invoke_shared(&self,
                         provider: &Arc<dyn DynamicProvider>,
                         job: &JobContext,
                         values: &CurrentValues)
                         -> Result<Invocation, InvokeError> {
        let Some(timeout) = self.options.timeout else {
            return Ok(self.invoke(provider.as_ref(), job, values));
        };
        let (tx, rx) = mpsc::channel();
        let worker = self.clone();
        let provider = Arc::clone(provider);
        let job = job.clone();
        let values = values.clone();
        thread::Builder::new().name(format!("provider-{}", provider.provider_name()))
                              .spawn(move || {
                                  let _ = tx.send(worker.invoke(provider.as_ref(), &job, &values));
                              })
                              .map_err(|e| InvokeError::WorkerAborted(e.to_string()))?;
        match rx.recv_timeout(timeout) {
            Ok(invocation) => Ok(invocation),
            Err(RecvTimeoutError::Timeout) => Err(InvokeError::TimedOut(timeout.as_millis())),
            Err(RecvTimeoutError::Disconnected) => Err(InvokeError::WorkerAborted("worker exited without result".into())),
        }
    }
}

/// Choices normalizadas + contenido libre (si el resultado no es una lista).
fn settle(outcome: Capability<RawResult>) -> Capability<(Vec<String>, Option<String>)> {
    match outcome {
        Capability::Produced(raw) => {
            let content = (!raw.is_choice_list()).then(|| normalize_content(&raw)).flatten();
            Capability::Produced((normalize(raw), content))
        }
        Capability::Failed(e) => Capability::Failed(e),
        Capability::Unsupported => Capability::Unsupported,
    }
}

fn normalize_content(raw: &RawResult) -> Option<String> {
    let s = match raw {
        RawResult::Scalar(s) => s.to_choice(),
        RawResult::Opaque(o) => display_lossy(o.as_ref()),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}
