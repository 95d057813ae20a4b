//! Ensamblado del motor y estado compartido de la aplicación.
use std::sync::Arc;

use param_core::{DependencyExtractor, ExtensionDetector, InvokerOptions, JobParameterRenderer, ParameterRenderer,
                 ProviderInvoker, RenderMode};
use param_providers::ProviderRegistry;

use crate::access::{AccessPolicy, CatalogAccessPolicy};
use crate::catalog::JobStore;
use crate::config::AppConfig;

/// Construye el orquestador según la configuración: registro de la extensión
/// (o vacío), límite de tiempo del invoker y modo de iteración.
pub fn build_renderer(config: &AppConfig) -> JobParameterRenderer {
    let registry = if config.extension_enabled { ProviderRegistry::installed() } else { ProviderRegistry::empty() };
    let detector = Arc::new(ExtensionDetector::new(Arc::new(registry)));
    let invoker = ProviderInvoker::with_options(InvokerOptions { timeout: config.provider_timeout });
    let mode = if config.parallel { RenderMode::Parallel } else { RenderMode::Sequential };
    tracing::debug!(extension = config.extension_enabled, ?mode, timeout = ?config.provider_timeout, "renderer built");
    JobParameterRenderer::new(detector, ParameterRenderer::new(DependencyExtractor::new(), invoker)).with_mode(mode)
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobStore>,
    pub access: Arc<dyn AccessPolicy>,
    pub renderer: Arc<JobParameterRenderer>,
}

impl AppState {
    pub fn new(store: Arc<dyn JobStore>, renderer: JobParameterRenderer) -> Self {
        Self { store, access: Arc::new(CatalogAccessPolicy), renderer: Arc::new(renderer) }
    }

    pub fn with_access(mut self, access: Arc<dyn AccessPolicy>) -> Self {
        self.access = access;
        self
    }
}
