// SPDX-License-Identifier: MPL-2.0
//! Shared page fragments (such as the footer) loaded into a container.

use crate::application::port::{FragmentSource, FragmentTarget};
use crate::diagnostics::{DiagnosticsHandle, WarningType};

/// Outcome of one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Markup was injected.
    Injected,
    /// The page has no container for the fragment.
    NoTarget,
    /// The source could not be read. Already logged.
    Failed,
}

/// Loads fragments without ever failing the page.
#[derive(Debug, Clone, Default)]
pub struct FragmentLoader {
    diagnostics: Option<DiagnosticsHandle>,
}

impl FragmentLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Fetches from `source` and injects into `target` when present.
    pub fn load<T: FragmentTarget + ?Sized>(
        &self,
        source: &dyn FragmentSource,
        target: Option<&mut T>,
    ) -> LoadOutcome {
        let markup = match source.fetch() {
            Ok(markup) => markup,
            Err(err) => {
                tracing::error!(source = %source.describe(), "error loading fragment: {err}");
                if let Some(diagnostics) = &self.diagnostics {
                    diagnostics.log_warning(
                        WarningType::FragmentUnavailable,
                        format!("{}: {err}", source.describe()),
                    );
                }
                return LoadOutcome::Failed;
            }
        };

        match target {
            Some(target) => {
                target.inject(&markup);
                tracing::debug!(source = %source.describe(), bytes = markup.len(), "fragment injected");
                LoadOutcome::Injected
            }
            None => {
                tracing::debug!(source = %source.describe(), "no container for fragment");
                LoadOutcome::NoTarget
            }
        }
    }
}
