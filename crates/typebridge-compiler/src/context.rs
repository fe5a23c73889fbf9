//! State of one generation run.

use tracing::{debug, info};
use typebridge_core::TypeModel;

use crate::classify::classify;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{Declaration, GeneratedOutput};
use crate::resolve::Resolver;
use crate::translate::{DeclarationLookup, Translator};
use crate::worklist::Worklist;

/// Owns the worklist and emitted declarations of one run; borrows the model
/// and configuration. Independent runs use independent contexts.
pub struct GenerationContext<'a> {
    pub(crate) model: &'a TypeModel,
    pub(crate) config: &'a Config,
    lookup: &'a dyn DeclarationLookup,
    worklist: Worklist,
    declarations: Vec<Declaration>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(model: &'a TypeModel, config: &'a Config) -> Self {
        Self::with_lookup(model, config, config)
    }

    pub fn with_lookup(
        model: &'a TypeModel,
        config: &'a Config,
        lookup: &'a dyn DeclarationLookup,
    ) -> Self {
        Self {
            model,
            config,
            lookup,
            worklist: Worklist::new(),
            declarations: Vec::new(),
        }
    }

    pub fn worklist(&self) -> &Worklist {
        &self.worklist
    }

    pub(crate) fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.config)
    }

    pub(crate) fn translator(&mut self) -> Translator<'_> {
        Translator::new(self.model, self.config, self.lookup, &mut self.worklist)
    }

    /// Enqueue a seed type. Returns `false` when it was already enqueued.
    pub fn seed(&mut self, full_name: &str) -> Result<bool> {
        if !self.model.contains(full_name) {
            return Err(Error::UnknownSeed(full_name.to_string()));
        }
        Ok(self.worklist.enqueue(full_name))
    }

    /// Emit declarations until the worklist is empty.
    pub fn run(mut self) -> Result<GeneratedOutput> {
        let model = self.model;

        while let Some(full_name) = self.worklist.pop() {
            // Only model names are enqueued and each is popped once, so a
            // pop past the model size means the dedup is broken.
            if self.declarations.len() >= model.len() {
                return Err(Error::Internal(format!(
                    "`{}` popped after all {} model types were emitted",
                    full_name,
                    model.len()
                )));
            }
            let ty = model.lookup(&full_name).ok_or_else(|| {
                Error::Internal(format!("enqueued type `{}` is not in the model", full_name))
            })?;

            let kind = classify(ty, model, self.config);
            let text = self.emit_declaration(ty, kind);
            debug!(r#type = %full_name, ?kind, "emitted");

            self.declarations.push(Declaration {
                namespace: self.resolver().emit_namespace(&ty.namespace).to_string(),
                full_name,
                kind,
                text,
            });
        }

        info!(
            declarations = self.declarations.len(),
            model = model.len(),
            "generation finished"
        );
        Ok(GeneratedOutput::new(self.declarations))
    }
}
