//! Model assembly and the default seeding policy.

use tracing::{debug, info};
use typebridge_core::{Assembly, ExternalType, Origin, TypeModel};
use typebridge_script::{Diagnostics, extract_source};

use crate::classify::classify;
use crate::config::Config;
use crate::context::GenerationContext;
use crate::error::{Error, Result};
use crate::output::GeneratedOutput;
use crate::translate::DeclarationLookup;

/// Collects types from every pipeline and registers them with a fixed
/// precedence: script source first, then script metadata, then server
/// metadata. The first registration of a name wins, so input order within
/// one origin matters but order across origins does not.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    source: Vec<ExternalType>,
    runtime: Vec<ExternalType>,
    server: Vec<ExternalType>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_server_json(&mut self, label: &str, text: &str) -> Result<&mut Self> {
        let assembly = parse_assembly(label, text)?;
        self.add_assembly(assembly, Origin::Server)
    }

    pub fn add_runtime_json(&mut self, label: &str, text: &str) -> Result<&mut Self> {
        let assembly = parse_assembly(label, text)?;
        self.add_assembly(assembly, Origin::SecondaryRuntime)
    }

    /// Stamp the assembly's types with `origin` and queue them.
    pub fn add_assembly(&mut self, assembly: Assembly, origin: Origin) -> Result<&mut Self> {
        if let Some(index) = assembly.types.iter().position(|ty| ty.name.is_empty()) {
            return Err(Error::InvalidType {
                assembly: assembly.name,
                index,
            });
        }
        debug!(assembly = %assembly.name, types = assembly.types.len(), ?origin, "loaded assembly");
        let types = assembly.into_types(origin);
        match origin {
            Origin::Server => self.server.extend(types),
            Origin::SecondaryRuntime => self.runtime.extend(types),
            Origin::SecondarySource => self.source.extend(types),
        }
        Ok(self)
    }

    /// Extract exported classes from TypeScript source. Syntax errors are
    /// returned as diagnostics; the classes that could be read are kept.
    pub fn add_source(&mut self, label: &str, text: &str) -> Result<Diagnostics> {
        let (types, diagnostics) = extract_source(text, label).map_err(|source| Error::Script {
            label: label.to_string(),
            source,
        })?;
        debug!(source = label, types = types.len(), "extracted source");
        self.source.extend(types);
        Ok(diagnostics)
    }

    pub fn build(self) -> TypeModel {
        self.source
            .into_iter()
            .chain(self.runtime)
            .chain(self.server)
            .collect()
    }
}

fn parse_assembly(label: &str, text: &str) -> Result<Assembly> {
    let mut assembly = Assembly::from_json(text).map_err(|source| Error::Json {
        label: label.to_string(),
        source,
    })?;
    if assembly.name.is_empty() {
        assembly.name = label.to_string();
    }
    Ok(assembly)
}

/// Runs generation over one model.
pub struct Generator<'a> {
    model: &'a TypeModel,
    config: &'a Config,
    lookup: &'a dyn DeclarationLookup,
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a TypeModel, config: &'a Config) -> Self {
        Self {
            model,
            config,
            lookup: config,
        }
    }

    pub fn with_lookup(mut self, lookup: &'a dyn DeclarationLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Server enums, services and entities in model order, then script
    /// metadata types outside excluded assemblies ordered by namespace and
    /// name.
    pub fn default_seeds(&self) -> Vec<String> {
        let server = self
            .model
            .iter()
            .filter(|ty| ty.origin == Origin::Server)
            .filter(|ty| classify(ty, self.model, self.config).is_seed())
            .map(ExternalType::full_name);

        let mut runtime: Vec<&ExternalType> = self
            .model
            .iter()
            .filter(|ty| ty.origin == Origin::SecondaryRuntime)
            .filter(|ty| !self.config.is_excluded_assembly(&ty.assembly_name))
            .collect();
        runtime.sort_by(|a, b| (&a.namespace, &a.name).cmp(&(&b.namespace, &b.name)));

        server
            .chain(runtime.into_iter().map(ExternalType::full_name))
            .collect()
    }

    pub fn generate(&self) -> Result<GeneratedOutput> {
        self.generate_from(&self.default_seeds())
    }

    pub fn generate_from<S: AsRef<str>>(&self, seeds: &[S]) -> Result<GeneratedOutput> {
        let mut context = GenerationContext::with_lookup(self.model, self.config, self.lookup);
        for seed in seeds {
            context.seed(seed.as_ref())?;
        }
        info!(seeds = seeds.len(), "starting generation");
        context.run()
    }
}
