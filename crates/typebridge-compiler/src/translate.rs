//! Type expression translation.
//!
//! Server signatures and script signatures share the first five resolution
//! steps (primitives, nullable, framework values, arrays and lists,
//! dictionaries). They differ in what happens to a name the steps do not
//! cover; see [`Translator::runtime`] and [`Translator::script`].

use tracing::{debug, warn};
use typebridge_core::utils::strip_arity;
use typebridge_core::{ExternalType, Origin, TypeModel, TypeSig};

use crate::config::Config;
use crate::legacy::fixup_legacy_generics;
use crate::resolve::Resolver;
use crate::ts::TsType;
use crate::worklist::Worklist;

/// Types declared by hand or generated elsewhere, looked up by full name.
pub trait DeclarationLookup {
    /// Script-side name of `full_name`, if it is declared.
    fn script_name(&self, full_name: &str) -> Option<&str>;
}

impl DeclarationLookup for Config {
    fn script_name(&self, full_name: &str) -> Option<&str> {
        self.known_types.get(full_name).map(String::as_str)
    }
}

/// Where a signature is being translated.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'s> {
    /// Namespace of the declaration being emitted.
    pub namespace: &'s str,
    /// Generic parameter names in scope, emitted verbatim.
    pub leave_as_is: &'s [String],
}

impl<'s> Scope<'s> {
    pub fn new(namespace: &'s str) -> Self {
        Self {
            namespace,
            leave_as_is: &[],
        }
    }

    pub fn with_type_params(mut self, params: &'s [String]) -> Self {
        self.leave_as_is = params;
        self
    }

    fn is_type_param(&self, sig: &TypeSig) -> bool {
        sig.args.is_empty() && sig.array_rank == 0 && self.leave_as_is.contains(&sig.name)
    }
}

pub struct Translator<'a> {
    model: &'a TypeModel,
    config: &'a Config,
    lookup: &'a dyn DeclarationLookup,
    worklist: &'a mut Worklist,
}

impl<'a> Translator<'a> {
    pub fn new(
        model: &'a TypeModel,
        config: &'a Config,
        lookup: &'a dyn DeclarationLookup,
        worklist: &'a mut Worklist,
    ) -> Self {
        Self {
            model,
            config,
            lookup,
            worklist,
        }
    }

    fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.config)
    }

    /// Translate a server signature.
    ///
    /// A user type found in the model is enqueued. A name absent from the
    /// model resolves through the known declarations, else it is emitted
    /// shortened as written.
    pub fn runtime(&mut self, sig: &TypeSig, scope: &Scope<'_>) -> TsType {
        if scope.is_type_param(sig) {
            return TsType::named(&sig.name);
        }
        if let Some(ty) = self.structural(sig, scope, false) {
            return ty;
        }

        let args = self.runtime_args(sig, scope);
        let model = self.model;
        if let Some(ty) = model.resolve(sig) {
            return self.reference(ty, args, scope);
        }
        if let Some(name) = self.known(sig, scope) {
            return TsType::generic(name, args);
        }

        warn!(signature = %sig, "unresolved server type");
        let name = self.resolver().shorten_full(strip_arity(&sig.name), scope.namespace);
        TsType::generic(name, args)
    }

    /// Parse and translate a server signature; malformed text becomes `any`.
    pub fn runtime_text(&mut self, text: &str, scope: &Scope<'_>) -> TsType {
        match TypeSig::parse(text) {
            Ok(sig) => self.runtime(&sig, scope),
            Err(err) => {
                warn!(%err, "malformed server signature");
                TsType::any()
            }
        }
    }

    /// Like [`Translator::runtime`], but `None` when the name is neither in
    /// the model nor a known declaration.
    pub fn runtime_base(&mut self, sig: &TypeSig, scope: &Scope<'_>) -> Option<TsType> {
        let model = self.model;
        if let Some(ty) = model.resolve(sig) {
            let args = self.runtime_args(sig, scope);
            return Some(self.reference(ty, args, scope));
        }
        let name = self.known(sig, scope)?;
        let args = self.runtime_args(sig, scope);
        Some(TsType::generic(name, args))
    }

    /// Translate a textual script signature.
    ///
    /// Legacy arity fixup runs before the model lookup. Unresolved names,
    /// and any signature that does not parse, become `default`.
    pub fn script(&mut self, text: &str, scope: &Scope<'_>, default: &str) -> TsType {
        match TypeSig::parse(text) {
            Ok(sig) => self.script_sig(&sig, scope, default),
            Err(err) => {
                debug!(%err, "malformed script signature");
                TsType::named(default)
            }
        }
    }

    pub fn script_sig(&mut self, sig: &TypeSig, scope: &Scope<'_>, default: &str) -> TsType {
        if scope.is_type_param(sig) {
            return TsType::named(&sig.name);
        }
        if sig.args.is_empty()
            && sig.array_rank == 0
            && let Some(name) = script_primitive(&sig.name)
        {
            return TsType::named(name);
        }
        if sig.args.is_empty() && sig.array_rank == 0 && sig.name == "System.Action" {
            return TsType::function(Vec::new(), TsType::void());
        }
        if let Some(ty) = self.structural(sig, scope, true) {
            return ty;
        }

        let sig = fixup_legacy_generics(sig.clone());
        let model = self.model;
        if let Some(ty) = model.resolve(&sig) {
            let args = sig
                .args
                .iter()
                .map(|arg| self.script_sig(arg, scope, "any"))
                .collect();
            return self.reference(ty, args, scope);
        }

        if sig.is_named("System.Func")
            && let Some((ret, params)) = sig.args.split_last()
        {
            let params = params
                .iter()
                .map(|p| self.script_sig(p, scope, "any"))
                .collect();
            let ret = self.script_sig(ret, scope, "any");
            return TsType::function(params, ret);
        }
        if sig.is_named("System.Action") && !sig.args.is_empty() {
            let params = sig
                .args
                .iter()
                .map(|p| self.script_sig(p, scope, "any"))
                .collect();
            return TsType::function(params, TsType::void());
        }

        TsType::named(default)
    }

    /// Resolution steps shared by both paths. `script` selects the path used
    /// for nested signatures.
    fn structural(&mut self, sig: &TypeSig, scope: &Scope<'_>, script: bool) -> Option<TsType> {
        let plain = sig.array_rank == 0;

        if plain
            && sig.args.is_empty()
            && let Some(name) = primitive(&sig.name)
        {
            return Some(TsType::named(name));
        }

        if plain && sig.args.len() == 1 && sig.is_named("System.Nullable") {
            let inner = self.nested(&sig.args[0], scope, script);
            return Some(TsType::nullable(inner));
        }

        if let Some(ty) = framework_value(sig) {
            return Some(ty);
        }

        if let Some(element) = sig.element() {
            let element = self.nested(&element, scope, script);
            return Some(TsType::array(element));
        }
        if sig.args.len() == 1 && is_list_like(&sig.name) {
            let element = self.nested(&sig.args[0], scope, script);
            return Some(TsType::array(element));
        }

        if sig.args.len() == 2 && is_dictionary_like(&sig.name) {
            let key = self.nested(&sig.args[0], scope, script);
            let value = self.nested(&sig.args[1], scope, script);
            return Some(TsType::dictionary(&key, value));
        }

        None
    }

    fn nested(&mut self, sig: &TypeSig, scope: &Scope<'_>, script: bool) -> TsType {
        if script {
            self.script_sig(sig, scope, "any")
        } else {
            self.runtime(sig, scope)
        }
    }

    fn runtime_args(&mut self, sig: &TypeSig, scope: &Scope<'_>) -> Vec<TsType> {
        sig.args.iter().map(|arg| self.runtime(arg, scope)).collect()
    }

    /// Name a model type and enqueue it for emission.
    fn reference(&mut self, ty: &ExternalType, args: Vec<TsType>, scope: &Scope<'_>) -> TsType {
        self.discover(ty);
        let resolver = self.resolver();
        let name = resolver.shorten_type(ty, scope.namespace);
        if resolver.is_widget(&ty.full_name()) {
            return TsType::named(name);
        }
        TsType::generic(name, args)
    }

    /// Enqueue a model type unless it is already declared in script source
    /// or comes from an excluded assembly.
    pub fn discover(&mut self, ty: &ExternalType) -> bool {
        if ty.origin == Origin::SecondarySource || self.config.is_excluded_assembly(&ty.assembly_name)
        {
            return false;
        }
        let full_name = ty.full_name();
        let added = self.worklist.enqueue(full_name.clone());
        if added {
            debug!(r#type = %full_name, "enqueued");
        }
        added
    }

    fn known(&self, sig: &TypeSig, scope: &Scope<'_>) -> Option<String> {
        let lookup = self.lookup;
        let name = lookup
            .script_name(&sig.definition_name())
            .or_else(|| lookup.script_name(&sig.name))
            .or_else(|| lookup.script_name(strip_arity(&sig.name)))?;
        Some(self.resolver().shorten_full(name, scope.namespace))
    }
}

/// Primitive mapping shared by both paths.
pub fn primitive(name: &str) -> Option<&'static str> {
    Some(match name {
        "System.String" | "System.Char" | "System.Guid" | "System.DateTime"
        | "System.DateTimeOffset" | "System.TimeSpan" => "string",
        "System.SByte" | "System.Byte" | "System.Int16" | "System.UInt16" | "System.Int32"
        | "System.UInt32" | "System.Int64" | "System.UInt64" | "System.Single"
        | "System.Double" | "System.Decimal" => "number",
        "System.Boolean" => "boolean",
        _ => return None,
    })
}

/// Extra primitives of the script runtime.
fn script_primitive(name: &str) -> Option<&'static str> {
    Some(match name {
        "System.Type" => "Function",
        "System.JsDate" => "Date",
        "jQueryApi.jQueryObject" => "JQuery",
        "System.Void" => "void",
        _ => return None,
    })
}

/// Primitive, or nullable of a primitive.
pub fn is_primitive(sig: &TypeSig) -> bool {
    if sig.array_rank > 0 {
        return false;
    }
    if sig.args.is_empty() {
        return primitive(&sig.name).is_some();
    }
    sig.args.len() == 1 && sig.is_named("System.Nullable") && is_primitive(&sig.args[0])
}

fn framework_value(sig: &TypeSig) -> Option<TsType> {
    if !sig.args.is_empty() {
        return None;
    }
    match (sig.name.as_str(), sig.array_rank) {
        ("Serenity.Data.SortBy", 1) => Some(TsType::array(TsType::named("string"))),
        ("System.IO.Stream", 0) => Some(TsType::array(TsType::named("number"))),
        ("System.Object", 0) => Some(TsType::any()),
        _ => None,
    }
}

fn is_list_like(name: &str) -> bool {
    matches!(
        strip_arity(name),
        "System.Collections.Generic.List"
            | "System.Collections.Generic.IList"
            | "System.Collections.Generic.ICollection"
            | "System.Collections.Generic.IEnumerable"
            | "System.Collections.Generic.HashSet"
            | "System.Collections.Generic.ISet"
    )
}

fn is_dictionary_like(name: &str) -> bool {
    matches!(
        strip_arity(name),
        "System.Collections.Generic.Dictionary"
            | "System.Collections.Generic.IDictionary"
            | "System.Collections.Generic.IReadOnlyDictionary"
            | "System.Collections.Generic.JsDictionary"
    )
}
