//! Fixtures for compiler tests.

use typebridge_core::utils::split_full_name;
use typebridge_core::{ExternalAttribute, ExternalMethod, ExternalProperty, ExternalType, Origin, TypeModel};

use crate::translate::{Scope, Translator};
use crate::{Config, GeneratedOutput, Generator, TsType, Worklist};

pub fn server_type(full_name: &str) -> ExternalType {
    let (namespace, name) = split_full_name(full_name);
    let mut ty = ExternalType::new(namespace, name);
    ty.assembly_name = "App".to_string();
    ty
}

pub fn runtime_type(full_name: &str, assembly: &str) -> ExternalType {
    let mut ty = server_type(full_name);
    ty.origin = Origin::SecondaryRuntime;
    ty.assembly_name = assembly.to_string();
    ty
}

pub fn property(name: &str, type_name: &str) -> ExternalProperty {
    ExternalProperty::new(name, type_name)
}

pub fn method(name: &str, return_type: &str, args: &[(&str, &str)]) -> ExternalMethod {
    args.iter()
        .fold(ExternalMethod::new(name, return_type), |m, (arg, ty)| {
            m.with_argument(*arg, *ty)
        })
}

pub fn attribute(type_name: &str, value: &str) -> ExternalAttribute {
    ExternalAttribute::new(type_name).with_value(value)
}

pub fn model_of(types: impl IntoIterator<Item = ExternalType>) -> TypeModel {
    types.into_iter().collect()
}

pub fn generate(model: &TypeModel, seeds: &[&str]) -> GeneratedOutput {
    let config = Config::default();
    Generator::new(model, &config)
        .generate_from(seeds)
        .expect("generation succeeds")
}

/// Translate with a fresh worklist; returns the rendered type and the names
/// it enqueued.
pub fn runtime(model: &TypeModel, text: &str, namespace: &str) -> (String, Vec<String>) {
    translate_with(model, namespace, |t, scope| t.runtime_text(text, scope))
}

pub fn script(model: &TypeModel, text: &str, namespace: &str, default: &str) -> (String, Vec<String>) {
    translate_with(model, namespace, |t, scope| t.script(text, scope, default))
}

fn translate_with(
    model: &TypeModel,
    namespace: &str,
    f: impl FnOnce(&mut Translator<'_>, &Scope<'_>) -> TsType,
) -> (String, Vec<String>) {
    let config = Config::default();
    let mut worklist = Worklist::new();
    let rendered = {
        let mut translator = Translator::new(model, &config, &config, &mut worklist);
        f(&mut translator, &Scope::new(namespace)).to_string()
    };
    (rendered, worklist.iter().map(str::to_string).collect())
}
