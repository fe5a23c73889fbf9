use indexmap::IndexSet;
use typebridge_core::utils::{split_full_name, strip_arity};
use typebridge_core::{ExternalMethod, ExternalType, TypeSig};

use super::{CodeWriter, quote};
use crate::context::GenerationContext;
use crate::translate::{Scope, is_primitive};

/// A method callable as a service endpoint.
struct Endpoint<'t> {
    name: &'t str,
    request: TypeSig,
    response: TypeSig,
}

impl GenerationContext<'_> {
    pub(super) fn emit_service(&mut self, ty: &ExternalType) -> String {
        let namespace = self.resolver().emit_namespace(&ty.namespace).to_string();
        let scope = Scope::new(&namespace);
        let controller = controller_name(ty);
        let base_url =
            route_url(ty).unwrap_or_else(|| format!("{}/{}", namespace.replace('.', "/"), controller));

        let mut seen = IndexSet::new();
        let mut endpoints = Vec::new();
        for method in &ty.methods {
            if seen.contains(method.member.name.as_str()) {
                continue;
            }
            let Some(endpoint) = self.endpoint(method) else {
                continue;
            };
            seen.insert(endpoint.name);
            endpoints.push(endpoint);
        }

        let hooks = &self.config.runtime;
        let (request_hook, options_hook, xhr_type) = (
            hooks.service_request.clone(),
            hooks.service_options.clone(),
            hooks.xhr_type.clone(),
        );

        let mut w = CodeWriter::new();
        w.open(&format!("export namespace {}Service", controller));
        w.line(&format!("export const baseUrl = {};", quote(&base_url)));

        for endpoint in &endpoints {
            let request = self.translator().runtime(&endpoint.request, &scope);
            let response = self.translator().runtime(&endpoint.response, &scope);
            let url = join_url(&base_url, endpoint.name);
            w.blank();
            w.open(&format!(
                "export function {}(request: {}, onSuccess?: (response: {}) => void, opt?: {}<any>): {}",
                endpoint.name, request, response, options_hook, xhr_type
            ));
            w.line(&format!(
                "return {}({}, request, onSuccess, opt);",
                request_hook,
                quote(&url)
            ));
            w.close();
        }

        w.blank();
        w.open("export namespace Methods");
        for endpoint in &endpoints {
            w.line(&format!(
                "export const {} = {};",
                endpoint.name,
                quote(&join_url(&base_url, endpoint.name))
            ));
        }
        w.close();
        w.close();
        w.finish()
    }

    /// Public instance method taking one request object and returning a
    /// response object, after host-supplied parameters are dropped.
    fn endpoint<'t>(&self, method: &'t ExternalMethod) -> Option<Endpoint<'t>> {
        if method.member.is_static
            || method.member.is_protected
            || method.is_constructor
            || method.is_getter
            || method.is_setter
        {
            return None;
        }

        let mut requests = method.arguments.iter().filter_map(|arg| {
            let sig = TypeSig::parse(&arg.type_name).ok()?;
            let skipped = self
                .config
                .service_skip_parameters
                .iter()
                .any(|skip| sig.definition_name() == *skip);
            (!skipped).then_some(sig)
        });
        let request = requests.next()?;
        if requests.next().is_some() || is_primitive(&request) {
            return None;
        }

        let response = unwrap_result(TypeSig::parse(&method.member.type_name).ok()?);
        if response.name == "System.Void" || is_primitive(&response) {
            return None;
        }

        Some(Endpoint {
            name: &method.member.name,
            request,
            response,
        })
    }
}

/// Class name without its `Controller` suffix.
fn controller_name(ty: &ExternalType) -> &str {
    let name = ty.bare_name();
    name.strip_suffix("Controller")
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(name)
}

/// Base URL from a route attribute, reduced to the service path.
fn route_url(ty: &ExternalType) -> Option<String> {
    let route = ty
        .attribute("RouteAttribute")
        .or_else(|| ty.attribute("RoutePrefixAttribute"))?
        .string_value()?
        .trim();

    let mut url = route.strip_prefix("~/").unwrap_or(route);
    url = url.strip_prefix("Services/").unwrap_or(url);
    for action in ["/{action}", "/[action]"] {
        url = url.strip_suffix(action).unwrap_or(url);
    }
    Some(url.trim_end_matches('/').to_string())
}

/// ``Result`1<T>`` and ``ActionResult`1<T>`` carry the response as `T`.
fn unwrap_result(sig: TypeSig) -> TypeSig {
    let (_, simple) = split_full_name(&sig.name);
    let wrapper = matches!(strip_arity(simple), "Result" | "ActionResult");
    if wrapper && sig.args.len() == 1 && sig.array_rank == 0 {
        return sig.args.into_iter().next().unwrap_or_else(|| TypeSig::simple("System.Void"));
    }
    sig
}

fn join_url(base: &str, method: &str) -> String {
    if base.is_empty() {
        method.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), method)
    }
}
