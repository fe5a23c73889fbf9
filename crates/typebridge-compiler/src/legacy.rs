//! Arity fixup for script base types that gained a generic parameter.
//!
//! Older script metadata refers to these types with one parameter (or none).
//! The missing parameters are filled with `System.Object`.

use typebridge_core::TypeSig;
use typebridge_core::utils::strip_arity;

const OBJECT: &str = "System.Object";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filler {
    /// Bare name becomes `` `1<System.Object> ``.
    Single,
    /// `` `1<X> `` becomes `` `2<X, System.Object> ``.
    Trailing,
    /// `` `1<X> `` becomes `` `2<System.Object, X> ``.
    Leading,
}

fn filler_for(name: &str) -> Option<Filler> {
    match name {
        "Serenity.TemplatedDialog"
        | "Serenity.TemplatedWidget"
        | "Serenity.ServiceCallOptions"
        | "System.Promise" => Some(Filler::Single),
        "Serenity.EntityDialog"
        | "Serenity.PropertyDialog"
        | "Serenity.EntityGrid"
        | "Serenity.PropertyPanel" => Some(Filler::Trailing),
        "Serenity.CheckTreeEditor" | "Serenity.LookupEditorBase" => Some(Filler::Leading),
        _ => None,
    }
}

/// Rewrite a legacy signature into its current arity. Other signatures are
/// returned unchanged.
///
/// ```
/// use typebridge_compiler::legacy::fixup_legacy_generics;
/// use typebridge_core::TypeSig;
///
/// let sig = TypeSig::parse("Serenity.EntityDialog`1<App.OrderRow>").unwrap();
/// assert_eq!(
///     fixup_legacy_generics(sig).to_string(),
///     "Serenity.EntityDialog`2<App.OrderRow, System.Object>",
/// );
/// ```
pub fn fixup_legacy_generics(sig: TypeSig) -> TypeSig {
    let Some(filler) = filler_for(strip_arity(&sig.name)) else {
        return sig;
    };

    let has_arity = sig.name.contains('`');
    let bare = sig.args.is_empty() && !has_arity;
    let single = sig.args.len() == 1 && (!has_arity || sig.name.ends_with("`1"));

    let TypeSig {
        name,
        mut args,
        array_rank,
    } = sig;
    let object = || TypeSig::simple(OBJECT);

    let arity = match (filler, bare, single) {
        (Filler::Single, true, _) => {
            args = vec![object()];
            1
        }
        (Filler::Trailing | Filler::Leading, true, _) => {
            args = vec![object(), object()];
            2
        }
        (Filler::Trailing, false, true) => {
            args.push(object());
            2
        }
        (Filler::Leading, false, true) => {
            args.insert(0, object());
            2
        }
        _ => {
            return TypeSig {
                name,
                args,
                array_rank,
            };
        }
    };

    TypeSig {
        name: format!("{}`{}", strip_arity(&name), arity),
        args,
        array_rank,
    }
}
