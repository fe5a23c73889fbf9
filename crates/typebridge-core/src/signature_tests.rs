use crate::{SignatureError, TypeSig, split_generic_arguments};

fn parse(text: &str) -> TypeSig {
    TypeSig::parse(text).unwrap()
}

#[test]
fn simple_name() {
    let sig = parse("System.String");
    assert_eq!(sig, TypeSig::simple("System.String"));
    assert_eq!(sig.to_string(), "System.String");
}

#[test]
fn generic_with_arity() {
    let sig = parse("System.Collections.Generic.Dictionary`2<System.String,System.Int32>");
    assert_eq!(sig.name, "System.Collections.Generic.Dictionary`2");
    assert_eq!(sig.args.len(), 2);
    insta::assert_snapshot!(sig, @"System.Collections.Generic.Dictionary`2<System.String, System.Int32>");
}

#[test]
fn nested_generics_and_arrays() {
    let sig = parse("List`1<Dictionary`2<A, B[]>>[][]");
    assert_eq!(sig.array_rank, 2);
    assert_eq!(sig.args[0].args[1], TypeSig {
        name: "B".to_string(),
        args: Vec::new(),
        array_rank: 1,
    });
    insta::assert_snapshot!(sig, @"List`1<Dictionary`2<A, B[]>>[][]");
}

#[test]
fn element_lowers_rank() {
    let sig = parse("System.Int32[]");
    assert_eq!(sig.element(), Some(TypeSig::simple("System.Int32")));
    assert_eq!(TypeSig::simple("X").element(), None);
}

#[test]
fn definition_name_appends_arity() {
    assert_eq!(parse("Serenity.EntityDialog<A, B>").definition_name(), "Serenity.EntityDialog`2");
    assert_eq!(parse("Serenity.EntityDialog`2<A, B>").definition_name(), "Serenity.EntityDialog`2");
    assert_eq!(parse("Serenity.Widget").definition_name(), "Serenity.Widget");
}

#[test]
fn is_named_ignores_arity() {
    assert!(parse("System.Nullable`1<System.Int32>").is_named("System.Nullable"));
    assert!(parse("System.Nullable<System.Int32>").is_named("System.Nullable"));
    assert!(!parse("System.Int32").is_named("System.Nullable"));
}

#[test]
fn errors() {
    assert_eq!(TypeSig::parse("  "), Err(SignatureError::Empty));
    assert_eq!(
        TypeSig::parse("List`1<A"),
        Err(SignatureError::Unbalanced("List`1<A".to_string()))
    );
    insta::assert_snapshot!(TypeSig::parse("<A>").unwrap_err(), @"missing type name at offset 0 in `<A>`");
    insta::assert_snapshot!(TypeSig::parse("A<B> C").unwrap_err(), @"unexpected `C` after type name in `A<B> C`");
    insta::assert_snapshot!(TypeSig::parse("A<B,>").unwrap_err(), @"empty type signature");
}

#[test]
fn split_respects_depth() {
    assert_eq!(split_generic_arguments(""), Vec::<&str>::new());
    assert_eq!(split_generic_arguments("A"), vec!["A"]);
    assert_eq!(
        split_generic_arguments("A<B, C>, D[], E<F<G, H>>"),
        vec!["A<B, C>", "D[]", "E<F<G, H>>"]
    );
}
