use crate::ts::TsType;

#[test]
fn named_and_generic() {
    assert_eq!(TsType::named("string").to_string(), "string");
    let lookup = TsType::generic("Q.Lookup", vec![TsType::named("OrderRow")]);
    assert_eq!(lookup.to_string(), "Q.Lookup<OrderRow>");
}

#[test]
fn nullable_is_idempotent() {
    let once = TsType::nullable(TsType::named("number"));
    let twice = TsType::nullable(once.clone());

    assert_eq!(once, twice);
    assert_eq!(twice.to_string(), "number | null");
    assert!(twice.is_nullable());
}

#[test]
fn loose_operands_are_parenthesised() {
    let nullable_array = TsType::array(TsType::nullable(TsType::named("string")));
    assert_eq!(nullable_array.to_string(), "(string | null)[]");

    let callback = TsType::function(vec![TsType::named("number")], TsType::void());
    assert_eq!(TsType::array(callback.clone()).to_string(), "((p1: number) => void)[]");
    assert_eq!(TsType::nullable(callback).to_string(), "((p1: number) => void) | null");

    let nested = TsType::array(TsType::array(TsType::named("Item")));
    assert_eq!(nested.to_string(), "Item[][]");
}

#[test]
fn dictionary_keys_follow_key_type() {
    let by_name = TsType::dictionary(&TsType::named("string"), TsType::any());
    let by_id = TsType::dictionary(&TsType::named("number"), TsType::named("Item"));

    assert_eq!(by_name.to_string(), "{ [key: string]: any }");
    assert_eq!(by_id.to_string(), "{ [key: number]: Item }");
}
