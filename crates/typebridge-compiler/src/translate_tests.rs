use typebridge_core::TypeModel;

use crate::test_utils::{model_of, runtime, runtime_type, script, server_type};

fn render(text: &str) -> String {
    runtime(&TypeModel::new(), text, "App").0
}

#[test]
fn primitives() {
    assert_eq!(render("System.String"), "string");
    assert_eq!(render("System.Guid"), "string");
    assert_eq!(render("System.DateTime"), "string");
    assert_eq!(render("System.TimeSpan"), "string");
    assert_eq!(render("System.Int64"), "number");
    assert_eq!(render("System.Decimal"), "number");
    assert_eq!(render("System.Boolean"), "boolean");
}

#[test]
fn nullable_appends_marker_once() {
    assert_eq!(render("System.Nullable`1<System.Int32>"), "number | null");
    assert_eq!(render("System.Nullable<System.DateTime>"), "string | null");
    assert_eq!(
        render("System.Nullable`1<System.Nullable`1<System.Boolean>>"),
        "boolean | null"
    );
    assert_eq!(render("System.Nullable`1<System.Int32>[]"), "(number | null)[]");
}

#[test]
fn framework_values() {
    assert_eq!(render("Serenity.Data.SortBy[]"), "string[]");
    assert_eq!(render("System.IO.Stream"), "number[]");
    assert_eq!(render("System.Object"), "any");
    assert_eq!(render("System.Object[]"), "any[]");
}

#[test]
fn dictionaries() {
    assert_eq!(
        render("System.Collections.Generic.Dictionary`2<System.String, System.Int32>"),
        "{ [key: string]: number }"
    );
    assert_eq!(
        render("System.Collections.Generic.IDictionary`2<System.Int32, System.String[]>"),
        "{ [key: number]: string[] }"
    );
}

#[test]
fn list_of_user_type_enqueues_once() {
    let model = model_of([server_type("App.Item")]);

    let (rendered, enqueued) = runtime(&model, "System.Collections.Generic.List`1<App.Item>", "App");
    assert_eq!(rendered, "Item[]");
    assert_eq!(enqueued, ["App.Item"]);

    let (rendered, enqueued) = runtime(
        &model,
        "System.Collections.Generic.Dictionary`2<System.String, System.Collections.Generic.List`1<App.Item>>",
        "Other",
    );
    assert_eq!(rendered, "{ [key: string]: App.Item[] }");
    assert_eq!(enqueued, ["App.Item"]);
}

#[test]
fn known_declarations_are_referenced_not_enqueued() {
    let model = model_of([server_type("App.Item")]);

    let (rendered, enqueued) = runtime(
        &model,
        "Serenity.Services.ListResponse`1<App.Item>",
        "App",
    );
    assert_eq!(rendered, "Serenity.ListResponse<Item>");
    assert_eq!(enqueued, ["App.Item"]);
}

#[test]
fn unresolved_server_type_is_written_as_is() {
    let (rendered, enqueued) = runtime(&TypeModel::new(), "Vendor.Money", "App");
    assert_eq!(rendered, "Vendor.Money");
    assert!(enqueued.is_empty());

    assert_eq!(render("not a <signature"), "any");
}

#[test]
fn source_and_excluded_types_are_not_enqueued() {
    let mut dialog = server_type("App.CustomerDialog");
    dialog.origin = typebridge_core::Origin::SecondarySource;
    let model = model_of([
        dialog,
        runtime_type("Serenity.Widget`1", "Serenity.Script.UI"),
        runtime_type("Serenity.Select2Editor", "Serenity.Script.UI"),
    ]);

    let (rendered, enqueued) = script(&model, "App.CustomerDialog", "App", "any");
    assert_eq!(rendered, "CustomerDialog");
    assert!(enqueued.is_empty());

    let (rendered, enqueued) = script(&model, "Serenity.Widget`1<App.Options>", "App", "any");
    assert_eq!(rendered, "Serenity.Widget<any>");
    assert!(enqueued.is_empty());

    let (rendered, _) = script(&model, "Serenity.Select2Editor", "App", "any");
    assert_eq!(rendered, "Serenity.Select2Editor");
}

#[test]
fn script_functions_and_actions() {
    let model = TypeModel::new();
    let render = |text: &str| script(&model, text, "App", "any").0;

    assert_eq!(
        render("System.Func`3<System.String, System.Int32, System.Boolean>"),
        "(p1: string, p2: number) => boolean"
    );
    assert_eq!(render("System.Func`1<System.String>[]"), "(() => string)[]");
    assert_eq!(render("System.Action`1<System.String>"), "(p1: string) => void");
    assert_eq!(render("System.Action"), "() => void");
    assert_eq!(render("System.Type"), "Function");
    assert_eq!(render("System.JsDate"), "Date");
    assert_eq!(render("jQueryApi.jQueryObject"), "JQuery");
    assert_eq!(render("System.Collections.Generic.List`1<System.String>"), "string[]");
}

#[test]
fn script_unknown_names_degrade_to_default() {
    let model = TypeModel::new();

    assert_eq!(script(&model, "Vendor.Grid`1<System.String>", "App", "any").0, "any");
    assert_eq!(script(&model, "Vendor.Grid", "App", "Object").0, "Object");
    assert_eq!(script(&model, "Foo<", "App", "any").0, "any");
    assert_eq!(
        script(&model, "System.Nullable`1<Vendor.Thing>", "App", "any").0,
        "any | null"
    );
}

#[test]
fn script_legacy_base_resolves_after_fixup() {
    let mut grid = runtime_type("Serenity.EntityGrid`2", "Serenity.Script.UI");
    grid.generic_parameters = vec!["TItem".to_string(), "TOptions".to_string()];
    let model = model_of([grid, server_type("App.OrderRow")]);

    let (rendered, enqueued) = script(&model, "Serenity.EntityGrid`1<App.OrderRow>", "App", "Object");
    assert_eq!(rendered, "Serenity.EntityGrid<OrderRow, any>");
    assert_eq!(enqueued, ["App.OrderRow"]);

    let (rendered, _) = script(&model, "Serenity.EntityGrid", "App", "Object");
    assert_eq!(rendered, "Serenity.EntityGrid<any, any>");
}
