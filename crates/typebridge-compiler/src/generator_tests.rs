use indoc::indoc;
use typebridge_core::Origin;

use crate::test_utils::{model_of, property, runtime_type, server_type};
use crate::translate::DeclarationLookup;
use crate::{Config, Error, Generator, ModelBuilder};

const SERVER: &str = indoc! {r#"
    {
        "Name": "App",
        "Types": [
            { "Namespace": "App", "Name": "CustomerDialog" },
            { "Namespace": "App", "Name": "Shared" }
        ]
    }
"#};

const RUNTIME: &str = indoc! {r#"
    {
        "Name": "App.Script",
        "Types": [{ "Namespace": "App", "Name": "Shared", "IsInterface": true }]
    }
"#};

const SOURCE: &str = indoc! {r#"
    namespace App {
        export class CustomerDialog {
        }
    }
"#};

#[test]
fn secondary_pipelines_win_over_server() {
    let mut builder = ModelBuilder::new();
    builder.add_server_json("App.dll", SERVER).unwrap();
    builder.add_runtime_json("App.Script.dll", RUNTIME).unwrap();
    let diagnostics = builder.add_source("dialogs.ts", SOURCE).unwrap();
    assert!(diagnostics.is_empty());
    let model = builder.build();

    assert_eq!(model.len(), 2);
    assert_eq!(model.lookup("App.CustomerDialog").unwrap().origin, Origin::SecondarySource);
    let shared = model.lookup("App.Shared").unwrap();
    assert_eq!(shared.origin, Origin::SecondaryRuntime);
    assert_eq!(shared.assembly_name, "App.Script");
}

#[test]
fn assembly_name_defaults_to_label() {
    let mut builder = ModelBuilder::new();
    builder
        .add_server_json("Vendor.dll", r#"{ "Types": [{ "Namespace": "Vendor", "Name": "Money" }] }"#)
        .unwrap();
    let model = builder.build();

    assert_eq!(model.lookup("Vendor.Money").unwrap().assembly_name, "Vendor.dll");
}

#[test]
fn invalid_metadata() {
    let mut builder = ModelBuilder::new();

    let err = builder.add_server_json("App.dll", "{ not json").unwrap_err();
    assert!(matches!(err, Error::Json { ref label, .. } if label == "App.dll"));

    let nameless = r#"{ "Name": "App", "Types": [{ "Name": "Ok" }, { "Namespace": "App" }] }"#;
    let err = builder.add_runtime_json("App.Script.dll", nameless).unwrap_err();
    assert!(matches!(err, Error::InvalidType { ref assembly, index: 1 } if assembly == "App"));
    assert_eq!(err.to_string(), "type #1 of `App` has no name");
}

#[test]
fn unknown_seed() {
    let model = model_of([server_type("App.Order")]);
    let config = Config::default();

    let err = Generator::new(&model, &config)
        .generate_from(&["App.Missing"])
        .unwrap_err();
    assert!(matches!(err, Error::UnknownSeed(ref name) if name == "App.Missing"));
}

#[test]
fn cycles_and_duplicate_seeds_emit_once() {
    let mut order = server_type("App.Order");
    order.properties = vec![
        property("Customer", "App.Customer"),
        property("Lines", "System.Collections.Generic.List`1<App.Order>"),
    ];
    let mut customer = server_type("App.Customer");
    customer.properties = vec![property("LastOrder", "App.Order")];
    let model = model_of([order, customer]);
    let config = Config::default();

    let output = Generator::new(&model, &config)
        .generate_from(&["App.Order", "App.Order", "App.Customer"])
        .unwrap();

    let emitted: Vec<_> = output.declarations().iter().map(|d| d.full_name.as_str()).collect();
    assert_eq!(emitted, ["App.Order", "App.Customer"]);
    assert_eq!(output.len(), model.len());
}

#[test]
fn default_seeds() {
    let mut status = server_type("App.Status");
    status.is_enum = true;
    let model = model_of([
        server_type("App.Dto"),
        status,
        runtime_type("Zeta.Panel", "App.Script"),
        runtime_type("Alpha.Thing", "App.Script"),
        runtime_type("Serenity.Core", "Serenity.Script"),
    ]);
    let config = Config::default();

    let seeds = Generator::new(&model, &config).default_seeds();
    assert_eq!(seeds, ["App.Status", "Alpha.Thing", "Zeta.Panel"]);
}

#[test]
fn output_is_deterministic() {
    let mut builder = ModelBuilder::new();
    builder.add_server_json("App.dll", SERVER).unwrap();
    builder.add_runtime_json("App.Script.dll", RUNTIME).unwrap();
    let model = builder.build();
    let config = Config::default();

    let first = Generator::new(&model, &config).generate().unwrap();
    let second = Generator::new(&model, &config).generate().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}

#[test]
fn namespace_blocks_and_files() {
    let json = indoc! {r#"
        {
            "Name": "App",
            "Types": [
                { "Namespace": "App", "Name": "Status", "IsEnum": true, "Fields": [{ "Name": "Open", "Value": 1 }] },
                { "Name": "Level", "IsEnum": true, "Fields": [{ "Name": "Low" }] }
            ]
        }
    "#};
    let mut builder = ModelBuilder::new();
    builder.add_server_json("App.dll", json).unwrap();
    let model = builder.build();
    let config = Config::default();

    let output = Generator::new(&model, &config).generate().unwrap();

    insta::assert_snapshot!(output.render(), @r"
    namespace App {
        export enum Status {
            Open = 1
        }
        Serenity.Decorators.registerEnum(Status, 'App.Status');
    }

    export enum Level {
        Low = 0
    }
    Serenity.Decorators.registerEnum(Level, 'Level');
    ");

    let files = output.files();
    let names: Vec<_> = files.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["App.ts", "_global.ts"]);
    assert!(files[0].1.starts_with("namespace App {\n"));
    assert!(files[1].1.ends_with("'Level');\n"));
}

#[test]
fn row_fields_without_property_name_use_field_name() {
    let json = indoc! {r#"
        {
            "Name": "App",
            "Types": [{
                "Namespace": "App",
                "Name": "OrderRow",
                "Row": {
                    "IdProperty": "OrderID",
                    "Fields": [
                        { "Name": "OrderID", "ValueType": "System.Int32" },
                        { "Name": "CUST_ID", "PropertyName": "CustomerID", "ValueType": "System.String" }
                    ]
                }
            }]
        }
    "#};
    let mut builder = ModelBuilder::new();
    builder.add_server_json("App.dll", json).unwrap();
    let model = builder.build();
    let config = Config::default();

    let output = Generator::new(&model, &config)
        .generate_from(&["App.OrderRow"])
        .unwrap();

    insta::assert_snapshot!(output.render(), @r"
    namespace App {
        export class OrderRow {
            static readonly idProperty = 'OrderID';

            OrderID?: number;
            CustomerID?: string;
        }

        export namespace OrderRow {
            export namespace Fields {
                export const OrderID = 'OrderID';
                export const CustomerID = 'CustomerID';
            }
        }
    }
    ");
}

struct Vendor;

impl DeclarationLookup for Vendor {
    fn script_name(&self, full_name: &str) -> Option<&str> {
        (full_name == "Vendor.Money").then_some("Money.Amount")
    }
}

#[test]
fn custom_declaration_lookup() {
    let mut price = server_type("App.Price");
    price.properties = vec![property("Value", "Vendor.Money")];
    let model = model_of([price]);
    let config = Config::default();

    let output = Generator::new(&model, &config)
        .with_lookup(&Vendor)
        .generate_from(&["App.Price"])
        .unwrap();

    insta::assert_snapshot!(output.declarations()[0].text, @r"
    export interface Price {
        Value?: Money.Amount;
    }
    ");
}
