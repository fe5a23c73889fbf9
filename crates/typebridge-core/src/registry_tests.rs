use indoc::indoc;

use crate::{Assembly, ExternalType, Origin, TypeModel, TypeSig};

fn ty(namespace: &str, name: &str, base: Option<&str>) -> ExternalType {
    ExternalType {
        base_type: base.map(str::to_string),
        ..ExternalType::new(namespace, name)
    }
}

#[test]
fn first_registration_wins() {
    let mut model = TypeModel::new();
    let mut first = ty("App", "Customer", None);
    first.assembly_name = "first".to_string();
    let mut second = ty("App", "Customer", None);
    second.assembly_name = "second".to_string();

    assert!(model.register_if_absent(first));
    assert!(!model.register_if_absent(second));
    assert_eq!(model.len(), 1);
    assert_eq!(model.lookup("App.Customer").unwrap().assembly_name, "first");
}

#[test]
fn generic_types_keyed_by_arity() {
    let mut grid = ty("App", "Grid", None);
    grid.generic_parameters = vec!["TItem".to_string()];
    let model: TypeModel = [grid, ty("App", "Grid", None)].into_iter().collect();

    assert_eq!(model.len(), 2);
    assert!(model.contains("App.Grid`1"));
    assert!(model.contains("App.Grid"));
    let sig = TypeSig::parse("App.Grid<App.Row>").unwrap();
    assert_eq!(model.resolve(&sig).unwrap().full_name(), "App.Grid`1");
}

#[test]
fn iteration_keeps_registration_order() {
    let model: TypeModel = ["C", "A", "B"]
        .into_iter()
        .map(|n| ty("App", n, None))
        .collect();
    let names: Vec<_> = model.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["C", "A", "B"]);
}

#[test]
fn base_chain_walks_model() {
    let model: TypeModel = [
        ty("App", "Leaf", Some("App.Middle")),
        ty("App", "Middle", Some("App.Root<App.Leaf>")),
        ExternalType {
            generic_parameters: vec!["T".to_string()],
            base_type: Some("External.Base".to_string()),
            ..ExternalType::new("App", "Root")
        },
    ]
    .into_iter()
    .collect();

    assert_eq!(
        model.base_chain("App.Leaf"),
        ["App.Middle", "App.Root`1", "External.Base"]
    );
    assert!(model.inherits_from("App.Leaf", "External.Base"));
    assert!(model.inherits_from("App.Leaf", "App.Root"));
    assert!(!model.inherits_from("App.Middle", "App.Leaf"));
}

#[test]
fn base_chain_stops_on_cycle() {
    let model: TypeModel = [ty("App", "A", Some("App.B")), ty("App", "B", Some("App.A"))]
        .into_iter()
        .collect();
    assert_eq!(model.base_chain("App.A"), ["App.B"]);
}

#[test]
fn assembly_from_json() {
    let json = indoc! {r#"
        {
          "Name": "Northwind",
          "Types": [
            {
              "Namespace": "Northwind.Entities",
              "Name": "CustomerRow",
              "BaseType": "Serenity.Data.Row",
              "Origin": "SecondarySource",
              "Properties": [
                { "Name": "CustomerID", "Type": "System.String", "GetMethod": "get_CustomerID" }
              ]
            }
          ]
        }
    "#};

    let assembly = Assembly::from_json(json).unwrap();
    let types: Vec<_> = assembly.into_types(Origin::Server).collect();

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].origin, Origin::Server);
    assert_eq!(types[0].assembly_name, "Northwind");
    assert_eq!(types[0].full_name(), "Northwind.Entities.CustomerRow");
    let prop = &types[0].properties[0];
    assert_eq!(prop.member.name, "CustomerID");
    assert_eq!(prop.get_method.as_deref(), Some("get_CustomerID"));
    assert!(!prop.has_no_accessors());
}
