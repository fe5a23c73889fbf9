use crate::{ExternalAttribute, ExternalProperty, ExternalType, Origin, RowField};

#[test]
fn full_name_formats() {
    assert_eq!(ExternalType::new("App", "Row").full_name(), "App.Row");
    assert_eq!(ExternalType::new("", "Row").full_name(), "Row");

    let mut generic = ExternalType::new("App", "Dialog");
    generic.generic_parameters = vec!["TItem".to_string(), "TOptions".to_string()];
    assert_eq!(generic.full_name(), "App.Dialog`2");

    let mut suffixed = ExternalType::new("App", "Dialog`2");
    suffixed.generic_parameters = vec!["TItem".to_string(), "TOptions".to_string()];
    assert_eq!(suffixed.full_name(), "App.Dialog`2");
    assert_eq!(suffixed.bare_name(), "Dialog");
}

#[test]
fn static_module_flag() {
    let mut ty = ExternalType::new("App", "Helpers");
    ty.is_abstract = true;
    assert!(!ty.is_static_module());
    ty.is_sealed = true;
    assert!(ty.is_static_module());
}

#[test]
fn attribute_matches_full_or_short_name() {
    let attr = ExternalAttribute::new("System.Web.Mvc.RouteAttribute").with_value("Services/Customer");
    assert!(attr.is("RouteAttribute"));
    assert!(attr.is("System.Web.Mvc.RouteAttribute"));
    assert!(!attr.is("PrefixRouteAttribute"));
    assert!(!attr.is("Attribute"));
    assert_eq!(attr.string_value(), Some("Services/Customer"));
}

#[test]
fn property_accessors() {
    let mut prop = ExternalProperty::new("Name", "System.String");
    assert!(prop.has_no_accessors());
    prop.set_method = Some(String::new());
    assert!(prop.has_no_accessors());
    prop.set_method = Some("set_Name".to_string());
    assert!(!prop.has_no_accessors());
}

#[test]
fn row_field_wire_name_defaults() {
    let mut field = RowField {
        property_name: "CustomerId".to_string(),
        ..RowField::default()
    };
    assert_eq!(field.wire_name(), "CustomerId");
    field.wire_name = Some("CustomerID".to_string());
    assert_eq!(field.wire_name(), "CustomerID");
}

#[test]
fn row_field_property_name_falls_back_to_field_name() {
    let field: RowField =
        serde_json::from_str(r#"{ "Name": "OrderID", "ValueType": "System.Int32" }"#).unwrap();
    assert_eq!(field.name, "OrderID");
    assert_eq!(field.property_name(), "OrderID");
    assert_eq!(field.wire_name(), "OrderID");

    let field = RowField {
        name: "CUST_ID".to_string(),
        property_name: "CustomerId".to_string(),
        ..RowField::default()
    };
    assert_eq!(field.property_name(), "CustomerId");
    assert_eq!(field.wire_name(), "CustomerId");
}

#[test]
fn origin_secondary() {
    assert!(!Origin::Server.is_secondary());
    assert!(Origin::SecondaryRuntime.is_secondary());
    assert!(Origin::SecondarySource.is_secondary());
}
