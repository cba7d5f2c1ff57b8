use toasty_audit::entity::{EntityConfiguration, IdMappingData, RelationType};
use toasty_audit::fragment::Element;
use toasty_audit::generator::{AuditContext, ToOneRelationMetadataGenerator};
use toasty_audit::mapper::{MultiPropertyMapper, PropertyMapper};
use toasty_audit::mapping::{ManyToOne, OneToOne, Selectable, ToOne};
use toasty_audit::reader::PropertyAuditingData;
use toasty_audit::Config;

fn context() -> AuditContext {
    let mut cx = AuditContext::new(Config::new());
    cx.audit_entity("Order", IdMappingData::single("id", "long", "id"))
        .audit_entity("Customer", IdMappingData::single("id", "long", "id"));
    cx
}

fn inverse_of_customer() -> ToOne {
    OneToOne::new("Order").mapped_by("customer").into()
}

#[test]
fn customer_order_registers_not_owning_relation() {
    let mut cx = context();
    let mut mapper = MultiPropertyMapper::new();

    ToOneRelationMetadataGenerator::new(&mut cx)
        .add_one_to_one_not_owning(
            &PropertyAuditingData::new("order"),
            &inverse_of_customer(),
            &mut mapper,
            "Customer",
        )
        .unwrap();

    let customer = cx.entities.get("Customer").unwrap();
    assert_eq!(customer.relations().count(), 1);

    let relation = customer.relation("order").unwrap();
    assert_eq!(relation.relation_type, RelationType::ToOneNotOwning);
    assert_eq!(relation.to_entity_name, "Order");
    assert_eq!(relation.mapped_by_property_name.as_deref(), Some("customer"));
    assert!(!relation.ignore_not_found);

    // Customer's own id, prefixed by the owning property name
    let id = &relation.id_mapper.properties()[0];
    assert_eq!(id.name, "customer_id");
    assert_eq!(id.bean_name, "id");

    let PropertyMapper::OneToOneNotOwning(not_owning) = mapper.get("order").unwrap() else {
        panic!("expected a not-owning one-to-one mapper");
    };
    assert_eq!(not_owning.entity_name, "Customer");
    assert_eq!(not_owning.referenced_entity_name, "Order");
    assert_eq!(not_owning.owning_reference_property_name, "customer");
    assert_eq!(not_owning.property.name, "order");
}

#[test]
fn prefix_matches_owning_side() {
    let mut cx = context();
    let mut parent = Element::new("class");
    let mut order_mapper = MultiPropertyMapper::new();
    let mut customer_mapper = MultiPropertyMapper::new();

    let mut generator = ToOneRelationMetadataGenerator::new(&mut cx);

    generator
        .add_to_one(
            &mut parent,
            &PropertyAuditingData::new("customer"),
            &ManyToOne::new("Customer")
                .column(Selectable::column("customer_id"))
                .into(),
            &mut order_mapper,
            "Order",
            true,
        )
        .unwrap();

    generator
        .add_one_to_one_not_owning(
            &PropertyAuditingData::new("order"),
            &inverse_of_customer(),
            &mut customer_mapper,
            "Customer",
        )
        .unwrap();

    let owning = cx.entities.get("Order").unwrap().relation("customer").unwrap();
    let inverse = cx.entities.get("Customer").unwrap().relation("order").unwrap();

    assert_eq!(owning.id_mapper, inverse.id_mapper);
}

#[test]
fn never_produces_fragment_elements() {
    let mut cx = context();
    let mut parent = Element::new("class");
    let mut mapper = MultiPropertyMapper::new();

    ToOneRelationMetadataGenerator::new(&mut cx)
        .add(
            &mut parent,
            &PropertyAuditingData::new("order").force_insertable(true),
            &inverse_of_customer(),
            &mut mapper,
            "Customer",
            false,
        )
        .unwrap();

    assert!(parent.children().is_empty());
    assert!(matches!(
        mapper.get("order"),
        Some(PropertyMapper::OneToOneNotOwning(_))
    ));
}

#[test]
fn entity_without_configuration_fails() {
    let mut cx = context();
    let mut mapper = MultiPropertyMapper::new();

    let err = ToOneRelationMetadataGenerator::new(&mut cx)
        .add_one_to_one_not_owning(
            &PropertyAuditingData::new("order"),
            &inverse_of_customer(),
            &mut mapper,
            "Supplier",
        )
        .unwrap_err();

    assert!(err.is_not_audited());
    assert!(err.to_string().contains("`Supplier`"));
    assert!(mapper.is_empty());
}

#[test]
fn entity_without_id_mapping_fails_without_mutation() {
    let mut cx = context();
    cx.entities.insert("Supplier", EntityConfiguration::default());
    let mut mapper = MultiPropertyMapper::new();

    let err = ToOneRelationMetadataGenerator::new(&mut cx)
        .add_one_to_one_not_owning(
            &PropertyAuditingData::new("order"),
            &inverse_of_customer(),
            &mut mapper,
            "Supplier",
        )
        .unwrap_err();

    assert!(err.is_not_audited());
    assert_eq!(cx.entities.get("Supplier").unwrap().relations().count(), 0);
    assert!(mapper.is_empty());
}

#[test]
fn one_to_one_without_owning_property_is_rejected() {
    let mut cx = context();
    let mut mapper = MultiPropertyMapper::new();

    let err = ToOneRelationMetadataGenerator::new(&mut cx)
        .add_one_to_one_not_owning(
            &PropertyAuditingData::new("order"),
            &OneToOne::new("Order").into(),
            &mut mapper,
            "Customer",
        )
        .unwrap_err();

    assert!(err.is_invalid_mapping());
    assert_eq!(cx.entities.get("Customer").unwrap().relations().count(), 0);
    assert!(mapper.is_empty());
}
