use toasty_audit::entity::{IdMappingData, RelationType};
use toasty_audit::fragment::Element;
use toasty_audit::generator::{AuditContext, ToOneRelationMetadataGenerator};
use toasty_audit::mapper::{MultiPropertyMapper, PropertyMapper};
use toasty_audit::mapping::{OneToOne, Selectable, ToOne};
use toasty_audit::reader::PropertyAuditingData;
use toasty_audit::Config;

fn context() -> AuditContext {
    let mut cx = AuditContext::new(Config::new());
    cx.audit_entity("Order", IdMappingData::single("id", "long", "id"))
        .audit_entity("Invoice", IdMappingData::single("id", "long", "id"));
    cx
}

fn shares_order_key() -> ToOne {
    OneToOne::new("Order")
        .column(Selectable::column("id"))
        .into()
}

#[test]
fn invoice_order_registers_relation_and_mapper() {
    let mut cx = context();
    let mut mapper = MultiPropertyMapper::new();

    ToOneRelationMetadataGenerator::new(&mut cx)
        .add_one_to_one_primary_key_join_column(
            &PropertyAuditingData::new("order"),
            &shares_order_key(),
            &mut mapper,
            "Invoice",
            true,
        )
        .unwrap();

    let invoice = cx.entities.get("Invoice").unwrap();
    assert_eq!(invoice.relations().count(), 1);

    let relation = invoice.relation("order").unwrap();
    assert_eq!(relation.relation_type, RelationType::ToOne);
    assert_eq!(relation.to_entity_name, "Order");
    assert!(relation.insertable);
    assert!(!relation.ignore_not_found);
    assert_eq!(relation.id_mapper.properties()[0].name, "order_id");

    let PropertyMapper::OneToOnePrimaryKeyJoinColumn(shared) = mapper.get("order").unwrap() else {
        panic!("expected a shared primary key mapper");
    };
    assert_eq!(shared.entity_name, "Invoice");
    assert_eq!(shared.referenced_entity_name, "Order");
}

#[test]
fn no_fragment_elements_through_dispatch() {
    let mut cx = context();
    let mut parent = Element::new("class").with_attr("entity-name", "Invoice_AUD");
    let mut mapper = MultiPropertyMapper::new();

    ToOneRelationMetadataGenerator::new(&mut cx)
        .add(
            &mut parent,
            &PropertyAuditingData::new("order"),
            &shares_order_key(),
            &mut mapper,
            "Invoice",
            true,
        )
        .unwrap();

    assert!(parent.children().is_empty());
    assert!(matches!(
        mapper.get("order"),
        Some(PropertyMapper::OneToOnePrimaryKeyJoinColumn(_))
    ));
    assert!(cx.entities.get("Invoice").unwrap().is_relation("order"));
}

#[test]
fn insertable_flag_is_kept_as_given() {
    let mut cx = context();
    let mut mapper = MultiPropertyMapper::new();

    ToOneRelationMetadataGenerator::new(&mut cx)
        .add_one_to_one_primary_key_join_column(
            &PropertyAuditingData::new("order").force_insertable(true),
            &shares_order_key(),
            &mut mapper,
            "Invoice",
            false,
        )
        .unwrap();

    let relation = cx.entities.get("Invoice").unwrap().relation("order").unwrap();
    assert!(!relation.insertable);
}

#[test]
fn not_audited_target_fails_without_mutation() {
    let mut cx = context();
    let mut mapper = MultiPropertyMapper::new();

    let err = ToOneRelationMetadataGenerator::new(&mut cx)
        .add_one_to_one_primary_key_join_column(
            &PropertyAuditingData::new("payment"),
            &OneToOne::new("Payment").into(),
            &mut mapper,
            "Invoice",
            true,
        )
        .unwrap_err();

    assert!(err.is_not_audited());
    assert!(err.to_string().contains("`Invoice.payment`"));
    assert_eq!(cx.entities.get("Invoice").unwrap().relations().count(), 0);
    assert!(mapper.is_empty());
}
