use super::{ignore_not_found, to_one_relation_prefix, MainGenerator};
use crate::{
    entity::EntityConfiguration,
    err,
    fragment::{column_names, prefix_names_in_property_element, Element},
    mapper::{
        CompositeMapperBuilder, OneToOneNotOwningMapper, OneToOnePrimaryKeyJoinColumnMapper,
        ToOneIdMapper,
    },
    mapping::ToOne,
    reader::PropertyAuditingData,
    Error, Result,
};

/// Generates audit metadata for to-one relations (reference-valued
/// properties).
///
/// Every operation either registers the relation completely (relation
/// descriptor, mapper and, for owning relations, the schema fragment) or
/// fails without touching the configuration, the mapper builder or the
/// parent fragment.
pub struct ToOneRelationMetadataGenerator<'a, G: ?Sized> {
    main: &'a mut G,
}

impl<'a, G: MainGenerator + ?Sized> ToOneRelationMetadataGenerator<'a, G> {
    pub fn new(main: &'a mut G) -> Self {
        Self { main }
    }

    /// Adds the relation `value`, picking the operation that matches its
    /// shape: many-to-one values are owning relations, one-to-one values are
    /// either the inverse of an owning property or share the primary key.
    pub fn add<M: CompositeMapperBuilder + ?Sized>(
        &mut self,
        parent: &mut Element,
        property: &PropertyAuditingData,
        value: &ToOne,
        mapper: &mut M,
        entity_name: &str,
        insertable: bool,
    ) -> Result<()> {
        match value {
            ToOne::ManyToOne(_) => {
                self.add_to_one(parent, property, value, mapper, entity_name, insertable)
            }
            ToOne::OneToOne(one_to_one) if one_to_one.is_inverse() => {
                self.add_one_to_one_not_owning(property, value, mapper, entity_name)
            }
            ToOne::OneToOne(_) => self.add_one_to_one_primary_key_join_column(
                property,
                value,
                mapper,
                entity_name,
                insertable,
            ),
        }
    }

    /// Adds an owning to-one relation. The referenced identifier columns are
    /// appended to `parent`, prefixed with the relation's prefix.
    pub fn add_to_one<M: CompositeMapperBuilder + ?Sized>(
        &mut self,
        parent: &mut Element,
        property: &PropertyAuditingData,
        value: &ToOne,
        mapper: &mut M,
        entity_name: &str,
        insertable: bool,
    ) -> Result<()> {
        let referenced_entity_name = value.referenced_entity_name();

        let id_mapping =
            self.main
                .referenced_id_mapping(entity_name, referenced_entity_name, property, true)?;

        let prefix = to_one_relation_prefix(&property.name);

        // Id mapper for the relation
        let rel_mapper = id_mapping.id_mapper.prefix_mapped_properties(&prefix);

        // A non-insertable column forced insertable belongs to the "many"
        // side of a bidirectional relation owned by a collection. The audit
        // table still stores it so revisions that don't touch the relation
        // keep its value; changes to it are the collection's responsibility.
        let non_insertable_fake = !insertable && property.force_insertable;
        let insertable = insertable || non_insertable_fake;

        let columns = column_names(entity_name, &property.name, value.columns())?;

        let id_properties = id_mapping.id_mapper.properties().len();
        if columns.len() != id_properties {
            return Err(Error::invalid_mapping(format!(
                "`{entity_name}.{}` is mapped to {} column(s) but `{referenced_entity_name}` \
                 has {id_properties} identifier column(s)",
                property.name,
                columns.len(),
            )));
        }

        let mut properties = id_mapping.instantiate_relation_mapping();
        properties.set_attr("name", property.name.as_str());
        prefix_names_in_property_element(&mut properties, &prefix, &columns, insertable);

        self.check_free(mapper, entity_name, &property.name)?;

        let property_data = property.property_data(self.main.config());

        self.configuration_mut(entity_name)?.add_to_one_relation(
            &property.name,
            referenced_entity_name,
            rel_mapper.clone(),
            insertable,
            ignore_not_found(value),
        )?;

        tracing::debug!(
            entity = entity_name,
            property = %property.name,
            target = referenced_entity_name,
            insertable,
            non_insertable_fake,
            "registered to-one relation"
        );

        // Flatten the wrapper: the id properties become siblings in `parent`
        for element in properties.take_children() {
            tracing::trace!(entity = entity_name, element = %element, "splicing relation id column");
            parent.add_child(element);
        }

        mapper.add_composite(
            property_data.clone(),
            ToOneIdMapper::new(
                rel_mapper,
                property_data,
                referenced_entity_name,
                non_insertable_fake,
            )
            .into(),
        );

        Ok(())
    }

    /// Adds the inverse side of a one-to-one relation. Nothing is stored for
    /// it; the reference is resolved through the owning property.
    pub fn add_one_to_one_not_owning<M: CompositeMapperBuilder + ?Sized>(
        &mut self,
        property: &PropertyAuditingData,
        value: &ToOne,
        mapper: &mut M,
        entity_name: &str,
    ) -> Result<()> {
        let one_to_one = value.as_one_to_one().ok_or_else(|| {
            Error::invalid_mapping(format!(
                "`{entity_name}.{}` is not a one-to-one relation",
                property.name
            ))
        })?;

        let owning_reference_property_name =
            one_to_one.referenced_property_name.as_deref().ok_or_else(|| {
                Error::invalid_mapping(format!(
                    "one-to-one `{entity_name}.{}` does not name its owning property",
                    property.name
                ))
            })?;

        let referenced_entity_name = one_to_one.referenced_entity_name.as_str();

        let configuration = self
            .main
            .entity_configuration(entity_name)
            .ok_or_else(|| Error::not_audited(entity_name))?;

        let owned_id_mapping = configuration
            .id_mapping_data()
            .ok_or_else(|| Error::not_audited(entity_name))?;

        // Same prefix the owning side derived from its own property name
        let prefix = to_one_relation_prefix(owning_reference_property_name);
        let owned_id_mapper = owned_id_mapping.id_mapper.prefix_mapped_properties(&prefix);

        self.check_free(mapper, entity_name, &property.name)?;

        let property_data = property.property_data(self.main.config());

        self.configuration_mut(entity_name)?
            .add_to_one_not_owning_relation(
                &property.name,
                owning_reference_property_name,
                referenced_entity_name,
                owned_id_mapper,
                ignore_not_found(value),
            )?;

        tracing::debug!(
            entity = entity_name,
            property = %property.name,
            target = referenced_entity_name,
            mapped_by = owning_reference_property_name,
            "registered not-owning one-to-one relation"
        );

        mapper.add_composite(
            property_data.clone(),
            OneToOneNotOwningMapper::new(
                entity_name,
                referenced_entity_name,
                owning_reference_property_name,
                property_data,
            )
            .into(),
        );

        Ok(())
    }

    /// Adds a one-to-one relation that shares the owner's primary key. The
    /// referenced identifier is the owner's own, so no columns are added.
    pub fn add_one_to_one_primary_key_join_column<M: CompositeMapperBuilder + ?Sized>(
        &mut self,
        property: &PropertyAuditingData,
        value: &ToOne,
        mapper: &mut M,
        entity_name: &str,
        insertable: bool,
    ) -> Result<()> {
        let referenced_entity_name = value.referenced_entity_name();

        let id_mapping =
            self.main
                .referenced_id_mapping(entity_name, referenced_entity_name, property, true)?;

        let prefix = to_one_relation_prefix(&property.name);

        // Id mapper for the relation
        let rel_mapper = id_mapping.id_mapper.prefix_mapped_properties(&prefix);

        self.check_free(mapper, entity_name, &property.name)?;

        let property_data = property.property_data(self.main.config());

        self.configuration_mut(entity_name)?.add_to_one_relation(
            &property.name,
            referenced_entity_name,
            rel_mapper,
            insertable,
            ignore_not_found(value),
        )?;

        tracing::debug!(
            entity = entity_name,
            property = %property.name,
            target = referenced_entity_name,
            "registered shared primary key one-to-one relation"
        );

        mapper.add_composite(
            property_data.clone(),
            OneToOnePrimaryKeyJoinColumnMapper::new(
                entity_name,
                referenced_entity_name,
                property_data,
            )
            .into(),
        );

        Ok(())
    }

    /// Checks that the relation can be registered on `entity_name` under
    /// `property_name` and that the mapper key is free.
    fn check_free<M: CompositeMapperBuilder + ?Sized>(
        &self,
        mapper: &M,
        entity_name: &str,
        property_name: &str,
    ) -> Result<()> {
        self.main
            .entity_configuration(entity_name)
            .ok_or_else(|| Error::not_audited(entity_name))?
            .check_relation_free(property_name)
            .map_err(|cause| cause.context(err!("registering `{entity_name}.{property_name}`")))?;

        if mapper.contains(property_name) {
            return Err(Error::invalid_mapping(format!(
                "a mapper is already registered for `{entity_name}.{property_name}`"
            )));
        }

        Ok(())
    }

    fn configuration_mut(&mut self, entity_name: &str) -> Result<&mut EntityConfiguration> {
        self.main
            .entity_configuration_mut(entity_name)
            .ok_or_else(|| Error::not_audited(entity_name))
    }
}
