use crate::{entity::PropertyData, Record, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct SingleIdMapper {
    pub property: PropertyData,
}

impl SingleIdMapper {
    pub fn new(property: PropertyData) -> Self {
        Self { property }
    }

    pub(super) fn prefix_mapped_properties(&self, prefix: &str) -> Self {
        Self::new(self.property.prefixed(prefix))
    }

    pub(super) fn map_to_map_from_id(&self, data: &mut Record, id: &Value) {
        data.insert(&self.property.name, id.clone());
    }

    pub(super) fn map_to_id_from_map(&self, data: &Record) -> Option<Value> {
        data.get(&self.property.name)
            .filter(|value| !value.is_null())
            .cloned()
    }

    pub(super) fn map_to_id_from_entity(&self, entity: &Value) -> Value {
        entity.field(&self.property.bean_name).clone()
    }
}
