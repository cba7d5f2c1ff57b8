use crate::{entity::PropertyData, Record, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct MultipleIdMapper {
    pub properties: Vec<PropertyData>,
}

impl MultipleIdMapper {
    pub fn new(properties: Vec<PropertyData>) -> Self {
        Self { properties }
    }

    pub(super) fn prefix_mapped_properties(&self, prefix: &str) -> Self {
        Self::new(
            self.properties
                .iter()
                .map(|property| property.prefixed(prefix))
                .collect(),
        )
    }

    pub(super) fn map_to_map_from_id(&self, data: &mut Record, id: &Value) {
        for property in &self.properties {
            data.insert(&property.name, id.field(&property.bean_name).clone());
        }
    }

    pub(super) fn map_to_id_from_map(&self, data: &Record) -> Option<Value> {
        let mut id = Record::new();

        for property in &self.properties {
            let value = data.get(&property.name).filter(|value| !value.is_null())?;
            id.insert(&property.bean_name, value.clone());
        }

        Some(Value::Record(id))
    }

    pub(super) fn map_to_id_from_entity(&self, entity: &Value) -> Value {
        Value::Record(
            self.properties
                .iter()
                .map(|property| {
                    (
                        property.bean_name.clone(),
                        entity.field(&property.bean_name).clone(),
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdMapper;

    fn mapper() -> IdMapper {
        MultipleIdMapper::new(vec![PropertyData::new("code"), PropertyData::new("region")]).into()
    }

    #[test]
    fn prefix_applies_to_every_property() {
        let prefixed = mapper().prefix_mapped_properties("store_");
        let names: Vec<_> = prefixed.properties().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["store_code", "store_region"]);
    }

    #[test]
    fn partial_id_in_map_is_absent() {
        let prefixed = mapper().prefix_mapped_properties("store_");
        let mut data = Record::new();
        data.insert("store_code", "S1");

        assert_eq!(prefixed.map_to_id_from_map(&data), None);

        data.insert("store_region", "EU");
        assert_eq!(
            prefixed.map_to_id_from_map(&data),
            Some(Value::Record(Record::from_iter([
                ("code", "S1"),
                ("region", "EU"),
            ])))
        );
    }
}
