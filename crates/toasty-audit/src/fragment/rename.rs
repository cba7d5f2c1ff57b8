use super::Element;
use crate::{mapping::Selectable, Error, Result};

/// Collects the physical column names backing a relation.
///
/// Historical tables only hold real columns, so a formula anywhere in the
/// list fails the whole relation.
pub fn column_names(entity: &str, property: &str, columns: &[Selectable]) -> Result<Vec<String>> {
    columns
        .iter()
        .map(|selectable| match selectable {
            Selectable::Column(column) => Ok(column.fragment_name()),
            Selectable::Formula(formula) => {
                Err(Error::formula_not_supported(entity, property, formula))
            }
        })
        .collect()
}

/// Rewrites the property elements of a copied identifier template for use
/// under a relation.
///
/// Every `property` and `many-to-one` child is renamed to `prefix + name` and
/// its `column` children take the next name from `column_names`, shared
/// across all properties in document order. `column_names` must hold one name
/// per template column. Plain `property` children are also
/// marked `insert = insertable` and `update = false`; historical rows are
/// never updated.
pub fn prefix_names_in_property_element(
    element: &mut Element,
    prefix: &str,
    column_names: &[String],
    insertable: bool,
) {
    let mut column_names = column_names.iter();

    for property in element.children_mut() {
        let is_property = property.name() == "property";
        if !is_property && property.name() != "many-to-one" {
            continue;
        }

        if let Some(name) = property.attr("name") {
            let prefixed = format!("{prefix}{name}");
            property.set_attr("name", prefixed);
        }

        for column in property.children_mut() {
            if column.name() != "column" || column.attr("name").is_none() {
                continue;
            }

            if let Some(column_name) = column_names.next() {
                column.set_attr("name", column_name.as_str());
            }
        }

        if is_property {
            property.set_attr("insert", insertable.to_string());
            property.set_attr("update", "false");
        }
    }
}
