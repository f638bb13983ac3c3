use tabled::Table;

use crate::{
    chart::Attribute,
    types::AttributeTableRow,
    utils::{format_bound, format_number},
};

/// Prints every registered attribute with its axis settings and description.
pub fn attributes() {
    let rows: Vec<AttributeTableRow> = Attribute::ALL
        .into_iter()
        .map(|a| {
            let d = a.descriptor();
            AttributeTableRow {
                name: a.name().to_string(),
                step: format_number(d.step_size),
                min: format_bound(d.min),
                max: format_bound(d.max),
                description: d.description.to_string(),
            }
        })
        .collect();

    println!("{}", Table::new(rows));
}
