//! Schema command CLI handler.

use retail_seed::Schema;

pub fn run() -> anyhow::Result<()> {
    let schema = Schema::retail();

    for table in schema.tables_in_order() {
        println!("{}", table.name);
        for column in &table.columns {
            let pk = if column.primary_key { " PK" } else { "" };
            let fk = column
                .foreign_key
                .as_ref()
                .map(|fk| format!(" -> {}.{}", fk.to_table, fk.to_column))
                .unwrap_or_default();
            println!("  {:<14} {}{}{}", column.name, column.sql_type.to_sql(), pk, fk);
        }
        println!();
    }

    Ok(())
}
