use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use serde_json::json;
use tabula_core::{build_schema, Schema};
use tabula_driver_aws::Aws;

#[derive(Parser, Debug)]
pub struct SchemaCommand {
    /// Catalog database name
    #[arg(short, long)]
    database: String,

    /// Table name
    #[arg(short, long)]
    table: String,

    /// Append partition keys after the regular columns
    #[arg(long)]
    partition_keys: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl SchemaCommand {
    pub(crate) async fn run(self, aws: &Aws) -> Result<()> {
        let glue = aws.glue().include_partition_keys(self.partition_keys);
        let schema = build_schema(&glue, &self.database, &self.table).await?;

        match self.format {
            Format::Text => print_text(&self.database, &self.table, &schema),
            Format::Json => println!("{}", serde_json::to_string_pretty(&to_json(&schema))?),
        }

        Ok(())
    }
}

fn print_text(database: &str, table: &str, schema: &Schema) {
    println!();
    println!(
        "  {}",
        style(format!("{database}.{table}")).cyan().bold().underlined()
    );
    println!();

    let width = schema.names().map(str::len).max().unwrap_or(0);

    for (name, ty) in schema.iter() {
        println!("  {}  {}", style(format!("{name:width$}")).bold(), style(ty).dim());
    }

    println!();
}

/// Columns as an ordered array of `{ "name", "type" }` objects.
pub(crate) fn to_json(schema: &Schema) -> serde_json::Value {
    schema
        .iter()
        .map(|(name, ty)| json!({ "name": name, "type": ty.to_string() }))
        .collect()
}
