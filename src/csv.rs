use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::Command;
use crate::model::Topping;
use crate::session::OrderCollection;

/// Errors that can occur when parsing command script rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("cannot open command script: {0}")]
    Open(csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unexpected extra field '{field}'")]
    ExtraField { line: usize, field: String },

    #[error("line {line}: unrecognized action '{action}'")]
    UnrecognizedAction { line: usize, action: String },

    #[error("line {line}: {action} missing value")]
    MissingValue { line: usize, action: String },

    #[error("line {line}: unrecognized topping '{topping}'")]
    UnrecognizedTopping { line: usize, topping: String },

    #[error("line {line}: invalid quantity '{value}'")]
    InvalidNumber { line: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    action: String,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    order: usize,
    quantity: u32,
    size: &'static str,
    toppings: String,
    price: String,
}

/// Read commands from a csv command script.
///
/// The script has an `action,value` header. Actions are `size`, `quantity`,
/// `add` and `remove` (each with a value), plus `submit` and `reset`.
/// The value column may be omitted; a third field is an error.
pub fn read_commands(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Command, CsvError>>, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(CsvError::Open)?;
    let headers = reader.headers().map_err(CsvError::Open)?.clone();

    Ok(reader
        .into_records()
        .enumerate()
        .map(move |(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let record = result.map_err(|source| CsvError::Parse { line, source })?;
            if let Some(field) = record.get(headers.len()) {
                return Err(CsvError::ExtraField {
                    line,
                    field: field.to_string(),
                });
            }
            let row = record
                .deserialize::<InputRow>(Some(&headers))
                .map_err(|source| CsvError::Parse { line, source })?;
            parse_row(line, row)
        }))
}

fn parse_row(line: usize, row: InputRow) -> Result<Command, CsvError> {
    let value = row.value.filter(|v| !v.is_empty());
    let require_value = |action: &str| {
        value.clone().ok_or_else(|| CsvError::MissingValue {
            line,
            action: action.to_string(),
        })
    };
    let topping = |name: String| {
        Topping::from_name(&name).ok_or(CsvError::UnrecognizedTopping {
            line,
            topping: name,
        })
    };

    match row.action.to_ascii_lowercase().as_str() {
        // unknown size codes are left to the session, which keeps the size
        "size" => Ok(Command::ChangeSize(require_value("size")?)),
        "quantity" => {
            let value = require_value("quantity")?;
            let quantity = value
                .parse()
                .map_err(|_| CsvError::InvalidNumber { line, value })?;
            Ok(Command::SetQuantity(quantity))
        }
        "add" => Ok(Command::AddTopping(topping(require_value("add")?)?)),
        "remove" => Ok(Command::RemoveTopping(topping(require_value("remove")?)?)),
        "submit" => Ok(Command::Submit),
        "reset" => Ok(Command::Reset),
        _ => Err(CsvError::UnrecognizedAction {
            line,
            action: row.action,
        }),
    }
}

/// Write submitted orders in csv format
pub fn write_orders(orders: &OrderCollection, writer: impl io::Write) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    for (index, drink) in orders.iter().enumerate() {
        let toppings: Vec<_> = drink.toppings().map(|t| t.name()).collect();
        let row = OutputRow {
            order: index + 1,
            quantity: drink.quantity(),
            size: drink.size().name(),
            toppings: toppings.join(";"),
            price: drink.price().to_string(),
        };
        writer.serialize(&row)?;
    }

    writer.flush()?;
    Ok(())
}
