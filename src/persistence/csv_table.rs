use std::io;

use crate::error::{ShapeError, ShapeResult};
use crate::shape::{AnyShape, Attributes, Shape, ShapeKind, common};

/// Write one header-less row per shape, columns in the kind's attribute order
pub fn write_rows<W: io::Write>(writer: W, kind: ShapeKind, shapes: &[AnyShape]) -> ShapeResult<()> {
    let order = kind.attribute_order();
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    for shape in shapes {
        let dictionary = shape.to_dictionary();
        let row = order
            .iter()
            .filter_map(|name| dictionary.get(*name))
            .map(|value| value.to_string());
        wtr.write_record(row).map_err(io::Error::from)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read header-less rows back into attribute mappings for `kind`.
///
/// Every field must parse as an integer. Short rows only fill the leading
/// attributes; rows wider than the kind's attribute list are rejected.
pub fn read_rows<R: io::Read>(reader: R, kind: ShapeKind) -> ShapeResult<Vec<Attributes>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| ShapeError::MalformedCsv {
            line: e.position().map_or(0, |p| p.line()),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| p.line());

        let values = record
            .iter()
            .map(|field| {
                field.trim().parse::<i64>().map_err(|_| ShapeError::MalformedCsv {
                    line,
                    message: format!("'{}' is not an integer", field),
                })
            })
            .collect::<ShapeResult<Vec<i64>>>()?;

        let attributes = common::zip_attributes(kind, &values).map_err(|max| ShapeError::MalformedCsv {
            line,
            message: format!("expected at most {} columns for {}, found {}", max, kind, values.len()),
        })?;
        rows.push(attributes);
    }

    Ok(rows)
}
