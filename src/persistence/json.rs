use crate::error::ShapeResult;
use crate::shape::Attributes;

/// Serialize attribute mappings as a JSON array.
///
/// An absent or empty list always encodes to `[]`.
pub fn encode_to_json(list: Option<&[Attributes]>) -> ShapeResult<String> {
    match list {
        None | Some([]) => Ok("[]".to_owned()),
        Some(list) => Ok(serde_json::to_string(list)?),
    }
}

/// Parse a JSON array of attribute mappings.
///
/// Absent or empty text decodes to an empty list; anything else must be a
/// JSON array of objects with integer values.
pub fn decode_from_json(text: Option<&str>) -> ShapeResult<Vec<Attributes>> {
    match text {
        None | Some("") => Ok(Vec::new()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}
