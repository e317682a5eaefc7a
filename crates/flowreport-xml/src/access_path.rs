//! Access-path codec.

use std::io::Write;

use flowreport_core::AccessPath;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::constants::{attributes, tags, values};
use crate::error::SerializeResult;

/// Writes one `AccessPath` node.
///
/// `Value` and `Type` are each emitted only when present. `TaintSubFields`
/// is always emitted. A `Fields` block follows only for a non-empty
/// fragment chain, with one `Field` per fragment in chain order.
pub fn write_access_path<W: Write>(
    writer: &mut Writer<W>,
    access_path: &AccessPath,
) -> SerializeResult<()> {
    let mut start = BytesStart::new(tags::ACCESS_PATH);
    if let Some(value) = &access_path.plain_value {
        start.push_attribute((attributes::VALUE, value.as_str()));
    }
    if let Some(base_type) = &access_path.base_type {
        start.push_attribute((attributes::TYPE, base_type.as_str()));
    }
    start.push_attribute((
        attributes::TAINT_SUB_FIELDS,
        values::bool_token(access_path.taint_sub_fields),
    ));

    if !access_path.has_fields() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Start(BytesStart::new(tags::FIELDS)))?;
    for fragment in &access_path.fragments {
        let mut field = BytesStart::new(tags::FIELD);
        field.push_attribute((attributes::VALUE, fragment.field.as_str()));
        field.push_attribute((attributes::TYPE, fragment.field_type.as_str()));
        writer.write_event(Event::Empty(field))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tags::FIELDS)))?;
    writer.write_event(Event::End(BytesEnd::new(tags::ACCESS_PATH)))?;
    Ok(())
}
