use std::collections::HashMap;

use common_utils::{ext_traits::StringExt, CustomResult};
use domain_types::errors;
use error_stack::{report, ResultExt};
use quick_xml::{events::Event, Reader};

/// Parses a payload made of sibling elements with no common root.
///
/// The payload is wrapped in `<{root_name}>` before parsing. Each top level element becomes
/// one entry keyed by its tag name, valued with the concatenated text of everything below it,
/// so any markup nested inside a field is dropped. When a tag repeats, the first one wins.
pub fn parse_rootless_xml_fields(
    body: &[u8],
    root_name: &str,
) -> CustomResult<HashMap<String, String>, errors::ConnectorError> {
    let body = String::from_utf8(body.to_vec())
        .change_context(errors::ConnectorError::ResponseDeserializationFailed)
        .attach_printable("Connector response is not valid UTF-8")?
        .strip_bom();
    let wrapped = format!("<{root_name}>{body}</{root_name}>");

    let mut reader = Reader::from_str(&wrapped);
    reader.check_end_names(true);

    let mut fields = HashMap::new();
    let mut depth = 0usize;
    let mut root_closed = false;
    let mut current: Option<(String, String)> = None;

    loop {
        let event = reader
            .read_event()
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)
            .attach_printable_lazy(|| {
                format!("Malformed XML at position {}", reader.buffer_position())
            })?;

        match event {
            Event::Start(element) => {
                if root_closed {
                    return Err(malformed("content found after the synthetic root"));
                }
                depth += 1;
                if depth == 2 {
                    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    current = Some((name, String::new()));
                }
            }
            Event::Empty(element) => {
                if root_closed {
                    return Err(malformed("content found after the synthetic root"));
                }
                if depth == 1 {
                    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    fields.entry(name).or_insert_with(String::new);
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(malformed("unbalanced closing tag"));
                }
                if depth == 2 {
                    if let Some((name, text)) = current.take() {
                        fields.entry(name).or_insert(text);
                    }
                }
                depth -= 1;
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Text(text) if depth >= 2 => {
                let text = text
                    .unescape()
                    .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&text);
                }
            }
            Event::CData(data) if depth >= 2 => {
                let data = data.into_inner();
                let data = std::str::from_utf8(&data)
                    .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(data);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 || !root_closed {
        return Err(malformed("unclosed element at end of payload"));
    }

    Ok(fields)
}

fn malformed(reason: &'static str) -> error_stack::Report<errors::ConnectorError> {
    report!(errors::ConnectorError::ResponseDeserializationFailed).attach_printable(reason)
}
