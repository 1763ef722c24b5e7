//! Legacy CSOM serialization capability.
//!
//! A handful of operations still ride the legacy client object model batch
//! protocol, which addresses field types by GUID and carries values as XML
//! fragments. Field values that can take part in such a batch implement
//! [`CsomField`]; the concrete implementations live with the component that
//! assembles batch requests, not here.

use std::borrow::Cow;
use uuid::Uuid;

/// A field value that can serialize itself for the legacy CSOM batch
/// protocol.
pub trait CsomField {
    /// GUID identifying this field's type to the protocol.
    fn field_type_id(&self) -> Uuid;

    /// Appends this field's XML fragment to `out`. Implementations must
    /// escape text content themselves (see [`escape_xml_text`]).
    fn write_csom_xml(&self, out: &mut String);

    /// Renders the field as a standalone XML fragment.
    fn to_csom_xml(&self) -> String {
        let mut out = String::new();
        self.write_csom_xml(&mut out);
        out
    }
}

/// Escapes the XML 1.0 predefined entities in text content.
///
/// Returns the input unchanged (no allocation) when nothing needs escaping.
pub fn escape_xml_text(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
