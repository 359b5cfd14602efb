//! OSM XML 0.6 document writer.

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

use super::NodeSink;
use crate::models::OsmNode;

pub const DEFAULT_GENERATOR: &str = "gns2osm";

/// Streams nodes into an `<osm>` document.
///
/// The header is written on construction; call [`OsmXmlWriter::finish`] to
/// close the document.
pub struct OsmXmlWriter<W: Write> {
    writer: Writer<W>,
    written: usize,
}

impl<W: Write> OsmXmlWriter<W> {
    pub fn new(inner: W, generator: &str) -> Result<Self> {
        let mut writer = Writer::new_with_indent(inner, b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .context("Failed to write XML declaration")?;

        let mut root = BytesStart::new("osm");
        root.push_attribute(("version", "0.6"));
        root.push_attribute(("generator", generator));
        writer
            .write_event(Event::Start(root))
            .context("Failed to write <osm> element")?;

        Ok(Self { writer, written: 0 })
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Close the document and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer
            .write_event(Event::End(BytesEnd::new("osm")))
            .context("Failed to close <osm> element")?;
        let mut inner = self.writer.into_inner();
        inner.write_all(b"\n")?;
        inner.flush().context("Failed to flush OSM output")?;
        Ok(inner)
    }
}

impl<W: Write> NodeSink for OsmXmlWriter<W> {
    fn emit(&mut self, node: &OsmNode) -> Result<()> {
        let id = node.id.to_string();
        let lat = node.lat.to_string();
        let lon = node.lon.to_string();

        let mut start = BytesStart::new("node");
        start.push_attribute(("id", id.as_str()));
        start.push_attribute(("visible", "true"));
        start.push_attribute(("lat", lat.as_str()));
        start.push_attribute(("lon", lon.as_str()));

        if node.tags.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
        } else {
            self.writer.write_event(Event::Start(start))?;
            for (key, value) in node.tags.iter() {
                let mut tag = BytesStart::new("tag");
                tag.push_attribute(("k", key));
                tag.push_attribute(("v", value));
                self.writer.write_event(Event::Empty(tag))?;
            }
            self.writer.write_event(Event::End(BytesEnd::new("node")))?;
        }

        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagSet;

    fn render(nodes: &[OsmNode]) -> String {
        let mut writer = OsmXmlWriter::new(Vec::new(), DEFAULT_GENERATOR).unwrap();
        for node in nodes {
            writer.emit(node).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let tags: TagSet = [("name", "Tagbilaran"), ("place", "village")].into_iter().collect();
        let xml = render(&[OsmNode::new(-1, 9.65, 123.85, tags)]);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<osm version=\"0.6\" generator=\"gns2osm\">"));
        assert!(xml.contains("<node id=\"-1\" visible=\"true\" lat=\"9.65\" lon=\"123.85\">"));
        assert!(xml.contains("<tag k=\"name\" v=\"Tagbilaran\"/>"));
        assert!(xml.trim_end().ends_with("</osm>"));
        let name_at = xml.find("k=\"name\"").unwrap();
        let place_at = xml.find("k=\"place\"").unwrap();
        assert!(name_at < place_at);
    }

    #[test]
    fn test_values_are_escaped() {
        let tags: TagSet = [("name", "Fish & \"Chips\" <Bay>")].into_iter().collect();
        let xml = render(&[OsmNode::new(-1, 0.0, 0.0, tags)]);
        assert!(xml.contains("v=\"Fish &amp; &quot;Chips&quot; &lt;Bay&gt;\""));
    }

    #[test]
    fn test_empty_document() {
        let xml = render(&[]);
        assert!(xml.contains("<osm"));
        assert!(xml.contains("</osm>"));
        assert!(!xml.contains("<node"));
    }
}
