//! Mapping configuration importer
//!
//! Reads the XML mapping configuration:
//!
//! ```xml
//! <object name="person">
//!   <properties>
//!     <property name="Age" source="age" type="integer"/>
//!   </properties>
//! </object>
//! ```
//!
//! Only the root `object`, its first direct `properties` child and the direct
//! `property` children of that container are interpreted. Anything else is
//! skipped.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{MappingError, MappingResult};
use crate::models::{MappingConfig, PropertyElement};

const ROOT_ELEMENT: &[u8] = b"object";
const PROPERTIES_ELEMENT: &[u8] = b"properties";
const PROPERTY_ELEMENT: &[u8] = b"property";

/// Where the reader currently is relative to the elements we care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Inside the root, outside any `properties` container
    Root,
    /// Inside the first `properties` container
    Properties,
    /// Anywhere else (nested or ignored elements)
    Other,
}

/// Mapping configuration importer
#[derive(Debug, Default)]
pub struct MappingConfigImporter;

impl MappingConfigImporter {
    pub fn new() -> Self {
        Self
    }

    /// Import XML mapping configuration content.
    ///
    /// # Arguments
    ///
    /// * `xml_content` - The XML document as a string.
    ///
    /// # Returns
    ///
    /// The parsed [`MappingConfig`]. Attribute presence on `property` elements is
    /// not checked here; the mapping engine validates each declaration.
    pub fn import(&self, xml_content: &str) -> MappingResult<MappingConfig> {
        let mut reader = Reader::from_str(xml_content);
        reader.config_mut().trim_text(true);

        let mut root_name: Option<String> = None;
        let mut root_seen = false;
        let mut properties: Option<Vec<PropertyElement>> = None;
        // One entry per open element below the root
        let mut scopes: Vec<Scope> = Vec::new();
        let mut depth = 0usize;

        loop {
            let event = reader.read_event()?;
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    if depth == 0 {
                        if root_seen {
                            return Err(MappingError::Config(
                                "XML document has more than one root element".to_string(),
                            ));
                        }
                        if e.name().as_ref() != ROOT_ELEMENT {
                            return Err(MappingError::Config("no 'object' found".to_string()));
                        }
                        root_seen = true;
                        root_name = attribute(e, b"name")?;
                        if !is_empty {
                            depth += 1;
                        }
                        continue;
                    }

                    let parent = scopes.last().copied().unwrap_or(Scope::Root);
                    let scope = match parent {
                        Scope::Root
                            if e.name().as_ref() == PROPERTIES_ELEMENT
                                && properties.is_none() =>
                        {
                            properties = Some(Vec::new());
                            Scope::Properties
                        }
                        Scope::Properties if e.name().as_ref() == PROPERTY_ELEMENT => {
                            let property = read_property(e)?;
                            debug!("Read property element: {:?}", property);
                            if let Some(list) = properties.as_mut() {
                                list.push(property);
                            }
                            Scope::Other
                        }
                        _ => Scope::Other,
                    };

                    if !is_empty {
                        scopes.push(scope);
                        depth += 1;
                    }
                }
                Event::Text(_) | Event::CData(_) if depth == 0 => {
                    return Err(MappingError::Config(
                        "text is not allowed outside the root element".to_string(),
                    ));
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    scopes.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !root_seen {
            return Err(MappingError::Config("no 'object' found".to_string()));
        }
        if depth != 0 {
            return Err(MappingError::Config(
                "unexpected end of XML document: unclosed element".to_string(),
            ));
        }

        Ok(MappingConfig::new(root_name.as_deref(), properties))
    }
}

/// Read the three declaration attributes of a `property` element
fn read_property(element: &BytesStart) -> MappingResult<PropertyElement> {
    Ok(PropertyElement {
        name: attribute(element, b"name")?,
        source: attribute(element, b"source")?,
        type_name: attribute(element, b"type")?,
    })
}

/// Unescaped value of the attribute `key`, if present
fn attribute(element: &BytesStart, key: &[u8]) -> MappingResult<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| MappingError::Config(e.to_string()))?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
