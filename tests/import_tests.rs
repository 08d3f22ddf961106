//! Mapping configuration import tests

use json_mapper::import::MappingConfigImporter;
use json_mapper::{MappingError, PropertyElement};

mod xml_config_import_tests {
    use super::*;

    #[test]
    fn test_import_full_configuration() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<object name="employee">
  <properties>
    <property name="FullName" source="name" type="string" />
    <property name="Age" source="age" type="Integer" />
    <property name="HiredAt" source="hired" type="DATETIME" />
    <property name="IsActive" source="active" type="boolean" />
  </properties>
</object>"#;

        let config = MappingConfigImporter::new().import(xml).unwrap();

        assert_eq!(config.name, "employee");
        assert_eq!(config.output_file_name(), "employee.json");
        let props = config.properties.unwrap();
        assert_eq!(
            props,
            vec![
                PropertyElement::new("FullName", "name", "string"),
                PropertyElement::new("Age", "age", "Integer"),
                PropertyElement::new("HiredAt", "hired", "DATETIME"),
                PropertyElement::new("IsActive", "active", "boolean"),
            ]
        );
    }

    #[test]
    fn test_unnamed_object_uses_default_name() {
        let importer = MappingConfigImporter::new();
        for xml in [
            "<object><properties/></object>",
            r#"<object name=""><properties/></object>"#,
        ] {
            let config = importer.import(xml).unwrap();
            assert_eq!(config.name, "default");
            assert_eq!(config.output_file_name(), "default.json");
        }
    }

    #[test]
    fn test_comments_and_declaration_are_ignored() {
        let xml = r#"<?xml version="1.0"?>
<!-- mapping for people -->
<object name="p">
  <!-- only one property -->
  <properties><property name="n" source="name" type="string"/></properties>
</object>"#;
        let config = MappingConfigImporter::new().import(xml).unwrap();
        assert_eq!(config.properties.map(|p| p.len()), Some(1));
    }

    #[test]
    fn test_trailing_text_is_config_error() {
        let result = MappingConfigImporter::new()
            .import("<object name=\"p\"><properties/></object>\ntrailing");
        assert!(matches!(result, Err(MappingError::Config(_))));
    }

    #[test]
    fn test_not_xml_is_config_error() {
        let result = MappingConfigImporter::new().import("{\"object\": {}}");
        assert!(matches!(result, Err(MappingError::Config(_))));
    }
}
