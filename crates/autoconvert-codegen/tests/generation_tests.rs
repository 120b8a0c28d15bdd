//! Integration tests for a full generation run over a source tree.
//!
//! Tests use triple-underscore naming: `subject___condition___expected_outcome`

#![allow(non_snake_case)]

use autoconvert_codegen::source::collect_sources;
use autoconvert_codegen::{
    FsArtifactWriter, GenerateError, Generator, GeneratorConfig, SchemaFault, TypeRegistry,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LIB: &str = r#"
pub mod geo;

use geo::Address;

#[derive(AutoConvert)]
#[auto_convert(capabilities(Serialize, Deserialize, Greet), naming = "camel_case")]
pub struct Venue {
    pub display_name: String,
    #[auto_convert(nested)]
    pub home_address: Address,
    pub branch: Option<geo::Address>,
}

#[derive(AutoConvert)]
#[auto_convert(capabilities(Serialize))]
pub struct Catalog {
    pub venues: Vec<Venue>,
}
"#;

const GEO: &str = r#"
#[derive(AutoConvert)]
#[auto_convert(capabilities(Serialize, Deserialize), naming = "snake_case")]
pub struct Address {
    pub city: String,
    pub zip: Option<String>,
}
"#;

fn write_tree(root: &Path) {
    let src = root.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("lib.rs"), LIB).unwrap();
    fs::write(src.join("geo.rs"), GEO).unwrap();
}

#[test]
fn generate___source_tree___resolves_nested_types_across_modules() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path());
    let out = temp.path().join("out");

    let sources = collect_sources(&[temp.path().join("src")]).unwrap();
    let registry = TypeRegistry::from_sources(&sources);
    let report = Generator::new(GeneratorConfig::default())
        .generate(&registry, &mut FsArtifactWriter::new(&out));

    let written: Vec<_> = report.written.iter().map(|w| w.type_name.as_str()).collect();
    assert_eq!(written, vec!["crate::geo::Address", "crate::Venue"]);

    let venue = fs::read_to_string(out.join("VenueAutoConvert.rs")).unwrap();
    assert!(venue.contains(
        "::autoconvert_core::put_nested(&mut map, \"homeAddress\", &self.home_address)?;"
    ));
    assert!(venue.contains(
        "let branch = ::autoconvert_core::optional_nested::<geo::Address>(map, \"branch\")?;"
    ));
    assert!(venue.contains("println!(\"Hello\");"));
    assert!(syn::parse_file(&venue).is_ok());
}

#[test]
fn generate___convertible_generic_argument___faults_that_type_only() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path());

    let sources = collect_sources(&[temp.path().join("src")]).unwrap();
    let registry = TypeRegistry::from_sources(&sources);
    let report = Generator::new(GeneratorConfig::default())
        .generate(&registry, &mut FsArtifactWriter::new(temp.path().join("out")));

    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        &report.failures[0],
        GenerateError::Schema {
            type_name,
            fault: SchemaFault::UnsupportedGenericArgument { .. },
        } if type_name == "crate::Catalog"
    ));
}
