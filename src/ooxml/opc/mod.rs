/// Open Packaging Conventions (OPC) writer.
///
/// A `.pptx` file is a ZIP archive of parts. Each part has a partname, a
/// content type and optional relationships to other parts. This module
/// provides just enough of the convention to assemble such an archive:
///
/// - Part names and relative references ([`PackURI`])
/// - Relationship collections serialized to `.rels` parts
/// - `[Content_Types].xml` generation
/// - ZIP serialization, plus a small reader used to verify saved files

pub mod constants;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
