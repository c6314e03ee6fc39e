pub mod builtin;
pub mod json_file;
pub mod traits;

pub use builtin::BuiltinCatalog;
pub use json_file::JsonFileCatalog;
pub use traits::CatalogSource;
