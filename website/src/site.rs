use crate::catalog::{Catalog, CatalogError};

/// Data shared by every page of the website.
#[derive(Debug, Clone)]
pub struct Site {
    pub catalog: Catalog,
}

impl Site {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The website with the catalog compiled into the binary.
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::builtin()?))
    }
}
