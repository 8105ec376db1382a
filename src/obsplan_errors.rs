use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObsplanError {
    #[error("Mismatched input array lengths: {0} != {1}")]
    MismatchedArrayLengths(usize, usize),

    #[error("Value outside physical domain: {0}")]
    DomainError(String),

    #[error("Internal invariant violated: {0}")]
    InternalError(String),

    #[error("Galaxy shape partially specified: minor axis and position angle must both be present or both absent")]
    PartialGalaxyShape,

    #[error("Invalid region file: {0}")]
    RegionParseError(String),

    #[error("Invalid sample bounds: expected an even number of values, got {0}")]
    OddSampleBounds(usize),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Object not found in catalog: {0}")]
    ObjectNotFound(u64),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for ObsplanError {
    fn eq(&self, other: &Self) -> bool {
        use ObsplanError::*;
        match (self, other) {
            (MismatchedArrayLengths(a, b), MismatchedArrayLengths(c, d)) => a == c && b == d,
            (DomainError(a), DomainError(b)) => a == b,
            (InternalError(a), InternalError(b)) => a == b,
            (RegionParseError(a), RegionParseError(b)) => a == b,
            (OddSampleBounds(a), OddSampleBounds(b)) => a == b,
            (CatalogError(a), CatalogError(b)) => a == b,
            (ObjectNotFound(a), ObjectNotFound(b)) => a == b,

            (PartialGalaxyShape, PartialGalaxyShape) => true,

            // IO errors are not comparable: equality if same variant
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
