//! Static registry of Protenix release resources.
//!
//! Maps a short identifier (model version tag, data-file tag) to the URL the
//! artifact is published at. The table is a compile-time constant; lookups
//! are pure reads and safe from any number of threads.

use crate::error::RegistryError;
use serde::Serialize;

/// What a registered resource is. Decides where it is placed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Trained model weights.
    ModelCheckpoint,
    /// Chemical Component Dictionary in mmCIF form.
    CcdComponents,
    /// Pickled RDKit molecules indexed by CCD code.
    CcdRdkitMol,
}

/// One registry entry: identifier and the URL it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub identifier: &'static str,
    pub location: &'static str,
    pub kind: ResourceKind,
}

const ENTRIES: &[ResourceEntry] = &[
    ResourceEntry {
        identifier: "model_v0.5.0",
        location: "https://af3-dev.tos-cn-beijing.volces.com/release_model/model_v0.5.0.pt",
        kind: ResourceKind::ModelCheckpoint,
    },
    ResourceEntry {
        identifier: "ccd_components_file",
        location: "https://af3-dev.tos-cn-beijing.volces.com/release_data/components.v20240608.cif",
        kind: ResourceKind::CcdComponents,
    },
    ResourceEntry {
        identifier: "ccd_components_rdkit_mol_file",
        location: "https://af3-dev.tos-cn-beijing.volces.com/release_data/components.v20240608.cif.rdkit_mol.pkl",
        kind: ResourceKind::CcdRdkitMol,
    },
];

/// All registered entries, in declaration order.
pub fn entries() -> &'static [ResourceEntry] {
    ENTRIES
}

/// All registered identifiers, in declaration order.
pub fn identifiers() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.identifier)
}

/// Returns the full entry for `identifier`.
///
/// Matching is exact: no case folding or trimming.
pub fn get(identifier: &str) -> Result<&'static ResourceEntry, RegistryError> {
    ENTRIES
        .iter()
        .find(|e| e.identifier == identifier)
        .ok_or_else(|| RegistryError::NotFound {
            identifier: identifier.to_string(),
        })
}

/// Resolves `identifier` to its download URL, returned verbatim.
pub fn lookup(identifier: &str) -> Result<&'static str, RegistryError> {
    get(identifier).map(|e| e.location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_identifiers_resolve_verbatim() {
        assert_eq!(
            lookup("model_v0.5.0").unwrap(),
            "https://af3-dev.tos-cn-beijing.volces.com/release_model/model_v0.5.0.pt"
        );
        assert_eq!(
            lookup("ccd_components_file").unwrap(),
            "https://af3-dev.tos-cn-beijing.volces.com/release_data/components.v20240608.cif"
        );
        assert_eq!(
            lookup("ccd_components_rdkit_mol_file").unwrap(),
            "https://af3-dev.tos-cn-beijing.volces.com/release_data/components.v20240608.cif.rdkit_mol.pkl"
        );
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        for id in ["does_not_exist", "", "MODEL_V0.5.0", " model_v0.5.0", "model_v0.5.0 "] {
            assert_eq!(
                lookup(id),
                Err(RegistryError::NotFound {
                    identifier: id.to_string()
                })
            );
        }
    }

    #[test]
    fn repeated_lookup_returns_same_value() {
        let a = lookup("ccd_components_file").unwrap();
        let b = lookup("ccd_components_file").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn enumeration_is_stable() {
        let first: Vec<_> = identifiers().collect();
        let second: Vec<_> = identifiers().collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            [
                "model_v0.5.0",
                "ccd_components_file",
                "ccd_components_rdkit_mol_file"
            ]
        );
    }

    #[test]
    fn identifiers_are_unique() {
        let set: HashSet<_> = identifiers().collect();
        assert_eq!(set.len(), entries().len());
    }

    #[test]
    fn locations_are_absolute_https_urls() {
        for entry in entries() {
            let parsed = url::Url::parse(entry.location)
                .unwrap_or_else(|e| panic!("{}: {}", entry.identifier, e));
            assert_eq!(parsed.scheme(), "https", "{}", entry.identifier);
            assert!(parsed.host_str().is_some(), "{}", entry.identifier);
        }
    }

    #[test]
    fn get_returns_kind() {
        assert_eq!(get("model_v0.5.0").unwrap().kind, ResourceKind::ModelCheckpoint);
        assert_eq!(
            get("ccd_components_rdkit_mol_file").unwrap().kind,
            ResourceKind::CcdRdkitMol
        );
    }

    #[test]
    fn concurrent_lookups_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    identifiers()
                        .map(|id| lookup(id).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let expected: Vec<_> = entries().iter().map(|e| e.location).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
