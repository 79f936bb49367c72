use crate::ExtMapError;
use bytesstr::BytesStr;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// RTP header extensions registered with a handler, mapping extension ids to URIs
///
/// Iteration follows registration order, which is the order extensions are offered in.
/// Mappings can only be added, never changed or removed.
#[derive(Debug, Default, Clone)]
pub struct ExtMapRegistry {
    extmaps: IndexMap<u8, BytesStr>,
}

impl ExtMapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `uri` under `id`, fails if the id is already in use
    pub fn add(&mut self, id: u8, uri: impl Into<BytesStr>) -> Result<(), ExtMapError> {
        if id == 0 {
            return Err(ExtMapError::ReservedId);
        }

        match self.extmaps.entry(id) {
            Entry::Occupied(_) => Err(ExtMapError::DuplicateId(id)),
            Entry::Vacant(entry) => {
                entry.insert(uri.into());
                Ok(())
            }
        }
    }

    pub fn get(&self, id: u8) -> Option<&BytesStr> {
        self.extmaps.get(&id)
    }

    /// Returns if any id is mapped to `uri`
    pub fn contains_uri(&self, uri: &str) -> bool {
        self.extmaps.values().any(|v| v.as_str() == uri)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BytesStr)> {
        self.extmaps.iter().map(|(id, uri)| (*id, uri))
    }

    pub fn len(&self) -> usize {
        self.extmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extmaps.is_empty()
    }
}
