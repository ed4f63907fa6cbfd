use crate::{Error, Item, ProductId, Result};
use ahash::AHashMap;

/// Immutable catalog snapshot with an id -> row index built once at load
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: AHashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.product_id, position).is_some() {
                return Err(Error::Artifact(format!(
                    "duplicate product_id {} in catalog",
                    item.product_id
                )));
            }
        }
        Ok(Self { items, index })
    }

    #[inline]
    pub fn get(&self, id: ProductId) -> Option<&Item> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    /// Like [`Catalog::get`] but fails with `NotFound`
    pub fn require(&self, id: ProductId) -> Result<&Item> {
        self.get(id).ok_or(Error::NotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// Row position of an item in snapshot order
    #[inline]
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|item| item.product_id).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![Item::new(10u64, "a"), Item::new(20u64, "b")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId(20)).unwrap().product_name, "b");
        assert_eq!(catalog.position(ProductId(10)), Some(0));
        assert!(catalog.get(ProductId(30)).is_none());
        assert!(matches!(catalog.require(ProductId(30)), Err(Error::NotFound(ProductId(30)))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![Item::new(1u64, "a"), Item::new(1u64, "b")]);
        assert!(matches!(result, Err(Error::Artifact(_))));
    }
}
