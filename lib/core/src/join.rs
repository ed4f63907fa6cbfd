use crate::{Catalog, Error, Record, Result, ScoredItem};

/// Attach display fields to ranked ids, preserving order
///
/// A ranked id absent from the catalog means the scoring oracle and the
/// catalog snapshot disagree; it is reported as `Error::Integrity`.
pub fn enrich(ranked: &[ScoredItem], catalog: &Catalog) -> Result<Vec<Record>> {
    ranked
        .iter()
        .map(|scored| match catalog.get(scored.product_id) {
            Some(item) => Ok(Record::from_item(item, scored.score)),
            None => {
                tracing::warn!(
                    product_id = %scored.product_id,
                    "ranked product missing from catalog snapshot"
                );
                Err(Error::Integrity(scored.product_id))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, ProductId};

    #[test]
    fn test_enrich_preserves_order() {
        let catalog = Catalog::new(vec![
            Item::new(1u64, "a").with_price(10.0),
            Item::new(2u64, "b").with_sub_category("X"),
        ])
        .unwrap();
        let ranked = vec![ScoredItem::new(2u64, 0.9), ScoredItem::new(1u64, 0.4)];

        let records = enrich(&ranked, &catalog).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product_name, "b");
        assert_eq!(records[0].sub_category.as_deref(), Some("X"));
        assert_eq!(records[1].price, Some(10.0));
        assert_eq!(records[1].score, 0.4);
    }

    #[test]
    fn test_missing_id_is_integrity_error() {
        let catalog = Catalog::new(vec![Item::new(1u64, "a")]).unwrap();
        let ranked = vec![ScoredItem::new(1u64, 0.9), ScoredItem::new(8u64, 0.4)];
        assert!(matches!(
            enrich(&ranked, &catalog),
            Err(Error::Integrity(ProductId(8)))
        ));
    }
}
