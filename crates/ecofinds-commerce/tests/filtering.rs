//! Filtering properties checked against the seeded catalog.

use ecofinds_commerce::prelude::*;
use ecofinds_commerce::seed;

const QUERIES: &[&str] = &["", "jacket", "JACKET", "condition", "eco", "pro", "zzz", " "];

fn selections() -> Vec<CategorySelection> {
    std::iter::once(CategorySelection::All)
        .chain(Category::ALL.iter().copied().map(CategorySelection::Only))
        .collect()
}

fn text_matches(product: &Product, query: &str) -> bool {
    let q = query.to_lowercase();
    product.title.to_lowercase().contains(&q) || product.description.to_lowercase().contains(&q)
}

#[test]
fn test_filter_is_sound_complete_and_ordered() {
    let catalog = seed::catalog().unwrap();

    for selection in selections() {
        for query in QUERIES {
            let result = filter_products(catalog.as_slice(), selection, query);

            for product in &result {
                assert!(selection.matches(product.category));
                assert!(text_matches(product, query));
            }

            let expected: Vec<&Product> = catalog
                .iter()
                .filter(|p| selection.matches(p.category) && text_matches(p, query))
                .collect();
            assert_eq!(result, expected, "selection={:?} query={:?}", selection, query);
        }
    }
}

#[test]
fn test_single_item_catalog_example() {
    let jacket = Product::new(
        "1",
        "Vintage Leather Jacket",
        Money::usd(4599),
        Category::Clothing,
    );
    let catalog = vec![jacket];

    let hit = filter_products(&catalog, CategorySelection::Only(Category::Clothing), "jacket");
    assert_eq!(hit.len(), 1);

    let miss = filter_products(&catalog, CategorySelection::Only(Category::Electronics), "");
    assert!(miss.is_empty());
}

#[test]
fn test_search_query_summary() {
    let catalog = seed::catalog().unwrap();
    let results = SearchQuery::new()
        .with_category(Category::Home)
        .apply(catalog.as_slice());
    assert_eq!(results.count(), 2);
    assert_eq!(results.summary(), "2 products found");
    assert_eq!(results.catalog_size(), 8);

    let none = SearchQuery::new().with_text("unicorn").apply(catalog.as_slice());
    assert!(none.is_empty());
    assert_eq!(none.summary(), "0 products found");
}
