use crate::model::{category_keys, get_category, Category, ALL_CATEGORIES};
use anyhow::{bail, Result};

/// Resolves which categories to generate based on only/skip filters.
/// The result always follows catalog order.
pub fn resolve_categories(
    only: Option<Vec<String>>,
    skip: Option<Vec<String>>,
) -> Result<Vec<Category>> {
    match (only, skip) {
        (Some(_), Some(_)) => {
            bail!("Cannot use both --only and --skip at the same time");
        }
        (Some(only_list), None) => {
            let selected = lookup_all(&only_list)?;
            Ok(catalog_order(|c| selected.contains(&c)))
        }
        (None, Some(skip_list)) => {
            let skipped = lookup_all(&skip_list)?;
            Ok(catalog_order(|c| !skipped.contains(&c)))
        }
        (None, None) => Ok(catalog_order(|_| true)),
    }
}

fn lookup_all(keys: &[String]) -> Result<Vec<Category>> {
    keys.iter()
        .map(|key| match get_category(key.trim()) {
            Some(spec) => Ok(spec.category),
            None => bail!(
                "Unknown category '{}'. Valid categories: {}",
                key,
                category_keys().join(", ")
            ),
        })
        .collect()
}

fn catalog_order(keep: impl Fn(Category) -> bool) -> Vec<Category> {
    ALL_CATEGORIES
        .iter()
        .map(|spec| spec.category)
        .filter(|c| keep(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[&str]) -> Option<Vec<String>> {
        Some(list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_all_by_default() {
        assert_eq!(resolve_categories(None, None).unwrap().len(), 8);
    }

    #[test]
    fn test_only_keeps_catalog_order() {
        let categories = resolve_categories(keys(&["recipes", "cosmetics", "items"]), None).unwrap();
        assert_eq!(categories, [Category::Item, Category::Apparel, Category::Recipe]);
    }

    #[test]
    fn test_skip() {
        let categories = resolve_categories(None, keys(&["research", "recipes"])).unwrap();
        assert_eq!(categories.len(), 6);
        assert!(!categories.contains(&Category::Research));
    }

    #[test]
    fn test_errors() {
        assert!(resolve_categories(keys(&["items"]), keys(&["drugs"])).is_err());
        let err = resolve_categories(keys(&["pawns"]), None).unwrap_err();
        assert!(err.to_string().contains("pawns"));
    }
}
