//! Delimited string fields turned into lists

/// Split a comma separated field into trimmed, non-empty tokens in input order
pub fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// One `DefName:Count` ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient<'a> {
    pub def_name: &'a str,
    pub count: u32,
}

/// Parse `DefName:Count[,DefName:Count...]`. Entries that do not match the
/// pattern are skipped.
pub fn parse_ingredients(value: &str) -> Vec<Ingredient<'_>> {
    split_list(value)
        .into_iter()
        .filter_map(|token| {
            let (name, count) = token.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let count = count.trim().parse().ok()?;
            Some(Ingredient {
                def_name: name,
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("Torso, Legs,,  Arms "), ["Torso", "Legs", "Arms"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_ingredients() {
        let parsed = parse_ingredients("Steel:5, WoodLog:2");
        assert_eq!(
            parsed,
            [
                Ingredient { def_name: "Steel", count: 5 },
                Ingredient { def_name: "WoodLog", count: 2 },
            ]
        );
    }

    #[test]
    fn test_malformed_ingredients_dropped() {
        let parsed = parse_ingredients("BadEntry,Steel:5,:3,Cloth:many");
        assert_eq!(parsed, [Ingredient { def_name: "Steel", count: 5 }]);
        assert!(parse_ingredients("BadEntry").is_empty());
    }
}
