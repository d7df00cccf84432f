use hero_core::{filter_heroes, HeroCatalog, HeroRecord, Role, RoleFilter};
use proptest::prelude::*;

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Tank), Just(Role::Dps), Just(Role::Support)]
}

fn catalog_strategy() -> impl Strategy<Value = HeroCatalog> {
    prop::collection::vec(("[A-Za-z][A-Za-z .:]{0,10}", role_strategy()), 0..24).prop_map(|heroes| {
        let records = heroes
            .into_iter()
            .map(|(name, role)| HeroRecord::new(name, role))
            .collect();
        HeroCatalog::from_records(records).catalog
    })
}

fn role_filter_strategy() -> impl Strategy<Value = RoleFilter> {
    prop::collection::vec(role_strategy(), 0..4).prop_map(RoleFilter::only)
}

proptest! {
    #[test]
    fn matches_contain_query_case_insensitively(
        catalog in catalog_strategy(),
        query in "[a-zA-Z]{0,3}",
    ) {
        let needle = query.to_lowercase();
        for hero in catalog.filter(&query, &RoleFilter::all()) {
            prop_assert!(hero.name.to_lowercase().contains(&needle));
        }

        let expected = catalog
            .iter()
            .filter(|h| h.name.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(catalog.filter(&query, &RoleFilter::all()).len(), expected);
    }

    #[test]
    fn empty_query_returns_role_subset_in_order(
        catalog in catalog_strategy(),
        roles in role_filter_strategy(),
    ) {
        let hits: Vec<&str> = catalog.filter("", &roles).iter().map(|h| h.name.as_str()).collect();
        let expected: Vec<&str> = catalog
            .iter()
            .filter(|h| roles.allows(h.role))
            .map(|h| h.name.as_str())
            .collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn filter_is_idempotent(
        catalog in catalog_strategy(),
        query in "[a-z]{0,2}",
        roles in role_filter_strategy(),
    ) {
        let once = catalog.filter(&query, &roles);
        let twice = filter_heroes(once.iter().copied(), &query, &roles);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(catalog.filter(&query, &roles), once);
    }

    #[test]
    fn lookup_finds_every_catalog_name(catalog in catalog_strategy()) {
        for hero in &catalog {
            prop_assert_eq!(catalog.lookup(&hero.name), Some(hero));
        }
        prop_assert!(catalog.lookup("").is_none());
    }
}
