#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use kintree::models::{Gender, Person, PersonId};
    use kintree::{
        CoupleEquality, CoupleGroup, find_couples, find_orphan_couples, find_unique_couples,
    };

    fn create_test_person(
        id: PersonId,
        name: &str,
        parents: Vec<PersonId>,
        children: Vec<PersonId>,
    ) -> Arc<Person> {
        Arc::new(
            Person::new(id, name, Gender::Unknown)
                .with_parents(parents)
                .with_children(children),
        )
    }

    fn ids(group: &CoupleGroup) -> Vec<PersonId> {
        group.iter().map(|person| person.id).collect()
    }

    fn id_set(group: &CoupleGroup) -> BTreeSet<PersonId> {
        group.iter().map(|person| person.id).collect()
    }

    #[test]
    fn test_find_couples_is_doubled_by_design() {
        let sally = create_test_person(1, "Sally", vec![], vec![10]);
        let billy = create_test_person(2, "Billy", vec![], vec![10]);
        let pool = vec![sally, billy];

        let couples = find_couples(&pool);
        assert_eq!(couples.len(), 2);
        assert_eq!(ids(&couples[0]), vec![1, 2]);
        assert_eq!(ids(&couples[1]), vec![2, 1]);
    }

    #[test]
    fn test_find_unique_couples_collapses_the_double() {
        let sally = create_test_person(1, "Sally", vec![], vec![10]);
        let billy = create_test_person(2, "Billy", vec![], vec![10]);
        let pool = vec![sally, billy];

        let unique = find_unique_couples(&pool, CoupleEquality::Lenient);
        assert_eq!(unique.len(), 1);
        assert_eq!(ids(&unique[0]), vec![1, 2]);
    }

    #[test]
    fn test_unique_couples_have_distinct_member_sets() {
        // Two separate couples plus an unrelated single
        let pool = vec![
            create_test_person(1, "a", vec![], vec![10]),
            create_test_person(2, "b", vec![], vec![10]),
            create_test_person(3, "c", vec![], vec![20]),
            create_test_person(4, "d", vec![], vec![20]),
            create_test_person(5, "e", vec![], vec![]),
        ];

        for policy in [CoupleEquality::Lenient, CoupleEquality::Strict] {
            let unique = find_unique_couples(&pool, policy);
            let sets: Vec<BTreeSet<PersonId>> = unique.iter().map(id_set).collect();
            for (i, a) in sets.iter().enumerate() {
                for b in sets.iter().skip(i + 1) {
                    assert_ne!(a, b, "duplicate couple under {policy} policy");
                }
            }
        }
    }

    #[test]
    fn test_lenient_and_strict_diverge_on_blended_groups() {
        // A and B co-parent child 10; B and C co-parent child 20.
        // The raw groups are [A,B], [B,A,C] and [C,B].
        let pool = vec![
            create_test_person(1, "A", vec![], vec![10]),
            create_test_person(2, "B", vec![], vec![10, 20]),
            create_test_person(3, "C", vec![], vec![20]),
        ];

        // Lenient folds B's blended group into A's because they overlap
        // in two members, leaving the B/C pairing anchored at C.
        let lenient = find_unique_couples(&pool, CoupleEquality::Lenient);
        let lenient_sets: Vec<BTreeSet<PersonId>> = lenient.iter().map(id_set).collect();
        assert_eq!(
            lenient_sets,
            vec![BTreeSet::from([1, 2]), BTreeSet::from([2, 3])]
        );

        // Strict only collapses identical member sets, so B's blended
        // group survives alongside both pairings.
        let strict = find_unique_couples(&pool, CoupleEquality::Strict);
        let strict_sets: Vec<BTreeSet<PersonId>> = strict.iter().map(id_set).collect();
        assert_eq!(
            strict_sets,
            vec![
                BTreeSet::from([1, 2]),
                BTreeSet::from([1, 2, 3]),
                BTreeSet::from([2, 3])
            ]
        );
    }

    #[test]
    fn test_find_orphan_couples_ignores_non_orphans() {
        // Carol and Dave are a couple but Carol has a parent in the pool,
        // so neither side of that pairing is rooted here.
        let pool = vec![
            create_test_person(1, "Alice", vec![], vec![10]),
            create_test_person(2, "Bob", vec![], vec![10]),
            create_test_person(3, "Carol", vec![1], vec![20]),
            create_test_person(4, "Dave", vec![], vec![20]),
        ];

        let couples = find_orphan_couples(&pool, CoupleEquality::Lenient);
        assert_eq!(couples.len(), 1);
        assert_eq!(ids(&couples[0]), vec![1, 2]);
    }
}
