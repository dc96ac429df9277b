#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use kintree::models::{Gender, Person, PersonId};
    use kintree::{CoupleEquality, find_immediate_children, find_relatives};

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

    fn ids(people: &[Arc<Person>]) -> Vec<PersonId> {
        people.iter().map(|person| person.id).collect()
    }

    /// Grandparents (1, 2), their children (3 coupled with in-law 4,
    /// single 5), and a grandchild (6).
    fn three_generations() -> Vec<Arc<Person>> {
        vec![
            create_test_person(1, "grandma", vec![], vec![3, 5]),
            create_test_person(2, "grandpa", vec![], vec![3, 5]),
            create_test_person(3, "parent", vec![1, 2], vec![6]),
            create_test_person(4, "in-law", vec![], vec![6]),
            create_test_person(5, "single child", vec![1, 2], vec![]),
            create_test_person(6, "grandchild", vec![3, 4], vec![]),
        ]
    }

    #[test]
    fn test_immediate_children_relative_to_anchor_set() {
        let pool = three_generations();
        let anchors = vec![pool[0].clone(), pool[1].clone()];

        // Only people listing an anchor as parent qualify; the grandchild
        // does not, even though it descends from them.
        let children = find_immediate_children(&pool[2..], &anchors);
        assert_eq!(ids(&children), vec![3, 5]);
    }

    #[test]
    fn test_immediate_children_empty_anchor_set() {
        let pool = three_generations();
        assert!(find_immediate_children(&pool, &[]).is_empty());
    }

    #[test]
    fn test_find_relatives_collects_descendants_and_their_partners() {
        let pool = three_generations();
        let anchors = vec![pool[0].clone(), pool[1].clone()];
        let rest: Vec<Arc<Person>> = pool[2..].to_vec();

        let relatives = find_relatives(&rest, &anchors, CoupleEquality::Lenient);
        // First generation: children 3 and 5 plus 3's partner 4; second
        // generation: grandchild 6.
        assert_eq!(ids(&relatives), vec![3, 5, 4, 6]);
    }

    #[test]
    fn test_find_relatives_result_is_unique_subset_of_pool() {
        let pool = three_generations();
        let anchors = vec![pool[0].clone(), pool[1].clone()];
        let rest: Vec<Arc<Person>> = pool[2..].to_vec();

        let relatives = find_relatives(&rest, &anchors, CoupleEquality::Lenient);

        let pool_ids: HashSet<PersonId> = rest.iter().map(|p| p.id).collect();
        let mut seen: HashSet<PersonId> = HashSet::new();
        for person in &relatives {
            assert!(pool_ids.contains(&person.id), "{} not from pool", person.id);
            assert!(seen.insert(person.id), "{} appeared twice", person.id);
        }
    }

    #[test]
    fn test_find_relatives_empty_when_anchors_have_no_children_in_pool() {
        let pool = three_generations();
        let anchors = vec![pool[5].clone()];

        let relatives = find_relatives(&pool[..5], &anchors, CoupleEquality::Lenient);
        assert!(relatives.is_empty());
    }

    #[test]
    fn test_find_relatives_terminates_on_cyclic_data() {
        // 1 and 2 list each other as both parent and child; 3 descends
        // from the tangle.
        let cyclic = vec![
            create_test_person(1, "ouroboros", vec![2, 9], vec![2, 3]),
            create_test_person(2, "ourobora", vec![1], vec![1, 3]),
            create_test_person(3, "child", vec![1, 2], vec![]),
        ];
        let anchor = vec![create_test_person(9, "anchor", vec![], vec![1])];

        let relatives = find_relatives(&cyclic, &anchor, CoupleEquality::Lenient);

        // Members are consumed at most once; the pool shrinks every
        // generation, so the cycle cannot loop.
        let mut seen: HashSet<PersonId> = HashSet::new();
        for person in &relatives {
            assert!(seen.insert(person.id), "{} appeared twice", person.id);
        }
        assert!(relatives.len() <= cyclic.len());
        assert!(seen.contains(&1));
    }
}
