#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    /// A stored value with a payload beside its coordinates.
    #[derive(Debug, Clone, PartialEq)]
    struct TestValue {
        x: i32,
        y: i32,
        value: i32,
    }

    impl TestValue {
        fn new(x: i32, y: i32, value: i32) -> Self {
            Self { x, y, value }
        }
    }

    impl Positioned for TestValue {
        fn x(&self) -> i32 {
            self.x
        }
        fn y(&self) -> i32 {
            self.y
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn setup() -> QuadTree<TestValue> {
        init_logger();
        QuadTree::with_capacity(Region::new(Position::new(0, 500), 500, 500), 4).unwrap()
    }

    fn whole() -> Region {
        Region::new(Position::new(0, 500), 500, 500)
    }

    fn corner() -> Region {
        Region::new(Position::new(0, 500), 20, 20)
    }

    #[test]
    fn test_add_and_find_some_values() {
        let mut tree = setup();
        assert!(tree.add(TestValue::new(1, 499, 10)));
        assert!(tree.add(TestValue::new(1, 498, 20)));

        let found = tree.query(&corner());
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|t| t.value == 10 || t.value == 20));
    }

    #[test]
    fn test_remove_some_values() {
        let mut tree = setup();
        assert!(tree.add(TestValue::new(1, 499, 10)));
        assert!(tree.add(TestValue::new(1, 498, 20)));

        assert_eq!(tree.remove_in_area(&corner()), 2);
        assert!(tree.query(&whole()).is_empty());
    }

    #[test]
    fn test_remove_one_value() {
        let mut tree = setup();
        let value = TestValue::new(1, 499, 10);
        assert!(tree.add(value.clone()));
        assert!(tree.remove(&value));
        assert!(tree.query(&whole()).is_empty());
    }

    #[test]
    fn test_remove_matches_by_coordinates_only() {
        let mut tree = setup();
        assert!(tree.add(TestValue::new(1, 499, 10)));
        // different payload, same point
        assert_eq!(tree.take(TestValue::new(1, 499, 99)), Some(TestValue::new(1, 499, 10)));
    }

    #[test]
    fn test_not_remove_other_value() {
        let mut tree = setup();
        assert!(tree.add(TestValue::new(1, 499, 10)));
        assert!(!tree.remove(TestValue::new(2, 498, 30)));
        assert!(!tree.query(&whole()).is_empty());
    }

    #[test]
    fn test_contains_true() {
        let mut tree = setup();
        let value = TestValue::new(1, 499, 10);
        assert!(tree.add(value.clone()));
        assert!(tree.contains(&value));
    }

    #[test]
    fn test_contains_false() {
        let mut tree = setup();
        assert!(tree.add(TestValue::new(1, 499, 10)));
        assert!(!tree.contains(TestValue::new(1, 3, 10)));
    }

    #[test]
    fn test_grid_fill_and_drain() {
        init_logger();
        let root = Region::new(Position::new(0, 512), 512, 512);
        let mut tree = QuadTree::new(root);
        // dividing lines of a power-of-two root are all even
        let points: Vec<TestValue> = (0..40)
            .flat_map(|i| (0..40).map(move |j| TestValue::new(i * 12 + 3, 509 - j * 12, i * 40 + j)))
            .collect();
        for point in &points {
            assert!(tree.add(point.clone()), "({}, {})", point.x, point.y);
        }
        assert_eq!(tree.len(), points.len());
        assert!(tree.node_count() > 5);

        let half = Region::new(Position::new(0, 512), 256, 512);
        let expected = points.iter().filter(|t| half.contains(*t)).count();
        assert_eq!(tree.query(&half).len(), expected);
        assert_eq!(tree.remove_in_area(&half), expected);
        assert_eq!(tree.len(), points.len() - expected);

        for point in &points {
            let _removed = tree.remove(point);
        }
        assert!(tree.is_empty());
        assert!(tree.query(&root).is_empty());
    }
}
