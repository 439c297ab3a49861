//! Find stored values strictly inside a query region.
use region_quadtree::prelude::*;

#[derive(Debug)]
struct Tree {
    x: i32,
    y: i32,
    species: &'static str,
}

impl Positioned for Tree {
    fn x(&self) -> i32 {
        self.x
    }
    fn y(&self) -> i32 {
        self.y
    }
}

fn main() {
    let mut forest = QuadTree::new(Region::new(Position::new(0, 100), 100, 100));
    forest.add(Tree { x: 10, y: 90, species: "oak" });
    forest.add(Tree { x: 15, y: 85, species: "birch" });
    forest.add(Tree { x: 70, y: 20, species: "pine" });

    // x in (0, 30), y in (70, 100)
    let clearing = Region::new(Position::new(0, 100), 30, 30);
    let found = forest.query(&clearing);
    println!("In {clearing}: {:?}", found.iter().map(|t| t.species).collect::<Vec<_>>());

    // Query region (0, 30) x (70, 100) holds the oak and the birch, not the pine
    assert_eq!(found.len(), 2, "Expected 2 trees in the clearing");
    assert!(found.iter().all(|t| t.species != "pine"), "Pine is outside the clearing");

    // A point on the query edge is not inside it
    let edge = Region::new(Position::new(0, 100), 15, 30);
    assert_eq!(forest.query(&edge).len(), 1, "Birch at x = 15 sits on the edge");
}
