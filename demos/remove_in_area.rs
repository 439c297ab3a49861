//! Fill a tree until it splits, then clear one corner.
use region_quadtree::prelude::*;

fn main() {
    let mut tree = QuadTree::new(Region::new(Position::new(0, 512), 512, 512));
    for i in 0..20 {
        for j in 0..20 {
            tree.add(Position::new(i * 24 + 5, 507 - j * 24));
        }
    }
    println!("stored {} points in {} nodes", tree.len(), tree.node_count());

    let corner = Region::new(Position::new(0, 512), 128, 128);
    let removed = tree.remove_in_area(&corner);
    println!("removed {removed} points from {corner}, {} left in {} nodes", tree.len(), tree.node_count());

    assert!(tree.query(&corner).is_empty(), "Corner should be empty");
    assert_eq!(tree.len(), 400 - removed);

    match tree.insert(Position::new(256, 100)) {
        Ok(()) => println!("stored (256, 100)"),
        Err(err) => println!("rejected: {err}"),
    }
}
