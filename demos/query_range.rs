//! Find the points inside a rectangle, checked against the brute-force table.
use pointst::prelude::*;

fn main() -> pointst::Result<()> {
    let entries = [(0.1, 0.1), (0.4, 0.3), (0.6, 0.8), (0.95, 0.05), (0.5, 0.5)];
    let mut kdtree = KdTreePointTable::new();
    let mut brute = BrutePointTable::new();
    for (i, &(x, y)) in entries.iter().enumerate() {
        kdtree.put(Point::new(x, y), i)?;
        brute.put(Point::new(x, y), i)?;
    }

    let rect = Rect::new(0.25, 0.25, 0.75, 0.75);
    let mut found = kdtree.range(&rect)?;
    found.sort();
    println!("points in {rect}: {found:?}");
    println!("brute force agrees: {}", found == brute.range(&rect)?);
    Ok(())
}
