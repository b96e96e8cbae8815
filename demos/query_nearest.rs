//! Find the nearest and the k nearest points to a query point.
use pointst::prelude::*;

fn main() -> pointst::Result<()> {
    let mut table = KdTreePointTable::new();
    table.put(Point::new(0.7, 0.2), "A")?;
    table.put(Point::new(0.5, 0.4), "B")?;
    table.put(Point::new(0.2, 0.3), "C")?;
    table.put(Point::new(0.4, 0.7), "D")?;
    table.put(Point::new(0.9, 0.6), "E")?;

    let query = Point::new(0.45, 0.45);
    if let Some(nearest) = table.nearest(query)? {
        println!("nearest to {query}: {nearest} -> {:?}", table.get(nearest)?);
    }

    println!("3 nearest to {query}:");
    for p in table.nearest_k(query, 3)? {
        println!("  {p} (distance {:.3})", p.distance_to(query));
    }
    Ok(())
}
