//! Walkthrough of the container API.
//!
//! Run with `RUST_LOG=trace cargo run --example basic` to see every
//! reallocation.

use grow_vec::{grow_vec, GrowVec};

fn main() {
    env_logger::init();

    // Basic use
    let mut vec = GrowVec::new();
    vec.push(10);
    vec.push(20);
    println!("Size: {}, Capacity: {}", vec.len(), vec.capacity());

    // Literal list
    let vec2 = grow_vec![3.14, 2.71, 1.41];
    println!("vec2[0]: {}", vec2[0]);

    // Cursor traversal
    print!("Iterate with cursor: ");
    let mut it = vec2.cbegin();
    while it != vec2.cend() {
        // SAFETY: `it` lies in `cbegin..cend` and `vec2` is not mutated.
        print!("{} ", unsafe { it.get() });
        it.inc();
    }
    println!();

    // Checked access
    match vec2.at(10) {
        Ok(value) => println!("{value}"),
        Err(e) => println!("Error: {e}"),
    }
}
