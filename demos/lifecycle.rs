//! Lifecycle Demonstration
//!
//! Shows how `Optional<T>` picks its variant at compile time and how the
//! managed variant runs destructors exactly when presence changes.

use inplace_optional::prelude::*;

// --- Types ---

#[derive(Debug, Clone, Copy, PartialEq, Destruct)]
struct Celsius(i16);

#[derive(Debug, Destruct)]
#[destruct(managed)]
struct Connection {
    name: &'static str,
}

impl Drop for Connection {
    fn drop(&mut self) {
        println!("  closing {}", self.name);
    }
}

// =============================================================================
// Trivial variant: usable in constants
// =============================================================================

const FREEZING: Optional<Celsius> = Inline::new(Celsius(0));
const UNKNOWN: Optional<Celsius> = Inline::none();

fn main() {
    println!("Trivial variant (Inline):");
    println!("  FREEZING = {:?}", FREEZING);
    println!("  UNKNOWN  = {:?}", UNKNOWN);
    println!("  UNKNOWN.value_or(-5) = {:?}", UNKNOWN.value_or(Celsius(-5)));

    let mut reading = UNKNOWN;
    reading.set(Celsius(21));
    println!("  after set: {:?}", reading);

    // =========================================================================
    // Managed variant: explicit construction and destruction
    // =========================================================================

    println!("Managed variant:");
    let mut primary: Optional<Connection> = Slot::some(Connection { name: "primary" });
    let mut standby: Optional<Connection> = Slot::some(Connection { name: "standby" });

    println!("  move standby into primary");
    primary.take_from(&mut standby);
    println!("  primary = {:?}, standby = {:?}", primary, standby);

    println!("  reset primary");
    primary.reset();
    primary.reset();

    match primary.try_value() {
        Ok(conn) => println!("  still open: {}", conn.name),
        Err(err) => println!("  {}", err),
    }

    println!("  scope end");
}
