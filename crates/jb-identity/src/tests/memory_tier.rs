use crate::{IdentityTier, MemoryTier};

use googletest::prelude::*;

#[test]
fn given_empty_tier_when_read_then_none() {
    let tier = MemoryTier::new("session");

    assert_that!(tier.read().unwrap(), none());
}

#[test]
fn given_written_value_when_clone_reads_then_sees_same_slot() {
    let tier = MemoryTier::new("session");
    let other = tier.clone();

    tier.write("hello").unwrap();

    assert_that!(other.read().unwrap(), some(eq("hello")));
}

#[test]
fn given_value_when_removed_twice_then_both_succeed() {
    let tier = MemoryTier::with_value("durable", "x");

    assert_that!(tier.remove(), ok(anything()));
    assert_that!(tier.remove(), ok(anything()));
    assert_that!(tier.peek(), none());
}
