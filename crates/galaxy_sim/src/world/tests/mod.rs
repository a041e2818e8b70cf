//! Multi-entity scenarios run against a whole world

mod collision_rules;
