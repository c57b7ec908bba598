//! Per-particle motion: gravity infall, orbital swirl and respawn seeding.

pub mod gravity;
pub mod seeding;
