// Adventure Level 1: open room, one of every interactive tile.
use super::codes::*;
use super::LevelDesc;
use std::sync::OnceLock;

pub fn level1() -> &'static LevelDesc {
    static LD: OnceLock<LevelDesc> = OnceLock::new();
    LD.get_or_init(|| {
        LevelDesc::from_rows(
            1,
            "First Steps",
            "Learn the basics of Gold Guy and Cash Girl",
            &[
                &[W, W, W, W, W, W, W, W],
                &[W, G, __, __, __, __, C, W],
                &[W, __, GW, __, __, CP, __, W],
                &[W, __, __, F, L, __, __, W],
                &[W, GK, __, __, __, __, CK, W],
                &[W, __, __, T, R, __, __, W],
                &[W, EG, __, __, __, __, EC, W],
                &[W, W, W, W, W, W, W, W],
            ],
        )
    })
}
