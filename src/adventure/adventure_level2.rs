// Adventure Level 2: a water channel splits the room; only Cash can cross it.
use super::codes::*;
use super::LevelDesc;
use std::sync::OnceLock;

pub fn level2() -> &'static LevelDesc {
    static LD: OnceLock<LevelDesc> = OnceLock::new();
    LD.get_or_init(|| {
        LevelDesc::from_rows(
            2,
            "Weight & Float",
            "Use Gold Guy's weight and Cash Girl's floating ability",
            &[
                &[W, W, W, W, W, W, W, W, W, W],
                &[W, G, __, GW, __, __, __, C, __, W],
                &[W, __, __, __, __, WA, __, __, __, W],
                &[W, __, F, __, __, WA, __, __, L, W],
                &[W, __, __, __, __, WA, __, CP, __, W],
                &[W, GK, __, __, __, __, __, __, CK, W],
                &[W, __, __, R, __, B, __, T, __, W],
                &[W, EG, __, __, __, __, __, __, EC, W],
                &[W, W, W, W, W, W, W, W, W, W],
            ],
        )
    })
}
