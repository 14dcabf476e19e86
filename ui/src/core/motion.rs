//! Entrance stagger timings shared by the hero tiles and map pins.

/// Delay between consecutive hero tiles.
pub const TILE_STEP_MS: u32 = 100;

/// Map pins wait for the map itself to fade in before staggering.
pub const PIN_BASE_MS: u32 = 500;
pub const PIN_STEP_MS: u32 = 100;

pub fn stagger_delay_ms(index: usize, base_ms: u32, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

pub fn tile_delay_ms(index: usize) -> u32 {
    stagger_delay_ms(index, 0, TILE_STEP_MS)
}

pub fn pin_delay_ms(index: usize) -> u32 {
    stagger_delay_ms(index, PIN_BASE_MS, PIN_STEP_MS)
}
