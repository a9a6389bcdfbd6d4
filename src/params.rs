
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Clone, Serialize, Deserialize)]
pub struct Params {
    // --- Mobility / attack term ---

    // Credit per generated move, plus a little extra per examined target
    pub mobility_move: f64,
    pub mobility_target: f64,
    // Attacked/defended piece value is capped and scaled down
    pub attack_value_cap: f64,
    pub attack_value_scale: f64,
    // Center control: distance_from_edge(target) * opponent_material * scale
    pub center_control_scale: f64,

    // --- Phase thresholds (own material, kings excluded) ---
    pub opening_material: f64,
    pub endgame_material: f64,

    // --- Opening terms ---
    pub castling_right_bonus: f64,
    pub queen_development_penalty: f64,

    // --- Endgame terms ---
    pub king_activity_bonus: f64,

    // --- Pawn advance: offsides_rank^2 * scale per own pawn ---
    pub pawn_advance_scale: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mobility_move: 0.01,
            mobility_target: 0.001,
            attack_value_cap: 50.0,
            attack_value_scale: 0.01,
            center_control_scale: 0.001,

            opening_material: 35.0,
            endgame_material: 8.0,

            castling_right_bonus: 0.005,
            queen_development_penalty: 0.02,

            king_activity_bonus: 0.03,

            pawn_advance_scale: 0.001,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref PARAMS: RwLock<Params> = RwLock::new(Params::default());
}

pub fn load_params_from(path: &str) -> anyhow::Result<()> {
    let data = fs::read_to_string(path)?;
    let p: Params = serde_json::from_str(&data)?;
    *PARAMS.write() = p;
    Ok(())
}

pub fn save_params_to(path: &str) -> anyhow::Result<()> {
    let p = PARAMS.read().clone();
    let s = serde_json::to_string_pretty(&p)?;
    fs::write(path, s)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let p = Params::default();
        let s = serde_json::to_string(&p).unwrap();
        let q: Params = serde_json::from_str(&s).unwrap();
        assert_eq!(p.mobility_move, q.mobility_move);
        assert_eq!(p.castling_right_bonus, q.castling_right_bonus);
        assert_eq!(p.pawn_advance_scale, q.pawn_advance_scale);
    }
}
