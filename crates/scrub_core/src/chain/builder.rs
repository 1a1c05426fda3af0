//! Deterministic mode-to-chain mapping.

use crate::models::ProcessingMode;

use super::stage::{FilterChain, FilterStage};

/// Gate threshold, authored in dB.
///
/// The engine's gate filter in this build takes linear amplitude (0-1),
/// not dB, so both gate parameters are converted at assembly time.
const GATE_THRESHOLD_DB: f64 = -35.0;

/// Gate range (gain reduction below threshold), authored in dB.
const GATE_RANGE_DB: f64 = -24.0;

/// Build the filter chain for a mode.
///
/// Raw prepends the cleaning group to the leveling group; ZoomTeams gets
/// the leveling group alone. The leveling group is always present and
/// always last.
pub fn build_chain(mode: ProcessingMode) -> FilterChain {
    let mut stages = Vec::new();
    if mode == ProcessingMode::Raw {
        stages.extend(cleaning_stages());
    }
    stages.extend(leveling_stages());
    FilterChain::new(stages)
}

/// Repair and denoise group for raw recordings.
///
/// Order is load-bearing: each stage assumes the previous stage's output
/// characteristics (e.g. the gate sees audio the denoiser already
/// lowered the floor of).
fn cleaning_stages() -> Vec<FilterStage> {
    vec![
        FilterStage::new("adeclip"),
        FilterStage::new("highpass").param("f", "80"),
        FilterStage::new("adeclick"),
        FilterStage::new("afftdn").param("nf", "-25"),
        FilterStage::new("agate")
            .param("threshold", format_linear(GATE_THRESHOLD_DB))
            .param("range", format_linear(GATE_RANGE_DB)),
    ]
}

/// Leveling group, applied in every mode.
fn leveling_stages() -> Vec<FilterStage> {
    vec![
        FilterStage::new("dynaudnorm")
            .param("f", "200")
            .param("g", "11")
            .param("p", "0.85")
            .param("m", "20")
            .param("s", "12"),
        FilterStage::new("loudnorm").param("I", "-12").param("TP", "-1.5"),
    ]
}

/// Convert a dB value to a linear amplitude ratio.
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Render a dB value as the linear parameter string the gate takes.
fn format_linear(db: f64) -> String {
    format!("{:.4}", db_to_linear(db))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELING: &str = "dynaudnorm=f=200:g=11:p=0.85:m=20:s=12,loudnorm=I=-12:TP=-1.5";

    #[test]
    fn zoom_teams_chain_is_leveling_only() {
        let chain = build_chain(ProcessingMode::ZoomTeams);
        assert_eq!(chain.render(), LEVELING);
        assert_eq!(chain.stage_names(), vec!["dynaudnorm", "loudnorm"]);
    }

    #[test]
    fn raw_chain_is_cleaning_then_leveling() {
        let chain = build_chain(ProcessingMode::Raw);
        assert_eq!(
            chain.render(),
            format!(
                "adeclip,highpass=f=80,adeclick,afftdn=nf=-25,\
                 agate=threshold=0.0178:range=0.0631,{}",
                LEVELING
            )
        );
        assert_eq!(
            chain.stage_names(),
            vec![
                "adeclip",
                "highpass",
                "adeclick",
                "afftdn",
                "agate",
                "dynaudnorm",
                "loudnorm"
            ]
        );
    }

    #[test]
    fn leveling_group_is_always_last_and_non_empty() {
        for mode in [ProcessingMode::Raw, ProcessingMode::ZoomTeams] {
            let chain = build_chain(mode);
            assert!(!chain.is_empty());
            let names = chain.stage_names();
            assert_eq!(names[names.len() - 2..], ["dynaudnorm", "loudnorm"]);
        }
    }

    #[test]
    fn db_to_linear_conversion() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
        assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-12);
        assert!((db_to_linear(-6.0) - 0.501187).abs() < 1e-6);
    }

    #[test]
    fn gate_parameters_are_linear_ratios() {
        let chain = build_chain(ProcessingMode::Raw);
        let gate = &chain.stages()[4];
        assert_eq!(gate.name(), "agate");
        for (key, value) in gate.params() {
            let parsed: f64 = value.parse().expect("gate param is numeric");
            assert!(
                (0.0..=1.0).contains(&parsed),
                "{}={} is not a linear 0-1 ratio",
                key,
                value
            );
        }
    }
}
