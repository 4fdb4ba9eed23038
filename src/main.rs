use bbh::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use log::info;

use std::path::PathBuf;

const SCENARIO_FILE: &str = "binary_pn1.yaml";

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(SCENARIO_FILE);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    let trajectory = scenario.run()?;
    if let Some(last) = trajectory.last() {
        info!("final position: ({:.3}, {:.3}, {:.3})", last.x, last.y, last.z);
    }

    // the (x, y, z) series a plotting consumer takes
    let (x, y, z) = trajectory.into_xyz();

    // radius range of body 2 around the primary at the origin
    let (r_min, r_max) = x
        .iter()
        .zip(&y)
        .zip(&z)
        .map(|((x, y), z)| (x * x + y * y + z * z).sqrt())
        .fold((f64::INFINITY, 0.0f64), |(lo, hi), r| (lo.min(r), hi.max(r)));

    info!("radius range: [{r_min:.3}, {r_max:.3}] over {} samples", x.len());

    Ok(())
}
