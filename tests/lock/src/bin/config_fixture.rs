//! Binary that runs `PcStore` through the config runner and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `config_fixture [budget]`
//!
//! Output: key=value lines on stdout. INFO logs go to stderr.

use costwise_harness::config::RunConfig;
use costwise_harness::runner::run_config;
use costwise_harness::worlds::pc_store::PcStore;
use costwise_kernel::proof::canon::f64_to_hex;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::INFO)
        .init();

    let budget = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<f64>().expect("budget must be a number"));
    let config = RunConfig {
        budget,
        ..RunConfig::default()
    };

    let outcome = run_config(&PcStore, &config).expect("config run failed");
    let result = &outcome.result;

    println!("report_digest={}", outcome.report.report_digest);
    println!("result_digest={}", outcome.report.result_digest);
    println!("policy_digest={}", outcome.report.policy_digest);
    println!("input_digest={}", outcome.report.input_digest);
    println!("feasible={}", result.is_feasible());
    if let Some(best) = &result.best {
        let selection: Vec<String> = best.selection.iter().map(ToString::to_string).collect();
        println!("selection={}", selection.join(","));
        println!("cost_bits={}", f64_to_hex(best.cost));
        println!("performance={}", best.performance);
        println!("ratio_bits={}", f64_to_hex(best.ratio));
    }
    println!("extractions={}", result.stats.extractions);
    println!("complete_evaluated={}", result.stats.complete_evaluated);
    println!("pruned={}", result.stats.pruned);
}
