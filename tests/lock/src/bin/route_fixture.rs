//! Binary that runs `DroneDelivery` through the route runner and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `route_fixture`
//!
//! Output: key=value lines on stdout. INFO logs go to stderr.

use costwise_harness::config::RunConfig;
use costwise_harness::runner::run_route;
use costwise_harness::worlds::drone_delivery::DroneDelivery;
use costwise_kernel::proof::canon::f64_to_hex;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::INFO)
        .init();

    let outcome = run_route(&DroneDelivery, &RunConfig::default()).expect("route run failed");
    let result = &outcome.result;
    let path: Vec<String> = result.path.iter().map(ToString::to_string).collect();

    println!("report_digest={}", outcome.report.report_digest);
    println!("result_digest={}", outcome.report.result_digest);
    println!("policy_digest={}", outcome.report.policy_digest);
    println!("input_digest={}", outcome.report.input_digest);
    println!("found={}", result.is_found());
    println!("path={}", path.join(","));
    println!("cost_bits={}", f64_to_hex(result.cost));
    println!("extractions={}", result.stats.extractions);
    println!("stale_discarded={}", result.stats.stale_discarded);
    println!("trace_len={}", result.trace.len());
}
