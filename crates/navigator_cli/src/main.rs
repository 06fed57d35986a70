//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `navigator_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use navigator_core::{Catalog, InsightService};

fn main() {
    println!("navigator_core ping={}", navigator_core::ping());
    println!("navigator_core version={}", navigator_core::core_version());

    let service = InsightService::new(Catalog::builtin());
    for summary in service.catalog_summaries() {
        println!(
            "{} [{}] industry={} complexity={} payback={}",
            summary.id,
            summary.title,
            summary.industry,
            summary.complexity,
            summary.payback_period
        );
    }
}
