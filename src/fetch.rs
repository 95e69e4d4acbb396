//! Concurrent snapshot assembly for the configured package list

use futures::future::join_all;
use tracing::{debug, warn};

use crate::registry::source::MetadataSource;
use crate::registry::spec::PackageSpec;
use crate::registry::types::PackageRecord;

/// Fetch metadata for every identifier in `specs` concurrently.
///
/// Lookups run in parallel and are joined in input order, so the returned
/// snapshot is an order-preserving subsequence of `specs`. A failed lookup
/// is logged and omitted from the snapshot; it never aborts the rest of the
/// batch. There is no per-lookup or overall timeout.
pub async fn fetch_snapshot(source: &dyn MetadataSource, specs: &[String]) -> Vec<PackageRecord> {
    let futures = specs.iter().map(|raw| async move {
        let spec = PackageSpec::parse(raw);
        match source.lookup(&spec.name, &spec.tag).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Failed to fetch {}@{}: {}", spec.name, spec.tag, e);
                None
            }
        }
    });

    let results = join_all(futures).await;

    let failed = results.iter().filter(|slot| slot.is_none()).count();
    if failed > 0 {
        warn!("{} of {} lookups failed this refresh", failed, specs.len());
    }
    debug!(
        "Assembled snapshot with {} packages",
        results.len() - failed
    );

    results.into_iter().flatten().collect()
}
