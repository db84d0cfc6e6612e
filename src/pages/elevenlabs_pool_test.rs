use super::*;

#[test]
fn health_summary_reports_ratio() {
    let report = PoolHealthReport { checked: 4, healthy: 3 };
    assert_eq!(health_summary(&report), "3 of 4 credentials healthy");
}

#[test]
fn sync_summary_reports_agent_count() {
    let report = AgentSyncReport { agents_synced: 12 };
    assert_eq!(sync_summary(&report), "Synced 12 agents");
}
