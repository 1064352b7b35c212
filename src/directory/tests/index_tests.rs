//! Consistency checks between the card store and its skill index.

use super::worker_draft;
use crate::directory::{
    adapters::memory::InMemoryAgentDirectory,
    domain::{AgentCard, DiscoveryFilters, SkillId},
    services::AgentRegistryService,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

type TestService = AgentRegistryService<InMemoryAgentDirectory, DefaultClock>;

#[fixture]
fn service() -> TestService {
    AgentRegistryService::new(Arc::new(InMemoryAgentDirectory::new()), Arc::new(DefaultClock))
}

const SKILLS: [&str; 4] = ["web_search", "summarise", "translate", "unused"];

/// Checks both directions of the store/index relationship through the
/// public query surface.
async fn assert_consistent(service: &TestService) {
    let all = service.list_all().await.expect("list");
    for skill in SKILLS {
        let found = service
            .discover(skill, &DiscoveryFilters::none())
            .await
            .expect("discovery");
        let expected: Vec<&AgentCard> = all
            .iter()
            .filter(|card| card.skill_ids().any(|id| id.as_str() == skill))
            .collect();
        let found_refs: Vec<&AgentCard> = found.iter().collect();
        assert_eq!(found_refs, expected, "index disagrees for {skill}");
    }
}

#[rstest]
#[tokio::test]
async fn index_tracks_store_through_mixed_operations(service: TestService) {
    service
        .register(worker_draft("a", "http://h:1", &["web_search", "summarise"]))
        .await
        .expect("register a");
    service
        .register(worker_draft("b", "http://h:2", &["summarise"]))
        .await
        .expect("register b");
    assert_consistent(&service).await;

    service
        .register(worker_draft("a", "http://h:1", &["translate"]))
        .await
        .expect("replace a");
    assert_consistent(&service).await;

    service.deregister("b").await.expect("deregister b");
    assert_consistent(&service).await;

    service
        .register(worker_draft("c", "http://h:3", &[]))
        .await
        .expect("register c");
    service.deregister("a").await.expect("deregister a");
    assert_consistent(&service).await;

    let remaining: Vec<String> = service
        .list_all()
        .await
        .expect("list")
        .iter()
        .map(|card| card.agent_id().to_string())
        .collect();
    assert_eq!(remaining, vec!["c".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_are_all_recorded(service: TestService) {
    const AGENTS: usize = 32;

    let tasks: Vec<_> = (0..AGENTS)
        .map(|n| {
            let registry = service.clone();
            tokio::spawn(async move {
                let agent_id = format!("worker-{n:02}");
                let url = format!("http://h:{}", 8000 + n);
                registry
                    .register(worker_draft(&agent_id, &url, &["web_search"]))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("task joined").expect("registration");
    }

    let found = service
        .discover("web_search", &DiscoveryFilters::none())
        .await
        .expect("discovery");
    let unique: BTreeSet<&str> = found.iter().map(|card| card.agent_id().as_str()).collect();
    assert_eq!(found.len(), AGENTS);
    assert_eq!(unique.len(), AGENTS);
    assert_consistent(&service).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_churn_on_one_agent_leaves_single_card(service: TestService) {
    let tasks: Vec<_> = (0_u32..16)
        .map(|n| {
            let registry = service.clone();
            tokio::spawn(async move {
                let skill = if n.is_multiple_of(2) { "web_search" } else { "summarise" };
                registry
                    .register(worker_draft("shared", "http://h:1", &[skill]))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("task joined").expect("registration");
    }

    let all = service.list_all().await.expect("list");
    assert_eq!(all.len(), 1);
    assert_consistent(&service).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn discovery_during_churn_never_sees_torn_state(service: TestService) {
    const WRITERS: u32 = 4;
    const ROUNDS: u32 = 50;
    let web_search = SkillId::new("web_search").expect("skill");
    let done = Arc::new(AtomicBool::new(false));
    let reads = Arc::new(AtomicUsize::new(0));

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let registry = service.clone();
            let stop = Arc::clone(&done);
            let count = Arc::clone(&reads);
            let skill = web_search.clone();
            tokio::spawn(async move {
                while !stop.load(Ordering::SeqCst) {
                    let found = registry
                        .discover("web_search", &DiscoveryFilters::none())
                        .await
                        .expect("discovery");
                    assert!(
                        found.iter().all(|card| card.advertises(&skill)),
                        "discovered a card that no longer advertises web_search"
                    );
                    let ids: Vec<&str> = found.iter().map(|card| card.agent_id().as_str()).collect();
                    assert!(
                        ids.windows(2).all(|pair| pair.first() < pair.get(1)),
                        "discovery returned duplicate or unordered ids: {ids:?}"
                    );
                    count.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    let writers: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let registry = service.clone();
            tokio::spawn(async move {
                let agent_id = format!("churn-{writer}");
                for round in 0..ROUNDS {
                    let skill = if round.is_multiple_of(2) { "web_search" } else { "translate" };
                    registry
                        .register(worker_draft(&agent_id, "http://h:1", &[skill]))
                        .await
                        .expect("registration");
                    if round.is_multiple_of(5) {
                        registry.deregister(&agent_id).await.expect("deregistration");
                    }
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for writer in writers {
        writer.await.expect("writer joined");
    }
    done.store(true, Ordering::SeqCst);
    for reader in readers {
        reader.await.expect("reader joined");
    }

    assert!(reads.load(Ordering::SeqCst) > 0);
    assert_consistent(&service).await;
}
