//! Behaviour tests for agent registration and skill discovery.

mod agent_discovery_steps;

use agent_discovery_steps::world::{DiscoveryWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/agent_discovery.feature",
    name = "Register, discover and deregister a worker"
)]
#[tokio::test(flavor = "multi_thread")]
async fn register_discover_deregister(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/agent_discovery.feature",
    name = "Re-registering replaces the stored card"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reregistration_replaces_card(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/agent_discovery.feature",
    name = "Re-registering with new skills moves the agent in the index"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reregistration_moves_skills(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/agent_discovery.feature",
    name = "Discovery lists capable agents in agent id order"
)]
#[tokio::test(flavor = "multi_thread")]
async fn discovery_is_ordered(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/agent_discovery.feature",
    name = "An invalid card leaves the directory unchanged"
)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_card_is_rejected(world: DiscoveryWorld) {
    let _ = world;
}
