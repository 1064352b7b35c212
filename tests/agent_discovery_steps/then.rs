//! Then steps for agent discovery BDD scenarios.

use super::world::{DiscoveryWorld, run_async, split_ids};
use switchboard::directory::{domain::DiscoveryFilters, services::RegistryServiceError};
use rstest_bdd_macros::then;

fn discovered_ids(world: &DiscoveryWorld, skill: &str) -> Result<Vec<String>, eyre::Report> {
    let cards = run_async(world.service.discover(skill, &DiscoveryFilters::none()))
        .map_err(|err| eyre::eyre!("discover failed: {err}"))?;
    Ok(cards
        .iter()
        .map(|card| card.agent_id().as_str().to_owned())
        .collect())
}

#[then(r#"discovering "{skill}" returns only "{agent_id}""#)]
fn discover_returns_only(
    world: &DiscoveryWorld,
    skill: String,
    agent_id: String,
) -> Result<(), eyre::Report> {
    let ids = discovered_ids(world, &skill)?;
    if ids != [agent_id.clone()] {
        return Err(eyre::eyre!("expected only '{agent_id}' for '{skill}', found {ids:?}"));
    }
    Ok(())
}

#[then(r#"discovering "{skill}" returns no agents"#)]
fn discover_returns_nothing(world: &DiscoveryWorld, skill: String) -> Result<(), eyre::Report> {
    let ids = discovered_ids(world, &skill)?;
    if !ids.is_empty() {
        return Err(eyre::eyre!("expected no agents for '{skill}', found {ids:?}"));
    }
    Ok(())
}

#[then(r#"discovering "{skill}" returns agents "{ids}""#)]
fn discover_returns_in_order(
    world: &DiscoveryWorld,
    skill: String,
    ids: String,
) -> Result<(), eyre::Report> {
    let expected = split_ids(&ids);
    let found = discovered_ids(world, &skill)?;
    if found != expected {
        return Err(eyre::eyre!("expected {expected:?} for '{skill}', found {found:?}"));
    }
    Ok(())
}

#[then("the directory holds {count:usize} cards")]
fn directory_holds(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let all =
        run_async(world.service.list_all()).map_err(|err| eyre::eyre!("list_all failed: {err}"))?;
    if all.len() != count {
        return Err(eyre::eyre!("expected {count} cards, found {}", all.len()));
    }
    Ok(())
}

#[then(r#"the card for "{agent_id}" has url "{url}""#)]
fn card_has_url(world: &DiscoveryWorld, agent_id: String, url: String) -> Result<(), eyre::Report> {
    let card = run_async(world.service.find_by_id(&agent_id))
        .map_err(|err| eyre::eyre!("find_by_id failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected '{agent_id}' to be registered"))?;
    if card.url().as_str() != url {
        return Err(eyre::eyre!("expected url '{url}', found '{}'", card.url()));
    }
    Ok(())
}

#[then("registration fails with a validation error")]
fn registration_fails_validation(world: &DiscoveryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(RegistryServiceError::Domain(_))) {
        return Err(eyre::eyre!("expected a validation error, got {result:?}"));
    }
    Ok(())
}
