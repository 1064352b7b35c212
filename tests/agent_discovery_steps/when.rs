//! When steps for agent discovery BDD scenarios.

use super::world::{DiscoveryWorld, build_card, run_async};
use rstest_bdd_macros::when;

#[when(r#""{agent_id}" is registered at "{url}" offering "{skills}""#)]
fn register_worker(
    world: &mut DiscoveryWorld,
    agent_id: String,
    url: String,
    skills: String,
) -> Result<(), eyre::Report> {
    run_async(world.service.register(build_card(&agent_id, &url, &skills)))
        .map_err(|err| eyre::eyre!("unexpected registration failure: {err}"))?;
    Ok(())
}

#[when(r#"a card for "{agent_id}" with url "{url}" is registered"#)]
fn register_card(world: &mut DiscoveryWorld, agent_id: String, url: String) {
    let draft = build_card(&agent_id, &url, "web_search");
    world.last_register_result = Some(run_async(world.service.register(draft)));
}

#[when(r#""{agent_id}" is deregistered"#)]
fn deregister_worker(world: &mut DiscoveryWorld, agent_id: String) -> Result<(), eyre::Report> {
    run_async(world.service.deregister(&agent_id))
        .map_err(|err| eyre::eyre!("deregistration failed: {err}"))?;
    Ok(())
}
