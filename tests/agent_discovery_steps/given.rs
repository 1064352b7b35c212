//! Given steps for agent discovery BDD scenarios.

use super::world::{DiscoveryWorld, build_card, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty agent directory")]
fn empty_directory(world: &DiscoveryWorld) -> Result<(), eyre::Report> {
    let all = run_async(world.service.list_all()).wrap_err("list directory")?;
    if !all.is_empty() {
        return Err(eyre::eyre!("expected an empty directory, found {}", all.len()));
    }
    Ok(())
}

#[given(r#"a worker "{agent_id}" at "{url}" offering "{skills}""#)]
fn registered_worker(
    world: &mut DiscoveryWorld,
    agent_id: String,
    url: String,
    skills: String,
) -> Result<(), eyre::Report> {
    let card = run_async(world.service.register(build_card(&agent_id, &url, &skills)))
        .wrap_err("register worker for scenario")?;
    world.last_register_result = Some(Ok(card));
    Ok(())
}
