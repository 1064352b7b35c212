//! Unit tests for agent directory domain types.

use super::{SteppingClock, worker_draft};
use crate::directory::domain::{
    AgentCard, AgentCardDraft, AgentId, AgentUrl, DirectoryDomainError, DiscoveryFilters,
    LivenessPolicy, SkillDraft, SkillId,
};
use mockable::DefaultClock;
use rstest::rstest;
use std::time::Duration;

// ── Identifiers ────────────────────────────────────────────────────

#[rstest]
fn agent_id_is_trimmed() {
    let id = AgentId::new("  w1 ").expect("valid id");
    assert_eq!(id.as_str(), "w1");
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_agent_id_is_rejected(#[case] input: &str) {
    assert_eq!(AgentId::new(input), Err(DirectoryDomainError::EmptyAgentId));
}

#[rstest]
fn blank_skill_id_is_rejected() {
    assert_eq!(SkillId::new(" "), Err(DirectoryDomainError::EmptySkillId));
}

#[rstest]
fn agent_id_rejects_blank_value_when_decoded() {
    let decoded = serde_json::from_str::<AgentId>("\"  \"");
    assert!(decoded.is_err());
}

// ── Endpoint URLs ──────────────────────────────────────────────────

#[rstest]
#[case("http://h:8001", "http://h:8001")]
#[case("https://agents.example.com/", "https://agents.example.com")]
#[case("  http://localhost:8001/a2a  ", "http://localhost:8001/a2a")]
fn valid_urls_are_normalised(#[case] input: &str, #[case] expected: &str) {
    let url = AgentUrl::new(input).expect("valid url");
    assert_eq!(url.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("  ")]
fn blank_url_is_rejected(#[case] input: &str) {
    assert_eq!(AgentUrl::new(input), Err(DirectoryDomainError::EmptyUrl));
}

#[rstest]
#[case("ftp://h:8001")]
#[case("h:8001")]
#[case("http://")]
#[case("http://:8001")]
#[case("http://bad host")]
fn malformed_url_is_rejected(#[case] input: &str) {
    assert!(matches!(
        AgentUrl::new(input),
        Err(DirectoryDomainError::InvalidUrl(_))
    ));
}

#[rstest]
#[case("http://h:8001", "http://h:8001/a2a")]
#[case("http://h:8001/a2a", "http://h:8001/a2a")]
#[case("http://h:8001/agents/search", "http://h:8001/agents/search/a2a")]
fn join_appends_path_once(#[case] base: &str, #[case] expected: &str) {
    let url = AgentUrl::new(base).expect("valid url");
    assert_eq!(url.join("/a2a"), expected);
}

// ── Card validation ────────────────────────────────────────────────

#[rstest]
fn card_from_draft_stamps_both_timestamps() {
    let clock = SteppingClock::new();
    let card = AgentCard::from_draft(
        worker_draft("w1", "http://h:8001", &["web_search"]),
        &clock,
    )
    .expect("valid card");

    assert_eq!(card.registered_at(), card.last_seen_at());
    assert_eq!(card.agent_id().as_str(), "w1");
    assert!(card.advertises(&SkillId::new("web_search").expect("skill")));
}

#[rstest]
fn card_with_zero_skills_is_accepted() {
    let card = AgentCard::from_draft(worker_draft("w0", "http://h:8000", &[]), &DefaultClock)
        .expect("cards without skills are valid");
    assert!(card.skills().is_empty());
}

#[rstest]
#[case(AgentCardDraft::new("", "Worker", "http://h:1"), DirectoryDomainError::EmptyAgentId)]
#[case(AgentCardDraft::new("w1", " ", "http://h:1"), DirectoryDomainError::EmptyAgentName)]
#[case(AgentCardDraft::new("w1", "Worker", ""), DirectoryDomainError::EmptyUrl)]
#[case(
    AgentCardDraft::new("w1", "Worker", "http://h:1").with_skill(SkillDraft::new("  ")),
    DirectoryDomainError::EmptySkillId
)]
fn incomplete_card_is_rejected(#[case] draft: AgentCardDraft, #[case] expected: DirectoryDomainError) {
    assert_eq!(AgentCard::from_draft(draft, &DefaultClock), Err(expected));
}

#[rstest]
fn duplicate_skill_ids_on_one_card_are_rejected() {
    let draft = worker_draft("w1", "http://h:8001", &["web_search", "summarise", "web_search"]);
    assert_eq!(
        AgentCard::from_draft(draft, &DefaultClock),
        Err(DirectoryDomainError::DuplicateSkill("web_search".to_owned()))
    );
}

#[rstest]
fn blank_optional_metadata_is_dropped() {
    let draft = worker_draft("w1", "http://h:8001", &["web_search"])
        .with_description("   ")
        .with_version("1.1.0");
    let card = AgentCard::from_draft(draft, &DefaultClock).expect("valid card");
    assert_eq!(card.description(), None);
    assert_eq!(card.version(), Some("1.1.0"));
}

#[rstest]
fn card_round_trips_through_its_draft() {
    let draft = worker_draft("w1", "http://h:8001", &["web_search"])
        .with_description("Searches the web")
        .with_version("1.1.0");
    let card = AgentCard::from_draft(draft.clone(), &DefaultClock).expect("valid card");
    assert_eq!(card.to_draft(), draft);
}

#[rstest]
fn draft_decodes_with_missing_fields_as_blank() {
    let draft: AgentCardDraft =
        serde_json::from_str(r#"{"name": "Worker"}"#).expect("lenient decoding");
    assert_eq!(
        AgentCard::from_draft(draft, &DefaultClock),
        Err(DirectoryDomainError::EmptyAgentId)
    );
}

#[rstest]
fn decoded_card_keeps_wire_timestamps() {
    let clock = SteppingClock::new();
    let card = AgentCard::from_draft(worker_draft("w1", "http://h:8001", &["web_search"]), &clock)
        .expect("valid card");
    let encoded = serde_json::to_value(&card).expect("encodes");
    let decoded: AgentCard = serde_json::from_value(encoded).expect("decodes");
    assert_eq!(decoded, card);
}

#[rstest]
#[case(serde_json::json!({
    "agent_id": "w1", "name": "Worker", "url": "http://h:8001",
    "skills": [{"skill_id": "web_search"}, {"skill_id": "web_search"}],
    "registered_at": "2026-01-01T00:00:00Z", "last_seen_at": "2026-01-01T00:00:00Z"
}))]
#[case(serde_json::json!({
    "agent_id": "w1", "name": "  ", "url": "http://h:8001",
    "registered_at": "2026-01-01T00:00:00Z", "last_seen_at": "2026-01-01T00:00:00Z"
}))]
#[case(serde_json::json!({
    "agent_id": "w1", "name": "Worker", "url": "http://h:8001"
}))]
fn decoding_rejects_invalid_cards(#[case] wire: serde_json::Value) {
    assert!(serde_json::from_value::<AgentCard>(wire).is_err());
}

// ── Liveness and filters ───────────────────────────────────────────

#[rstest]
fn zero_liveness_timeout_is_rejected() {
    assert_eq!(
        LivenessPolicy::new(Duration::ZERO),
        Err(DirectoryDomainError::InvalidLivenessTimeout(Duration::ZERO))
    );
}

#[rstest]
fn liveness_policy_expires_cards_older_than_timeout() {
    let clock = SteppingClock::new();
    let card = AgentCard::from_draft(worker_draft("w1", "http://h:1", &["s"]), &clock)
        .expect("valid card");
    let policy = LivenessPolicy::new(Duration::from_secs(300)).expect("valid policy");

    clock.advance_secs(300);
    assert!(!policy.is_expired(&card, mockable::Clock::utc(&clock)));

    clock.advance_secs(1);
    assert!(policy.is_expired(&card, mockable::Clock::utc(&clock)));
}

#[rstest]
fn filters_drop_stale_cards_and_truncate() {
    let clock = SteppingClock::new();
    let old = AgentCard::from_draft(worker_draft("a", "http://h:1", &["s"]), &clock)
        .expect("valid card");
    clock.advance_secs(120);
    let fresh_b = AgentCard::from_draft(worker_draft("b", "http://h:2", &["s"]), &clock)
        .expect("valid card");
    let fresh_c = AgentCard::from_draft(worker_draft("c", "http://h:3", &["s"]), &clock)
        .expect("valid card");
    let now = mockable::Clock::utc(&clock);

    let by_age = DiscoveryFilters::none()
        .with_max_age_secs(60)
        .apply(vec![old.clone(), fresh_b.clone(), fresh_c.clone()], now);
    assert_eq!(by_age, vec![fresh_b.clone(), fresh_c]);

    let limited = DiscoveryFilters::none()
        .with_limit(2)
        .apply(vec![old.clone(), fresh_b.clone()], now);
    assert_eq!(limited, vec![old, fresh_b]);
}
