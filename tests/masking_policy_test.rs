//! Masking decisions against the built-in policy

use azure_config_loader::masking::{should_mask, MaskRule, MaskingPolicy};
use test_case::test_case;

#[test_case("client-secret", true ; "always mask list")]
#[test_case("connection-string", true ; "connection string")]
#[test_case("storage-account-key", true ; "ends with key")]
#[test_case("db-password-hint", true ; "contains password")]
#[test_case("oauth-credentials", true ; "contains credential")]
#[test_case("secret-database-id", false ; "safe id pattern wins over secret")]
#[test_case("token-url", false ; "safe url pattern wins over token")]
#[test_case("subscription-id", false ; "never mask list")]
#[test_case("Location", false ; "location any case")]
#[test_case("app-service-plan", false ; "no rule matches")]
fn test_builtin_decisions(field: &str, expected: bool) {
    let policy = MaskingPolicy::builtin().unwrap();
    assert_eq!(should_mask(field, &policy), expected);
}

#[test]
fn test_never_mask_beats_caller_always_mask() {
    let policy = MaskingPolicy::from_inputs(Some("tenant-id, build-id"), None).unwrap();
    assert!(!policy.should_mask("tenant-id"));
    assert_eq!(policy.evaluate("build-id").rule, MaskRule::AlwaysMask);
}

#[test]
fn test_caller_safe_fields_beat_always_mask() {
    let policy = MaskingPolicy::from_inputs(None, Some("password")).unwrap();
    let decision = policy.evaluate("password");
    assert!(!decision.masked);
    assert_eq!(decision.rule, MaskRule::NeverMask);
}

#[test]
fn test_exact_lists_are_case_sensitive() {
    let policy = MaskingPolicy::from_inputs(Some("Build-Number"), None).unwrap();
    assert!(!policy.should_mask("build-number"));
    assert!(policy.should_mask("Build-Number"));
}
