//! End-to-end tests for the redaction engine against realistic
//! user-record messages.

use pd_redact::{FieldPolicy, RedactionError, Redactor, PII_FIELDS};
use std::io::Write;

#[test]
fn default_policy_redacts_a_full_user_record() {
    let redactor = Redactor::from_policy(&FieldPolicy::default()).unwrap();
    let message = "name=Marlene Wood;email=hwestiii@att.net;phone=(473) 401-4253;\
                   ssn=261-72-6780;password=K5?rPXov;ip=e848:e856:4e0b;\
                   last_login=2019-11-14T06:14:24;user_agent=Mozilla/5.0;";

    let out = redactor.redact(message);

    assert!(out.contains("name=***;"));
    assert!(out.contains("email=***;"));
    assert!(out.contains("phone=***;"));
    assert!(out.contains("ssn=***;"));
    assert!(out.contains("password=***;"));
    // Non-sensitive fields pass through untouched.
    assert!(out.contains("ip=e848:e856:4e0b;"));
    assert!(out.contains("last_login=2019-11-14T06:14:24;"));
    assert!(out.contains("user_agent=Mozilla/5.0;"));
    // None of the sensitive values survive.
    for leaked in ["Marlene Wood", "hwestiii", "401-4253", "261-72", "K5?rPXov"] {
        assert!(!out.contains(leaked), "leaked value: {}", leaked);
    }
}

#[test]
fn policy_file_drives_redaction() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"fields": ["token"], "token": "<redacted>", "separator": "&"}}"#
    )
    .unwrap();

    let policy = FieldPolicy::load(file.path()).unwrap();
    let redactor = Redactor::from_policy(&policy).unwrap();

    assert_eq!(
        redactor.redact("user=bob&token=sk-12345&scope=read"),
        "user=bob&token=<redacted>&scope=read"
    );
}

#[test]
fn invalid_policy_file_fails_at_compile_time() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"fields": [""]}}"#).unwrap();

    let policy = FieldPolicy::load(file.path()).unwrap();
    let err = Redactor::from_policy(&policy).unwrap_err();
    assert!(matches!(err, RedactionError::InvalidConfiguration(_)));
}

#[test]
fn pii_field_set_is_stable() {
    assert_eq!(PII_FIELDS, ["name", "email", "phone", "ssn", "password"]);
}

#[test]
fn double_redaction_of_a_record_is_stable() {
    let redactor = Redactor::from_policy(&FieldPolicy::default()).unwrap();
    let message = "name=John Doe;email=john@example.com;phone=555-0100;";

    let once = redactor.redact(message);
    assert_eq!(once, "name=***;email=***;phone=***;");
    assert_eq!(redactor.redact(&once), once);
}
