use super::*;
use std::collections::HashMap;

fn full_env() -> HashMap<&'static str, String> {
    HashMap::from([
        (ENDPOINT_VAR, "https://cloud.example.test/v1/".to_owned()),
        (PROJECT_ID_VAR, "proj-1".to_owned()),
        (DATABASE_ID_VAR, "db-1".to_owned()),
        (USERS_COLLECTION_VAR, "users".to_owned()),
        (FILES_COLLECTION_VAR, "files".to_owned()),
        (BUCKET_ID_VAR, "bucket-1".to_owned()),
        (SECRET_KEY_VAR, "super-secret".to_owned()),
    ])
}

fn load_from(env: &HashMap<&'static str, String>) -> Result<Config, ConfigError> {
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn from_lookup_reads_every_value() {
    let cfg = load_from(&full_env()).unwrap();
    assert_eq!(cfg.endpoint_url, "https://cloud.example.test/v1");
    assert_eq!(cfg.project_id, "proj-1");
    assert_eq!(cfg.database_id, "db-1");
    assert_eq!(cfg.users_collection_id, "users");
    assert_eq!(cfg.files_collection_id, "files");
    assert_eq!(cfg.bucket_id, "bucket-1");
    assert_eq!(cfg.secret_key(), "super-secret");
}

#[test]
fn from_lookup_trims_surrounding_whitespace() {
    let mut env = full_env();
    env.insert(PROJECT_ID_VAR, "  proj-2 \n".to_owned());
    let cfg = load_from(&env).unwrap();
    assert_eq!(cfg.project_id, "proj-2");
}

#[test]
fn empty_value_is_reported_by_name() {
    let mut env = full_env();
    env.insert(DATABASE_ID_VAR, String::new());
    let err = load_from(&env).unwrap_err();
    assert_eq!(err.missing_vars(), &[DATABASE_ID_VAR]);
    assert!(err.to_string().contains("APPWRITE_DATABASE"));
}

#[test]
fn blank_value_counts_as_missing() {
    let mut env = full_env();
    env.insert(SECRET_KEY_VAR, "   ".to_owned());
    let err = load_from(&env).unwrap_err();
    assert_eq!(err.missing_vars(), &[SECRET_KEY_VAR]);
}

#[test]
fn slash_only_endpoint_counts_as_missing() {
    for endpoint in ["/", "///", " / "] {
        let mut env = full_env();
        env.insert(ENDPOINT_VAR, endpoint.to_owned());
        let err = load_from(&env).unwrap_err();
        assert_eq!(err.missing_vars(), &[ENDPOINT_VAR], "endpoint {endpoint:?}");
    }
}

#[test]
fn slashes_are_kept_on_other_values() {
    let mut env = full_env();
    env.insert(PROJECT_ID_VAR, "proj/".to_owned());
    assert_eq!(load_from(&env).unwrap().project_id, "proj/");
}

#[test]
fn files_collection_reads_users_files_var() {
    let mut env = full_env();
    env.remove(FILES_COLLECTION_VAR);
    let err = load_from(&env).unwrap_err();
    assert_eq!(err.to_string(), "missing required environment variables: APPWRITE_USERS_FILES");
}

#[test]
fn every_missing_value_is_reported_in_order() {
    let mut env = full_env();
    env.remove(BUCKET_ID_VAR);
    env.remove(ENDPOINT_VAR);
    let err = load_from(&env).unwrap_err();
    assert_eq!(err.missing_vars(), &[ENDPOINT_VAR, BUCKET_ID_VAR]);
    assert_eq!(
        err.to_string(),
        "missing required environment variables: APPWRITE_ENDPOINT, APPWRITE_STORAGE"
    );
}

#[test]
fn nothing_set_reports_all_seven() {
    let err = Config::from_lookup(|_| None).unwrap_err();
    assert_eq!(err.missing_vars(), &REQUIRED_VARS);
}

#[test]
fn debug_output_redacts_secret() {
    let cfg = load_from(&full_env()).unwrap();
    let dbg = format!("{cfg:?}");
    assert!(dbg.contains("proj-1"));
    assert!(!dbg.contains("super-secret"));
    assert!(dbg.contains("<redacted>"));
}

/// The only test that touches the real process environment for these keys.
#[test]
fn load_reads_process_env_and_fails_on_empty_var() {
    unsafe {
        for (key, value) in full_env() {
            std::env::set_var(key, value);
        }
        std::env::set_var(USERS_COLLECTION_VAR, "");
    }

    let err = Config::load().unwrap_err();
    assert_eq!(err.missing_vars(), &[USERS_COLLECTION_VAR]);

    unsafe { std::env::set_var(USERS_COLLECTION_VAR, "users") };
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.users_collection_id, "users");

    unsafe {
        for key in REQUIRED_VARS {
            std::env::remove_var(key);
        }
    }
}
