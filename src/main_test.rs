use super::*;

#[test]
fn missing_dotenv_file_is_not_a_failure() {
    let result = Err(dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound)));
    assert!(dotenv_failure(&result).is_none());
}

#[test]
fn loaded_dotenv_file_is_not_a_failure() {
    let result = Ok(PathBuf::from(".env"));
    assert!(dotenv_failure(&result).is_none());
}

#[test]
fn malformed_dotenv_file_is_reported() {
    let result = Err(dotenvy::Error::LineParse("APPWRITE_KEY='open".to_owned(), 12));
    assert!(dotenv_failure(&result).is_some());
}

#[test]
fn unreadable_dotenv_file_is_reported() {
    let result = Err(dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied)));
    assert!(dotenv_failure(&result).is_some());
}

#[test]
fn config_errors_exit_with_two() {
    let err = CliError::Config(ConfigError::Missing { vars: vec!["APPWRITE_KEY"] });
    assert_eq!(err.exit_code(), 2);
    assert_eq!(CliError::Submit(SubmitError::InFlight).exit_code(), 1);
}
