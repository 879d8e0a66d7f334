use super::*;

#[test]
fn parse_accepts_canonical_names() {
    assert_eq!("sign-in".parse::<FormMode>(), Ok(FormMode::SignIn));
    assert_eq!("sign-up".parse::<FormMode>(), Ok(FormMode::SignUp));
}

#[test]
fn parse_is_case_and_dash_tolerant() {
    assert_eq!(" Sign-Up ".parse::<FormMode>(), Ok(FormMode::SignUp));
    assert_eq!("SIGNIN".parse::<FormMode>(), Ok(FormMode::SignIn));
}

#[test]
fn parse_rejects_unknown() {
    let err = "login".parse::<FormMode>().unwrap_err();
    assert!(err.to_string().contains("unknown form mode 'login'"));
}

#[test]
fn display_matches_parse() {
    for mode in [FormMode::SignIn, FormMode::SignUp] {
        assert_eq!(mode.to_string().parse::<FormMode>(), Ok(mode));
    }
}

#[test]
fn alternate_links_to_the_other_screen() {
    assert_eq!(FormMode::SignIn.alternate().route(), "/sign-up");
    assert_eq!(FormMode::SignUp.alternate().route(), "/sign-in");
    assert_eq!(FormMode::SignIn.switch_prompt().1, "Sign up");
    assert_eq!(FormMode::SignUp.switch_prompt().1, "Sign in");
}

#[test]
fn only_sign_up_requires_full_name() {
    assert!(FormMode::SignUp.requires_full_name());
    assert!(!FormMode::SignIn.requires_full_name());
}

#[test]
fn copy_differs_per_mode() {
    assert_eq!(FormMode::SignIn.title(), "Welcome Back");
    assert_eq!(FormMode::SignUp.submit_label(), "Create Account");
    assert_ne!(FormMode::SignIn.subtitle(), FormMode::SignUp.subtitle());
}
