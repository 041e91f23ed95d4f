//! Field schemas for the account, onboarding and host-game forms.
//!
//! Each `validate_*` reports at most one message per field, the first rule
//! that field breaks. `submit_*` validates and, on success, produces the toast
//! the page shows plus where it navigates next.

use central_types::{
    FieldErrors, FormOutcome, HostGameForm, LoginForm, OnboardingForm, SignupForm, ToastInfo,
    ToastVariant,
};
use rand::Rng;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

pub const PLATFORMS: [&str; 4] = ["pc", "xbox", "playstation", "mobile"];
pub const REGIONS: [&str; 5] = ["north-america", "europe", "asia", "south-america", "oceania"];
pub const HOST_MAPS: [&str; 5] = ["erangel", "miramar", "sanhok", "vikendi", "karakin"];
pub const GAME_MODES: [&str; 2] = ["tpp", "fpp"];
pub const MATCH_TYPES: [&str; 3] = ["solo", "duo", "squad"];

const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Ids handed to newly hosted games are drawn from this range.
pub const HOSTED_GAME_IDS: std::ops::Range<u32> = 300..1300;

/// Accumulates the first failing message per field.
#[derive(Default)]
struct Checks {
    errors: FieldErrors,
}

impl Checks {
    fn check(&mut self, field: &str, ok: bool, message: &str) {
        if !ok && !self.errors.errors.contains_key(field) {
            self.errors
                .errors
                .insert(field.to_string(), message.to_string());
        }
    }

    fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_login(form: &LoginForm) -> Result<(), FieldErrors> {
    let mut checks = Checks::default();
    checks.check("email", is_valid_email(&form.email), EMAIL_MESSAGE);
    checks.check(
        "password",
        len(&form.password) >= 6,
        "Password must be at least 6 characters",
    );
    checks.finish()
}

pub fn validate_signup(form: &SignupForm) -> Result<(), FieldErrors> {
    let mut checks = Checks::default();
    checks.check(
        "username",
        len(&form.username) >= 3,
        "Username must be at least 3 characters",
    );
    checks.check("email", is_valid_email(&form.email), EMAIL_MESSAGE);
    checks.check(
        "password",
        len(&form.password) >= 8,
        "Password must be at least 8 characters",
    );
    checks.check(
        "terms_accepted",
        form.terms_accepted,
        "You must accept the terms and conditions",
    );
    // An unchecked terms box stops the form before the passwords are compared.
    if form.terms_accepted {
        checks.check(
            "confirm_password",
            form.password == form.confirm_password,
            "Passwords do not match",
        );
    }
    checks.finish()
}

pub fn validate_onboarding(form: &OnboardingForm) -> Result<(), FieldErrors> {
    let mut checks = Checks::default();
    checks.check(
        "pubg_username",
        len(&form.pubg_username) >= 3,
        "Username must be at least 3 characters",
    );
    checks.check(
        "platform",
        PLATFORMS.contains(&form.platform.as_str()),
        "Please select a platform",
    );
    checks.finish()
}

pub fn validate_host_game(form: &HostGameForm) -> Result<(), FieldErrors> {
    let mut checks = Checks::default();
    checks.check(
        "name",
        len(&form.name) >= 3,
        "Game name must be at least 3 characters",
    );
    checks.check(
        "description",
        len(&form.description) >= 10,
        "Description must be at least 10 characters",
    );
    checks.check(
        "description",
        len(&form.description) <= 300,
        "Description must be less than 300 characters",
    );
    checks.check(
        "region",
        REGIONS.contains(&form.region.as_str()),
        "Please select a region",
    );
    checks.check(
        "map_name",
        HOST_MAPS.contains(&form.map_name.as_str()),
        "Please select a map",
    );
    checks.check(
        "platform",
        PLATFORMS.contains(&form.platform.as_str()),
        "Please select a platform",
    );
    checks.check(
        "game_mode",
        GAME_MODES.contains(&form.game_mode.as_str()),
        "Please select a game mode",
    );
    checks.check(
        "match_type",
        MATCH_TYPES.contains(&form.match_type.as_str()),
        "Please select a match type",
    );
    checks.check(
        "player_limit",
        is_valid_player_limit(&form.player_limit),
        "Player limit must be a number between 1 and 100",
    );
    checks.finish()
}

pub fn submit_login(form: &LoginForm) -> Result<FormOutcome, FieldErrors> {
    validate_login(form).map_err(|errors| rejected("login", errors))?;
    tracing::info!(form = "login", remember_me = form.remember_me.unwrap_or(false), "form submitted");
    Ok(FormOutcome {
        toast: toast(
            "Login Attempted",
            Some("This is a demo. Authentication is not yet implemented."),
            ToastVariant::Default,
        ),
        redirect: None,
    })
}

pub fn submit_signup(form: &SignupForm) -> Result<FormOutcome, FieldErrors> {
    validate_signup(form).map_err(|errors| rejected("signup", errors))?;
    tracing::info!(form = "signup", username = %form.username, "form submitted");
    Ok(FormOutcome {
        toast: toast(
            "Registration Attempted",
            Some("This is a demo. Registration is not yet implemented."),
            ToastVariant::Default,
        ),
        redirect: None,
    })
}

pub fn submit_onboarding(form: &OnboardingForm) -> Result<FormOutcome, FieldErrors> {
    validate_onboarding(form).map_err(|errors| rejected("onboarding", errors))?;
    tracing::info!(form = "onboarding", platform = %form.platform, "form submitted");
    Ok(FormOutcome {
        toast: toast(
            "Profile updated!",
            Some("Your PUBG profile has been set up."),
            ToastVariant::Default,
        ),
        redirect: Some("/lobby".to_string()),
    })
}

/// Validate and "create" a hosted game, returning the detail page to visit.
pub fn submit_host_game<R: Rng>(
    form: &HostGameForm,
    rng: &mut R,
) -> Result<FormOutcome, FieldErrors> {
    validate_host_game(form).map_err(|errors| rejected("host-game", errors))?;

    let game_id = rng.gen_range(HOSTED_GAME_IDS.start, HOSTED_GAME_IDS.end);
    tracing::info!(form = "host-game", game_id, name = %form.name, "form submitted");
    Ok(FormOutcome {
        toast: toast("Game created successfully!", None, ToastVariant::Success),
        redirect: Some(format!("/game/{game_id}")),
    })
}

fn rejected(form: &str, errors: FieldErrors) -> FieldErrors {
    tracing::debug!(form, fields = errors.errors.len(), "form rejected");
    errors
}

fn toast(title: &str, description: Option<&str>, variant: ToastVariant) -> ToastInfo {
    ToastInfo {
        title: title.to_string(),
        description: description.map(str::to_string),
        variant,
    }
}

/// A number in `1..=100`, decimals and exponents included.
fn is_valid_player_limit(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => n > 0.0 && n <= 100.0,
        Err(_) => false,
    }
}

/// Address shape accepted by the account forms. Leading dots and `..` are
/// checked separately; the regex crate has no look-ahead.
static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    RegexBuilder::new(r"^([A-Z0-9_'+\-\.]*)[A-Z0-9_+-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .case_insensitive(true)
        .build()
        .ok()
});

pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}
