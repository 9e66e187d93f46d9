//! Validation rules for new game objects.
//!
//! Each rule is a pure predicate over the create input. Every rule runs, so a
//! rejected input reports all of its violations at once, in rule order.

use super::inputs::CreateGameObjectInput;

pub const NAME_MAX_CHARS: usize = 64;
pub const DESCRIPTION_MAX_CHARS: usize = 1024;

/// Separator between violation messages in a validation error.
pub const VIOLATION_SEPARATOR: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub field: &'static str,
    pub message: String,
}

impl RuleViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

type Rule = fn(&CreateGameObjectInput) -> Option<RuleViolation>;

const RULES: &[Rule] = &[
    name_not_blank,
    name_within_limit,
    description_within_limit,
    image_url_is_http,
    value_not_negative,
];

/// Run every rule and collect the violations.
pub fn validate_create(input: &CreateGameObjectInput) -> Vec<RuleViolation> {
    RULES.iter().filter_map(|rule| rule(input)).collect()
}

pub fn join_violations(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(VIOLATION_SEPARATOR)
}

fn name_not_blank(input: &CreateGameObjectInput) -> Option<RuleViolation> {
    input
        .name
        .trim()
        .is_empty()
        .then(|| RuleViolation::new("name", "name should not be empty"))
}

fn name_within_limit(input: &CreateGameObjectInput) -> Option<RuleViolation> {
    (input.name.chars().count() > NAME_MAX_CHARS).then(|| {
        RuleViolation::new(
            "name",
            format!("name must be shorter than or equal to {NAME_MAX_CHARS} characters"),
        )
    })
}

fn description_within_limit(input: &CreateGameObjectInput) -> Option<RuleViolation> {
    let description = input.description.as_deref()?;
    (description.chars().count() > DESCRIPTION_MAX_CHARS).then(|| {
        RuleViolation::new(
            "description",
            format!(
                "description must be shorter than or equal to {DESCRIPTION_MAX_CHARS} characters"
            ),
        )
    })
}

fn image_url_is_http(input: &CreateGameObjectInput) -> Option<RuleViolation> {
    let url = input.image_url.as_deref()?;
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.trim().is_empty() => None,
        _ => Some(RuleViolation::new(
            "imageUrl",
            "imageUrl must be an http or https URL",
        )),
    }
}

fn value_not_negative(input: &CreateGameObjectInput) -> Option<RuleViolation> {
    match input.value {
        Some(value) if value < 0 => {
            Some(RuleViolation::new("value", "value must not be less than 0"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::entities::game_objects::GameObjectType;

    fn sword() -> CreateGameObjectInput {
        CreateGameObjectInput::new(GameObjectType::Weapon, "Sword")
    }

    #[test]
    fn valid_input_has_no_violations() {
        let input = sword()
            .with_description("A trusty blade")
            .with_image_url("https://cdn.example.test/sword.png")
            .with_value(15);
        assert!(validate_create(&input).is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let input = CreateGameObjectInput::new(GameObjectType::Weapon, "   ");
        let violations = validate_create(&input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let at_limit = CreateGameObjectInput::new(GameObjectType::Treasure, "é".repeat(64));
        assert!(validate_create(&at_limit).is_empty());

        let over = CreateGameObjectInput::new(GameObjectType::Treasure, "é".repeat(65));
        assert_eq!(validate_create(&over).len(), 1);
    }

    #[test]
    fn image_url_needs_http_scheme_and_host() {
        for bad in ["ftp://host/a.png", "https://", "sword.png", ""] {
            let violations = validate_create(&sword().with_image_url(bad));
            assert_eq!(violations.len(), 1, "expected rejection for {bad:?}");
            assert_eq!(violations[0].field, "imageUrl");
        }
        assert!(validate_create(&sword().with_image_url("http://host/a.png")).is_empty());
    }

    #[test]
    fn all_violations_are_joined_in_rule_order() {
        let input = CreateGameObjectInput::new(GameObjectType::Weapon, "")
            .with_image_url("nope")
            .with_value(-1);
        let message = join_violations(&validate_create(&input));
        assert_eq!(
            message,
            "name should not be empty;imageUrl must be an http or https URL;value must not be less than 0"
        );
    }

    proptest! {
        #[test]
        fn message_has_one_segment_per_violated_rule(
            name_case in 0u8..3,
            long_description in any::<bool>(),
            bad_url in any::<bool>(),
            negative_value in any::<bool>(),
        ) {
            // name_case: 0 = valid, 1 = blank, 2 = too long
            let name = match name_case {
                0 => "Shield".to_string(),
                1 => " ".to_string(),
                _ => "x".repeat(NAME_MAX_CHARS + 1),
            };
            let mut input = CreateGameObjectInput::new(GameObjectType::Armor, name);
            if long_description {
                input = input.with_description("d".repeat(DESCRIPTION_MAX_CHARS + 1));
            }
            if bad_url {
                input = input.with_image_url("mailto:someone");
            }
            if negative_value {
                input = input.with_value(-5);
            }

            let expected = usize::from(name_case != 0)
                + usize::from(long_description)
                + usize::from(bad_url)
                + usize::from(negative_value);

            let violations = validate_create(&input);
            prop_assert_eq!(violations.len(), expected);

            let message = join_violations(&violations);
            let segments = if expected == 0 {
                0
            } else {
                message.split(VIOLATION_SEPARATOR).count()
            };
            prop_assert_eq!(segments, expected);
        }
    }
}
