//! Registration
//!
//! Client-side validation of the sign-up form. There is no account backend; a form that passes
//! every rule is simply ready to submit.

use smallvec::SmallVec;

/// Special characters accepted by the password rule.
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Minimum password length, in UTF-16 code units as a browser counts them.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// A password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRuleKind {
    /// At least [`PASSWORD_MIN_LENGTH`] UTF-16 code units
    Length,

    /// At least one ASCII digit
    Number,

    /// At least one of [`PASSWORD_SPECIAL_CHARS`]
    Special,

    /// Confirmation equals the password, and the password is not empty
    Match,
}

impl PasswordRuleKind {
    /// Every rule, in display order.
    pub const ALL: [Self; 4] = [Self::Length, Self::Number, Self::Special, Self::Match];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Number => "number",
            Self::Special => "special",
            Self::Match => "match",
        }
    }

    /// Checklist text shown under the password field.
    pub fn text(self) -> &'static str {
        match self {
            Self::Length => "Au moins 8 caractères",
            Self::Number => "Au moins un chiffre",
            Self::Special => "Au moins un caractère spécial",
            Self::Match => "Les mots de passe correspondent",
        }
    }

    fn check(self, password: &str, confirm_password: &str) -> bool {
        match self {
            Self::Length => password.encode_utf16().count() >= PASSWORD_MIN_LENGTH,
            Self::Number => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.contains(PASSWORD_SPECIAL_CHARS),
            Self::Match => !password.is_empty() && password == confirm_password,
        }
    }
}

/// Outcome of one password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRule {
    /// The rule
    pub kind: PasswordRuleKind,

    /// Whether the current input satisfies it
    pub valid: bool,
}

/// Sign-up form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,

    /// Password confirmation
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Evaluate every password rule against the current input.
    pub fn password_rules(&self) -> [PasswordRule; 4] {
        PasswordRuleKind::ALL.map(|kind| PasswordRule {
            kind,
            valid: kind.check(&self.password, &self.confirm_password),
        })
    }

    /// Rules the current input fails.
    pub fn failed_rules(&self) -> SmallVec<[PasswordRuleKind; 4]> {
        self.password_rules()
            .into_iter()
            .filter(|rule| !rule.valid)
            .map(|rule| rule.kind)
            .collect()
    }

    /// Whether every password rule passes.
    pub fn is_password_valid(&self) -> bool {
        self.password_rules().iter().all(|rule| rule.valid)
    }

    /// Whether the form can be submitted: name and email filled in, password valid.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty() && self.is_password_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm_password: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Camille".to_string(),
            email: "camille@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    #[test]
    fn strong_matching_password_passes() {
        let form = form("s3cret!pass", "s3cret!pass");

        assert!(form.is_password_valid());
        assert!(form.can_submit());
        assert!(form.failed_rules().is_empty());
    }

    #[test]
    fn each_rule_is_reported() {
        assert_eq!(
            form("a1!", "a1!").failed_rules().as_slice(),
            [PasswordRuleKind::Length]
        );
        assert_eq!(
            form("abcdefg!", "abcdefg!").failed_rules().as_slice(),
            [PasswordRuleKind::Number]
        );
        assert_eq!(
            form("abcdefg1", "abcdefg1").failed_rules().as_slice(),
            [PasswordRuleKind::Special]
        );
        assert_eq!(
            form("abcdef1!", "abcdef1?").failed_rules().as_slice(),
            [PasswordRuleKind::Match]
        );
    }

    #[test]
    fn empty_password_fails_every_rule() {
        assert_eq!(form("", "").failed_rules().as_slice(), PasswordRuleKind::ALL);
    }

    #[test]
    fn only_listed_special_characters_count() {
        assert!(!form("abcdefg1?", "abcdefg1?").is_password_valid());
        assert!(form("abcdefg1^", "abcdefg1^").is_password_valid());
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        assert!(!form("éééé1!é", "éééé1!é").is_password_valid());
        assert!(form("ééééé1!é", "ééééé1!é").is_password_valid());
    }

    #[test]
    fn astral_characters_count_twice() {
        assert!(form("😀😀😀1!a", "😀😀😀1!a").is_password_valid());
        assert!(!form("😀😀1!a", "😀😀1!a").is_password_valid());
    }

    #[test]
    fn blank_name_or_email_blocks_submit() {
        let mut form = form("s3cret!pass", "s3cret!pass");
        form.name = "   ".to_string();

        assert!(!form.can_submit());
    }

    #[test]
    fn rules_keep_display_order() {
        let ids: Vec<&str> = form("x", "y")
            .password_rules()
            .iter()
            .map(|rule| rule.kind.id())
            .collect();

        assert_eq!(ids, ["length", "number", "special", "match"]);
        assert_eq!(PasswordRuleKind::Special.text(), "Au moins un caractère spécial");
    }
}
